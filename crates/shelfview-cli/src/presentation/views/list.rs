//! Plain-text page of products for `shelfview list`.

use std::fmt;

use owo_colors::OwoColorize;
use shelfview_types::SortField;

use crate::presentation::formatters::{category_label, format_price, pad, truncate};
use crate::presentation::view_models::DashboardViewModel;

const DEFAULT_WIDTH: usize = 100;
const NUMBER_WIDTH: usize = 4;
const PRICE_WIDTH: usize = 16;
const CATEGORY_WIDTH: usize = 16;
const MIN_TITLE_WIDTH: usize = 20;
const MAX_TITLE_WIDTH: usize = 60;

pub struct ProductListView<'a> {
    model: &'a DashboardViewModel,
    colored: bool,
    width: usize,
}

impl<'a> ProductListView<'a> {
    pub fn new(model: &'a DashboardViewModel) -> Self {
        Self {
            model,
            colored: false,
            width: DEFAULT_WIDTH,
        }
    }

    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Terminal width the title column should fit into
    pub fn width(mut self, width: Option<usize>) -> Self {
        self.width = width.unwrap_or(DEFAULT_WIDTH);
        self
    }

    fn title_width(&self) -> usize {
        let fixed = NUMBER_WIDTH + PRICE_WIDTH + CATEGORY_WIDTH + 6;
        self.width
            .saturating_sub(fixed)
            .clamp(MIN_TITLE_WIDTH, MAX_TITLE_WIDTH)
    }

    fn header(&self, label: &str, field: SortField) -> String {
        match self.model.sort_direction(field) {
            Some(direction) => format!("{} {}", label, direction.arrow()),
            None => label.to_string(),
        }
    }

    fn footer(&self) -> String {
        let stats = &self.model.stats;
        let range = if stats.showing == 0 {
            "0".to_string()
        } else {
            format!("{}–{}", stats.from, stats.to)
        };
        format!(
            "Page {}/{} · showing {} of {} (total {})",
            self.model.pagination.page,
            self.model.pagination.total_pages,
            range,
            stats.filtered,
            stats.total_products
        )
    }
}

impl fmt::Display for ProductListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(message) = &self.model.empty_message {
            if self.colored {
                writeln!(f, "{}", message.yellow())?;
            } else {
                writeln!(f, "{}", message)?;
            }
            return writeln!(f, "{}", self.footer());
        }

        let title_width = self.title_width();
        let header = format!(
            "{:>nw$}  {:<tw$}  {:<pw$}  {}",
            "#",
            self.header("TITLE", SortField::Title),
            self.header("PRICE", SortField::Price),
            "CATEGORY",
            nw = NUMBER_WIDTH,
            tw = title_width,
            pw = PRICE_WIDTH,
        );
        if self.colored {
            writeln!(f, "{}", header.bold())?;
        } else {
            writeln!(f, "{}", header)?;
        }

        for row in &self.model.rows {
            let number = format!("{:>nw$}", row.row_number, nw = NUMBER_WIDTH);
            let title = pad(&truncate(&row.title, title_width), title_width);
            let price = format!(
                "{:<pw$}",
                format_price(row.price, &self.model.currency),
                pw = PRICE_WIDTH
            );
            let category = truncate(category_label(row.category.as_deref()), CATEGORY_WIDTH);

            if self.colored {
                writeln!(
                    f,
                    "{}  {}  {}  {}",
                    number.dimmed(),
                    title,
                    price.green(),
                    category.cyan()
                )?;
            } else {
                writeln!(f, "{}  {}  {}  {}", number, title, price, category)?;
            }
        }

        let footer = self.footer();
        if self.colored {
            writeln!(f, "{}", footer.dimmed())
        } else {
            writeln!(f, "{}", footer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_dashboard;
    use shelfview_engine::{DashboardAction, DashboardState};
    use shelfview_testing::sample_products;
    use shelfview_types::{PageSize, PageSizeChoices};

    fn render(actions: Vec<DashboardAction>, search: &str) -> String {
        let products = sample_products();
        let mut state = DashboardState::new(PageSize::new(5).unwrap());
        for action in actions {
            state = state.apply(action, &products);
        }
        let choices = PageSizeChoices::new(&[5, 10]).unwrap();
        let vm = present_dashboard(&state.project(&products), search, state.sort, &choices, "VND");
        ProductListView::new(&vm).width(Some(80)).to_string()
    }

    #[test]
    fn test_plain_page_with_sort_arrow() {
        let output = render(
            vec![
                DashboardAction::ToggleSort(SortField::Price),
                DashboardAction::ToggleSort(SortField::Price),
            ],
            "",
        );
        insta::assert_snapshot!(output, @r"
           #  TITLE                                   PRICE ▼           CATEGORY
           1  sleek modern laptop                     1.299 VND         Electronics
           2  Classic Black Hooded Sweatshirt         79 VND            Clothes
           3  Sleek Wireless Headphone & Inked Earb…  44 VND            Electronics
           4  Rustic Wooden Chair                     44 VND            Furniture
           5  Majestic Mountain Graphic T-Shirt       44 VND            N/A
        Page 1/2 · showing 1–5 of 6 (total 6)
        ");
    }

    #[test]
    fn test_no_match_prints_message_and_footer() {
        let output = render(vec![DashboardAction::Search("zeppelin".into())], "zeppelin");
        insta::assert_snapshot!(output, @r#"
        No products match "zeppelin"
        Page 1/1 · showing 0 of 0 (total 6)
        "#);
    }

    #[test]
    fn test_wide_titles_keep_price_column_aligned() {
        use shelfview_types::Product;
        use unicode_width::UnicodeWidthStr;

        let products = vec![
            Product::new(1, "手作りの木製ロッキングチェアとクッションのセット", 44.0),
            Product::new(2, "椅子", 45.0),
        ];
        let state = DashboardState::new(PageSize::new(5).unwrap());
        let choices = PageSizeChoices::new(&[5]).unwrap();
        let vm = present_dashboard(&state.project(&products), "", state.sort, &choices, "VND");
        let output = ProductListView::new(&vm).width(Some(80)).to_string();

        let column_of = |line: &str, needle: &str| {
            let at = line.find(needle).unwrap();
            line[..at].width()
        };
        let lines: Vec<&str> = output.lines().collect();
        let price_column = column_of(lines[0], "PRICE");
        assert_eq!(column_of(lines[1], "44 VND"), price_column);
        assert_eq!(column_of(lines[2], "45 VND"), price_column);
        assert!(lines[1].contains('…'));
    }
}
