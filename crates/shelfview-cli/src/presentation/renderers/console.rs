use std::io::Write;

use anyhow::Result;

use crate::args::OutputFormat;
use crate::presentation::view_models::DashboardViewModel;
use crate::presentation::views::ProductListView;

#[derive(Debug, Clone, Copy)]
pub struct ConsoleOptions {
    pub format: OutputFormat,
    pub colored: bool,
    /// Terminal width, when stdout is a terminal
    pub width: Option<usize>,
}

pub struct ConsoleRenderer {
    options: ConsoleOptions,
}

impl ConsoleRenderer {
    pub fn new(options: ConsoleOptions) -> Self {
        Self { options }
    }

    pub fn render<W: Write>(&self, model: &DashboardViewModel, out: &mut W) -> Result<()> {
        match self.options.format {
            OutputFormat::Plain => {
                let view = ProductListView::new(model)
                    .colored(self.options.colored)
                    .width(self.options.width);
                write!(out, "{}", view)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, model)?;
                writeln!(out)?;
            }
            OutputFormat::Csv => {
                let mut writer = csv::Writer::from_writer(&mut *out);
                writer.write_record(["no", "id", "title", "price", "category"])?;
                for row in &model.rows {
                    writer.write_record([
                        row.row_number.to_string(),
                        row.id.to_string(),
                        row.title.clone(),
                        row.price.to_string(),
                        row.category.clone().unwrap_or_default(),
                    ])?;
                }
                writer.flush()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_dashboard;
    use shelfview_engine::{DashboardAction, DashboardState};
    use shelfview_testing::sample_products;
    use shelfview_types::{PageSize, PageSizeChoices, SortField};

    fn model() -> DashboardViewModel {
        let products = sample_products();
        let state = DashboardState::new(PageSize::new(5).unwrap())
            .apply(DashboardAction::Search("classic".into()), &products)
            .apply(DashboardAction::ToggleSort(SortField::Title), &products);
        let choices = PageSizeChoices::new(&[5, 10]).unwrap();
        present_dashboard(&state.project(&products), "classic", state.sort, &choices, "VND")
    }

    fn render(format: OutputFormat) -> String {
        let renderer = ConsoleRenderer::new(ConsoleOptions {
            format,
            colored: false,
            width: None,
        });
        let mut out = Vec::new();
        renderer.render(&model(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_csv_rows() {
        insta::assert_snapshot!(render(OutputFormat::Csv), @r"
        no,id,title,price,category
        1,3,Classic Black Hooded Sweatshirt,79,Clothes
        2,1,Classic Red Pullover Hoodie,10,Clothes
        ");
    }

    #[test]
    fn test_json_is_the_full_view_model() {
        let value: serde_json::Value = serde_json::from_str(&render(OutputFormat::Json)).unwrap();

        assert_eq!(value["search"], "classic");
        assert_eq!(value["sort"]["state"], "sorted");
        assert_eq!(value["rows"][0]["title"], "Classic Black Hooded Sweatshirt");
        assert_eq!(value["rows"][0]["row_number"], 1);
        assert_eq!(value["pagination"]["markers"], serde_json::json!([1]));
        assert_eq!(value["stats"]["filtered"], 2);
        assert!(value.get("empty_message").is_none());
    }

    #[test]
    fn test_plain_uses_list_view() {
        let output = render(OutputFormat::Plain);
        assert!(output.contains("TITLE ▲"));
        assert!(output.ends_with("Page 1/1 · showing 1–2 of 2 (total 6)\n"));
    }
}
