//! Screen geometry for the dashboard.
//!
//! The same `DashboardLayout` is used to draw a frame and to resolve mouse
//! positions against it, so clickable areas always match what is on screen.

use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::widgets::{Block, Borders};
use shelfview_engine::DashboardAction;
use shelfview_types::{PageMarker, PageSize, SortField};

use crate::presentation::view_models::DashboardViewModel;

pub const HINT_GLYPH: &str = "ⓘ";
const CLEAR_LABEL: &str = "✕ clear";
const PAGE_SIZE_LABEL: &str = "Per page:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Number,
    Title,
    Hint,
    Price,
    Category,
    Image,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Number,
        Column::Title,
        Column::Hint,
        Column::Price,
        Column::Category,
        Column::Image,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Column::Number => "#",
            Column::Title => "Title",
            Column::Hint => "",
            Column::Price => "Price",
            Column::Category => "Category",
            Column::Image => "Image",
        }
    }

    pub fn sort_field(self) -> Option<SortField> {
        match self {
            Column::Title => Some(SortField::Title),
            Column::Price => Some(SortField::Price),
            _ => None,
        }
    }

    fn constraint(self) -> Constraint {
        match self {
            Column::Number => Constraint::Length(4),
            Column::Title => Constraint::Fill(1),
            Column::Hint => Constraint::Length(1),
            Column::Price => Constraint::Length(14),
            Column::Category => Constraint::Length(14),
            Column::Image => Constraint::Length(18),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchLayout {
    pub block: Rect,
    pub input: Rect,
    /// Only present while there is something to clear
    pub clear: Option<Rect>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSlot {
    /// Index into the rows of the current page
    pub index: usize,
    pub area: Rect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    pub block: Rect,
    pub header: Rect,
    /// Cells of the header row, one per `Column::ALL` entry
    pub columns: [Rect; 6],
    pub rows: Vec<RowSlot>,
    /// First product row shown, after clamping
    pub offset: usize,
}

impl TableLayout {
    /// Cell of `column` on the line `row`
    pub fn cell(&self, column: Column, row: Rect) -> Rect {
        let col = self.columns[column.index()];
        Rect::new(col.x, row.y, col.width, 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Previous,
    Page(usize),
    Ellipsis,
    Next,
    PageSize(PageSize),
}

/// One button (or inert marker) of the pagination bar
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    pub area: Rect,
    pub label: String,
    pub kind: ControlKind,
    /// `None` for the ellipsis and for disabled prev/next
    pub action: Option<DashboardAction>,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginationLayout {
    pub block: Rect,
    pub controls: Vec<Control>,
    pub size_label: Option<Rect>,
}

impl PaginationLayout {
    pub fn size_label_text() -> &'static str {
        PAGE_SIZE_LABEL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Search,
    ClearSearch,
    SortHeader(SortField),
    Hint { row: usize, anchor: Position },
    Control(usize),
    Nothing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardLayout {
    pub area: Rect,
    pub search: SearchLayout,
    pub table: TableLayout,
    pub pagination: PaginationLayout,
    pub status: Rect,
}

impl DashboardLayout {
    pub fn compute(area: Rect, model: &DashboardViewModel, table_offset: usize) -> Self {
        let [search, table, pagination, status] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(area);

        Self {
            area,
            search: search_layout(search, !model.search.is_empty()),
            table: table_layout(table, model.rows.len(), table_offset),
            pagination: pagination_layout(pagination, model),
            status,
        }
    }

    pub fn hit(&self, position: Position) -> Hit {
        if let Some(clear) = self.search.clear
            && clear.contains(position)
        {
            return Hit::ClearSearch;
        }
        if self.search.block.contains(position) {
            return Hit::Search;
        }

        if self.table.header.contains(position) {
            return Column::ALL
                .into_iter()
                .filter_map(|column| column.sort_field().map(|field| (column, field)))
                .find(|(column, _)| self.table.columns[column.index()].contains(position))
                .map_or(Hit::Nothing, |(_, field)| Hit::SortHeader(field));
        }

        if let Some(slot) = self
            .table
            .rows
            .iter()
            .find(|slot| slot.area.contains(position))
        {
            let hint = self.table.cell(Column::Hint, slot.area);
            if hint.contains(position) {
                return Hit::Hint {
                    row: slot.index,
                    anchor: Position::new(hint.x, hint.y),
                };
            }
            return Hit::Nothing;
        }

        self.pagination
            .controls
            .iter()
            .position(|control| control.area.contains(position))
            .map_or(Hit::Nothing, Hit::Control)
    }
}

fn search_layout(block: Rect, has_term: bool) -> SearchLayout {
    let inner = Block::default().borders(Borders::ALL).inner(block);
    let clear_width = CLEAR_LABEL.chars().count() as u16;

    if has_term && inner.width > clear_width + 1 {
        let [input, _, clear] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(clear_width),
        ])
        .areas(inner);
        SearchLayout {
            block,
            input,
            clear: Some(clear),
        }
    } else {
        SearchLayout {
            block,
            input: inner,
            clear: None,
        }
    }
}

fn table_layout(block: Rect, row_count: usize, offset: usize) -> TableLayout {
    let inner = Block::default().borders(Borders::ALL).inner(block);
    let header = Rect::new(inner.x, inner.y, inner.width, inner.height.min(1));
    let columns: [Rect; 6] = Layout::horizontal(Column::ALL.map(Column::constraint))
        .spacing(1)
        .areas(header);

    let body_height = inner.height.saturating_sub(1) as usize;
    let offset = offset.min(row_count.saturating_sub(body_height));

    let rows = (0..body_height)
        .map(|line| (line, offset + line))
        .take_while(|&(_, index)| index < row_count)
        .map(|(line, index)| RowSlot {
            index,
            area: Rect::new(inner.x, inner.y + 1 + line as u16, inner.width, 1),
        })
        .collect();

    TableLayout {
        block,
        header,
        columns,
        rows,
        offset,
    }
}

fn pagination_layout(block: Rect, model: &DashboardViewModel) -> PaginationLayout {
    let inner = Block::default().borders(Borders::ALL).inner(block);
    let pagination = &model.pagination;

    let mut items: Vec<(String, ControlKind, Option<DashboardAction>, bool)> = Vec::new();
    items.push((
        "‹ Prev".to_string(),
        ControlKind::Previous,
        pagination
            .has_previous
            .then_some(DashboardAction::PreviousPage),
        false,
    ));
    for marker in &pagination.markers {
        match marker {
            PageMarker::Page(page) => items.push((
                format!(" {} ", page),
                ControlKind::Page(*page),
                Some(DashboardAction::GoToPage(*page)),
                *page == pagination.page,
            )),
            PageMarker::Ellipsis => {
                items.push(("…".to_string(), ControlKind::Ellipsis, None, false))
            }
        }
    }
    items.push((
        "Next ›".to_string(),
        ControlKind::Next,
        pagination.has_next.then_some(DashboardAction::NextPage),
        false,
    ));

    let size_items: Vec<(String, ControlKind, Option<DashboardAction>, bool)> = model
        .page_sizes
        .iter()
        .map(|option| {
            (
                format!(" {} ", option.size),
                ControlKind::PageSize(option.size),
                Some(DashboardAction::SetPageSize(option.size)),
                option.active,
            )
        })
        .collect();

    let width_of = |items: &[(String, ControlKind, Option<DashboardAction>, bool)]| -> u16 {
        items
            .iter()
            .map(|(label, ..)| label.chars().count() as u16 + 1)
            .sum()
    };
    let left_width = width_of(&items);
    let label_width = PAGE_SIZE_LABEL.chars().count() as u16 + 1;
    let right_width = label_width + width_of(&size_items);

    let right_start = if left_width + 2 + right_width <= inner.width {
        inner.right() - right_width
    } else {
        inner.x + left_width + 1
    };

    let mut controls = Vec::new();
    let mut x = inner.x;
    for (label, kind, action, active) in items {
        x = place_control(&mut controls, inner, x, label, kind, action, active);
    }

    let size_label = clip(inner, Rect::new(right_start, inner.y, label_width - 1, 1));
    let mut x = right_start.saturating_add(label_width);
    for (label, kind, action, active) in size_items {
        x = place_control(&mut controls, inner, x, label, kind, action, active);
    }

    PaginationLayout {
        block,
        controls,
        size_label,
    }
}

fn place_control(
    controls: &mut Vec<Control>,
    bounds: Rect,
    x: u16,
    label: String,
    kind: ControlKind,
    action: Option<DashboardAction>,
    active: bool,
) -> u16 {
    let width = label.chars().count() as u16;
    if let Some(area) = clip(bounds, Rect::new(x, bounds.y, width, bounds.height.min(1))) {
        controls.push(Control {
            area,
            label,
            kind,
            action,
            active,
        });
    }
    x.saturating_add(width + 1)
}

/// `area` cut to `bounds`, or `None` when nothing of it is visible
fn clip(bounds: Rect, area: Rect) -> Option<Rect> {
    let clipped = area.intersection(bounds);
    (!clipped.is_empty()).then_some(clipped)
}
