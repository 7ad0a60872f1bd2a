//! Hover state of the description popup.
//!
//! Pure: the caller passes the current `Instant`, so the grace period can be
//! driven by tests without sleeping.

use std::time::{Duration, Instant};

use ratatui::layout::{Position, Rect};

/// Delay between the pointer leaving the hint (or popup) and the popup closing
pub const HIDE_GRACE: Duration = Duration::from_millis(150);
pub const POPUP_WIDTH: u16 = 40;

/// What the pointer is over after a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hover {
    Outside,
    /// Hint glyph of a table row; `anchor` is the glyph's cell
    Hint { row: usize, anchor: Position },
    Popup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShownPopup {
    /// Index into the rows of the current page
    pub row: usize,
    pub anchor: Position,
}

#[derive(Debug, Default, Clone)]
pub struct PopupState {
    shown: Option<ShownPopup>,
    hide_at: Option<Instant>,
}

impl PopupState {
    pub fn pointer_moved(&mut self, hover: Hover, now: Instant) {
        match hover {
            Hover::Hint { row, anchor } => {
                self.shown = Some(ShownPopup { row, anchor });
                self.hide_at = None;
            }
            Hover::Popup if self.shown.is_some() => {
                self.hide_at = None;
            }
            _ => {
                if self.shown.is_some() && self.hide_at.is_none() {
                    self.hide_at = Some(now + HIDE_GRACE);
                }
            }
        }
    }

    /// Close the popup once its grace period has run out
    pub fn tick(&mut self, now: Instant) {
        if self.hide_at.is_some_and(|deadline| now >= deadline) {
            self.hide();
        }
    }

    pub fn hide(&mut self) {
        self.shown = None;
        self.hide_at = None;
    }

    pub fn shown(&self) -> Option<ShownPopup> {
        self.shown
    }

    #[cfg(test)]
    pub fn hide_pending(&self) -> bool {
        self.hide_at.is_some()
    }
}

/// Popup rectangle one row below `anchor`, shifted left to stay inside
/// `viewport` and flipped above the anchor when there is no room below
pub fn place(anchor: Position, viewport: Rect, height: u16) -> Rect {
    let width = POPUP_WIDTH.min(viewport.width);
    let height = height.min(viewport.height);

    let x = anchor.x.max(viewport.x).min(viewport.right().saturating_sub(width));

    let below = anchor.y.saturating_add(1);
    let y = if below.saturating_add(height) <= viewport.bottom() {
        below
    } else {
        anchor.y.saturating_sub(height).max(viewport.y)
    };

    Rect::new(x, y, width, height)
}
