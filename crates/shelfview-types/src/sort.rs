use serde::{Deserialize, Serialize};
use std::fmt;

/// Column a product list can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Title,
    Price,
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortField::Title => write!(f, "title"),
            SortField::Price => write!(f, "price"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Active ordering of the product list.
///
/// Field and direction only exist together, so "field without direction"
/// cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SortState {
    /// Insertion order of the fetched catalog
    #[default]
    Unsorted,
    Sorted {
        field: SortField,
        direction: SortDirection,
    },
}

impl SortState {
    pub fn ascending(field: SortField) -> Self {
        SortState::Sorted {
            field,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: SortField) -> Self {
        SortState::Sorted {
            field,
            direction: SortDirection::Descending,
        }
    }

    /// Advance the three-state cycle for a header click on `field`.
    ///
    /// Same field: ascending -> descending -> unsorted -> ascending.
    /// A different field always starts ascending.
    pub fn toggle(self, field: SortField) -> Self {
        match self {
            SortState::Sorted {
                field: current,
                direction: SortDirection::Ascending,
            } if current == field => SortState::descending(field),
            SortState::Sorted {
                field: current,
                direction: SortDirection::Descending,
            } if current == field => SortState::Unsorted,
            _ => SortState::ascending(field),
        }
    }

    pub fn field(&self) -> Option<SortField> {
        match self {
            SortState::Unsorted => None,
            SortState::Sorted { field, .. } => Some(*field),
        }
    }

    pub fn direction(&self) -> Option<SortDirection> {
        match self {
            SortState::Unsorted => None,
            SortState::Sorted { direction, .. } => Some(*direction),
        }
    }

    /// Direction shown on the header for `field`, if it is the active one
    pub fn direction_for(&self, field: SortField) -> Option<SortDirection> {
        match self {
            SortState::Sorted {
                field: current,
                direction,
            } if *current == field => Some(*direction),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_cycles_through_three_states() {
        let start = SortState::Unsorted;

        let first = start.toggle(SortField::Title);
        assert_eq!(first, SortState::ascending(SortField::Title));

        let second = first.toggle(SortField::Title);
        assert_eq!(second, SortState::descending(SortField::Title));

        let third = second.toggle(SortField::Title);
        assert_eq!(third, SortState::Unsorted);

        assert_eq!(third.toggle(SortField::Title), first);
    }

    #[test]
    fn test_other_field_resets_to_ascending() {
        let descending_title = SortState::descending(SortField::Title);
        assert_eq!(
            descending_title.toggle(SortField::Price),
            SortState::ascending(SortField::Price)
        );

        let ascending_price = SortState::ascending(SortField::Price);
        assert_eq!(
            ascending_price.toggle(SortField::Title),
            SortState::ascending(SortField::Title)
        );
    }

    #[test]
    fn test_field_and_direction_are_set_together() {
        assert_eq!(SortState::Unsorted.field(), None);
        assert_eq!(SortState::Unsorted.direction(), None);

        let state = SortState::descending(SortField::Price);
        assert_eq!(state.field(), Some(SortField::Price));
        assert_eq!(state.direction(), Some(SortDirection::Descending));
        assert_eq!(state.direction_for(SortField::Title), None);
    }
}
