pub mod number;
pub mod text;

pub use number::{format_amount, format_price};
pub use text::{
    DESCRIPTION_PLACEHOLDER, MISSING_CATEGORY, category_label, description_or_placeholder,
    image_label, pad, truncate, wrap,
};
