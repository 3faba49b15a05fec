//! Helper constructors for common field definitions.

mod checkbox;
mod numeric;
mod select;
mod text;

pub use checkbox::boolean_field;
pub use numeric::integer_field;
pub use select::{choice_field, multiple_choice_field, radio_field};
pub use text::{char_field, text_area};
