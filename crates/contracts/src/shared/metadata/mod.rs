//! Field-level rules shared by filter forms and edit forms.

mod validation;

pub use validation::{ValidationError, ValidationRules};
