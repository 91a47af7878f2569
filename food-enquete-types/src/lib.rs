//! Form-binding types for the food-enquete crate.
//!
//! This crate knows nothing about food or presents. It provides:
//! - `FormValue` - A single submitted value
//! - `FormData` - The field-value bundle of one submission
//! - `Form` - For binding a typed record from `FormData`

mod form_value;
pub use form_value::FormValue;

mod form_data;
pub use form_data::FormData;

mod error;
pub use error::FormError;

mod traits;
pub use traits::Form;
