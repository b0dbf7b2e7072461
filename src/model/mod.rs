//! Model layer - form data, validation and pointer subscriptions
//!
//! - `FormState` / `Field` - the values collected by the dialog
//! - `validation` - pure checks run on submit
//! - `PointerHub` - registry for screen-wide mouse listeners

pub mod form;
pub mod pointer;
pub mod validation;

// Re-export commonly used types
pub use form::{Field, FieldEdit, FormState};
pub use pointer::{PointerHub, PointerSubscription};
pub use validation::ValidationError;
