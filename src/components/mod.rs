//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod home;
pub mod layout;
pub mod user_details_dialog;

pub use home::HomeComponent;
pub use user_details_dialog::UserDetailsDialog;
