//! Input collection for the profile form.
//!
//! Provides the form state, its parse errors, the generate/submit handlers
//! and keyboard shortcuts.

pub mod error;
pub mod form;
pub mod handlers;
pub mod keyboard;

// Re-export types
pub use error::{InputParseError, SubmitError};
pub use form::{FormState, PointEntry, MAX_POINTS};
pub use handlers::{on_generate, on_submit};
pub use keyboard::{KeyAction, KeyboardHandler, KeyboardShortcut};
