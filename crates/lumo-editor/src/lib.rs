#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// editing session state machine.
pub mod editor;

/// Error types for the editor module.
pub mod error;

pub use crate::editor::{EditorState, Op};
pub use crate::error::EditorError;
