//! Interactive console front end.
//!
//! - **prompt**: one question, one trimmed answer, over any reader/writer
//! - **session**: the numbered menu loop driving an address book manager

pub mod prompt;
pub mod session;

pub use prompt::{InputClosed, Prompt};
pub use session::{MenuChoice, Session};
