//! Data models for address book entries.
//!
//! This module contains the validated contact record, the raw input it is
//! built from, and the partial update applied to it.

pub mod contact;

pub use contact::{Contact, ContactInput, ContactPatch};
