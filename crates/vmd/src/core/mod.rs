//! Core abstractions for the rendering pipeline
//!
//! This module defines the option types, error types, and logging
//! infrastructure shared by the rest of the crate.

mod error;
pub mod logging;
mod types;

pub use error::*;
pub use logging::*;
pub use types::*;
