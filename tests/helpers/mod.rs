//! Test helpers module
//!
//! Recording responder, in-memory application context and test data shared
//! by the integration tests.
#![allow(dead_code)]

pub mod recording_responder;
pub mod test_context;
pub mod test_data;
pub mod spreadsheet;

pub use recording_responder::*;
pub use test_context::*;
pub use test_data::*;
pub use spreadsheet::*;
