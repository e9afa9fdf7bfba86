//! Core - shared building blocks used by every other layer
//!
//! - utils/  - console logging macros (must be first for macro export!)
//! - error   - engine error taxonomy
//! - units   - simulation <-> screen coordinate conversion

#[macro_use]
pub mod utils;
pub mod error;
pub mod units;

pub use utils::log;
