//! Core - coordinates, physical constants and the bounds-check macros
//!
//! Everything here is shared by the grid model, the path engine and the
//! measurement session, and depends on nothing else in the crate.

#[macro_use]
pub mod utils;
pub mod constants;
pub mod coord;

pub use constants::*;
pub use coord::Coord;
