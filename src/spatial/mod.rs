//! Spatial layer - the partitioned, maskable measuring grid.

pub mod grid;
