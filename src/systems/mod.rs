//! Systems - algorithms that run over the grid model.

pub mod pathfinding;
