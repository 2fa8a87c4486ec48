//! Physical costs and configuration bounds.
//!
//! All distances are millimetres. A measured run goes connector -> first box
//! (`START_COST`), box -> box for every intermediate box (`HOP_COST`) and last
//! box -> connector (`END_COST`).

/// Lead-in from the connector to the first measured box.
pub const START_COST: u32 = 200;
/// Cost of every intermediate box on the route.
pub const HOP_COST: u32 = 100;
/// Lead-out from the last box back to the connector.
pub const END_COST: u32 = 200;

pub const MIN_SECTIONS: u32 = 1;
pub const MAX_SECTIONS: u32 = 10;
pub const MIN_ROWS: u32 = 1;
pub const MAX_ROWS: u32 = 20;
pub const MIN_COLS: u32 = 1;
pub const MAX_COLS: u32 = 10;

// Default panel: 5 sections of 7 rows x 4 columns
pub const DEFAULT_SECTIONS: u32 = 5;
pub const DEFAULT_ROWS: u32 = 7;
pub const DEFAULT_COLS: u32 = 4;
