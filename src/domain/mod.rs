//! Domain - collaborators the measuring engine talks to.

pub mod ledger;
