#[macro_use]
pub mod safety;
pub mod console;
