//! Unit profiles and turn flags.

mod unit;

pub use unit::Unit;
