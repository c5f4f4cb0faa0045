pub mod lighting;
pub mod starfield;
