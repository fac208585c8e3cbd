pub mod controller;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod hit;
pub mod math;
pub mod pattern;
pub mod segment;

pub use error::{GridlockError, Result};
