pub mod moves;
pub use moves::*;

pub mod outcome;
pub use outcome::*;
