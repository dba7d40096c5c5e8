//! Pure data structures: restaurants, their positions, and the cuisine filter.

pub mod cuisine;
pub mod restaurant;

pub use cuisine::*;
pub use restaurant::*;
