pub mod location;
pub mod point;

pub use location::*;
pub use point::*;
