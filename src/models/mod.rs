pub mod geometry;
pub mod photo;

pub use geometry::*;
pub use photo::*;
