pub mod error;
pub mod geometry;
pub mod layout;
pub mod math;
pub mod operations;
pub mod rendering;

pub use error::{BorderError, Result, StyleError};
pub use geometry::{IntRect, LineSegment, Path, Polarity, Rectangle};
pub use operations::border::BorderState;
