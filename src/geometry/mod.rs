pub mod path;
pub mod rectangle;
pub mod segment;

pub use path::Path;
pub use rectangle::{IntRect, Polarity, Rectangle};
pub use segment::LineSegment;
