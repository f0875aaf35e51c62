pub mod border;

pub use border::{BorderState, SegmentSet};
