pub mod easing;
pub mod path;
pub mod sketch;
pub mod timeline;

pub use easing::Easing;
pub use path::{MeasuredPath, Point};
pub use sketch::{BindOutcome, MarkerPose, PathAnimationHandle, SketchBinder, SketchFrame};
pub use timeline::{Timeline, Track};
