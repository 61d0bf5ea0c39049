pub mod calculator;
pub mod picker;
pub mod types;

pub use calculator::AspectCalculator;
pub use picker::{
    describe_aspect, AspectPicker, DetectedAspectPicker, RandomAspectPicker, CANNED_ASPECTS,
    NO_MAJOR_ASPECTS,
};
pub use types::{Aspect, AspectKind, AspectSettings, DEFAULT_ORB};
