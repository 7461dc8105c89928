pub mod pinch;
pub mod pointer;
pub mod surface;
pub mod touch;

pub use pinch::PinchScaler;
pub use pointer::PointerAction;
pub use surface::{TextStyle, TextSurface};
