//! Stock middleware implementations.

pub mod gate;
pub mod tap;
pub mod throttle;
pub mod trace;

pub use gate::Gate;
pub use tap::Tap;
pub use throttle::{Throttle, ThrottleError};
pub use trace::Trace;
