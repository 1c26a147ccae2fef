//! Types downstream clients interact with.

mod errors;
mod providers;
mod view;

pub use errors::{Result, RuntimeError};
pub use providers::{EventSink, IntentProvider, NullSink};
pub use view::{TargetView, TurnView};
