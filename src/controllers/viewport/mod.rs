pub mod auto_zoom;
pub mod channel;
pub mod controller;
pub mod gestures;

pub use auto_zoom::{AutoZoomDriver, AutoZoomResult};
pub use channel::{EventChannelError, EventReceiver, EventSender, event_channel};
pub use controller::{DisplayStatus, ViewportController};
pub use gestures::{GestureTranslator, TouchPhase};
