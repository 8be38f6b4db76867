mod controller;
mod session;
mod ticker;

pub use controller::{format_clock, TimerController, TimerSnapshot, DEFAULT_SESSION_SECS};
pub use session::{StudyTimer, DEFAULT_TICK_PERIOD};
pub use ticker::Ticker;
