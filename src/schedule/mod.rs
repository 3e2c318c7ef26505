pub mod classify;
pub mod clock;
pub mod codec;
mod error;
pub mod event;
mod store;

pub use classify::{Classifier, DisplayClass};
pub use error::{LineError, ScheduleError};
pub use event::ScheduleEvent;
pub use store::Schedule;
