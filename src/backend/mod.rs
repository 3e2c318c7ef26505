//! HTTP clients for the remote backend that stores the schedule and the
//! todo list.

pub mod public;
mod schedule;
mod todo;

pub use public::{RemoteEvent, Todo};
pub use schedule::{BackendClient, parse_remote_time, to_events};
pub use todo::TodoClient;
