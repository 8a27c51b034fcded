//! Process plumbing shared by the container crates: the diagnostic sink and
//! the fatal-report hook that contract violations go through.

pub mod log;
pub mod panic;

pub use log::{install, sink, Buffer, Sink, SinkError, Stderr};
pub use panic::{fatal, report_and_abort, route_panics};
