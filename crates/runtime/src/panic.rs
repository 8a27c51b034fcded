use core::fmt::{self, Write as _};
use core::panic::Location;

use crate::log::{self, LineBuf};

/// Reports a contract violation at the caller's location and aborts.
#[track_caller]
#[cold]
pub fn fatal(msg: fmt::Arguments<'_>) -> ! {
    report_and_abort(Location::caller(), msg)
}

/// Emits `<file>:<line>: PANIC: <message>` to the diagnostic sink and
/// terminates the process. No unwinding takes place, so nothing can catch it.
#[cold]
pub fn report_and_abort(location: &Location<'_>, msg: fmt::Arguments<'_>) -> ! {
    tracing::error!(file = location.file(), line = location.line(), "{}", msg);

    let mut line = LineBuf::new();
    let _ = write!(
        &mut line,
        "{}:{}: PANIC: {}",
        location.file(),
        location.line(),
        msg
    );

    let sink = log::sink();
    sink.write(line.finish());
    sink.flush();
    std::process::abort()
}

/// Routes ordinary Rust panics (e.g. raised inside payload code) through
/// [`report_and_abort`] so they produce the same diagnostic and never unwind.
pub fn route_panics() {
    std::panic::set_hook(Box::new(|info| {
        let msg = if let Some(s) = info.payload().downcast_ref::<&str>() {
            *s
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.as_str()
        } else {
            "<non-string panic payload>"
        };
        let location = info.location().unwrap_or_else(|| Location::caller());
        report_and_abort(location, format_args!("{}", msg));
    }));
}

/// `fatal!("...", args)`: formats the message and calls [`fatal`].
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => {
        $crate::panic::fatal(::core::format_args!($($arg)*))
    };
}
