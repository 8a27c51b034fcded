//! Storage cell that remembers whether its payload was moved out.
//!
//! By-value moves are checked by the compiler. Moves through `&mut` are not,
//! so containers keep their payload in a [`Tracked`] and every access goes
//! through it: touching a cell after its payload left is a contract violation
//! and aborts the process.

use core::mem;

#[derive(Debug)]
pub enum Tracked<S> {
    Live(S),
    Moved,
}

impl<S> Tracked<S> {
    pub const fn new(payload: S) -> Self {
        Tracked::Live(payload)
    }

    /// Non-fatal check, for diagnostics.
    pub fn is_moved(&self) -> bool {
        matches!(self, Tracked::Moved)
    }

    /// `what` names the owning container in the diagnostic.
    #[track_caller]
    pub fn get(&self, what: &'static str) -> &S {
        match self {
            Tracked::Live(payload) => payload,
            Tracked::Moved => moved_access(what),
        }
    }

    #[track_caller]
    pub fn get_mut(&mut self, what: &'static str) -> &mut S {
        match self {
            Tracked::Live(payload) => payload,
            Tracked::Moved => moved_access(what),
        }
    }

    #[track_caller]
    pub fn into_inner(self, what: &'static str) -> S {
        match self {
            Tracked::Live(payload) => payload,
            Tracked::Moved => moved_access(what),
        }
    }

    /// Moves the payload out, leaving the cell in the `Moved` state.
    #[track_caller]
    pub fn take(&mut self, what: &'static str) -> S {
        match mem::replace(self, Tracked::Moved) {
            Tracked::Live(payload) => payload,
            Tracked::Moved => moved_access(what),
        }
    }
}

#[cold]
#[track_caller]
fn moved_access(what: &'static str) -> ! {
    runtime::fatal(format_args!("use of moved-from {}", what))
}
