use core::fmt;

use crate::moved::Tracked;
use crate::result::Result;
use crate::{SerializeField, fits};

const NAME: &str = "Optional";

/// Zero or one value of type `T`.
///
/// A moved-from `Optional` (see [`Optional::take`]) is neither present nor
/// empty: any further access aborts.
///
/// Copying requires `T: Clone`:
///
/// ```compile_fail
/// struct Handle;
/// let a = types::some(Handle);
/// let b = a.clone();
/// ```
///
/// and a by-value move is final:
///
/// ```compile_fail
/// let a = types::some(1);
/// let b = a;
/// a.is_some();
/// ```
pub struct Optional<T> {
    slot: Tracked<Option<T>>,
}

/// Constructs a populated `Optional`.
pub fn some<T>(value: T) -> Optional<T> {
    Optional {
        slot: Tracked::new(Some(value)),
    }
}

/// Constructs an empty `Optional`.
pub fn none<T>() -> Optional<T> {
    Optional {
        slot: Tracked::new(None),
    }
}

impl<T> Optional<T> {
    /// Returns true if a value is present.
    #[track_caller]
    pub fn is_some(&self) -> bool {
        self.slot.get(NAME).is_some()
    }

    /// Returns true if no value is present.
    #[track_caller]
    pub fn is_none(&self) -> bool {
        self.slot.get(NAME).is_none()
    }

    /// Moves the value out. Aborts if the container is empty.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.slot.into_inner(NAME) {
            Some(value) => value,
            None => runtime::fatal(format_args!("called `Optional::unwrap()` on an empty value")),
        }
    }

    /// Like [`unwrap`](Self::unwrap), reporting `msg` instead.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self.slot.into_inner(NAME) {
            Some(value) => value,
            None => runtime::fatal(format_args!("{}", msg)),
        }
    }

    /// Returns the value, or `default` when empty.
    #[track_caller]
    pub fn unwrap_or(self, default: T) -> T {
        self.slot.into_inner(NAME).unwrap_or(default)
    }

    /// Returns the value, or computes one when empty.
    #[track_caller]
    pub fn unwrap_or_else<F: FnOnce() -> T>(self, f: F) -> T {
        self.slot.into_inner(NAME).unwrap_or_else(f)
    }

    /// Maps `Optional<T>` to `Optional<U>`; `f` only runs when a value is present.
    #[track_caller]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Optional<U> {
        Optional {
            slot: Tracked::new(self.slot.into_inner(NAME).map(f)),
        }
    }

    /// Present becomes `Ok`, empty becomes `Err(error)`.
    #[track_caller]
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        Result::from(self.slot.into_inner(NAME).ok_or(error))
    }

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    #[track_caller]
    pub fn as_ref(&self) -> Optional<&T> {
        Optional {
            slot: Tracked::new(self.slot.get(NAME).as_ref()),
        }
    }

    /// Converts from `&mut Optional<T>` to `Optional<&mut T>`.
    #[track_caller]
    pub fn as_mut(&mut self) -> Optional<&mut T> {
        Optional {
            slot: Tracked::new(self.slot.get_mut(NAME).as_mut()),
        }
    }

    /// Moves the contents into a new `Optional`, which keeps the present or
    /// empty state. `self` is left moved-from.
    #[track_caller]
    pub fn take(&mut self) -> Optional<T> {
        Optional {
            slot: Tracked::new(self.slot.take(NAME)),
        }
    }

    /// Converts into the standard library `Option`.
    #[track_caller]
    pub fn into_option(self) -> Option<T> {
        self.slot.into_inner(NAME)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Optional {
            slot: Tracked::new(value),
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        none()
    }
}

impl<T: Clone> Clone for Optional<T> {
    #[track_caller]
    fn clone(&self) -> Self {
        Optional {
            slot: Tracked::new(self.slot.get(NAME).clone()),
        }
    }
}

impl<T: PartialEq> PartialEq for Optional<T> {
    #[track_caller]
    fn eq(&self, other: &Self) -> bool {
        self.slot.get(NAME) == other.slot.get(NAME)
    }
}

impl<T: Eq> Eq for Optional<T> {}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.slot.is_moved() {
            return f.write_str("Moved");
        }
        match self.slot.get(NAME) {
            Some(value) => f.debug_tuple("Some").field(value).finish(),
            None => f.write_str("None"),
        }
    }
}

/// Tag byte (`0` empty, `1` present) followed by the value. Nothing is
/// written unless the whole record fits.
impl<T: SerializeField> SerializeField for Optional<T> {
    #[track_caller]
    fn serialize_field(&self, buf: &mut [u8], offset: &mut usize) {
        if !fits(buf, *offset, self.encoded_len()) {
            return;
        }
        match self.slot.get(NAME) {
            Some(value) => {
                1u8.serialize_field(buf, offset);
                value.serialize_field(buf, offset);
            }
            None => 0u8.serialize_field(buf, offset),
        }
    }

    #[track_caller]
    fn encoded_len(&self) -> usize {
        match self.slot.get(NAME) {
            Some(value) => 1 + value.encoded_len(),
            None => 1,
        }
    }
}
