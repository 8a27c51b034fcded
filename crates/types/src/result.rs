use core::fmt;

use crate::moved::Tracked;
use crate::optional::Optional;
use crate::{SerializeField, fits};

const NAME: &str = "Result";

type Repr<T, E> = core::result::Result<T, E>;

/// Either a success value `T` or a recoverable failure `E`.
///
/// Callers are expected to check the variant before extracting: taking the
/// wrong side aborts, as does any access to a moved-from `Result`.
pub struct Result<T, E> {
    slot: Tracked<Repr<T, E>>,
}

/// Constructs a successful `Result`.
pub fn ok<T, E>(value: T) -> Result<T, E> {
    Result {
        slot: Tracked::new(Ok(value)),
    }
}

/// Constructs a failed `Result`.
pub fn err<T, E>(error: E) -> Result<T, E> {
    Result {
        slot: Tracked::new(Err(error)),
    }
}

impl<T, E> Result<T, E> {
    /// Returns true if this is a success.
    #[track_caller]
    pub fn is_ok(&self) -> bool {
        self.slot.get(NAME).is_ok()
    }

    /// Returns true if this is a failure.
    #[track_caller]
    pub fn is_err(&self) -> bool {
        self.slot.get(NAME).is_err()
    }

    /// Moves the success value out. Aborts on `Err`.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.slot.into_inner(NAME) {
            Ok(value) => value,
            Err(_) => runtime::fatal(format_args!("called `Result::unwrap()` on an `Err` value")),
        }
    }

    /// Moves the error out. Aborts on `Ok`.
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self.slot.into_inner(NAME) {
            Ok(_) => runtime::fatal(format_args!("called `Result::unwrap_err()` on an `Ok` value")),
            Err(error) => error,
        }
    }

    /// Like [`unwrap`](Self::unwrap), reporting `msg` instead.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self.slot.into_inner(NAME) {
            Ok(value) => value,
            Err(_) => runtime::fatal(format_args!("{}", msg)),
        }
    }

    /// Like [`unwrap_err`](Self::unwrap_err), reporting `msg` instead.
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E {
        match self.slot.into_inner(NAME) {
            Ok(_) => runtime::fatal(format_args!("{}", msg)),
            Err(error) => error,
        }
    }

    /// Returns the success value, or `default` on `Err`. The error is dropped.
    #[track_caller]
    pub fn unwrap_or(self, default: T) -> T {
        self.slot.into_inner(NAME).unwrap_or(default)
    }

    /// Returns the success value, or computes one from the error.
    #[track_caller]
    pub fn unwrap_or_else<F: FnOnce(E) -> T>(self, f: F) -> T {
        self.slot.into_inner(NAME).unwrap_or_else(f)
    }

    /// Transforms the success value; an `Err` passes through untouched.
    #[track_caller]
    pub fn map_ok<U, F: FnOnce(T) -> U>(self, f: F) -> Result<U, E> {
        Result {
            slot: Tracked::new(self.slot.into_inner(NAME).map(f)),
        }
    }

    /// Transforms the error; an `Ok` passes through untouched.
    #[track_caller]
    pub fn map_err<F2, F: FnOnce(E) -> F2>(self, f: F) -> Result<T, F2> {
        Result {
            slot: Tracked::new(self.slot.into_inner(NAME).map_err(f)),
        }
    }

    /// Success view: `Ok` becomes present, `Err` becomes empty.
    #[track_caller]
    pub fn ok(self) -> Optional<T> {
        Optional::from(self.slot.into_inner(NAME).ok())
    }

    /// Failure view: `Err` becomes present, `Ok` becomes empty.
    #[track_caller]
    pub fn err(self) -> Optional<E> {
        Optional::from(self.slot.into_inner(NAME).err())
    }

    /// Converts from `&Result<T, E>` to `Result<&T, &E>`.
    #[track_caller]
    pub fn as_ref(&self) -> Result<&T, &E> {
        Result {
            slot: Tracked::new(self.slot.get(NAME).as_ref()),
        }
    }

    /// Moves the contents into a new `Result` with the same variant.
    /// `self` is left moved-from.
    #[track_caller]
    pub fn take(&mut self) -> Result<T, E> {
        Result {
            slot: Tracked::new(self.slot.take(NAME)),
        }
    }

    /// Converts into the standard library `Result`.
    #[track_caller]
    pub fn into_result(self) -> Repr<T, E> {
        self.slot.into_inner(NAME)
    }
}

impl<T, E> From<Repr<T, E>> for Result<T, E> {
    fn from(value: Repr<T, E>) -> Self {
        Result {
            slot: Tracked::new(value),
        }
    }
}

impl<T: Clone, E: Clone> Clone for Result<T, E> {
    #[track_caller]
    fn clone(&self) -> Self {
        Result {
            slot: Tracked::new(self.slot.get(NAME).clone()),
        }
    }
}

impl<T: PartialEq, E: PartialEq> PartialEq for Result<T, E> {
    #[track_caller]
    fn eq(&self, other: &Self) -> bool {
        self.slot.get(NAME) == other.slot.get(NAME)
    }
}

impl<T: Eq, E: Eq> Eq for Result<T, E> {}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Result<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.slot.is_moved() {
            return f.write_str("Moved");
        }
        match self.slot.get(NAME) {
            Ok(value) => f.debug_tuple("Ok").field(value).finish(),
            Err(error) => f.debug_tuple("Err").field(error).finish(),
        }
    }
}

/// Tag byte (`0` ok, `1` err) followed by the active payload. Nothing is
/// written unless the whole record fits.
impl<T: SerializeField, E: SerializeField> SerializeField for Result<T, E> {
    #[track_caller]
    fn serialize_field(&self, buf: &mut [u8], offset: &mut usize) {
        if !fits(buf, *offset, self.encoded_len()) {
            return;
        }
        match self.slot.get(NAME) {
            Ok(value) => {
                0u8.serialize_field(buf, offset);
                value.serialize_field(buf, offset);
            }
            Err(error) => {
                1u8.serialize_field(buf, offset);
                error.serialize_field(buf, offset);
            }
        }
    }

    #[track_caller]
    fn encoded_len(&self) -> usize {
        match self.slot.get(NAME) {
            Ok(value) => 1 + value.encoded_len(),
            Err(error) => 1 + error.encoded_len(),
        }
    }
}
