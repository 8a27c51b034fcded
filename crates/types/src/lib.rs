#![no_std]

//! Tagged containers: [`Optional`] for a value that may be absent and
//! [`Result`] for success or recoverable failure.
//!
//! Accessing a container in a state that does not support the operation
//! (unwrapping an empty `Optional`, taking the error of an `Ok`, touching a
//! moved-from container) is a contract violation. It is reported through
//! [`runtime::fatal`] and the process aborts.

pub mod moved;
pub use moved::Tracked;

pub mod optional;
pub use optional::{none, some, Optional};

pub mod result;
pub use result::{err, ok, Result};

pub mod primitives;

/// Byte encoding used when containers cross a buffer boundary.
pub trait SerializeField {
    /// Appends `self` into `buf` at `*offset`, advancing the offset.
    /// A write that does not fit leaves `buf` and `*offset` untouched.
    fn serialize_field(&self, buf: &mut [u8], offset: &mut usize);

    /// Number of bytes `serialize_field` writes for `self`.
    fn encoded_len(&self) -> usize;
}

/// True if `len` bytes starting at `offset` fit in `buf`.
pub(crate) fn fits(buf: &[u8], offset: usize, len: usize) -> bool {
    matches!(offset.checked_add(len), Some(end) if end <= buf.len())
}
