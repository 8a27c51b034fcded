use crate::{SerializeField, fits};

fn put(bytes: &[u8], buf: &mut [u8], offset: &mut usize) {
    if !fits(buf, *offset, bytes.len()) {
        return;
    }
    let end = *offset + bytes.len();
    buf[*offset..end].copy_from_slice(bytes);
    *offset = end;
}

macro_rules! le_field {
    ($($ty:ty),+) => {$(
        impl SerializeField for $ty {
            fn serialize_field(&self, buf: &mut [u8], offset: &mut usize) {
                put(&self.to_le_bytes(), buf, offset);
            }

            fn encoded_len(&self) -> usize {
                core::mem::size_of::<$ty>()
            }
        }
    )+};
}

le_field!(u8, u16, u32, u64, i32, i64);

impl SerializeField for bool {
    fn serialize_field(&self, buf: &mut [u8], offset: &mut usize) {
        put(&[*self as u8], buf, offset);
    }

    fn encoded_len(&self) -> usize {
        1
    }
}

impl<const N: usize> SerializeField for [u8; N] {
    fn serialize_field(&self, buf: &mut [u8], offset: &mut usize) {
        put(self, buf, offset);
    }

    fn encoded_len(&self) -> usize {
        N
    }
}

impl<T: SerializeField + ?Sized> SerializeField for &T {
    fn serialize_field(&self, buf: &mut [u8], offset: &mut usize) {
        (**self).serialize_field(buf, offset);
    }

    fn encoded_len(&self) -> usize {
        (**self).encoded_len()
    }
}
