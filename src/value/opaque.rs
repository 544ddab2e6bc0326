//! Caller-owned pointers.

use core::{fmt, ptr::NonNull};

/// A pointer owned by the caller.
///
/// The pointer is stored verbatim: it is never dereferenced, and its pointee is never freed. Two opaque values are
/// equal if, and only if, they hold the same address.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Opaque(NonNull<()>);

impl Opaque {
    /// Creates an opaque value pointing to `value`.
    pub fn from_ref<T: ?Sized>(value: &T) -> Self {
        Self(NonNull::from(value).cast())
    }

    /// Creates an opaque value pointing to `value`.
    pub fn from_mut<T: ?Sized>(value: &mut T) -> Self {
        Self(NonNull::from(value).cast())
    }

    /// Creates an opaque value from a raw pointer, unless null.
    pub fn from_ptr<T: ?Sized>(pointer: *const T) -> Option<Self> {
        NonNull::new(pointer.cast_mut()).map(|pointer| Self(pointer.cast()))
    }

    /// Returns the pointer, as provided.
    pub const fn as_ptr(self) -> *mut () {
        self.0.as_ptr()
    }

    /// Returns the address of the pointer.
    pub fn addr(self) -> usize {
        self.0.as_ptr() as usize
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "Opaque({:p})", self.0)
    }
}

/// An opaque value stored as user data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct User(pub Opaque);

/// An opaque value stored in a void slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Void(pub Opaque);

#[cfg(test)]
mod tests {
    use core::ptr;

    use super::*;

    #[test]
    fn opaque_identity() {
        let one = 1u32;
        let two = 1u32;

        assert_eq!(Opaque::from_ref(&one), Opaque::from_ref(&one));
        assert_ne!(Opaque::from_ref(&one), Opaque::from_ref(&two));
        assert_eq!(ptr::addr_of!(one) as usize, Opaque::from_ref(&one).addr());

        let mut three = 3u32;
        let shared = Opaque::from_ref(&three);

        assert_eq!(shared, Opaque::from_mut(&mut three));
        assert_ne!(Opaque::from_ref(&one), Opaque::from_mut(&mut three));
    }

    #[test]
    fn opaque_from_ptr() {
        let value = String::from("payload");
        let pointer: *const String = &value;

        assert_eq!(Some(Opaque::from_ref(&value)), Opaque::from_ptr(pointer));
        assert_eq!(None, Opaque::from_ptr(ptr::null::<String>()));
        assert_eq!(pointer.cast::<()>().cast_mut(), Opaque::from_ref(&value).as_ptr());
    }

    #[test]
    fn opaque_unsized() {
        let slice: &[u8] = &[1, 2, 3];

        assert_eq!(slice.as_ptr() as usize, Opaque::from_ref(slice).addr());
    }
} // mod tests
