//! Named predicates over a raw access-flag mask.

use std::fmt;

use crate::element::ElementKind;
use crate::modifiers::{
    ACC_ABSTRACT, ACC_FINAL, ACC_INTERFACE, ACC_PRIVATE, ACC_STATIC, AccessFlags,
};

/// Checks for the presence of access flags read by a bytecode visitor.
///
/// Meant to be used fluently at the call site:
///
/// ```
/// use mutdet_access::{AccessFlagQuery, modifiers::*};
///
/// assert!(AccessFlagQuery::for_method(ACC_PRIVATE | ACC_FINAL).is_private());
/// assert!(AccessFlagQuery::for_field(ACC_STATIC).is_static());
/// assert!(AccessFlagQuery::for_type(ACC_PUBLIC).is_not_private());
/// ```
///
/// The three constructors are interchangeable; pick the one that reads best
/// where the mask comes from. Any `u32` is accepted, and bits without a
/// predicate are ignored.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccessFlagQuery(AccessFlags);

impl AccessFlagQuery {
    #[inline]
    pub const fn for_method(flags: u32) -> Self {
        Self(AccessFlags::from_bits_retain(flags))
    }

    #[inline]
    pub const fn for_type(flags: u32) -> Self {
        Self(AccessFlags::from_bits_retain(flags))
    }

    #[inline]
    pub const fn for_field(flags: u32) -> Self {
        Self(AccessFlags::from_bits_retain(flags))
    }

    /// Construct for a kind only known at runtime.
    #[inline]
    pub const fn for_kind(kind: ElementKind, flags: u32) -> Self {
        match kind {
            ElementKind::Type => Self::for_type(flags),
            ElementKind::Field => Self::for_field(flags),
            ElementKind::Method => Self::for_method(flags),
        }
    }

    /// The wrapped mask, unchanged.
    #[inline]
    pub const fn raw(&self) -> u32 {
        self.0.bits()
    }

    #[inline]
    pub const fn flags(&self) -> AccessFlags {
        self.0
    }

    /// True if any bit of `mask` is set.
    #[inline]
    pub const fn includes(&self, mask: u32) -> bool {
        self.raw() & mask != 0
    }

    #[inline]
    pub const fn is_private(&self) -> bool {
        self.includes(ACC_PRIVATE)
    }

    #[inline]
    pub const fn is_not_private(&self) -> bool {
        !self.is_private()
    }

    #[inline]
    pub const fn is_final(&self) -> bool {
        self.includes(ACC_FINAL)
    }

    #[inline]
    pub const fn is_abstract(&self) -> bool {
        self.includes(ACC_ABSTRACT)
    }

    #[inline]
    pub const fn is_interface(&self) -> bool {
        self.includes(ACC_INTERFACE)
    }

    #[inline]
    pub const fn is_static(&self) -> bool {
        self.includes(ACC_STATIC)
    }

    #[inline]
    pub const fn is_not_static(&self) -> bool {
        !self.is_static()
    }

    /// Render the set modifiers using the names of `kind`.
    ///
    /// Names come out in ascending bit order separated by spaces. Bits the
    /// kind has no name for are appended as one hex value.
    ///
    /// ```
    /// use mutdet_access::{AccessFlagQuery, ElementKind};
    ///
    /// let q = AccessFlagQuery::for_method(0x0029);
    /// assert_eq!(q.describe(ElementKind::Method).to_string(), "public static synchronized");
    /// assert_eq!(q.describe(ElementKind::Type).to_string(), "public static super");
    /// ```
    pub const fn describe(&self, kind: ElementKind) -> Describe {
        Describe {
            flags: self.raw(),
            kind,
        }
    }
}

impl From<u32> for AccessFlagQuery {
    fn from(flags: u32) -> Self {
        Self(AccessFlags::from_bits_retain(flags))
    }
}

impl From<AccessFlagQuery> for u32 {
    fn from(q: AccessFlagQuery) -> Self {
        q.raw()
    }
}

impl From<AccessFlags> for AccessFlagQuery {
    fn from(flags: AccessFlags) -> Self {
        Self(flags)
    }
}

impl fmt::Debug for AccessFlagQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccessFlagQuery({:#06x})", self.raw())
    }
}

/// Display adapter returned by [`AccessFlagQuery::describe`].
#[derive(Debug, Clone, Copy)]
pub struct Describe {
    flags: u32,
    kind: ElementKind,
}

impl fmt::Display for Describe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for &(name, bit) in self.kind.modifiers() {
            if self.flags & bit != 0 {
                write!(f, "{sep}{name}")?;
                sep = " ";
            }
        }
        let rest = self.flags & !self.kind.named_mask();
        if rest != 0 {
            write!(f, "{sep}{rest:#x}")?;
        }
        Ok(())
    }
}
