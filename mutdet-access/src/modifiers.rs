//! Access flag constants from the JVM class-file format.
//!
//! Values match the `access_flags` tables of the class-file format (JVMS §4.1,
//! §4.5, §4.6). Several bits are shared between element kinds and carry a
//! different meaning on each; see [`ElementKind`](crate::ElementKind) for the
//! per-kind names.

use bitflags::bitflags;

// Class-file access flags (0x0000–0xFFFF)

/// Public access — type, field, method.
pub const ACC_PUBLIC: u32 = 0x0001;
/// Private access — field, method, nested type.
pub const ACC_PRIVATE: u32 = 0x0002;
/// Protected access — field, method, nested type.
pub const ACC_PROTECTED: u32 = 0x0004;
/// Static — field, method, nested type.
pub const ACC_STATIC: u32 = 0x0008;
/// Final — type, field, method.
pub const ACC_FINAL: u32 = 0x0010;
/// Super — type.
pub const ACC_SUPER: u32 = 0x0020;
/// Synchronized — method (same bit as ACC_SUPER).
pub const ACC_SYNCHRONIZED: u32 = 0x0020;
/// Volatile field (same bit as ACC_BRIDGE).
pub const ACC_VOLATILE: u32 = 0x0040;
/// Bridge method (same bit as ACC_VOLATILE).
pub const ACC_BRIDGE: u32 = 0x0040;
/// Transient field (same bit as ACC_VARARGS).
pub const ACC_TRANSIENT: u32 = 0x0080;
/// Varargs method (same bit as ACC_TRANSIENT).
pub const ACC_VARARGS: u32 = 0x0080;
/// Native method.
pub const ACC_NATIVE: u32 = 0x0100;
/// Interface — type.
pub const ACC_INTERFACE: u32 = 0x0200;
/// Abstract — type, method.
pub const ACC_ABSTRACT: u32 = 0x0400;
/// Strict floating-point — method.
pub const ACC_STRICT: u32 = 0x0800;
/// Synthetic — type, field, method.
pub const ACC_SYNTHETIC: u32 = 0x1000;
/// Annotation type — type.
pub const ACC_ANNOTATION: u32 = 0x2000;
/// Enum — type, field.
pub const ACC_ENUM: u32 = 0x4000;
/// Module — type (same bit as ACC_MANDATED).
pub const ACC_MODULE: u32 = 0x8000;
/// Mandated — parameters and module directives (same bit as ACC_MODULE).
pub const ACC_MANDATED: u32 = 0x8000;

// Pseudo flags set by bytecode visitors above the class-file range

/// Record type.
pub const ACC_RECORD: u32 = 0x1_0000;
/// Element carries a `Deprecated` attribute.
pub const ACC_DEPRECATED: u32 = 0x2_0000;

/// Mask for class-file flags (lower 16 bits).
pub const ACC_FILE_MASK: u32 = 0xFFFF;

bitflags! {
    /// Typed view of an access-flag mask.
    ///
    /// Shared bits appear once, under their type/field name. Build values with
    /// [`AccessFlags::from_bits_retain`] to keep bits this type does not name.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct AccessFlags: u32 {
        const PUBLIC = ACC_PUBLIC;
        const PRIVATE = ACC_PRIVATE;
        const PROTECTED = ACC_PROTECTED;
        const STATIC = ACC_STATIC;
        const FINAL = ACC_FINAL;
        const SUPER = ACC_SUPER;
        const VOLATILE = ACC_VOLATILE;
        const TRANSIENT = ACC_TRANSIENT;
        const NATIVE = ACC_NATIVE;
        const INTERFACE = ACC_INTERFACE;
        const ABSTRACT = ACC_ABSTRACT;
        const STRICT = ACC_STRICT;
        const SYNTHETIC = ACC_SYNTHETIC;
        const ANNOTATION = ACC_ANNOTATION;
        const ENUM = ACC_ENUM;
        const MODULE = ACC_MODULE;
        const RECORD = ACC_RECORD;
        const DEPRECATED = ACC_DEPRECATED;
    }
}

impl AccessFlags {
    /// Bits inside the class-file range, dropping visitor pseudo flags.
    pub const fn file_bits(self) -> u32 {
        self.bits() & ACC_FILE_MASK
    }

    /// Bits that no constant in this module names.
    pub const fn unknown_bits(self) -> u32 {
        self.bits() & !Self::all().bits()
    }
}

impl Default for AccessFlags {
    fn default() -> AccessFlags {
        AccessFlags::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_bits_are_distinct_powers_of_two() {
        let bits = [ACC_PRIVATE, ACC_FINAL, ACC_ABSTRACT, ACC_INTERFACE, ACC_STATIC];
        for (i, a) in bits.iter().enumerate() {
            assert!(a.is_power_of_two(), "{a:#x}");
            for b in &bits[i + 1..] {
                assert_eq!(a & b, 0, "{a:#x} overlaps {b:#x}");
            }
        }
    }

    #[test]
    fn from_bits_retain_keeps_unknown_bits() {
        let flags = AccessFlags::from_bits_retain(ACC_PUBLIC | 0x4_0000);
        assert!(flags.contains(AccessFlags::PUBLIC));
        assert_eq!(flags.unknown_bits(), 0x4_0000);
        assert_eq!(flags.bits(), ACC_PUBLIC | 0x4_0000);
    }

    #[test]
    fn file_bits_drop_pseudo_flags() {
        let flags = AccessFlags::RECORD | AccessFlags::FINAL | AccessFlags::DEPRECATED;
        assert_eq!(flags.file_bits(), ACC_FINAL);
        assert_eq!(flags.unknown_bits(), 0);
    }
}
