//! Per-kind modifier vocabularies.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::modifiers::*;

/// The class-file element an access-flag mask was read from.
///
/// Only affects how shared bits are named; predicates on
/// [`AccessFlagQuery`](crate::AccessFlagQuery) ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Type,
    Field,
    Method,
}

const TYPE_MODIFIERS: &[(&str, u32)] = &[
    ("public", ACC_PUBLIC),
    ("private", ACC_PRIVATE),
    ("protected", ACC_PROTECTED),
    ("static", ACC_STATIC),
    ("final", ACC_FINAL),
    ("super", ACC_SUPER),
    ("interface", ACC_INTERFACE),
    ("abstract", ACC_ABSTRACT),
    ("synthetic", ACC_SYNTHETIC),
    ("annotation", ACC_ANNOTATION),
    ("enum", ACC_ENUM),
    ("module", ACC_MODULE),
    ("record", ACC_RECORD),
    ("deprecated", ACC_DEPRECATED),
];

const FIELD_MODIFIERS: &[(&str, u32)] = &[
    ("public", ACC_PUBLIC),
    ("private", ACC_PRIVATE),
    ("protected", ACC_PROTECTED),
    ("static", ACC_STATIC),
    ("final", ACC_FINAL),
    ("volatile", ACC_VOLATILE),
    ("transient", ACC_TRANSIENT),
    ("synthetic", ACC_SYNTHETIC),
    ("enum", ACC_ENUM),
    ("deprecated", ACC_DEPRECATED),
];

const METHOD_MODIFIERS: &[(&str, u32)] = &[
    ("public", ACC_PUBLIC),
    ("private", ACC_PRIVATE),
    ("protected", ACC_PROTECTED),
    ("static", ACC_STATIC),
    ("final", ACC_FINAL),
    ("synchronized", ACC_SYNCHRONIZED),
    ("bridge", ACC_BRIDGE),
    ("varargs", ACC_VARARGS),
    ("native", ACC_NATIVE),
    ("abstract", ACC_ABSTRACT),
    ("strict", ACC_STRICT),
    ("synthetic", ACC_SYNTHETIC),
    ("deprecated", ACC_DEPRECATED),
];

impl ElementKind {
    pub const ALL: [ElementKind; 3] = [ElementKind::Type, ElementKind::Field, ElementKind::Method];

    /// Modifiers valid on this kind, in ascending bit order.
    pub const fn modifiers(self) -> &'static [(&'static str, u32)] {
        match self {
            ElementKind::Type => TYPE_MODIFIERS,
            ElementKind::Field => FIELD_MODIFIERS,
            ElementKind::Method => METHOD_MODIFIERS,
        }
    }

    /// Look up the bit for a modifier name. Case-sensitive.
    pub fn modifier_bit(self, name: &str) -> Option<u32> {
        self.modifiers()
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, bit)| bit)
    }

    /// Union of every bit this kind has a name for.
    pub fn named_mask(self) -> u32 {
        self.modifiers().iter().fold(0, |acc, &(_, bit)| acc | bit)
    }

    pub const fn name(self) -> &'static str {
        match self {
            ElementKind::Type => "type",
            ElementKind::Field => "field",
            ElementKind::Method => "method",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "type" | "class" => Ok(ElementKind::Type),
            "field" => Ok(ElementKind::Field),
            "method" => Ok(ElementKind::Method),
            _ => Err(Error::UnknownKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_in_ascending_bit_order() {
        for kind in ElementKind::ALL {
            let bits: Vec<u32> = kind.modifiers().iter().map(|&(_, b)| b).collect();
            assert!(bits.windows(2).all(|w| w[0] < w[1]), "{kind}: {bits:x?}");
        }
    }

    #[test]
    fn shared_bits_named_per_kind() {
        assert_eq!(ElementKind::Type.modifier_bit("super"), Some(0x20));
        assert_eq!(ElementKind::Method.modifier_bit("synchronized"), Some(0x20));
        assert_eq!(ElementKind::Field.modifier_bit("synchronized"), None);
        assert_eq!(ElementKind::Field.modifier_bit("volatile"), Some(0x40));
        assert_eq!(ElementKind::Method.modifier_bit("bridge"), Some(0x40));
        assert_eq!(ElementKind::Field.modifier_bit("transient"), Some(0x80));
        assert_eq!(ElementKind::Method.modifier_bit("varargs"), Some(0x80));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(ElementKind::Method.modifier_bit("Static"), None);
    }

    #[test]
    fn parse_kind() {
        assert_eq!("type".parse::<ElementKind>(), Ok(ElementKind::Type));
        assert_eq!("Class".parse::<ElementKind>(), Ok(ElementKind::Type));
        assert_eq!("FIELD".parse::<ElementKind>(), Ok(ElementKind::Field));
        assert_eq!("method".parse::<ElementKind>(), Ok(ElementKind::Method));
        assert_eq!(
            "package".parse::<ElementKind>(),
            Err(Error::UnknownKind("package".into()))
        );
    }

    #[test]
    fn display_roundtrips_through_from_str() {
        for kind in ElementKind::ALL {
            assert_eq!(kind.to_string().parse::<ElementKind>(), Ok(kind));
        }
    }
}
