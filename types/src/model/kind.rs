//! Registry of every type-expression variant.

use core::fmt;
use serde::Serialize;

/// Tag identifying the concrete shape of a type node.
///
/// Every variant reports a fixed tag from this enumeration; consumers may
/// switch on it instead of matching the node itself. The serialized form is
/// the camelCase name (`"signature"`, `"signatureParameter"`, ...).
///
/// Adding a variant means adding one entry here plus one `Type` impl.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeKind {
    Array,
    Intersection,
    Intrinsic,
    Literal,
    Reference,
    Signature,
    SignatureParameter,
    Tuple,
    TypeParameter,
    Union,
    Unknown,
}

impl TypeKind {
    /// All registered kinds, in declaration order.
    pub const ALL: [TypeKind; 11] = [
        TypeKind::Array,
        TypeKind::Intersection,
        TypeKind::Intrinsic,
        TypeKind::Literal,
        TypeKind::Reference,
        TypeKind::Signature,
        TypeKind::SignatureParameter,
        TypeKind::Tuple,
        TypeKind::TypeParameter,
        TypeKind::Union,
        TypeKind::Unknown,
    ];

    /// The tag as it appears in serialized records.
    pub fn as_str(self) -> &'static str {
        match self {
            TypeKind::Array => "array",
            TypeKind::Intersection => "intersection",
            TypeKind::Intrinsic => "intrinsic",
            TypeKind::Literal => "literal",
            TypeKind::Reference => "reference",
            TypeKind::Signature => "signature",
            TypeKind::SignatureParameter => "signatureParameter",
            TypeKind::Tuple => "tuple",
            TypeKind::TypeParameter => "typeParameter",
            TypeKind::Union => "union",
            TypeKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_matches_serde_tag() {
        for kind in TypeKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(TypeKind::SignatureParameter.to_string(), "signatureParameter");
        assert_eq!(TypeKind::Signature.to_string(), "signature");
    }
}
