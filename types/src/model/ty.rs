use core::fmt::Debug;
use serde::Serialize;

use super::{
    ArrayType, IntersectionType, IntrinsicType, LiteralType, ReferenceType, SignatureType,
    TupleType, TypeKind, TypeParameterType, UnionType, UnknownType,
};
use crate::serialization::{BaseSerialized, SerializedType, Serializer};

/// Capability set shared by every type-expression node.
///
/// Cloning is the std `Clone`: variants own their children outright, so a
/// clone never shares state with the original.
pub trait Type: Clone + Debug {
    /// Serialized record produced by [`Type::serialize`].
    type Serialized: Serialize;

    /// The fixed registry tag of this node.
    fn kind(&self) -> TypeKind;

    /// Render the node as type syntax.
    ///
    /// `wrapped` is true when the surrounding context needs disambiguating
    /// parentheses (a union member, an array element). The node decides from
    /// its own precedence whether to emit them.
    fn stringify(&self, wrapped: bool) -> String;

    /// Complete the record started by the serializer.
    ///
    /// `init` already carries the `kind` tag. Children are serialized by
    /// calling back into `serializer`.
    fn serialize(&self, serializer: &Serializer, init: BaseSerialized) -> Self::Serialized;
}

/// Any type node that may appear as a child of another node.
///
/// Signature parameters are not listed: they only exist inside
/// [`SignatureType::parameters`].
#[derive(Clone, Debug, PartialEq)]
pub enum SomeType {
    Array(ArrayType),
    Intersection(IntersectionType),
    Intrinsic(IntrinsicType),
    Literal(LiteralType),
    Reference(ReferenceType),
    Signature(SignatureType),
    Tuple(TupleType),
    TypeParameter(TypeParameterType),
    Union(UnionType),
    Unknown(UnknownType),
}

// Expands one arm per variant, binding the inner node to `$inner`.
macro_rules! dispatch {
    ($value:expr, $inner:ident => $body:expr) => {
        match $value {
            SomeType::Array($inner) => $body,
            SomeType::Intersection($inner) => $body,
            SomeType::Intrinsic($inner) => $body,
            SomeType::Literal($inner) => $body,
            SomeType::Reference($inner) => $body,
            SomeType::Signature($inner) => $body,
            SomeType::Tuple($inner) => $body,
            SomeType::TypeParameter($inner) => $body,
            SomeType::Union($inner) => $body,
            SomeType::Unknown($inner) => $body,
        }
    };
}

impl Type for SomeType {
    type Serialized = SerializedType;

    fn kind(&self) -> TypeKind {
        dispatch!(self, ty => ty.kind())
    }

    fn stringify(&self, wrapped: bool) -> String {
        dispatch!(self, ty => ty.stringify(wrapped))
    }

    fn serialize(&self, serializer: &Serializer, init: BaseSerialized) -> SerializedType {
        dispatch!(self, ty => ty.serialize(serializer, init).into())
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for SomeType {
                fn from(ty: $ty) -> Self {
                    SomeType::$variant(ty)
                }
            }
        )*
    };
}

impl_from_variant!(
    Array(ArrayType),
    Intersection(IntersectionType),
    Intrinsic(IntrinsicType),
    Literal(LiteralType),
    Reference(ReferenceType),
    Signature(SignatureType),
    Tuple(TupleType),
    TypeParameter(TypeParameterType),
    Union(UnionType),
    Unknown(UnknownType),
);

impl SomeType {
    /// Shorthand for an intrinsic such as `string` or `number`.
    pub fn intrinsic(name: impl Into<String>) -> Self {
        IntrinsicType::new(name).into()
    }

    /// Shorthand for a reference without type arguments.
    pub fn reference(name: impl Into<String>) -> Self {
        ReferenceType::new(name, Vec::new()).into()
    }

    pub fn is_signature(&self) -> bool {
        matches!(self, SomeType::Signature(_))
    }

    pub fn as_signature(&self) -> Option<&SignatureType> {
        match self {
            SomeType::Signature(sig) => Some(sig),
            _ => None,
        }
    }
}
