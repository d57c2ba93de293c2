//! Conversion of type trees into plain, JSON-compatible records.
//!
//! The [`Serializer`] runs the shared pre-step (a [`BaseSerialized`] record
//! carrying the node's kind) and then hands control to the node's own
//! [`Type::serialize`], which calls back here for each child.

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::SerializeError;
use crate::model::{Type, TypeKind};
use crate::options::SerializerOptions;

pub use crate::model::array::SerializedArrayType;
pub use crate::model::intersection::SerializedIntersectionType;
pub use crate::model::intrinsic::SerializedIntrinsicType;
pub use crate::model::literal::SerializedLiteralType;
pub use crate::model::reference::SerializedReferenceType;
pub use crate::model::signature::{SerializedSignatureParameterType, SerializedSignatureType};
pub use crate::model::tuple::SerializedTupleType;
pub use crate::model::type_parameter::SerializedTypeParameterType;
pub use crate::model::union::SerializedUnionType;
pub use crate::model::unknown::SerializedUnknownType;

/// The part of a record filled in before a node serializes itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseSerialized {
    pub kind: TypeKind,
}

impl BaseSerialized {
    pub fn new(kind: TypeKind) -> Self {
        Self { kind }
    }
}

/// Serialized record of any [`SomeType`](crate::SomeType).
///
/// Untagged: each record already starts with its own `kind` field.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SerializedType {
    Array(SerializedArrayType),
    Intersection(SerializedIntersectionType),
    Intrinsic(SerializedIntrinsicType),
    Literal(SerializedLiteralType),
    Reference(SerializedReferenceType),
    Signature(SerializedSignatureType),
    Tuple(SerializedTupleType),
    TypeParameter(SerializedTypeParameterType),
    Union(SerializedUnionType),
    Unknown(SerializedUnknownType),
}

macro_rules! impl_serialized_variants {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for SerializedType {
                fn from(record: $ty) -> Self {
                    SerializedType::$variant(record)
                }
            }
        )*

        impl SerializedType {
            /// The `kind` tag stored in the record.
            pub fn kind(&self) -> TypeKind {
                match self {
                    $(SerializedType::$variant(record) => record.kind,)*
                }
            }
        }
    };
}

impl_serialized_variants!(
    Array(SerializedArrayType),
    Intersection(SerializedIntersectionType),
    Intrinsic(SerializedIntrinsicType),
    Literal(SerializedLiteralType),
    Reference(SerializedReferenceType),
    Signature(SerializedSignatureType),
    Tuple(SerializedTupleType),
    TypeParameter(SerializedTypeParameterType),
    Union(SerializedUnionType),
    Unknown(SerializedUnknownType),
);

/// Drives recursive serialization of a type tree.
///
/// # Example
///
/// ```
/// use tydoc_types::{ArrayType, Serializer, SomeType};
///
/// let ty: SomeType = ArrayType::new(SomeType::intrinsic("string")).into();
/// let json = Serializer::new().to_json(&ty).unwrap();
/// assert_eq!(
///     json,
///     r#"{"kind":"array","elementType":{"kind":"intrinsic","name":"string"}}"#
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Serializer {
    options: SerializerOptions,
}

impl Serializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SerializerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SerializerOptions {
        &self.options
    }

    /// Serialize one node (and, through it, all of its children).
    pub fn to_object<T: Type>(&self, value: &T) -> T::Serialized {
        let init = BaseSerialized::new(value.kind());
        trace!(kind = %init.kind, "serializing type");
        value.serialize(self, init)
    }

    /// Serialize a sequence of nodes, preserving order.
    pub fn to_objects<'a, T>(&self, values: impl IntoIterator<Item = &'a T>) -> Vec<T::Serialized>
    where
        T: Type + 'a,
    {
        values.into_iter().map(|value| self.to_object(value)).collect()
    }

    /// Serialize a tree into a `serde_json::Value`.
    pub fn to_value<T: Type>(&self, value: &T) -> Result<serde_json::Value, SerializeError> {
        let kind = value.kind();
        let record = self.to_object(value);
        debug!(%kind, "encoding type tree");
        serde_json::to_value(&record).map_err(|source| SerializeError::Json { kind, source })
    }

    /// Serialize a tree into JSON text, indented if `pretty` is set.
    pub fn to_json<T: Type>(&self, value: &T) -> Result<String, SerializeError> {
        let kind = value.kind();
        let record = self.to_object(value);
        debug!(%kind, pretty = self.options.pretty, "encoding type tree");
        let encoded = if self.options.pretty {
            serde_json::to_string_pretty(&record)
        } else {
            serde_json::to_string(&record)
        };
        encoded.map_err(|source| SerializeError::Json { kind, source })
    }
}
