use serde::Serialize;

use super::{SomeType, Type, TypeKind};
use crate::serialization::{BaseSerialized, SerializedType, Serializer};

/// `T[]`. The element is rendered in wrapped position, so compound element
/// types come out as `(A | B)[]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayType {
    pub element_type: Box<SomeType>,
}

impl ArrayType {
    pub fn new(element_type: SomeType) -> Self {
        Self {
            element_type: Box::new(element_type),
        }
    }
}

impl Type for ArrayType {
    type Serialized = SerializedArrayType;

    fn kind(&self) -> TypeKind {
        TypeKind::Array
    }

    fn stringify(&self, _wrapped: bool) -> String {
        format!("{}[]", self.element_type.stringify(true))
    }

    fn serialize(&self, serializer: &Serializer, init: BaseSerialized) -> SerializedArrayType {
        SerializedArrayType {
            kind: init.kind,
            element_type: Box::new(serializer.to_object(self.element_type.as_ref())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedArrayType {
    pub kind: TypeKind,
    pub element_type: Box<SerializedType>,
}
