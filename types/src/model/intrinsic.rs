use serde::Serialize;

use super::{Type, TypeKind};
use crate::serialization::{BaseSerialized, Serializer};

/// A built-in type such as `string`, `number` or `void`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IntrinsicType {
    pub name: String,
}

impl IntrinsicType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Type for IntrinsicType {
    type Serialized = SerializedIntrinsicType;

    fn kind(&self) -> TypeKind {
        TypeKind::Intrinsic
    }

    fn stringify(&self, _wrapped: bool) -> String {
        self.name.clone()
    }

    fn serialize(&self, _serializer: &Serializer, init: BaseSerialized) -> SerializedIntrinsicType {
        SerializedIntrinsicType {
            kind: init.kind,
            name: self.name.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SerializedIntrinsicType {
    pub kind: TypeKind,
    pub name: String,
}
