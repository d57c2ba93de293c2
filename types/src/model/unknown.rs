use serde::Serialize;

use super::{Type, TypeKind};
use crate::serialization::{BaseSerialized, Serializer};

/// Fallback for syntax the model has no dedicated variant for.
///
/// `name` holds the source text verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnknownType {
    pub name: String,
}

impl UnknownType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Type for UnknownType {
    type Serialized = SerializedUnknownType;

    fn kind(&self) -> TypeKind {
        TypeKind::Unknown
    }

    fn stringify(&self, _wrapped: bool) -> String {
        self.name.clone()
    }

    fn serialize(&self, _serializer: &Serializer, init: BaseSerialized) -> SerializedUnknownType {
        SerializedUnknownType {
            kind: init.kind,
            name: self.name.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SerializedUnknownType {
    pub kind: TypeKind,
    pub name: String,
}
