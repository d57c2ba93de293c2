use serde::Serialize;

use super::display::{join, wrap};
use super::{SomeType, Type, TypeKind};
use crate::serialization::{BaseSerialized, SerializedType, Serializer};

/// `A & B & C`.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionType {
    pub types: Vec<SomeType>,
}

impl IntersectionType {
    pub fn new(types: Vec<SomeType>) -> Self {
        Self { types }
    }
}

impl Type for IntersectionType {
    type Serialized = SerializedIntersectionType;

    fn kind(&self) -> TypeKind {
        TypeKind::Intersection
    }

    fn stringify(&self, wrapped: bool) -> String {
        wrap(wrapped, join(&self.types, true, " & "))
    }

    fn serialize(
        &self,
        serializer: &Serializer,
        init: BaseSerialized,
    ) -> SerializedIntersectionType {
        SerializedIntersectionType {
            kind: init.kind,
            types: serializer.to_objects(&self.types),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SerializedIntersectionType {
    pub kind: TypeKind,
    pub types: Vec<SerializedType>,
}
