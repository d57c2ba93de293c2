use serde::Serialize;

use super::display::{join, wrap};
use super::{SomeType, Type, TypeKind};
use crate::serialization::{BaseSerialized, SerializedType, Serializer};

/// `A | B | C`. Members keep their declared order.
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub types: Vec<SomeType>,
}

impl UnionType {
    pub fn new(types: Vec<SomeType>) -> Self {
        Self { types }
    }
}

impl Type for UnionType {
    type Serialized = SerializedUnionType;

    fn kind(&self) -> TypeKind {
        TypeKind::Union
    }

    fn stringify(&self, wrapped: bool) -> String {
        wrap(wrapped, join(&self.types, true, " | "))
    }

    fn serialize(&self, serializer: &Serializer, init: BaseSerialized) -> SerializedUnionType {
        SerializedUnionType {
            kind: init.kind,
            types: serializer.to_objects(&self.types),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SerializedUnionType {
    pub kind: TypeKind,
    pub types: Vec<SerializedType>,
}
