use serde::Serialize;

use super::display::join;
use super::{SomeType, Type, TypeKind};
use crate::serialization::{BaseSerialized, SerializedType, Serializer};

/// `[A, B]`. Brackets already delimit the elements, so they render unwrapped.
#[derive(Clone, Debug, PartialEq)]
pub struct TupleType {
    pub elements: Vec<SomeType>,
}

impl TupleType {
    pub fn new(elements: Vec<SomeType>) -> Self {
        Self { elements }
    }
}

impl Type for TupleType {
    type Serialized = SerializedTupleType;

    fn kind(&self) -> TypeKind {
        TypeKind::Tuple
    }

    fn stringify(&self, _wrapped: bool) -> String {
        format!("[{}]", join(&self.elements, false, ", "))
    }

    fn serialize(&self, serializer: &Serializer, init: BaseSerialized) -> SerializedTupleType {
        SerializedTupleType {
            kind: init.kind,
            elements: serializer.to_objects(&self.elements),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SerializedTupleType {
    pub kind: TypeKind,
    pub elements: Vec<SerializedType>,
}
