use serde::Serialize;

use super::display::join;
use super::{SomeType, Type, TypeKind};
use crate::serialization::{BaseSerialized, SerializedType, Serializer};

/// A named type, optionally applied to type arguments: `Promise<string>`.
#[derive(Clone, Debug, PartialEq)]
pub struct ReferenceType {
    pub name: String,
    pub type_arguments: Vec<SomeType>,
}

impl ReferenceType {
    pub fn new(name: impl Into<String>, type_arguments: Vec<SomeType>) -> Self {
        Self {
            name: name.into(),
            type_arguments,
        }
    }
}

impl Type for ReferenceType {
    type Serialized = SerializedReferenceType;

    fn kind(&self) -> TypeKind {
        TypeKind::Reference
    }

    fn stringify(&self, _wrapped: bool) -> String {
        if self.type_arguments.is_empty() {
            return self.name.clone();
        }
        format!("{}<{}>", self.name, join(&self.type_arguments, false, ", "))
    }

    fn serialize(&self, serializer: &Serializer, init: BaseSerialized) -> SerializedReferenceType {
        SerializedReferenceType {
            kind: init.kind,
            name: self.name.clone(),
            type_arguments: serializer.to_objects(&self.type_arguments),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedReferenceType {
    pub kind: TypeKind,
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub type_arguments: Vec<SerializedType>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UnionType;

    #[test]
    fn test_bare_name() {
        assert_eq!(ReferenceType::new("Date", Vec::new()).stringify(false), "Date");
    }

    #[test]
    fn test_type_arguments_are_unwrapped() {
        let map = ReferenceType::new(
            "Map",
            vec![
                SomeType::intrinsic("string"),
                UnionType::new(vec![
                    SomeType::intrinsic("number"),
                    SomeType::intrinsic("null"),
                ])
                .into(),
            ],
        );
        assert_eq!(map.stringify(true), "Map<string, number | null>");
    }
}
