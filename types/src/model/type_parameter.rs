use serde::Serialize;

use super::{SomeType, Type, TypeKind};
use crate::serialization::{BaseSerialized, SerializedType, Serializer};

/// A generic parameter, e.g. the `T` in `<T extends object = {}>`.
///
/// Renders as its name only; constraint and default are kept for
/// serialization and for renderers that want the full declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeParameterType {
    pub name: String,
    pub constraint: Option<Box<SomeType>>,
    pub default: Option<Box<SomeType>>,
}

impl TypeParameterType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraint: None,
            default: None,
        }
    }

    pub fn with_constraint(mut self, constraint: SomeType) -> Self {
        self.constraint = Some(Box::new(constraint));
        self
    }

    pub fn with_default(mut self, default: SomeType) -> Self {
        self.default = Some(Box::new(default));
        self
    }
}

impl Type for TypeParameterType {
    type Serialized = SerializedTypeParameterType;

    fn kind(&self) -> TypeKind {
        TypeKind::TypeParameter
    }

    fn stringify(&self, _wrapped: bool) -> String {
        self.name.clone()
    }

    fn serialize(
        &self,
        serializer: &Serializer,
        init: BaseSerialized,
    ) -> SerializedTypeParameterType {
        SerializedTypeParameterType {
            kind: init.kind,
            name: self.name.clone(),
            constraint: self
                .constraint
                .as_deref()
                .map(|ty| Box::new(serializer.to_object(ty))),
            default: self
                .default
                .as_deref()
                .map(|ty| Box::new(serializer.to_object(ty))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SerializedTypeParameterType {
    pub kind: TypeKind,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint: Option<Box<SerializedType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Box<SerializedType>>,
}
