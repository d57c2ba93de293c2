use serde::Serialize;

use super::{Type, TypeKind};
use crate::serialization::{BaseSerialized, Serializer};

/// Value carried by a [`LiteralType`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LiteralValue {
    String(String),
    Number(f64),
    /// Arbitrary-precision integer, digits kept as text.
    BigInt {
        negative: bool,
        value: String,
    },
    Boolean(bool),
    Null,
}

impl LiteralValue {
    fn render(&self) -> String {
        match self {
            LiteralValue::String(s) => serde_json::Value::String(s.clone()).to_string(),
            LiteralValue::Number(n) if n.is_nan() => "NaN".to_string(),
            LiteralValue::Number(n) if n.is_infinite() => {
                if n.is_sign_negative() {
                    "-Infinity".to_string()
                } else {
                    "Infinity".to_string()
                }
            }
            LiteralValue::Number(n) => n.to_string(),
            LiteralValue::BigInt { negative, value } => {
                format!("{}{}n", if *negative { "-" } else { "" }, value)
            }
            LiteralValue::Boolean(b) => b.to_string(),
            LiteralValue::Null => "null".to_string(),
        }
    }
}

/// A literal type: `"GET"`, `42`, `-1n`, `true`, `null`.
#[derive(Clone, Debug, PartialEq)]
pub struct LiteralType {
    pub value: LiteralValue,
}

impl LiteralType {
    pub fn new(value: LiteralValue) -> Self {
        Self { value }
    }
}

impl Type for LiteralType {
    type Serialized = SerializedLiteralType;

    fn kind(&self) -> TypeKind {
        TypeKind::Literal
    }

    fn stringify(&self, _wrapped: bool) -> String {
        self.value.render()
    }

    fn serialize(&self, _serializer: &Serializer, init: BaseSerialized) -> SerializedLiteralType {
        SerializedLiteralType {
            kind: init.kind,
            value: self.value.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SerializedLiteralType {
    pub kind: TypeKind,
    pub value: LiteralValue,
}
