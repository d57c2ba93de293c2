//! Callable types and their parameters.
//!
//! ```text
//! type T = () => string
//! type U = <A>(arg: A) => A
//! ```

use serde::Serialize;

use super::display::{join, wrap};
use super::{SomeType, Type, TypeKind, TypeParameterType};
use crate::serialization::{
    BaseSerialized, SerializedType, SerializedTypeParameterType, Serializer,
};

/// A callable type: `<T>(params) => ReturnType`.
///
/// The signature exclusively owns its type parameters, parameters and return
/// type. Parameter order is positional and preserved everywhere.
#[derive(Clone, Debug, PartialEq)]
pub struct SignatureType {
    pub type_parameters: Vec<TypeParameterType>,
    pub parameters: Vec<SignatureParameterType>,
    pub return_type: Box<SomeType>,
}

impl SignatureType {
    pub fn new(
        type_parameters: Vec<TypeParameterType>,
        parameters: Vec<SignatureParameterType>,
        return_type: SomeType,
    ) -> Self {
        Self {
            type_parameters,
            parameters,
            return_type: Box::new(return_type),
        }
    }

    /// Render the signature, choosing the return indicator.
    ///
    /// With `use_arrow` false the return type follows `" => "`, as in a
    /// function type expression. With `use_arrow` true it follows `": "`, as
    /// in a method or call signature declaration.
    pub fn stringify_with(&self, wrapped: bool, use_arrow: bool) -> String {
        let mut text = String::new();
        if !self.type_parameters.is_empty() {
            text.push('<');
            text.push_str(&join(&self.type_parameters, false, ", "));
            text.push('>');
        }

        text.push('(');
        text.push_str(&join(&self.parameters, false, ", "));
        text.push(')');
        text.push_str(if use_arrow { ": " } else { " => " });
        text.push_str(&self.return_type.stringify(false));

        wrap(wrapped, text)
    }
}

impl Type for SignatureType {
    type Serialized = SerializedSignatureType;

    fn kind(&self) -> TypeKind {
        TypeKind::Signature
    }

    fn stringify(&self, wrapped: bool) -> String {
        self.stringify_with(wrapped, false)
    }

    fn serialize(&self, serializer: &Serializer, init: BaseSerialized) -> SerializedSignatureType {
        SerializedSignatureType {
            kind: init.kind,
            type_parameters: serializer.to_objects(&self.type_parameters),
            parameters: serializer.to_objects(&self.parameters),
            return_type: Box::new(serializer.to_object(self.return_type.as_ref())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedSignatureType {
    pub kind: TypeKind,
    pub type_parameters: Vec<SerializedTypeParameterType>,
    pub parameters: Vec<SerializedSignatureParameterType>,
    pub return_type: Box<SerializedType>,
}

/// One parameter of a [`SignatureType`].
///
/// Only valid as a direct entry of a signature's parameter list, which is why
/// it is not a [`SomeType`] member. Nothing stops `is_optional` and `is_rest`
/// from both being set; both markers are rendered in that case.
#[derive(Clone, Debug, PartialEq)]
pub struct SignatureParameterType {
    pub name: String,
    pub is_optional: bool,
    pub is_rest: bool,
    pub parameter_type: Box<SomeType>,
}

impl SignatureParameterType {
    pub fn new(
        name: impl Into<String>,
        is_optional: bool,
        is_rest: bool,
        parameter_type: SomeType,
    ) -> Self {
        Self {
            name: name.into(),
            is_optional,
            is_rest,
            parameter_type: Box::new(parameter_type),
        }
    }
}

impl Type for SignatureParameterType {
    type Serialized = SerializedSignatureParameterType;

    fn kind(&self) -> TypeKind {
        TypeKind::SignatureParameter
    }

    /// Render as `...name?: Type`.
    ///
    /// # Panics
    ///
    /// Panics if `wrapped` is true: a parameter is never rendered inside
    /// another type.
    fn stringify(&self, wrapped: bool) -> String {
        assert!(
            !wrapped,
            "signature parameters may not be contained within other types"
        );

        let mut text = String::new();
        if self.is_rest {
            text.push_str("...");
        }
        text.push_str(&self.name);
        if self.is_optional {
            text.push('?');
        }
        text.push_str(": ");
        text.push_str(&self.parameter_type.stringify(false));
        text
    }

    fn serialize(
        &self,
        serializer: &Serializer,
        init: BaseSerialized,
    ) -> SerializedSignatureParameterType {
        SerializedSignatureParameterType {
            kind: init.kind,
            name: self.name.clone(),
            is_optional: self.is_optional,
            is_rest: self.is_rest,
            parameter_type: Box::new(serializer.to_object(self.parameter_type.as_ref())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedSignatureParameterType {
    pub kind: TypeKind,
    pub name: String,
    pub is_optional: bool,
    pub is_rest: bool,
    pub parameter_type: Box<SerializedType>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ArrayType, UnionType};
    use pretty_assertions::assert_eq;

    fn param(name: &str, is_optional: bool, is_rest: bool, ty: SomeType) -> SignatureParameterType {
        SignatureParameterType::new(name, is_optional, is_rest, ty)
    }

    fn xy_signature() -> SignatureType {
        SignatureType::new(
            Vec::new(),
            vec![
                param("x", false, false, SomeType::intrinsic("number")),
                param("y", true, false, SomeType::intrinsic("string")),
            ],
            SomeType::intrinsic("boolean"),
        )
    }

    #[test]
    fn test_stringify_arrow() {
        assert_eq!(
            xy_signature().stringify_with(false, false),
            "(x: number, y?: string) => boolean"
        );
        assert_eq!(
            xy_signature().stringify(false),
            "(x: number, y?: string) => boolean"
        );
    }

    #[test]
    fn test_stringify_generic_method_style() {
        let mut sig = xy_signature();
        sig.type_parameters.push(TypeParameterType::new("A"));
        assert_eq!(
            sig.stringify_with(false, true),
            "<A>(x: number, y?: string): boolean"
        );
    }

    #[test]
    fn test_stringify_multiple_type_parameters() {
        let sig = SignatureType::new(
            vec![TypeParameterType::new("K"), TypeParameterType::new("V")],
            vec![param("key", false, false, SomeType::reference("K"))],
            SomeType::reference("V"),
        );
        assert_eq!(sig.stringify(false), "<K, V>(key: K) => V");
    }

    #[test]
    fn test_stringify_empty_parameters() {
        let sig = SignatureType::new(Vec::new(), Vec::new(), SomeType::intrinsic("void"));
        assert_eq!(sig.stringify(false), "() => void");
        assert_eq!(sig.stringify(true), "(() => void)");
    }

    #[test]
    fn test_wrapped_signature_in_union() {
        let union = UnionType::new(vec![
            xy_signature().into(),
            SomeType::intrinsic("undefined"),
        ]);
        assert_eq!(
            union.stringify(false),
            "((x: number, y?: string) => boolean) | undefined"
        );
    }

    #[test]
    fn test_rest_parameter() {
        let args = param(
            "args",
            false,
            true,
            ArrayType::new(SomeType::intrinsic("string")).into(),
        );
        assert_eq!(args.stringify(false), "...args: string[]");
    }

    #[test]
    fn test_parameter_of_signature_type() {
        let callback = param(
            "cb",
            false,
            false,
            SignatureType::new(Vec::new(), Vec::new(), SomeType::intrinsic("void")).into(),
        );
        assert_eq!(callback.stringify(false), "cb: () => void");
    }

    #[test]
    #[should_panic(expected = "signature parameters may not be contained within other types")]
    fn test_wrapped_parameter_panics() {
        param("x", false, false, SomeType::intrinsic("number")).stringify(true);
    }

    // Known modeling gap: a parameter may be both rest and optional. The
    // combination is kept as-is and renders both markers.
    #[test]
    fn test_rest_and_optional_is_permitted() {
        let odd = param(
            "rest",
            true,
            true,
            ArrayType::new(SomeType::intrinsic("number")).into(),
        );
        assert!(odd.is_rest && odd.is_optional);
        assert_eq!(odd.stringify(false), "...rest?: number[]");
    }

    #[test]
    fn test_clone_is_deep() {
        let original = xy_signature();
        let mut copy = original.clone();

        copy.parameters[0].name = "z".to_string();
        copy.parameters[1].is_optional = false;
        *copy.return_type = SomeType::intrinsic("never");
        copy.type_parameters.push(TypeParameterType::new("T"));

        assert_eq!(
            original.stringify(false),
            "(x: number, y?: string) => boolean"
        );
        assert_eq!(copy.stringify(false), "<T>(z: number, y: string) => never");
        assert_eq!(copy.kind(), original.kind());
    }

    #[test]
    fn test_parameter_clone_is_deep() {
        let original = param("x", false, false, SomeType::intrinsic("number"));
        let mut copy = original.clone();
        *copy.parameter_type = SomeType::intrinsic("string");
        copy.is_rest = true;

        assert_eq!(original.stringify(false), "x: number");
        assert_eq!(copy.stringify(false), "...x: string");
        assert_eq!(copy.kind(), TypeKind::SignatureParameter);
    }
}
