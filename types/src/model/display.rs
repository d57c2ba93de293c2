//! Shared rendering helpers and `Display` impls.
//!
//! `Display` always renders the unwrapped form, so `ty.to_string()` equals
//! `ty.stringify(false)`.

use core::fmt;

use super::{
    ArrayType, IntersectionType, IntrinsicType, LiteralType, ReferenceType, SignatureParameterType,
    SignatureType, SomeType, TupleType, Type, TypeParameterType, UnionType, UnknownType,
};

/// Surround `text` with parentheses when `needs_parens` is set.
pub fn wrap(needs_parens: bool, text: String) -> String {
    if needs_parens {
        format!("({})", text)
    } else {
        text
    }
}

/// Render each item with `wrapped` and join with `separator`, keeping order.
pub(crate) fn join<'a, T>(
    items: impl IntoIterator<Item = &'a T>,
    wrapped: bool,
    separator: &str,
) -> String
where
    T: Type + 'a,
{
    items
        .into_iter()
        .map(|ty| ty.stringify(wrapped))
        .collect::<Vec<_>>()
        .join(separator)
}

macro_rules! impl_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.stringify(false))
                }
            }
        )*
    };
}

impl_display!(
    SomeType,
    ArrayType,
    IntersectionType,
    IntrinsicType,
    LiteralType,
    ReferenceType,
    SignatureType,
    SignatureParameterType,
    TupleType,
    TypeParameterType,
    UnionType,
    UnknownType,
);
