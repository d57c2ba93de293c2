//! tydoc - the type model of a documentation generator
//!
//! # Overview
//!
//! Documentation needs to show type expressions the way authors wrote them:
//! function signatures, unions, generic references, tuples. This crate holds
//! those expressions as an owned tree that can be
//!
//! - deep-cloned (`Clone`),
//! - rendered back into type syntax (`Type::stringify`, `Display`),
//! - serialized into plain JSON-compatible records (`Serializer`).
//!
//! Parsing sources into the model and emitting HTML or markdown are left to
//! the surrounding tool.
//!
//! # Quick Start
//!
//! ```
//! use tydoc::{ArrayType, Serializer, SignatureParameterType, SignatureType, SomeType, Type};
//!
//! // (...args: string[]) => void
//! let sig = SignatureType::new(
//!     Vec::new(),
//!     vec![SignatureParameterType::new(
//!         "args",
//!         false,
//!         true,
//!         ArrayType::new(SomeType::intrinsic("string")).into(),
//!     )],
//!     SomeType::intrinsic("void"),
//! );
//! assert_eq!(sig.to_string(), "(...args: string[]) => void");
//!
//! let json = Serializer::new().to_value(&sig).unwrap();
//! assert_eq!(json["parameters"][0]["isRest"], true);
//! ```
//!
//! # Rendering Context
//!
//! `stringify(wrapped)` is told whether the node sits where parentheses may
//! be required (a union member, an array element). Each node decides from its
//! own precedence whether to emit them:
//!
//! ```
//! use tydoc::{ArrayType, SomeType, Type, UnionType};
//!
//! let union: SomeType =
//!     UnionType::new(vec![SomeType::intrinsic("string"), SomeType::intrinsic("number")]).into();
//! let arr = ArrayType::new(union);
//! assert_eq!(arr.stringify(false), "(string | number)[]");
//! ```

// Re-export public API from tydoc_types
pub use tydoc_types::model::{self, TypeKind, wrap};
pub use tydoc_types::{
    ArrayType, IntersectionType, IntrinsicType, LiteralType, LiteralValue, ReferenceType,
    SignatureParameterType, SignatureType, SomeType, TupleType, Type, TypeParameterType,
    UnionType, UnknownType,
};

// Re-export traversal
pub use tydoc_types::{ReferenceCollector, TypeVisitor};

// Re-export serialization
pub use tydoc_types::serialization::{self, BaseSerialized, SerializedType, Serializer};
pub use tydoc_types::{SerializeError, SerializerOptions};
