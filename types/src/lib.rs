//! Type model for documentation generation.
//!
//! This crate provides an owned, polymorphic representation of type
//! expressions (signatures, unions, references, ...) that can be deep-cloned,
//! rendered back into readable type syntax, and serialized into plain records.
//!
//! # Example
//!
//! ```
//! use tydoc_types::{SignatureParameterType, SignatureType, SomeType, Type};
//!
//! let sig = SignatureType::new(
//!     Vec::new(),
//!     vec![SignatureParameterType::new("x", false, false, SomeType::intrinsic("number"))],
//!     SomeType::intrinsic("boolean"),
//! );
//! assert_eq!(sig.stringify(false), "(x: number) => boolean");
//! assert_eq!(sig.stringify_with(false, true), "(x: number): boolean");
//! ```

// Type-expression nodes and the shared contract
pub mod model;

pub mod error;
pub mod options;
pub mod serialization;

// Re-export model types for convenience
pub use model::{
    ArrayType, IntersectionType, IntrinsicType, LiteralType, LiteralValue, ReferenceCollector,
    ReferenceType, SignatureParameterType, SignatureType, SomeType, TupleType, Type, TypeKind,
    TypeParameterType, TypeVisitor, UnionType, UnknownType, wrap,
};

pub use error::SerializeError;
pub use options::SerializerOptions;
pub use serialization::{BaseSerialized, SerializedType, Serializer};
