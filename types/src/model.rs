//! The type-expression model.
//!
//! Every node implements the [`Type`] contract: it can be deep-cloned,
//! rendered back into type syntax, and serialized into a plain record.
//!
//! ## Structure
//!
//! - **Registry**: `TypeKind` - one tag per variant
//! - **Contract**: `Type` trait, `SomeType` union of child-capable variants
//! - **Variants**: one module per node shape
//! - **Display**: the shared `wrap` helper and `Display` impls
//! - **Visitor**: generic traversal over a tree

pub mod array;
pub mod display;
pub mod intersection;
pub mod intrinsic;
pub mod kind;
pub mod literal;
pub mod reference;
pub mod signature;
pub mod tuple;
pub mod ty;
pub mod type_parameter;
pub mod union;
pub mod unknown;
pub mod visit;

pub use array::ArrayType;
pub use display::wrap;
pub use intersection::IntersectionType;
pub use intrinsic::IntrinsicType;
pub use kind::TypeKind;
pub use literal::{LiteralType, LiteralValue};
pub use reference::ReferenceType;
pub use signature::{SignatureParameterType, SignatureType};
pub use tuple::TupleType;
pub use ty::{SomeType, Type};
pub use type_parameter::TypeParameterType;
pub use union::UnionType;
pub use unknown::UnknownType;
pub use visit::{ReferenceCollector, TypeVisitor};
