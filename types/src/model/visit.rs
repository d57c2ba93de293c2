use super::{SignatureParameterType, SomeType, TypeParameterType};

/// Trait for visiting type trees.
///
/// Implement this trait to traverse types without mutation.
/// The default implementation handles recursion automatically, walking
/// children in stored order.
///
/// # Example
///
/// ```
/// use tydoc_types::{ArrayType, SomeType, TypeVisitor};
///
/// struct DepthCalculator {
///     max_depth: usize,
///     current_depth: usize,
/// }
///
/// impl TypeVisitor for DepthCalculator {
///     fn visit_ty(&mut self, ty: &SomeType) {
///         self.current_depth += 1;
///         self.max_depth = self.max_depth.max(self.current_depth);
///
///         self.super_visit_ty(ty);
///
///         self.current_depth -= 1;
///     }
/// }
///
/// let arr: SomeType = ArrayType::new(ArrayType::new(SomeType::intrinsic("number")).into()).into();
///
/// let mut calc = DepthCalculator { max_depth: 0, current_depth: 0 };
/// calc.visit_ty(&arr);
/// assert_eq!(calc.max_depth, 3); // Array -> Array -> number
/// ```
pub trait TypeVisitor {
    /// Visit a type.
    ///
    /// Override this to customize behavior for all types.
    /// Call `super_visit_ty` to recurse into nested types.
    fn visit_ty(&mut self, ty: &SomeType) {
        self.super_visit_ty(ty)
    }

    fn visit_type_parameter(&mut self, param: &TypeParameterType) {
        self.super_visit_type_parameter(param)
    }

    fn visit_parameter(&mut self, param: &SignatureParameterType) {
        self.super_visit_parameter(param)
    }

    /// Default recursion into nested types.
    ///
    /// Override `visit_ty` instead of this method.
    fn super_visit_ty(&mut self, ty: &SomeType) {
        match ty {
            // Base cases - no recursion
            SomeType::Intrinsic(_) | SomeType::Literal(_) | SomeType::Unknown(_) => {}

            SomeType::Array(arr) => self.visit_ty(&arr.element_type),

            SomeType::Union(union) => {
                for member in &union.types {
                    self.visit_ty(member);
                }
            }

            SomeType::Intersection(intersection) => {
                for member in &intersection.types {
                    self.visit_ty(member);
                }
            }

            SomeType::Tuple(tuple) => {
                for element in &tuple.elements {
                    self.visit_ty(element);
                }
            }

            SomeType::Reference(reference) => {
                for arg in &reference.type_arguments {
                    self.visit_ty(arg);
                }
            }

            SomeType::TypeParameter(param) => self.visit_type_parameter(param),

            // Signature: type parameters, then parameters, then return type
            SomeType::Signature(sig) => {
                for type_param in &sig.type_parameters {
                    self.visit_type_parameter(type_param);
                }
                for param in &sig.parameters {
                    self.visit_parameter(param);
                }
                self.visit_ty(&sig.return_type);
            }
        }
    }

    fn super_visit_type_parameter(&mut self, param: &TypeParameterType) {
        if let Some(constraint) = &param.constraint {
            self.visit_ty(constraint);
        }
        if let Some(default) = &param.default {
            self.visit_ty(default);
        }
    }

    fn super_visit_parameter(&mut self, param: &SignatureParameterType) {
        self.visit_ty(&param.parameter_type);
    }
}

/// Collects the names of every referenced type, in traversal order.
///
/// Renderers use this to decide which cross-links a signature needs.
///
/// # Example
///
/// ```
/// use tydoc_types::{ReferenceCollector, ReferenceType, SomeType, TypeVisitor};
///
/// let promise: SomeType =
///     ReferenceType::new("Promise", vec![SomeType::reference("User")]).into();
///
/// let mut collector = ReferenceCollector::default();
/// collector.visit_ty(&promise);
/// assert_eq!(collector.names, ["Promise", "User"]);
/// ```
#[derive(Debug, Default)]
pub struct ReferenceCollector {
    pub names: Vec<String>,
}

impl TypeVisitor for ReferenceCollector {
    fn visit_ty(&mut self, ty: &SomeType) {
        if let SomeType::Reference(reference) = ty {
            self.names.push(reference.name.clone());
        }
        self.super_visit_ty(ty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ArrayType, SignatureType, UnionType};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collects_signature_references_in_order() {
        let sig: SomeType = SignatureType::new(
            vec![TypeParameterType::new("T").with_constraint(SomeType::reference("Base"))],
            vec![
                SignatureParameterType::new("a", false, false, SomeType::reference("A")),
                SignatureParameterType::new(
                    "rest",
                    false,
                    true,
                    ArrayType::new(SomeType::reference("B")).into(),
                ),
            ],
            UnionType::new(vec![SomeType::reference("C"), SomeType::intrinsic("void")]).into(),
        )
        .into();

        let mut collector = ReferenceCollector::default();
        collector.visit_ty(&sig);
        assert_eq!(collector.names, ["Base", "A", "B", "C"]);
    }

    #[test]
    fn test_counts_parameters() {
        struct ParamCounter(usize);

        impl TypeVisitor for ParamCounter {
            fn visit_parameter(&mut self, param: &SignatureParameterType) {
                self.0 += 1;
                self.super_visit_parameter(param);
            }
        }

        // (f: (x: number) => void) => void
        let inner = SignatureType::new(
            Vec::new(),
            vec![SignatureParameterType::new("x", false, false, SomeType::intrinsic("number"))],
            SomeType::intrinsic("void"),
        );
        let outer: SomeType = SignatureType::new(
            Vec::new(),
            vec![SignatureParameterType::new("f", false, false, inner.into())],
            SomeType::intrinsic("void"),
        )
        .into();

        let mut counter = ParamCounter(0);
        counter.visit_ty(&outer);
        assert_eq!(counter.0, 2);
    }
}
