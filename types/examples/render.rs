//! Renders and serializes a few type trees.
//!
//! Run with: cargo run --example render

use tydoc_types::{
    ArrayType, IntersectionType, ReferenceType, Serializer, SerializerOptions,
    SignatureParameterType, SignatureType, SomeType, Type, TypeParameterType, UnionType,
};

fn main() {
    println!("=== tydoc Types Example ===\n");

    // Example 1: function type expression
    println!("1. Function type:");
    let callback = SignatureType::new(
        Vec::new(),
        vec![
            SignatureParameterType::new("err", false, false, SomeType::reference("Error")),
            SignatureParameterType::new("data", true, false, SomeType::intrinsic("string")),
        ],
        SomeType::intrinsic("void"),
    );
    println!("   {}", callback);

    // Example 2: the same signature in method position
    println!("\n2. Method signature:");
    let mut method = callback.clone();
    method.type_parameters.push(TypeParameterType::new("T"));
    println!("   on{}", method.stringify_with(false, true));

    // Example 3: wrapping contexts
    println!("\n3. Wrapped contexts:");
    let handlers = ArrayType::new(callback.clone().into());
    println!("   Array element: {}", handlers);
    let maybe = UnionType::new(vec![callback.clone().into(), SomeType::intrinsic("null")]);
    println!("   Union member:  {}", maybe);
    let mixed = IntersectionType::new(vec![
        maybe.into(),
        ReferenceType::new("Tagged", vec![SomeType::intrinsic("string")]).into(),
    ]);
    println!("   Intersection:  {}", mixed);

    // Example 4: serialized record
    println!("\n4. Serialized:");
    let serializer = Serializer::with_options(SerializerOptions { pretty: true });
    match serializer.to_json(&callback) {
        Ok(json) => println!("{}", json),
        Err(err) => eprintln!("   error: {}", err),
    }
}
