//! Configuration options for the serializer.

/// Configuration options for [`Serializer`](crate::Serializer).
///
/// # Example
///
/// ```
/// use tydoc_types::{Serializer, SerializerOptions};
///
/// let serializer = Serializer::with_options(SerializerOptions { pretty: true });
/// ```
#[derive(Debug, Clone, Default)]
pub struct SerializerOptions {
    /// Indent JSON produced by `Serializer::to_json`.
    ///
    /// Default: false
    pub pretty: bool,
}
