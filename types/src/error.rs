use thiserror::Error;

use crate::TypeKind;

/// Failure while encoding a serialized type tree.
#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("failed to encode {kind} type as JSON")]
    Json {
        kind: TypeKind,
        #[source]
        source: serde_json::Error,
    },
}
