use crate::types::DbId;

/// Domain error taxonomy.
///
/// Every precondition failure in the server raises one of these at the point
/// of failure and propagates it unmodified to the HTTP boundary, which maps
/// the variant to a status code.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
