use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A write was rejected or failed in the store. The message is shown to
    /// the user as-is and must not carry store details.
    #[error("Store failure: {0}")]
    StoreFailure(String),
}
