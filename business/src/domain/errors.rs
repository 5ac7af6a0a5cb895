/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.database_error")]
    DatabaseError,
    #[error("repository.corrupted_document")]
    CorruptedDocument,
}

impl RepositoryError {
    /// True when the failure is an infrastructure fault rather than a lookup miss.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            RepositoryError::DatabaseError | RepositoryError::CorruptedDocument
        )
    }
}
