use business::domain::errors::RepositoryError;

/// Maps a driver failure onto the domain error, logging anything unexpected.
pub(crate) fn map_sqlx_error(error: sqlx::Error) -> RepositoryError {
    match &error {
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::Duplicated,
        _ => {
            tracing::error!(target: "PromptPrint -- ", "database failure: {}", error);
            RepositoryError::DatabaseError
        }
    }
}
