use bigdecimal::BigDecimal;
use business::domain::errors::RepositoryError;
use num_traits::{FromPrimitive, ToPrimitive};

/// Money columns are `NUMERIC(12, 2)`.
pub(crate) fn to_numeric(amount: f64) -> Result<BigDecimal, RepositoryError> {
    BigDecimal::from_f64(amount)
        .map(|value| value.round(2))
        .ok_or(RepositoryError::CorruptedDocument)
}

pub(crate) fn from_numeric(value: &BigDecimal) -> Result<f64, RepositoryError> {
    value.to_f64().ok_or(RepositoryError::CorruptedDocument)
}
