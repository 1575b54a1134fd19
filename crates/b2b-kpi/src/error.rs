#[derive(Debug, thiserror::Error)]
pub enum KpiError {
    #[error("Unknown vault: {0}")]
    UnknownVault(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
