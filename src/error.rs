use std::path::PathBuf;


#[derive(Debug, thiserror::Error)]
pub enum ScatterError {
    #[error("invalid sphere: {0}")]
    InvalidSphere(String),

    #[error("no sample accepted after {0} trials")]
    RejectionLimit(u64),

    #[error("failed to read config {0}: {1}")]
    ConfigRead(PathBuf, String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
