use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read vendors file {path}: {source}")]
    VendorsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse vendors file: {0}")]
    VendorsFileParse(#[from] serde_yaml::Error),

    #[error("vendor catalog validation failed: {0}")]
    Validation(String),
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("cart line for product {product_id} must have quantity >= 1")]
    InvalidQuantity { product_id: uuid::Uuid },
}
