use thiserror::Error;
use vibesip_catalog::CatalogError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Catalog error: {0}")]
    CatalogError(#[from] CatalogError),

    #[error("Cocktail not found: {0}")]
    CocktailNotFound(String),

    #[error("Invalid query: {0}")]
    QueryError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
