use thiserror::Error;

#[derive(Error, Debug)]
pub enum FontGalleryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Vault error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),

    #[error("Editor error: {0}")]
    Editor(String),
}

pub type Result<T> = std::result::Result<T, FontGalleryError>;
