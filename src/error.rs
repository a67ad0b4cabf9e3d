use thiserror::Error;

/// All possible errors in the dependency-order tool
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("no class by that name found")]
    UnknownVertex,

    #[error("cycle found among the class dependencies")]
    CycleDetected,

    #[error("class name required")]
    EmptyClassName,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, GraphError>;
