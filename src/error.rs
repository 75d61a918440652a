use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cell ({x}, {y}) is outside of the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("unknown element kind {kind:?} at ({x}, {y})")]
    UnknownElementKind { kind: String, x: usize, y: usize },

    #[error("{kind} elements can not be labeled")]
    LabelingNotSupported { kind: &'static str },

    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(String),

    #[error("simulation interval must be greater than zero")]
    InvalidInterval,

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] ron::error::SpannedError),

    #[error("failed to write config: {0}")]
    ConfigWrite(#[from] ron::Error),
}
