use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("field {id} not found in draft")]
    UnknownField { id: String },

    #[error("unknown field type '{0}'")]
    UnknownFieldType(String),

    #[error("field at position {order} (label '{label}') has an empty name")]
    EmptyFieldName { order: usize, label: String },

    #[error("duplicate field name '{name}' at positions {first} and {second}")]
    DuplicateFieldName {
        name: String,
        first: usize,
        second: usize,
    },

    #[error("draft serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("analysis worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}
