#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Invalid format on line {line_number}: expected 36 fields, found {field_count}: {line:?}")]
    InputFormat {
        line_number: usize,
        field_count: usize,
        line: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
