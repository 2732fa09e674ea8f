use thiserror::Error;

/// Errors from turning a figure into its serialized form
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("failed to serialize figure: {0}")]
    Serialize(#[from] serde_json::Error),
}
