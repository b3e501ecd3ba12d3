use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardError {
    #[error("Error marshaling JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Error marshaling YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Error rendering card: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Error writing output: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CardError>;
