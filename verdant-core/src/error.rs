use thiserror::Error;

#[derive(Debug, Error)]
pub enum VerdantError {
    #[error("Substance '{0}' not found in catalog")]
    SubstanceNotFound(String),

    #[error("Substance '{0}' is already part of the active mixture")]
    DuplicateSubstance(String),

    #[error("Active mixture is full ({0} substances maximum)")]
    MixtureFull(usize),

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to parse YAML from '{0}': {1}")]
    YamlParsing(String, #[source] serde_yaml::Error),
}
