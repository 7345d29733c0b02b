use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Failed to parse content configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid content: {0}")]
    InvalidContent(String),
}
