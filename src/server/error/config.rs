use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// The identity provider's key set contains no usable signing key.
    ///
    /// Every token would be rejected, so startup is aborted instead.
    #[error("No usable token signing keys found at {0}")]
    NoSigningKeys(String),
}
