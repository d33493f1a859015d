pub type Result<T> = std::result::Result<T, SolarDialError>;

#[derive(Debug, thiserror::Error)]
pub enum SolarDialError {
    #[error("UV data unavailable: {0}")]
    DataUnavailable(String),

    #[error("invalid location: lat={lat}, lng={lng}")]
    InvalidLocation { lat: f64, lng: f64 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
