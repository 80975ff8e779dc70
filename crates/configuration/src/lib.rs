use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{ApplicationSettings, DatabaseSettings, Settings};

/// Loads the application configuration from the `config.toml` file.
///
/// This function is the primary entry point for this crate. It reads the
/// configuration file, deserializes it into our strongly-typed `Settings`
/// struct, and returns it.
pub fn load_config() -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for a file named `config.toml`
        .add_source(config::File::with_name("config.toml"))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Settings` struct
    let settings = builder.try_deserialize::<Settings>()?;
    validate(&settings)?;

    Ok(settings)
}

fn validate(settings: &Settings) -> Result<(), ConfigError> {
    if settings.database.max_connections == 0 {
        return Err(ConfigError::ValidationError(
            "database.max_connections must be at least 1".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    const SAMPLE: &str = r#"
        [application]
        host = "127.0.0.1"
        port = 8000

        [database]
        max_connections = 10
        acquire_timeout_secs = 5
    "#;

    fn parse(toml: &str) -> Settings {
        config::Config::builder()
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn parses_full_settings() {
        let settings = parse(SAMPLE);
        assert_eq!(settings.application.address(), "127.0.0.1:8000");
        assert_eq!(settings.database.max_connections, 10);
        assert_eq!(settings.database.acquire_timeout_secs, 5);
    }

    #[test]
    fn rejects_zero_connection_pool() {
        let settings = parse(&SAMPLE.replace("max_connections = 10", "max_connections = 0"));
        assert!(validate(&settings).is_err());
    }
}
