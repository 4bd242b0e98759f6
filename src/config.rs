use clap::Parser;
use std::env;

/// Quiz upload web service
#[derive(Parser, Debug, PartialEq)]
#[clap(author, version, about, long_about = None)]
pub struct Config {
    /// Which errors we want to log (info, warn or error)
    #[clap(short, long, default_value = "warn")]
    pub log_level: String,
    /// Which PORT the server is listening to
    #[clap(short, long, default_value = "8080")]
    pub port: u16,
    /// Directory holding one JSON file per quiz
    #[clap(short, long, default_value = "storage")]
    pub storage_root: String,
}

impl Config {
    pub fn new() -> Result<Config, handle_errors::Error> {
        let config = Config::parse();

        let port = env::var("PORT")
            .ok()
            .map(|val| val.parse::<u16>())
            .unwrap_or(Ok(config.port))
            .map_err(handle_errors::Error::ParseError)?;

        let storage_root = env::var("STORAGE_ROOT").unwrap_or(config.storage_root.to_owned());

        Ok(Config {
            log_level: config.log_level,
            port,
            storage_root,
        })
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn defaults_env_overrides_and_bad_port() {
        // ENV variables are not set, so the clap defaults apply
        let config = Config::new().unwrap();

        let expected = Config {
            log_level: "warn".to_string(),
            port: 8080,
            storage_root: "storage".to_string(),
        };
        assert_eq!(config, expected);

        // Now we set them
        unsafe { env::set_var("PORT", "3080") };
        unsafe { env::set_var("STORAGE_ROOT", "/tmp/quizzes") };

        let config = Config::new().unwrap();
        assert_eq!(config.port, 3080);
        assert_eq!(config.storage_root, "/tmp/quizzes");

        // A PORT that is not a number is a parse error
        unsafe { env::set_var("PORT", "not-a-port") };

        let result = Config::new();
        assert!(matches!(
            result,
            Err(handle_errors::Error::ParseError(_))
        ));

        unsafe { env::remove_var("PORT") };
        unsafe { env::remove_var("STORAGE_ROOT") };
    }
}
