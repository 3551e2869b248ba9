//! Command-line configuration.

use std::path::PathBuf;

use thiserror::Error;

pub const USAGE: &str = "usage: coffee-machine [--quiet] [script.csv]";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown flag '{0}'")]
    UnknownFlag(String),

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Script to run in batch mode; interactive when `None`.
    pub script: Option<PathBuf>,
    /// Tell the user how much cash `take` handed out.
    pub show_collected: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            script: None,
            show_collected: true,
        }
    }
}

impl Config {
    /// Build the configuration from the process arguments, program name excluded.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Config::default();
        for arg in args {
            let arg = arg.into();
            match arg.as_str() {
                "-q" | "--quiet" => config.show_collected = false,
                flag if flag.starts_with('-') => return Err(ConfigError::UnknownFlag(arg)),
                _ if config.script.is_some() => {
                    return Err(ConfigError::UnexpectedArgument(arg));
                }
                _ => config.script = Some(PathBuf::from(arg)),
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_is_interactive() {
        let config = Config::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.script.is_none());
        assert!(config.show_collected);
    }

    #[test]
    fn script_and_quiet() {
        let config = Config::from_args(["--quiet", "orders.csv"]).unwrap();
        assert_eq!(config.script, Some(PathBuf::from("orders.csv")));
        assert!(!config.show_collected);

        let config = Config::from_args(["orders.csv", "-q"]).unwrap();
        assert_eq!(config.script, Some(PathBuf::from("orders.csv")));
        assert!(!config.show_collected);
    }

    #[test]
    fn unknown_flag_fails() {
        let result = Config::from_args(["--verbose"]);
        assert_eq!(result, Err(ConfigError::UnknownFlag("--verbose".to_string())));
    }

    #[test]
    fn second_script_fails() {
        let result = Config::from_args(["a.csv", "b.csv"]);
        assert_eq!(
            result,
            Err(ConfigError::UnexpectedArgument("b.csv".to_string()))
        );
    }
}
