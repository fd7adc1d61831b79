use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono_tz::Tz;
use serde::Deserialize;
use thiserror::Error;

use crate::database::sqlite::env_path;

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("unable to read configuration {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error
    },

    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error)
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct DatabaseConfiguration {
    path: String,
    #[serde(default)]
    migrations: Vec<String>
}

impl DatabaseConfiguration {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn migrations(&self) -> &[String] {
        &self.migrations
    }
}

fn default_timezone() -> Tz {
    chrono_tz::America::New_York
}

/// Settings for the `bankcal` binary, read from a JSON file:
///
/// ```json
/// {
///     "timezone": "America/New_York",
///     "database": { "path": "bankcal.db", "migrations": ["create table ..."] }
/// }
/// ```
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Configuration {
    #[serde(default = "default_timezone")]
    timezone: Tz,
    #[serde(default)]
    database: Option<DatabaseConfiguration>
}

impl Configuration {
    pub fn from_reader<R: Read>(reader: R) -> Result<Configuration, ConfigurationError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_file(file_path: &Path) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path).map_err(|source| ConfigurationError::Io {
            path: file_path.display().to_string(),
            source
        })?;
        Configuration::from_reader(BufReader::new(file))
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn database(&self) -> Option<&DatabaseConfiguration> {
        self.database.as_ref()
    }

    /// `SQLITE_DB_PATH` when set, otherwise the configured database path.
    pub fn database_path(&self) -> Option<String> {
        env_path().or_else(|| self.database.as_ref().map(|db| db.path.clone()))
    }
}

impl Default for Configuration {
    fn default() -> Configuration {
        Configuration {
            timezone: default_timezone(),
            database: None
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = Configuration::from_reader("{}".as_bytes()).unwrap();
        assert_eq!(config, Configuration::default());
        assert_eq!(config.timezone(), chrono_tz::America::New_York);
        assert!(config.database().is_none());
    }

    #[test]
    fn reads_timezone_and_database() {
        let json = r#"{
            "timezone": "America/Los_Angeles",
            "database": { "path": "ach.db", "migrations": ["create table t(id integer)"] }
        }"#;
        let config = Configuration::from_reader(json.as_bytes()).unwrap();
        assert_eq!(config.timezone(), chrono_tz::America::Los_Angeles);
        let database = config.database().unwrap();
        assert_eq!(database.path(), "ach.db");
        assert_eq!(database.migrations().len(), 1);
    }

    #[test]
    fn unknown_timezone_is_rejected() {
        let err = Configuration::from_reader(r#"{"timezone": "Mars/Olympus"}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, ConfigurationError::Json(_)));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = Configuration::from_file(Path::new("/nonexistent/bankcal.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/bankcal.json"));
    }
}
