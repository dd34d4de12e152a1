use crate::error::{BadEnvVarSnafu, CorduroyResult, ParsePortSnafu};
use secrecy::{ExposeSecret, SecretString};
use snafu::ResultExt;
use sqlx::mysql::MySqlConnectOptions;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    db_config: Arc<DbConfig>,
}

impl RuntimeConfiguration {
    pub fn new() -> CorduroyResult<Self> {
        Ok(Self {
            db_config: Arc::new(DbConfig::new()?),
        })
    }

    pub fn db_config(&self) -> Arc<DbConfig> {
        self.db_config.clone()
    }
}

#[derive(Debug)]
pub struct DbConfig {
    host: String,
    user: String,
    password: SecretString,
    port: u16,
    database: String,
}

impl DbConfig {
    pub const DEFAULT_HOST: &'static str = "localhost";
    pub const DEFAULT_USER: &'static str = "root";
    pub const DEFAULT_DATABASE: &'static str = "school";
    pub const DEFAULT_PORT: u16 = 3306;

    pub fn new() -> CorduroyResult<Self> {
        Self::from_lookup(dotenvy::var)
    }

    /// Builds the config from an arbitrary env-like lookup.
    ///
    /// Host, user, database and port fall back to the local defaults. The password never does.
    pub fn from_lookup(
        lookup: impl Fn(&'static str) -> Result<String, dotenvy::Error>,
    ) -> CorduroyResult<Self> {
        let or_default = |name, default: &str| lookup(name).unwrap_or_else(|_| default.to_string());

        let port = match lookup("DB_PORT") {
            Ok(port) => port.parse().context(ParsePortSnafu)?,
            Err(_) => Self::DEFAULT_PORT,
        };

        Ok(Self {
            host: or_default("DB_HOST", Self::DEFAULT_HOST),
            user: or_default("DB_USER", Self::DEFAULT_USER),
            password: SecretString::from(lookup("DB_PASSWORD").context(BadEnvVarSnafu {
                name: "DB_PASSWORD",
            })?),
            port,
            database: or_default("DB_NAME", Self::DEFAULT_DATABASE),
        })
    }

    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(self.password.expose_secret())
            .database(&self.database)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub const fn port(&self) -> u16 {
        self.port
    }
}
