use crate::{
    config::DbConfig,
    error::{CloseConnectionSnafu, ConnectFailure, ConnectSnafu, CorduroyResult, MigrateSnafu},
};
use snafu::ResultExt;
use sqlx::{ConnectOptions, Connection, MySqlConnection};
use std::sync::Arc;

/// Opens one short-lived connection per statement, no pooling.
#[derive(Clone, Debug)]
pub struct ConnectionProvider {
    config: Arc<DbConfig>,
}

impl ConnectionProvider {
    pub fn new(config: Arc<DbConfig>) -> Self {
        debug!(
            host = config.host(),
            port = config.port(),
            user = config.user(),
            "Initialising connection provider"
        );
        Self { config }
    }

    pub async fn connect(&self) -> CorduroyResult<MySqlConnection> {
        debug!("Attempting to connect to database...");

        match self.config.connect_options().connect().await {
            Ok(conn) => {
                debug!("Database connection successful!");
                Ok(conn)
            }
            Err(source) => {
                let kind = ConnectFailure::classify(&source);
                match kind {
                    ConnectFailure::AccessDenied => {
                        warn!(?source, "Access denied, check your username/password");
                    }
                    ConnectFailure::UnknownDatabase => {
                        warn!(
                            ?source,
                            database = self.config.database(),
                            "Unknown database, check your database name"
                        );
                    }
                    ConnectFailure::Other => warn!(?source, "Database connection error"),
                }
                Err(source).context(ConnectSnafu { kind })
            }
        }
    }

    pub async fn close(conn: MySqlConnection) -> CorduroyResult<()> {
        conn.close().await.context(CloseConnectionSnafu)
    }

    /// Closes `conn`, then hands back `result` untouched. A failed close is only logged.
    pub async fn finish<T>(conn: MySqlConnection, result: CorduroyResult<T>) -> CorduroyResult<T> {
        if let Err(close_error) = Self::close(conn).await {
            warn!(?close_error, "Error closing db connection");
        }
        result
    }

    pub async fn run_migrations(&self) -> CorduroyResult<()> {
        let mut conn = self.connect().await?;
        let result = sqlx::migrate!().run(&mut conn).await.context(MigrateSnafu);
        Self::finish(conn, result).await
    }
}
