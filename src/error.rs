use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::html;
use snafu::Snafu;
use std::num::ParseIntError;

pub type CorduroyResult<T> = Result<T, CorduroyError>;

/// Why a connection attempt was refused, keyed off the MySQL error code.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConnectFailure {
    /// 1045
    AccessDenied,
    /// 1049
    UnknownDatabase,
    Other,
}

impl ConnectFailure {
    pub fn classify(error: &sqlx::Error) -> Self {
        let code = error
            .as_database_error()
            .and_then(|db_err| db_err.try_downcast_ref::<sqlx::mysql::MySqlDatabaseError>())
            .map(sqlx::mysql::MySqlDatabaseError::number);

        match code {
            Some(1045) => Self::AccessDenied,
            Some(1049) => Self::UnknownDatabase,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum CorduroyError {
    #[snafu(display("Error connecting to the database ({:?})", kind))]
    Connect {
        source: sqlx::Error,
        kind: ConnectFailure,
    },
    #[snafu(display("Error closing db connection"))]
    CloseConnection { source: sqlx::Error },
    #[snafu(display("Error making SQL query"))]
    MakeQuery { source: sqlx::Error },
    #[snafu(display("Error migrating DB schema"))]
    MigrateError { source: sqlx::migrate::MigrateError },
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse DB port"))]
    ParsePort { source: ParseIntError },
    #[snafu(display("Unknown course {:?}", original))]
    UnknownCourse { original: String },
    #[snafu(display("No row is selected"))]
    NoRowSelected,
    #[snafu(display("Unable to find student with ID: {}", id))]
    MissingStudent { id: i32 },
}

impl IntoResponse for CorduroyError {
    #[allow(clippy::match_same_arms)]
    fn into_response(self) -> Response {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const NF: StatusCode = StatusCode::NOT_FOUND; //not found
        const BI: StatusCode = StatusCode::BAD_REQUEST; //bad input
        const SU: StatusCode = StatusCode::SERVICE_UNAVAILABLE; //db not there

        let basic_error = |desc| {
            html! {
                div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative mb-4" role="alert" {
                    strong class="font-bold" {"Corduroy Error"}
                    span {(desc)}
                }
            }
        };

        let status_code = match &self {
            Self::Connect { .. } => SU,
            Self::CloseConnection { .. } => ISE,
            Self::MakeQuery { source } => match source {
                sqlx::Error::RowNotFound => NF,
                _ => ISE,
            },
            Self::MigrateError { .. } => ISE,
            Self::BadEnvVar { .. } => ISE,
            Self::ParsePort { .. } => ISE,
            Self::UnknownCourse { .. } => BI,
            Self::NoRowSelected => BI,
            Self::MissingStudent { .. } => NF,
        };

        error!(?self, "Error!");
        (status_code, Html(basic_error(self.to_string()))).into_response()
    }
}
