use crate::{
    data::student::{Student, StudentForm},
    error::CorduroyResult,
};
use async_trait::async_trait;
use serde::Deserialize;
use std::fmt::Debug;

pub mod mysql_store;
pub mod student;

#[derive(Deserialize)]
pub struct IdForm {
    pub id: i32,
}

/// The statements the app is allowed to run against the `students` table.
///
/// Each call is one round trip. Implementations must not hold a connection open between calls.
#[async_trait]
pub trait StudentStore: Debug + Send + Sync {
    /// `SELECT * FROM students`
    async fn fetch_all(&self) -> CorduroyResult<Vec<Student>>;
    /// `SELECT * FROM students WHERE name = ?`
    async fn find_by_name(&self, name: &str) -> CorduroyResult<Vec<Student>>;
    /// Returns the id the server assigned.
    async fn insert(&self, form: StudentForm) -> CorduroyResult<i32>;
    /// Rewrites every mutable column, changed or not.
    async fn update(&self, id: i32, form: StudentForm) -> CorduroyResult<()>;
    async fn delete(&self, id: i32) -> CorduroyResult<()>;
}
