use crate::{
    data::{
        StudentStore,
        student::{Student, StudentForm},
    },
    db::ConnectionProvider,
    error::{CorduroyResult, MakeQuerySnafu},
};
use async_trait::async_trait;
use snafu::ResultExt;

#[derive(Debug, Clone)]
pub struct MySqlStudentStore {
    provider: ConnectionProvider,
}

impl MySqlStudentStore {
    pub const fn new(provider: ConnectionProvider) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl StudentStore for MySqlStudentStore {
    async fn fetch_all(&self) -> CorduroyResult<Vec<Student>> {
        let mut conn = self.provider.connect().await?;
        let result = sqlx::query_as::<_, Student>("SELECT * FROM students")
            .fetch_all(&mut conn)
            .await
            .context(MakeQuerySnafu);
        ConnectionProvider::finish(conn, result).await
    }

    async fn find_by_name(&self, name: &str) -> CorduroyResult<Vec<Student>> {
        let mut conn = self.provider.connect().await?;
        let result = sqlx::query_as::<_, Student>("SELECT * FROM students WHERE name = ?")
            .bind(name)
            .fetch_all(&mut conn)
            .await
            .context(MakeQuerySnafu);
        ConnectionProvider::finish(conn, result).await
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)] //AUTO_INCREMENT on an INT column
    async fn insert(&self, form: StudentForm) -> CorduroyResult<i32> {
        let StudentForm {
            name,
            course,
            mobile,
        } = form;

        let mut conn = self.provider.connect().await?;
        let result = sqlx::query("INSERT INTO students (name, course, mobile) VALUES (?, ?, ?)")
            .bind(name)
            .bind(course.as_str())
            .bind(mobile)
            .execute(&mut conn)
            .await
            .context(MakeQuerySnafu)
            .map(|done| done.last_insert_id() as i32);
        ConnectionProvider::finish(conn, result).await
    }

    async fn update(&self, id: i32, form: StudentForm) -> CorduroyResult<()> {
        let StudentForm {
            name,
            course,
            mobile,
        } = form;

        let mut conn = self.provider.connect().await?;
        let result = sqlx::query("UPDATE students SET name = ?, course = ?, mobile = ? WHERE id = ?")
            .bind(name)
            .bind(course.as_str())
            .bind(mobile)
            .bind(id)
            .execute(&mut conn)
            .await
            .context(MakeQuerySnafu)
            .map(|done| {
                if done.rows_affected() == 0 {
                    debug!(id, "Update touched no rows");
                }
            });
        ConnectionProvider::finish(conn, result).await
    }

    async fn delete(&self, id: i32) -> CorduroyResult<()> {
        let mut conn = self.provider.connect().await?;
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&mut conn)
            .await
            .context(MakeQuerySnafu)
            .map(|done| {
                if done.rows_affected() == 0 {
                    debug!(id, "Delete touched no rows");
                }
            });
        ConnectionProvider::finish(conn, result).await
    }
}
