use crate::{
    config::DbConfig,
    data::{
        StudentStore,
        mysql_store::MySqlStudentStore,
        student::{Student, StudentForm},
    },
    db::ConnectionProvider,
    error::{ConnectFailure, CorduroyError, CorduroyResult},
};
use async_trait::async_trait;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, AtomicI32, AtomicUsize, Ordering},
};

/// Behaves like the `students` table: ids come from an auto-increment counter and are never reused.
#[derive(Debug)]
pub struct MemoryStore {
    rows: Mutex<Vec<Student>>,
    next_id: AtomicI32,
    failing: AtomicBool,
    pub find_by_name_calls: AtomicUsize,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            rows: Mutex::default(),
            next_id: AtomicI32::new(1),
            failing: AtomicBool::new(false),
            find_by_name_calls: AtomicUsize::new(0),
        }
    }
}

impl MemoryStore {
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> Vec<Student> {
        self.rows.lock().unwrap().clone()
    }

    fn check(&self) -> CorduroyResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(CorduroyError::Connect {
                source: sqlx::Error::PoolTimedOut,
                kind: ConnectFailure::Other,
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl StudentStore for MemoryStore {
    async fn fetch_all(&self) -> CorduroyResult<Vec<Student>> {
        self.check()?;
        Ok(self.snapshot())
    }

    async fn find_by_name(&self, name: &str) -> CorduroyResult<Vec<Student>> {
        self.find_by_name_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self
            .snapshot()
            .into_iter()
            .filter(|student| student.name == name)
            .collect())
    }

    async fn insert(&self, form: StudentForm) -> CorduroyResult<i32> {
        self.check()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().push(Student {
            id,
            name: form.name,
            course: form.course,
            mobile: form.mobile,
        });
        Ok(id)
    }

    async fn update(&self, id: i32, form: StudentForm) -> CorduroyResult<()> {
        self.check()?;
        if let Some(student) = self.rows.lock().unwrap().iter_mut().find(|s| s.id == id) {
            student.name = form.name;
            student.course = form.course;
            student.mobile = form.mobile;
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> CorduroyResult<()> {
        self.check()?;
        self.rows.lock().unwrap().retain(|s| s.id != id);
        Ok(())
    }
}

/// A real MySQL store aimed at a port nothing listens on.
pub fn unreachable_mysql_store() -> Arc<MySqlStudentStore> {
    let config = DbConfig::from_lookup(|name| match name {
        "DB_HOST" => Ok("127.0.0.1".to_string()),
        "DB_PORT" => Ok("1".to_string()),
        "DB_PASSWORD" => Ok("wrong-password".to_string()),
        _ => Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)),
    })
    .unwrap();

    Arc::new(MySqlStudentStore::new(ConnectionProvider::new(Arc::new(
        config,
    ))))
}
