use crate::error::{CorduroyError, CorduroyResult};
use serde::Deserialize;
use sqlx::{FromRow, Row, mysql::MySqlRow};
use std::{fmt, str::FromStr};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize)]
pub enum Course {
    Biology,
    Math,
    Astronomy,
    Physics,
}

impl Course {
    /// In the order the course picker shows them.
    pub const ALL: [Self; 4] = [Self::Biology, Self::Math, Self::Astronomy, Self::Physics];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Biology => "Biology",
            Self::Math => "Math",
            Self::Astronomy => "Astronomy",
            Self::Physics => "Physics",
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Course {
    type Err = CorduroyError;

    fn from_str(s: &str) -> CorduroyResult<Self> {
        Self::ALL
            .into_iter()
            .find(|course| course.as_str() == s)
            .ok_or_else(|| CorduroyError::UnknownCourse {
                original: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub course: Course,
    pub mobile: String,
}

impl Student {
    pub const COLUMNS: [&'static str; 4] = ["Id", "Name", "Course", "Mobile"];

    /// The text each column shows, in [`Self::COLUMNS`] order.
    pub fn cells(&self) -> [String; 4] {
        [
            self.id.to_string(),
            self.name.clone(),
            self.course.to_string(),
            self.mobile.clone(),
        ]
    }
}

impl<'r> FromRow<'r, MySqlRow> for Student {
    fn from_row(row: &'r MySqlRow) -> Result<Self, sqlx::Error> {
        let course: String = row.try_get("course")?;
        let course = course
            .parse()
            .map_err(|e: CorduroyError| sqlx::Error::ColumnDecode {
                index: "course".into(),
                source: Box::new(e),
            })?;

        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get::<Option<String>, _>("name")?.unwrap_or_default(),
            course,
            mobile: row
                .try_get::<Option<String>, _>("mobile")?
                .unwrap_or_default(),
        })
    }
}

/// What the insert and edit dialogs submit. Taken exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StudentForm {
    pub name: String,
    pub course: Course,
    pub mobile: String,
}
