use crate::{
    data::student::Student,
    error::{CorduroyResult, MissingStudentSnafu},
};
use std::collections::BTreeSet;

/// A single cell, addressed by row index into the current snapshot and column index into
/// [`Student::COLUMNS`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellRef {
    pub row: usize,
    pub column: usize,
}

/// The last full snapshot of the `students` table, plus what the user has selected in it.
///
/// Never written to incrementally: every load replaces the lot.
#[derive(Debug, Default)]
pub struct StudentTable {
    rows: Vec<Student>,
    selected: Option<i32>,
    highlighted: BTreeSet<CellRef>,
}

impl StudentTable {
    pub fn populate(&mut self, rows: Vec<Student>) {
        self.rows = rows;
        self.selected = None;
        self.highlighted.clear();
    }

    pub fn rows(&self) -> &[Student] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, id: i32) -> Option<&Student> {
        self.rows.iter().find(|student| student.id == id)
    }

    pub fn select(&mut self, id: i32) -> CorduroyResult<&Student> {
        self.selected = None;
        let student = self
            .rows
            .iter()
            .find(|student| student.id == id)
            .ok_or_else(|| MissingStudentSnafu { id }.build())?;
        self.selected = Some(id);
        Ok(student)
    }

    pub fn selected(&self) -> Option<&Student> {
        self.selected.and_then(|id| self.get(id))
    }

    pub fn is_highlighted(&self, cell: CellRef) -> bool {
        self.highlighted.contains(&cell)
    }

    #[cfg(test)]
    pub fn highlighted(&self) -> impl Iterator<Item = CellRef> + '_ {
        self.highlighted.iter().copied()
    }

    /// Replaces the highlight set with every cell whose text is exactly `text`.
    pub fn highlight_exact(&mut self, text: &str) -> Vec<CellRef> {
        self.highlighted = self
            .rows
            .iter()
            .enumerate()
            .flat_map(|(row, student)| {
                student
                    .cells()
                    .into_iter()
                    .enumerate()
                    .filter(|(_, cell)| cell == text)
                    .map(move |(column, _)| CellRef { row, column })
            })
            .collect();

        self.highlighted.iter().copied().collect()
    }
}
