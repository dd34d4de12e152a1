//! The four things a user can do to the `students` table.
//!
//! Each one runs exactly one statement through the store. Insert, edit and delete then trigger a
//! background reload. Search leaves the snapshot alone and only changes what's highlighted.

use crate::{
    data::student::{Student, StudentForm},
    error::{CorduroyResult, NoRowSelectedSnafu},
    state::CorduroyState,
    table::CellRef,
};
use serde::Deserialize;
use snafu::OptionExt;
use tokio::task::JoinHandle;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confirmation {
    Yes,
    No,
}

/// A statement that went through, plus the table reload it started.
#[derive(Debug)]
pub struct Refreshing<T> {
    pub value: T,
    pub reload: JoinHandle<bool>,
}

#[derive(Debug)]
pub enum DeleteOutcome {
    Cancelled,
    Deleted(Refreshing<i32>),
}

pub async fn insert_student(
    state: &CorduroyState,
    form: StudentForm,
) -> CorduroyResult<Refreshing<i32>> {
    let id = state.store().insert(form).await?;
    info!(id, "Inserted student");
    Ok(Refreshing {
        value: id,
        reload: state.reload(),
    })
}

/// The row the edit dialog starts from.
pub async fn edit_prefill(state: &CorduroyState) -> CorduroyResult<Student> {
    state
        .table()
        .read()
        .await
        .selected()
        .cloned()
        .context(NoRowSelectedSnafu)
}

pub async fn edit_student(
    state: &CorduroyState,
    id: i32,
    form: StudentForm,
) -> CorduroyResult<Refreshing<i32>> {
    state.store().update(id, form).await?;
    info!(id, "Updated student");
    Ok(Refreshing {
        value: id,
        reload: state.reload(),
    })
}

pub async fn delete_student(
    state: &CorduroyState,
    confirmation: Confirmation,
) -> CorduroyResult<DeleteOutcome> {
    if confirmation == Confirmation::No {
        return Ok(DeleteOutcome::Cancelled);
    }

    let id = state
        .table()
        .read()
        .await
        .selected()
        .map(|student| student.id)
        .context(NoRowSelectedSnafu)?;

    state.store().delete(id).await?;
    info!(id, "Deleted student");
    Ok(DeleteOutcome::Deleted(Refreshing {
        value: id,
        reload: state.reload(),
    }))
}

/// Runs the name lookup, then highlights matching cells in the snapshot already on screen.
///
/// The rows the lookup returns are not what drives the highlight: a cell is marked because its
/// text equals `name`, whether or not the database agrees.
pub async fn search_students(state: &CorduroyState, name: &str) -> CorduroyResult<Vec<CellRef>> {
    let matching_rows = state.store().find_by_name(name).await?;
    debug!(count = matching_rows.len(), name, "Search query returned");

    Ok(state.table().write().await.highlight_exact(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        data::{StudentStore, student::Course},
        test_support::{MemoryStore, unreachable_mysql_store},
    };
    use std::sync::{Arc, atomic::Ordering};

    fn form(name: &str, course: Course, mobile: &str) -> StudentForm {
        StudentForm {
            name: name.into(),
            course,
            mobile: mobile.into(),
        }
    }

    async fn seeded() -> (Arc<MemoryStore>, CorduroyState) {
        let store = Arc::new(MemoryStore::default());
        for (name, course, mobile) in [
            ("Ben", Course::Math, "555-2000"),
            ("Cleo", Course::Astronomy, "555-3000"),
        ] {
            store.insert(form(name, course, mobile)).await.unwrap();
        }
        let state = CorduroyState::new(store.clone());
        assert!(state.reload().await.unwrap());
        (store, state)
    }

    async fn select(state: &CorduroyState, id: i32) {
        state.table().write().await.select(id).unwrap();
    }

    async fn settle<T>(done: Refreshing<T>) -> T {
        assert!(done.reload.await.unwrap());
        done.value
    }

    #[tokio::test]
    async fn insert_adds_exactly_one_row_with_a_fresh_id() {
        let (_store, state) = seeded().await;
        let before: Vec<i32> = state.table().read().await.rows().iter().map(|s| s.id).collect();

        let id = settle(
            insert_student(&state, form("Ana", Course::Biology, "555-1000"))
                .await
                .unwrap(),
        )
        .await;

        let table = state.table().read().await;
        assert_eq!(table.len(), before.len() + 1);
        assert!(!before.contains(&id));
        let added = table.get(id).unwrap();
        assert_eq!(added.name, "Ana");
        assert_eq!(added.course, Course::Biology);
        assert_eq!(added.mobile, "555-1000");
    }

    #[tokio::test]
    async fn insert_keeps_input_untrimmed() {
        let (_store, state) = seeded().await;

        let id = settle(
            insert_student(&state, form("  ", Course::Physics, "not a number"))
                .await
                .unwrap(),
        )
        .await;

        let table = state.table().read().await;
        let added = table.get(id).unwrap();
        assert_eq!(added.name, "  ");
        assert_eq!(added.mobile, "not a number");
    }

    #[tokio::test]
    async fn edit_rewrites_only_the_target_row() {
        let (store, state) = seeded().await;
        let before = store.snapshot();
        let target = before[0].id;

        settle(
            edit_student(&state, target, form("Benjamin", Course::Physics, "555-2001"))
                .await
                .unwrap(),
        )
        .await;

        let table = state.table().read().await;
        let edited = table.get(target).unwrap();
        assert_eq!(edited.name, "Benjamin");
        assert_eq!(edited.course, Course::Physics);
        assert_eq!(edited.mobile, "555-2001");
        for other in before.iter().filter(|s| s.id != target) {
            assert_eq!(table.get(other.id), Some(other));
        }
    }

    #[tokio::test]
    async fn edit_prefill_needs_a_selection() {
        let (_store, state) = seeded().await;

        assert!(edit_prefill(&state).await.is_err());

        let id = state.table().read().await.rows()[1].id;
        select(&state, id).await;
        let prefill = edit_prefill(&state).await.unwrap();
        assert_eq!(prefill.name, "Cleo");
    }

    #[tokio::test]
    async fn delete_removes_selected_row() {
        let (_store, state) = seeded().await;
        let count = state.table().read().await.len();
        let id = state.table().read().await.rows()[0].id;
        select(&state, id).await;

        let DeleteOutcome::Deleted(done) = delete_student(&state, Confirmation::Yes).await.unwrap()
        else {
            panic!("expected the row to be deleted");
        };
        assert_eq!(settle(done).await, id);

        let table = state.table().read().await;
        assert_eq!(table.len(), count - 1);
        assert!(table.get(id).is_none());
    }

    #[tokio::test]
    async fn declining_delete_changes_nothing() {
        let (store, state) = seeded().await;
        let id = state.table().read().await.rows()[0].id;
        select(&state, id).await;

        let outcome = delete_student(&state, Confirmation::No).await.unwrap();

        assert!(matches!(outcome, DeleteOutcome::Cancelled));
        assert_eq!(store.snapshot().len(), 2);
        assert_eq!(state.table().read().await.selected().map(|s| s.id), Some(id));
    }

    #[tokio::test]
    async fn delete_without_selection_is_refused() {
        let (store, state) = seeded().await;

        assert!(delete_student(&state, Confirmation::Yes).await.is_err());
        assert_eq!(store.snapshot().len(), 2);
    }

    #[tokio::test]
    async fn search_highlights_exact_matches_and_still_queries() {
        let (store, state) = seeded().await;

        let hits = search_students(&state, "Cleo").await.unwrap();

        assert_eq!(hits, vec![CellRef { row: 1, column: 1 }]);
        assert_eq!(store.find_by_name_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn search_without_matches_highlights_nothing() {
        let (_store, state) = seeded().await;

        let hits = search_students(&state, "Nobody").await.unwrap();

        assert!(hits.is_empty());
        assert_eq!(state.table().read().await.highlighted().count(), 0);
    }

    #[tokio::test]
    async fn search_uses_the_snapshot_not_the_query_result() {
        let (store, state) = seeded().await;
        store.insert(form("Dana", Course::Math, "555-4000")).await.unwrap();

        // in the database, not on screen yet
        let hits = search_students(&state, "Dana").await.unwrap();

        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn end_to_end_insert_edit_delete() {
        let (_store, state) = seeded().await;

        let id = settle(
            insert_student(&state, form("Ana", Course::Biology, "555-1000"))
                .await
                .unwrap(),
        )
        .await;
        {
            let table = state.table().read().await;
            let row = table.get(id).unwrap();
            assert_eq!(
                (row.name.as_str(), row.course, row.mobile.as_str()),
                ("Ana", Course::Biology, "555-1000")
            );
        }

        select(&state, id).await;
        let prefill = edit_prefill(&state).await.unwrap();
        settle(
            edit_student(
                &state,
                prefill.id,
                form(&prefill.name, Course::Physics, &prefill.mobile),
            )
            .await
            .unwrap(),
        )
        .await;
        {
            let table = state.table().read().await;
            let row = table.get(id).unwrap();
            assert_eq!(
                (row.name.as_str(), row.course, row.mobile.as_str()),
                ("Ana", Course::Physics, "555-1000")
            );
        }

        select(&state, id).await;
        let DeleteOutcome::Deleted(done) = delete_student(&state, Confirmation::Yes).await.unwrap()
        else {
            panic!("expected the row to be deleted");
        };
        settle(done).await;
        assert!(state.table().read().await.get(id).is_none());
    }

    #[tokio::test]
    async fn every_operation_fails_cleanly_when_the_database_is_unreachable() {
        let (store, state) = seeded().await;
        let before = state.table().read().await.rows().to_vec();
        let id = before[0].id;
        select(&state, id).await;
        store.set_failing(true);

        assert!(insert_student(&state, form("Ana", Course::Biology, "1")).await.is_err());
        assert!(edit_student(&state, id, form("X", Course::Math, "2")).await.is_err());
        assert!(delete_student(&state, Confirmation::Yes).await.is_err());
        assert!(search_students(&state, "Ben").await.is_err());
        assert!(!state.reload().await.unwrap());

        let table = state.table().read().await;
        assert_eq!(table.rows(), before.as_slice());
        assert_eq!(table.highlighted().count(), 0);
    }

    #[tokio::test]
    async fn real_mysql_store_reports_connection_failure() {
        let state = CorduroyState::new(unreachable_mysql_store());

        assert!(insert_student(&state, form("Ana", Course::Biology, "1")).await.is_err());
        assert!(edit_student(&state, 1, form("X", Course::Math, "2")).await.is_err());
        assert!(search_students(&state, "Ana").await.is_err());
        assert!(!state.reload().await.unwrap());
        assert!(state.table().read().await.is_empty());
    }
}
