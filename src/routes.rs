use crate::state::CorduroyState;
use axum::{
    Router,
    routing::{get, post},
};

pub mod about;
pub mod index;
pub mod sse;
pub mod students;

pub fn router(state: CorduroyState) -> Router {
    Router::new()
        .route("/", get(index::get_index_route))
        .route("/internal/students", get(students::internal_get_students))
        .route(
            "/internal/students/select",
            post(students::internal_post_select),
        )
        .route(
            "/internal/students/insert",
            get(students::internal_get_insert_form).put(students::internal_put_insert),
        )
        .route(
            "/internal/students/edit",
            get(students::internal_get_edit_form).post(students::internal_post_edit),
        )
        .route(
            "/internal/students/delete",
            get(students::internal_get_delete_confirmation).delete(students::internal_delete),
        )
        .route(
            "/internal/students/search",
            get(students::internal_get_search_form).post(students::internal_post_search),
        )
        .route("/internal/about", get(about::internal_get_about))
        .route("/internal/close", get(index::internal_close_dialog))
        .route("/sse_feed", get(sse::sse_feed))
        .with_state(state)
}
