use crate::{
    data::{
        IdForm,
        student::{Course, Student, StudentForm},
    },
    error::CorduroyResult,
    maud_conveniences::{course_select, dialog, form_submit_button, simple_form_element},
    operations::{
        Confirmation, DeleteOutcome, delete_student, edit_prefill, edit_student, insert_student,
        search_students,
    },
    state::CorduroyState,
    table::{CellRef, StudentTable},
};
use axum::{
    Form,
    extract::{Query, State},
};
use maud::{Markup, html};
use serde::Deserialize;

fn render_student_table(table: &StudentTable) -> Markup {
    html! {
        p class="text-sm text-gray-400 mb-2" {(table.len()) " records"}
        table class="min-w-full bg-gray-800 rounded shadow-md" {
            thead class="bg-gray-700" {
                tr {
                    @for column in Student::COLUMNS {
                        th class="py-2 px-4 text-left font-semibold text-gray-300" {(column)}
                    }
                }
            }
            tbody {
                @if table.is_empty() {
                    tr {
                        td colspan=(Student::COLUMNS.len()) class="py-2 px-4 italic text-gray-400" {"No students yet"}
                    }
                }
                @for (row, student) in table.rows().iter().enumerate() {
                    tr class="hover:bg-gray-700 cursor-pointer" hx-post="/internal/students/select" hx-vals={"{\"id\": " (student.id) "}"} hx-target="#status_bar" {
                        @for (column, cell) in student.cells().into_iter().enumerate() {
                            @if table.is_highlighted(CellRef { row, column }) {
                                td class="py-2 px-4 border-b border-gray-600 bg-blue-700 text-white" data-highlighted="true" {(cell)}
                            } @else {
                                td class="py-2 px-4 border-b border-gray-600 text-gray-200" {(cell)}
                            }
                        }
                    }
                }
            }
        }
    }
}

fn notice(text: &str) -> Markup {
    html! {
        div class="bg-yellow-100 border border-yellow-400 text-yellow-800 px-4 py-3 rounded" role="alert" {
            (text)
        }
    }
}

pub async fn internal_get_students(State(state): State<CorduroyState>) -> Markup {
    render_student_table(&*state.table().read().await)
}

pub async fn internal_post_select(
    State(state): State<CorduroyState>,
    Form(IdForm { id }): Form<IdForm>,
) -> CorduroyResult<Markup> {
    let mut table = state.table().write().await;
    let student = table.select(id)?;

    Ok(html! {
        span class="text-gray-300 self-center" {"Selected: " (student.name)}
        button class="bg-blue-600 hover:bg-blue-800 font-bold py-2 px-4 rounded" hx-get="/internal/students/edit" hx-target="#dialog" {
            "Edit Record"
        }
        button class="bg-red-600 hover:bg-red-800 font-bold py-2 px-4 rounded" hx-get="/internal/students/delete" hx-target="#dialog" {
            "Delete Record"
        }
    })
}

pub async fn internal_get_insert_form() -> Markup {
    dialog(
        "Insert Student Data",
        html! {
            form hx-put="/internal/students/insert" hx-trigger="submit" hx-target="#dialog" {
                (simple_form_element("name", "Name", false, None, None))
                (course_select(None))
                (simple_form_element("mobile", "Mobile", false, None, None))
                (form_submit_button(Some("Register")))
            }
        },
    )
}

pub async fn internal_put_insert(
    State(state): State<CorduroyState>,
    Form(form): Form<StudentForm>,
) -> Markup {
    if let Err(e) = insert_student(&state, form).await {
        error!(?e, "Error inserting student");
    }
    html! {}
}

pub async fn internal_get_edit_form(State(state): State<CorduroyState>) -> Markup {
    let student = match edit_prefill(&state).await {
        Ok(student) => student,
        Err(e) => {
            warn!(?e, "Edit dialog opened without a selection");
            return dialog("Update Student Data", notice("Select a row first."));
        }
    };

    dialog(
        "Update Student Data",
        html! {
            form hx-post="/internal/students/edit" hx-trigger="submit" hx-target="#dialog" {
                input type="hidden" name="id" value=(student.id);
                (simple_form_element("name", "Name", false, None, Some(student.name.as_str())))
                (course_select(Some(student.course)))
                (simple_form_element("mobile", "Mobile", false, None, Some(student.mobile.as_str())))
                (form_submit_button(Some("Update")))
            }
        },
    )
}

#[derive(Deserialize)]
pub struct EditForm {
    id: i32,
    name: String,
    course: Course,
    mobile: String,
}

pub async fn internal_post_edit(
    State(state): State<CorduroyState>,
    Form(EditForm {
        id,
        name,
        course,
        mobile,
    }): Form<EditForm>,
) -> Markup {
    let student = StudentForm {
        name,
        course,
        mobile,
    };
    if let Err(e) = edit_student(&state, id, student).await {
        error!(?e, id, "Error updating student");
    }
    html! {}
}

pub async fn internal_get_delete_confirmation(State(state): State<CorduroyState>) -> Markup {
    if state.table().read().await.selected().is_none() {
        return dialog("Delete Student Data", notice("Select a row first."));
    }

    dialog(
        "Delete Student Data",
        html! {
            p class="mb-4" {"Are you sure you want to delete?"}
            div class="grid grid-cols-2 gap-4" {
                button class="bg-red-600 hover:bg-red-800 font-bold py-2 px-4 rounded" hx-delete="/internal/students/delete" hx-vals="{\"confirm\": \"yes\"}" hx-target="#dialog" {"Yes"}
                button class="bg-slate-600 hover:bg-slate-800 font-bold py-2 px-4 rounded" hx-delete="/internal/students/delete" hx-vals="{\"confirm\": \"no\"}" hx-target="#dialog" {"No"}
            }
        },
    )
}

#[derive(Deserialize)]
pub struct ConfirmQuery {
    confirm: Confirmation,
}

pub async fn internal_delete(
    State(state): State<CorduroyState>,
    Query(ConfirmQuery { confirm }): Query<ConfirmQuery>,
) -> Markup {
    match delete_student(&state, confirm).await {
        Ok(DeleteOutcome::Deleted(_)) => dialog(
            "Success",
            html! { p {"The record was deleted successfully!"} },
        ),
        Ok(DeleteOutcome::Cancelled) => html! {},
        Err(e) => {
            error!(?e, "Error deleting student");
            html! {}
        }
    }
}

pub async fn internal_get_search_form() -> Markup {
    dialog(
        "Search Student",
        html! {
            form hx-post="/internal/students/search" hx-trigger="submit" hx-target="#students_table" {
                (simple_form_element("name", "Name", false, None, None))
                (form_submit_button(Some("Search")))
            }
        },
    )
}

#[derive(Deserialize)]
pub struct SearchForm {
    name: String,
}

pub async fn internal_post_search(
    State(state): State<CorduroyState>,
    Form(SearchForm { name }): Form<SearchForm>,
) -> Markup {
    if let Err(e) = search_students(&state, &name).await {
        error!(?e, %name, "Error searching students");
    }
    render_student_table(&*state.table().read().await)
}
