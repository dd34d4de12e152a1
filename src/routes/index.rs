use crate::state::CorduroyState;
use axum::extract::State;
use maud::{Markup, html};

pub async fn get_index_route(State(state): State<CorduroyState>) -> Markup {
    let menu_button = "px-3 py-1 hover:bg-gray-700 rounded cursor-pointer";
    let toolbar_button = "bg-slate-600 hover:bg-slate-800 font-bold py-2 px-4 rounded";

    state.render(html! {
        nav class="bg-gray-800 flex flex-row space-x-2 px-4 py-2 text-sm" {
            details class="relative" {
                summary class=(menu_button) {"File"}
                div class="absolute bg-gray-700 rounded shadow-md mt-1 p-1" {
                    a class=(menu_button) hx-get="/internal/students/insert" hx-target="#dialog" {"Add Student"}
                }
            }
            details class="relative" {
                summary class=(menu_button) {"Edit"}
                div class="absolute bg-gray-700 rounded shadow-md mt-1 p-1" {
                    a class=(menu_button) hx-get="/internal/students/search" hx-target="#dialog" {"Search"}
                }
            }
            details class="relative" {
                summary class=(menu_button) {"Help"}
                div class="absolute bg-gray-700 rounded shadow-md mt-1 p-1" {
                    a class=(menu_button) hx-get="/internal/about" hx-target="#dialog" {"About"}
                }
            }
        }
        div id="toolbar" class="flex flex-row space-x-4 px-4 py-2 bg-gray-800 border-t border-gray-700" {
            button class=(toolbar_button) hx-get="/internal/students/insert" hx-target="#dialog" {"Add Student"}
            button class=(toolbar_button) hx-get="/internal/students/search" hx-target="#dialog" {"Search"}
        }
        main hx-ext="sse" sse-connect="/sse_feed" class="flex-1 p-4 overflow-auto" {
            div id="students_table" hx-get="/internal/students" hx-trigger="load, sse:students_loaded" {}
        }
        footer id="status_bar" class="bg-gray-800 px-4 py-2 flex flex-row space-x-4 min-h-12" {}
        div id="dialog" {}
    })
}

pub async fn internal_close_dialog() -> Markup {
    html! {}
}
