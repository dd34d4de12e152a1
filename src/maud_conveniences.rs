use crate::data::student::Course;
use maud::{DOCTYPE, Markup, Render, html};

pub fn render_shell(markup: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="UTF-8" {}
                meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                script src="https://unpkg.com/htmx.org@2.0.4" integrity="sha384-HGfztofotfshcF7+8n44JQL2oJmowVChPTg48S+jvZoztPfvwD79OC/LTtG6dMp+" crossorigin="anonymous" {}
                script src="https://unpkg.com/htmx-ext-sse@2.2.3" integrity="sha384-Y4gc0CK6Kg+hmulDc6rZPJu0tqvk7EWlih0Oh+2OkAi1ZDlCbBDCQEE2uVk472Ky" crossorigin="anonymous" {}
                script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                title { "Student Management System" }
            }
            body hx-ext="sse" class="bg-gray-900 min-h-screen flex flex-col text-white" {
                (markup)
            }
        }
    }
}

pub fn title(s: impl Render) -> Markup {
    html! {
        h1 class="text-2xl font-semibold mb-4" {(s)}
    }
}

/// A modal-ish box for one dialog. `Close` just empties the dialog slot.
pub fn dialog(heading: impl Render, body: Markup) -> Markup {
    html! {
        div class="fixed inset-0 bg-black/50 flex items-center justify-center" {
            div class="bg-gray-800 p-6 rounded shadow-xl w-80" {
                div class="flex flex-row items-center justify-between" {
                    (title(heading))
                    button class="text-gray-400 hover:text-white mb-4" hx-get="/internal/close" hx-target="#dialog" {"✕"}
                }
                (body)
            }
        }
    }
}

pub fn form_element(id: &'static str, label: &'static str, input: Markup) -> Markup {
    html! {
        div class="mb-4" {
            label for=(id) class="block text-sm font-bold mb-2" {(label)}
            (input)
        }
    }
}

pub fn simple_form_element(
    id: &'static str,
    label: &'static str,
    required: bool,
    ty: Option<&'static str>,
    value: Option<&str>,
) -> Markup {
    form_element(
        id,
        label,
        html! {
            input required[required] type=(ty.unwrap_or("text")) id=(id) name=(id) value=[value] placeholder=(label) class="shadow appearance-none border rounded w-full py-2 px-3 leading-tight focus:outline-none focus:shadow-outline bg-gray-700 border-gray-600";
        },
    )
}

pub fn course_select(current: Option<Course>) -> Markup {
    form_element(
        "course",
        "Course",
        html! {
            select id="course" name="course" class="shadow appearance-none border rounded w-full py-2 px-3 leading-tight focus:outline-none focus:shadow-outline bg-gray-700 border-gray-600" {
                @for course in Course::ALL {
                    option value=(course) selected[current == Some(course)] {(course)}
                }
            }
        },
    )
}

pub fn form_submit_button(text: Option<&str>) -> Markup {
    html! {
        div class="flex items-center justify-between" {
            button type="submit" class="bg-blue-500 hover:bg-blue-700 font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline" {
                (text.unwrap_or("Submit"))
            }
        }
    }
}
