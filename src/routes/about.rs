use crate::maud_conveniences::dialog;
use maud::{Markup, html};

pub async fn internal_get_about() -> Markup {
    dialog(
        "About",
        html! {
            p class="text-gray-200" {
                "Keeps track of students and the courses they're on. Feel free to modify and reuse it."
            }
        },
    )
}
