use crate::templates::layouts::desktop::bare_layout;
use maud::{html, Markup};

pub fn error_page(status: u16, message: &str) -> Markup {
    bare_layout(
        &format!("Error {status}"),
        html! {
            div class="card narrow" {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to dashboard" } }
            }
        },
    )
}
