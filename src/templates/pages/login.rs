use crate::templates::layouts::desktop::bare_layout;
use maud::{html, Markup};

pub fn login_page(error: Option<&str>) -> Markup {
    bare_layout(
        "Sign in",
        html! {
            div class="card narrow" {
                h1 { "Healthcare Denial Management" }
                p class="muted" { "Please sign in to access your denial management dashboard" }
                @if let Some(msg) = error {
                    p class="error" { (msg) }
                }
                form method="post" action="/login" class="stack" {
                    label class="sr-only" for="email" { "Email address" }
                    input type="email" id="email" name="email" placeholder="you@clinic.org"
                          autocomplete="email" required;
                    button type="submit" class="btn wide" { "Sign In" }
                }
                p class="muted small" { "Use demo@denialdesk.local to explore the sample caseload." }
            }
        },
    )
}
