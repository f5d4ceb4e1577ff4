use crate::templates::{desktop_layout, Chrome, NavItem};
use maud::{html, Markup};

/// Card for sections that are not built yet.
pub fn coming_soon_page(chrome: Chrome<'_>) -> Markup {
    let (title, blurb) = match chrome.active {
        NavItem::Calendar => ("Calendar View", "Calendar view for tracking deadlines and appointments."),
        NavItem::Team => ("Team Management", "Manage team members and assignments."),
        NavItem::Search => ("Advanced Search", "Advanced search and filtering capabilities."),
        NavItem::Settings => ("Settings", "Application settings and preferences."),
        other => (other.title(), ""),
    };

    desktop_layout(
        title,
        chrome,
        html! {
            div class="card narrow coming-soon" {
                h3 { (title) }
                p class="muted" { "Coming soon..." }
                p { (blurb) }
            }
        },
    )
}
