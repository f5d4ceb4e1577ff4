use maud::{html, Markup};

pub mod badges;
pub mod error;

pub use badges::{appeal_status_badge, appeal_type_badge, denial_status_badge, priority_badge};
pub use error::error_page;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h3 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

pub fn stat_card(label: &str, value: &str, tone: &str) -> Markup {
    html! {
        div class={ "card stat " (tone) } {
            p class="stat-label" { (label) }
            p class="stat-value" { (value) }
        }
    }
}

/// Horizontal bar; `percent` is clamped to 0..=100.
pub fn bar(percent: u32, color: &str) -> Markup {
    let width = percent.min(100);
    html! {
        div class="bar-track" {
            div class="bar-fill" style={ "width:" (width) "%;background:" (color) } {}
        }
    }
}

/// `<select>` whose first option is "all".
pub fn filter_select(name: &str, all_label: &str, options: &[(&str, &str)], current: &str) -> Markup {
    html! {
        select name=(name) {
            option value="all" selected[current.is_empty() || current == "all"] { (all_label) }
            @for (value, label) in options {
                option value=(value) selected[current == *value] { (label) }
            }
        }
    }
}
