use crate::domain::{AppealStatus, AppealType, DenialStatus, Priority};
use maud::{html, Markup};

fn badge(tone: &str, label: &str) -> Markup {
    html! { span class={ "badge " (tone) } { (label) } }
}

pub fn denial_status_badge(status: DenialStatus) -> Markup {
    let tone = match status {
        DenialStatus::Pending => "yellow",
        DenialStatus::Appealing => "blue",
        DenialStatus::Resolved => "green",
        DenialStatus::Rejected => "red",
    };
    badge(tone, status.label())
}

pub fn priority_badge(priority: Priority) -> Markup {
    let tone = match priority {
        Priority::Urgent => "red",
        Priority::High => "orange",
        Priority::Medium => "yellow",
        Priority::Low => "green",
    };
    badge(tone, priority.label())
}

pub fn appeal_status_badge(status: AppealStatus) -> Markup {
    let tone = match status {
        AppealStatus::Draft => "gray",
        AppealStatus::Denied => "red",
        AppealStatus::Approved => "green",
        _ => "blue",
    };
    badge(tone, status.label())
}

pub fn appeal_type_badge(kind: AppealType) -> Markup {
    let tone = match kind {
        AppealType::FirstLevel => "blue",
        AppealType::SecondLevel => "orange",
        AppealType::ExternalReview => "purple",
        AppealType::PeerToPeer => "green",
    };
    badge(tone, kind.label())
}
