use crate::domain::dates::{days_open, short_date};
use crate::domain::format::{compact_amount, currency};
use crate::domain::{Denial, DenialStats};
use crate::templates::components::{bar, card, denial_status_badge, priority_badge, stat_card};
use crate::templates::{desktop_layout, Chrome};
use chrono::NaiveDate;
use maud::{html, Markup};

pub struct DashboardVm<'a> {
    pub stats: DenialStats,
    /// Already cut to the five most recent.
    pub recent: &'a [Denial],
    pub today: NaiveDate,
}

fn excerpt(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

pub fn dashboard_page(chrome: Chrome<'_>, vm: &DashboardVm<'_>) -> Markup {
    let stats = &vm.stats;
    desktop_layout(
        "Dashboard",
        chrome,
        html! {
            div class="page-head" {
                div {
                    h1 { "Dashboard" }
                    p class="muted" { "Overview of your denial management activities" }
                }
                a class="btn" href="/denials/new" { "New Denial" }
            }

            div class="grid four" {
                (stat_card("Total Denials", &stats.total_denials.to_string(), "red"))
                (stat_card("Active Appeals", &stats.total_appeals.to_string(), "blue"))
                (stat_card("Pending Denials", &stats.pending_denials.to_string(), "orange"))
                (stat_card("Recovery Amount", &compact_amount(stats.total_amount), "green"))
            }

            div class="grid two-one" {
                (card("Recent Denials", html! {
                    @if vm.recent.is_empty() {
                        p class="empty" { "No recent denials found" }
                    }
                    ul class="recent" {
                        @for d in vm.recent {
                            li {
                                div {
                                    strong { (d.patient_name) }
                                    " " span class="badge outline" { (d.claim_number) }
                                    " " (priority_badge(d.priority))
                                    p class="muted" {
                                        (d.insurance_company) " • " (excerpt(&d.denial_reason, 50))
                                    }
                                    p class="muted small" {
                                        (short_date(d.denial_date)) " · "
                                        (days_open(d.denial_date, vm.today)) " days open"
                                    }
                                }
                                div class="right" {
                                    div class="amount" { (currency(d.claim_amount)) }
                                    (denial_status_badge(d.status))
                                }
                            }
                        }
                    }
                    a class="btn outline wide" href="/denials" { "View All Denials" }
                }))

                div class="stack" {
                    (card("Quick Actions", html! {
                        a class="btn outline wide" href="/denials/new" { "Add New Denial" }
                        a class="btn outline wide" href="/appeals/new" { "Create Appeal" }
                        a class="btn outline wide" href="/appeals" { "Review Deadlines" }
                    }))
                    (card("Resolution Progress", html! {
                        p class="split" {
                            span { (stats.resolved_denials) " of " (stats.total_denials) " resolved" }
                            strong { (stats.resolution_percent()) "%" }
                        }
                        (bar(stats.resolution_percent(), "#10B981"))
                        p class="split" {
                            span { "Appealing" }
                            strong { (stats.appealing_denials) }
                        }
                    }))
                }
            }
        },
    )
}
