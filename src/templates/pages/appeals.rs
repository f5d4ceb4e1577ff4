use crate::data::AppealBoard;
use crate::domain::dates::{is_overdue, short_date};
use crate::domain::filters::AppealFilter;
use crate::domain::{Appeal, AppealStatus, AppealType};
use crate::templates::components::{
    appeal_status_badge, appeal_type_badge, card, filter_select, stat_card,
};
use crate::templates::{desktop_layout, Chrome};
use chrono::{DateTime, Utc};
use maud::{html, Markup};

pub struct AppealsVm<'a> {
    pub board: &'a AppealBoard,
    pub shown: Vec<&'a Appeal>,
    pub filter: &'a AppealFilter,
    pub now: DateTime<Utc>,
    pub editable: bool,
}

fn row_actions(a: &Appeal) -> Markup {
    html! {
        form method="post" action={ "/appeals/" (a.id) "/status" } class="inline" {
            select name="status" {
                @for s in AppealStatus::ALL {
                    option value=(s.as_str()) selected[s == a.status] { (s.label()) }
                }
            }
            button type="submit" class="btn small" { "Set" }
        }
        form method="post" action={ "/appeals/" (a.id) "/delete" } class="inline" {
            button type="submit" class="btn small danger" { "Delete" }
        }
    }
}

pub fn appeals_page(chrome: Chrome<'_>, vm: &AppealsVm<'_>) -> Markup {
    let appeals = &vm.board.appeals;
    let awaiting = appeals.iter().filter(|a| a.status.is_awaiting_decision()).count();
    let approved = appeals.iter().filter(|a| a.status == AppealStatus::Approved).count();
    let overdue = appeals
        .iter()
        .filter(|a| is_overdue(a.deadline_date, vm.now))
        .count();

    let status_opts: Vec<_> = AppealStatus::ALL.iter().map(|s| (s.as_str(), s.label())).collect();
    let type_opts: Vec<_> = AppealType::ALL.iter().map(|t| (t.as_str(), t.label())).collect();

    desktop_layout(
        "Appeals",
        chrome,
        html! {
            div class="page-head" {
                div {
                    h1 { "Appeals Management" }
                    p class="muted" { "Track and manage insurance claim appeals" }
                }
                a class="btn" href="/appeals/new" { "New Appeal" }
            }

            div class="grid four" {
                (stat_card("Total Appeals", &appeals.len().to_string(), "blue"))
                (stat_card("Pending", &awaiting.to_string(), "orange"))
                (stat_card("Approved", &approved.to_string(), "green"))
                (stat_card("Overdue", &overdue.to_string(), "red"))
            }

            (card("Filters", html! {
                form method="get" action="/appeals" class="filters" {
                    input type="search" name="q" value=(vm.filter.query) placeholder="Search appeals...";
                    (filter_select("status", "All Status", &status_opts,
                        vm.filter.status.map(|s| s.as_str()).unwrap_or("all")))
                    (filter_select("type", "All Types", &type_opts,
                        vm.filter.appeal_type.map(|t| t.as_str()).unwrap_or("all")))
                    button type="submit" class="btn" { "Apply" }
                    @if vm.filter.is_active() {
                        a href="/appeals" class="btn outline" { "Clear" }
                    }
                }
            }))

            (card(&format!("Appeals ({})", vm.shown.len()), html! {
                @if vm.shown.is_empty() {
                    div class="empty" {
                        h4 { "No appeals found" }
                        p {
                            @if appeals.is_empty() { "Get started by creating your first appeal." }
                            @else { "Try adjusting your search or filter criteria." }
                        }
                        @if appeals.is_empty() {
                            a class="btn" href="/appeals/new" { "Create Appeal" }
                        }
                    }
                } @else {
                    table {
                        thead {
                            tr {
                                th { "Claim Info" } th { "Appeal Type" } th { "Status" }
                                th { "Appeal Date" } th { "Deadline" } th { "Submitted By" }
                                @if vm.editable { th class="right" { "Actions" } }
                            }
                        }
                        tbody {
                            @for a in &vm.shown {
                                @let denial = vm.board.denials.get(&a.denial_id);
                                @let late = is_overdue(a.deadline_date, vm.now);
                                tr {
                                    td {
                                        @match denial {
                                            Some(d) => {
                                                strong { (d.claim_number) }
                                                div class="muted small" { (d.patient_name) }
                                                div class="muted small" { (d.insurance_company) }
                                            }
                                            None => {
                                                strong { "N/A" }
                                                div class="muted small" { "Denial not found" }
                                            }
                                        }
                                    }
                                    td { (appeal_type_badge(a.appeal_type)) }
                                    td { (appeal_status_badge(a.status)) }
                                    td { (short_date(a.appeal_date)) }
                                    td class=[late.then_some("overdue")] {
                                        @match a.deadline_date {
                                            Some(date) => (short_date(date)),
                                            None => "N/A",
                                        }
                                        @if late { div class="small" { "OVERDUE" } }
                                    }
                                    td { (a.submitted_by) }
                                    @if vm.editable { td class="right actions" { (row_actions(a)) } }
                                }
                            }
                        }
                    }
                }
            }))
        },
    )
}
