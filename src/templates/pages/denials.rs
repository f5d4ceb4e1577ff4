use crate::domain::dates::days_open;
use crate::domain::filters::DenialFilter;
use crate::domain::format::currency;
use crate::domain::{Cents, Denial, DenialStatus, Priority};
use crate::templates::components::{
    card, denial_status_badge, filter_select, priority_badge, stat_card,
};
use crate::templates::{desktop_layout, Chrome};
use chrono::NaiveDate;
use maud::{html, Markup};

pub struct DenialsVm<'a> {
    pub all: &'a [Denial],
    pub shown: Vec<&'a Denial>,
    pub filter: &'a DenialFilter,
    pub today: NaiveDate,
    /// Row actions only apply to records held by the local store.
    pub editable: bool,
}

fn status_options() -> Vec<(&'static str, &'static str)> {
    DenialStatus::ALL.iter().map(|s| (s.as_str(), s.label())).collect()
}

fn priority_options() -> Vec<(&'static str, &'static str)> {
    Priority::ALL.iter().map(|p| (p.as_str(), p.label())).collect()
}

fn row_actions(d: &Denial) -> Markup {
    html! {
        form method="post" action={ "/denials/" (d.id) "/status" } class="inline" {
            select name="status" {
                @for s in DenialStatus::ALL {
                    option value=(s.as_str()) selected[s == d.status] { (s.label()) }
                }
            }
            button type="submit" class="btn small" { "Set" }
        }
        form method="post" action={ "/denials/" (d.id) "/priority" } class="inline" {
            select name="priority" {
                @for p in Priority::ALL {
                    option value=(p.as_str()) selected[p == d.priority] { (p.label()) }
                }
            }
            button type="submit" class="btn small" { "Set" }
        }
        form method="post" action={ "/denials/" (d.id) "/documents" }
             enctype="multipart/form-data" class="inline" {
            input type="file" name="document" required;
            button type="submit" class="btn small outline" { "Attach" }
        }
        form method="post" action={ "/denials/" (d.id) "/delete" } class="inline" {
            button type="submit" class="btn small danger" { "Delete" }
        }
    }
}

pub fn denials_page(chrome: Chrome<'_>, vm: &DenialsVm<'_>) -> Markup {
    let pending = vm.all.iter().filter(|d| d.status == DenialStatus::Pending).count();
    let resolved = vm.all.iter().filter(|d| d.status == DenialStatus::Resolved).count();
    let shown_total: Cents = vm.shown.iter().map(|d| d.claim_amount).sum();
    let status = vm.filter.status.map(|s| s.as_str()).unwrap_or("all");
    let priority = vm.filter.priority.map(|p| p.as_str()).unwrap_or("all");

    desktop_layout(
        "Denials",
        chrome,
        html! {
            div class="page-head" {
                div {
                    h1 { "Denials Management" }
                    p class="muted" { "Track and manage insurance claim denials" }
                }
                a class="btn" href="/denials/new" { "New Denial" }
            }

            div class="grid four" {
                (stat_card("Total Denials", &vm.all.len().to_string(), "red"))
                (stat_card("Pending", &pending.to_string(), "orange"))
                (stat_card("Resolved", &resolved.to_string(), "green"))
                (stat_card("Total Amount", &currency(shown_total), "blue"))
            }

            (card("Filters", html! {
                form method="get" action="/denials" class="filters" {
                    input type="search" name="q" value=(vm.filter.query)
                          placeholder="Search by patient, claim number, or insurance...";
                    (filter_select("status", "All Status", &status_options(), status))
                    (filter_select("priority", "All Priority", &priority_options(), priority))
                    button type="submit" class="btn" { "Apply" }
                    @if vm.filter.is_active() {
                        a href="/denials" class="btn outline" { "Clear" }
                    }
                }
            }))

            (card(&format!("Denials ({})", vm.shown.len()), html! {
                p class="muted" { "Showing " (vm.shown.len()) " of " (vm.all.len()) " denials" }
                @if vm.shown.is_empty() {
                    div class="empty" {
                        h4 { "No denials found" }
                        p {
                            @if vm.all.is_empty() { "Get started by creating your first denial." }
                            @else { "Try adjusting your search or filter criteria." }
                        }
                    }
                } @else {
                    table {
                        thead {
                            tr {
                                th { "Patient" } th { "Claim #" } th { "Insurance" } th { "Reason" }
                                th { "Amount" } th { "Status" } th { "Priority" } th { "Days Open" }
                                @if vm.editable { th class="right" { "Actions" } }
                            }
                        }
                        tbody {
                            @for d in &vm.shown {
                                tr {
                                    td {
                                        strong { (d.patient_name) }
                                        @if !d.patient_id.is_empty() { div class="muted small" { "ID: " (d.patient_id) } }
                                    }
                                    td { code { (d.claim_number) } }
                                    td { (d.insurance_company) }
                                    td {
                                        (d.denial_reason)
                                        @if !d.denial_code.is_empty() { div class="muted small" { "Code: " (d.denial_code) } }
                                    }
                                    td { (currency(d.claim_amount)) }
                                    td { (denial_status_badge(d.status)) }
                                    td { (priority_badge(d.priority)) }
                                    td { (days_open(d.denial_date, vm.today)) " days" }
                                    @if vm.editable { td class="right actions" { (row_actions(d)) } }
                                }
                            }
                        }
                    }
                }
            }))
        },
    )
}
