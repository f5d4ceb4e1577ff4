use crate::domain::format::currency;
use crate::domain::{AppealType, Denial};
use crate::templates::components::card;
use crate::templates::{desktop_layout, Chrome};
use chrono::NaiveDate;
use maud::{html, Markup};

pub fn appeal_form_page(
    chrome: Chrome<'_>,
    denials: &[Denial],
    preselected: Option<&str>,
    today: NaiveDate,
) -> Markup {
    desktop_layout(
        "New Appeal",
        chrome,
        html! {
            div class="page-head" {
                h1 { "Create New Appeal" }
                a class="btn outline" href="/appeals" { "Cancel" }
            }
            (card("Appeal details", html! {
                @if denials.is_empty() {
                    p class="empty" { "There are no denials to appeal yet. " a href="/denials/new" { "Create one first." } }
                }
                form method="post" action="/appeals" enctype="multipart/form-data" class="form-grid" {
                    label class="full" {
                        "Select Denial *"
                        select name="denial_id" required {
                            option value="" { "Choose a denial to appeal" }
                            @for d in denials {
                                option value=(d.id) selected[preselected == Some(d.id.as_str())] {
                                    (d.claim_number) " - " (d.patient_name) " (" (currency(d.claim_amount)) ")"
                                }
                            }
                        }
                    }
                    label {
                        "Appeal Type *"
                        select name="appeal_type" required {
                            @for t in AppealType::ALL {
                                option value=(t.as_str()) { (t.label()) }
                            }
                        }
                    }
                    label { "Submitted By *" input name="submitted_by" required; }
                    label { "Appeal Date" input type="date" name="appeal_date" value=(today.format("%Y-%m-%d")); }
                    label { "Deadline Date" input type="date" name="deadline_date"; }
                    label class="full" {
                        "Appeal Justification *"
                        textarea name="appeal_reason" required rows="4"
                            placeholder="Explain why the denial should be overturned" {}
                    }
                    label class="full" {
                        "Appeal Letter"
                        textarea name="supporting_documents" rows="10" {}
                        small class="muted" {
                            "Fill in the denial, date, justification and submitter, then "
                            button type="submit" formaction="/appeals/letter" formmethod="get"
                                formtarget="_blank" formnovalidate class="btn small outline" { "Generate Template" }
                            " and paste the draft here."
                        }
                    }
                    label class="full" {
                        "Supporting Documents"
                        input type="file" name="documents" multiple accept=".pdf,.doc,.docx,.jpg,.jpeg,.png";
                    }
                    div class="full right" {
                        button type="submit" class="btn" { "Create Appeal" }
                    }
                }
            }))
        },
    )
}
