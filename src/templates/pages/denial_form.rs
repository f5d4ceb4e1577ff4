use crate::domain::Priority;
use crate::templates::components::card;
use crate::templates::{desktop_layout, Chrome};
use maud::{html, Markup};

pub fn denial_form_page(chrome: Chrome<'_>) -> Markup {
    desktop_layout(
        "New Denial",
        chrome,
        html! {
            div class="page-head" {
                h1 { "Create New Denial" }
                a class="btn outline" href="/denials" { "Cancel" }
            }
            (card("Denial details", html! {
                form method="post" action="/denials" enctype="multipart/form-data" class="form-grid" {
                    label { "Claim Number *" input name="claim_number" required placeholder="CLM-2024-001"; }
                    label { "Patient Name *" input name="patient_name" required; }
                    label { "Patient ID" input name="patient_id"; }
                    label { "Insurance Company *" input name="insurance_company" required; }
                    label { "Denial Date" input type="date" name="denial_date"; }
                    label { "Service Date" input type="date" name="service_date"; }
                    label { "Denial Code" input name="denial_code" placeholder="CO-197"; }
                    label { "Claim Amount *" input name="claim_amount" required inputmode="decimal" placeholder="0.00"; }
                    label class="full" { "Denial Reason *" textarea name="denial_reason" required rows="3" {} }
                    label {
                        "Priority"
                        select name="priority" {
                            @for p in Priority::ALL {
                                option value=(p.as_str()) selected[p == Priority::default()] { (p.label()) }
                            }
                        }
                    }
                    label { "Assigned To" input name="assigned_to"; }
                    label class="full" { "Notes" textarea name="notes" rows="3" {} }
                    label class="full" {
                        "Supporting Documents"
                        input type="file" name="documents" multiple accept=".pdf,.doc,.docx,.jpg,.jpeg,.png";
                        small class="muted" { "PDF, DOC, DOCX, JPG, PNG" }
                    }
                    div class="full right" {
                        button type="submit" class="btn" { "Create Denial" }
                    }
                }
            }))
        },
    )
}
