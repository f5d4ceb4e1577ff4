// src/domain/letter.rs

use crate::domain::dates::long_date;
use crate::domain::format::currency_cents;
use crate::domain::Denial;
use chrono::NaiveDate;

/// Draft appeal letter addressed to the denying payer. Staff edit it before
/// sending, so it is plain text.
pub fn appeal_letter(
    denial: &Denial,
    appeal_date: NaiveDate,
    justification: &str,
    submitted_by: &str,
) -> String {
    format!(
        "APPEAL LETTER TEMPLATE

Date: {date}

To: {payer}
Re: Appeal for Claim #{claim}
Patient: {patient}

Dear Claims Review Team,

I am writing to formally appeal the denial of claim #{claim} for patient {patient}.

Original Denial Reason: {reason}
Claim Amount: {amount}

APPEAL JUSTIFICATION:
{justification}

We respectfully request that you reconsider this claim and approve payment for the services rendered. The medical necessity and appropriateness of the treatment provided is well-documented and meets all coverage criteria.

Please find attached supporting documentation for your review.

Sincerely,
{submitted_by}

---
This template can be customized based on your specific appeal requirements.",
        date = long_date(appeal_date),
        payer = denial.insurance_company,
        claim = denial.claim_number,
        patient = denial.patient_name,
        reason = denial.denial_reason,
        amount = currency_cents(denial.claim_amount),
        justification = justification.trim(),
        submitted_by = submitted_by.trim(),
    )
}
