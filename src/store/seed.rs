// src/store/seed.rs
//
// Sample records loaded into a fresh `MockStore` so the dashboard has
// something to show when no backend is reachable.

use crate::domain::{
    Appeal, AppealStatus, AppealType, Cents, Denial, DenialStatus, Priority,
};
use crate::store::FALLBACK_OWNER;
use chrono::{DateTime, NaiveDate, Utc};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or_default()
}

fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn denial(
    id: &str,
    claim_number: &str,
    patient_name: &str,
    patient_id: &str,
    insurance_company: &str,
    (denial_date, service_date): (&str, &str),
    (denial_reason, denial_code): (&str, &str),
    claim_dollars: i64,
    status: DenialStatus,
    priority: Priority,
    assigned_to: &str,
    notes: &str,
    (created_at, updated_at): (&str, &str),
) -> Denial {
    Denial {
        id: id.to_string(),
        claim_number: claim_number.to_string(),
        patient_name: patient_name.to_string(),
        patient_id: patient_id.to_string(),
        insurance_company: insurance_company.to_string(),
        denial_date: date(denial_date),
        service_date: Some(date(service_date)),
        denial_reason: denial_reason.to_string(),
        denial_code: denial_code.to_string(),
        claim_amount: Cents::from_dollars(claim_dollars),
        status,
        priority,
        assigned_to: assigned_to.to_string(),
        notes: notes.to_string(),
        created_at: ts(created_at),
        updated_at: ts(updated_at),
        user_id: FALLBACK_OWNER.to_string(),
    }
}

pub fn denials() -> Vec<Denial> {
    vec![
        denial(
            "denial_001",
            "CLM-2024-001",
            "Sarah Johnson",
            "PAT-001",
            "Blue Cross Blue Shield",
            ("2024-01-15", "2024-01-10"),
            (
                "Prior Authorization Required - The submitted procedure requires prior authorization which was not obtained before service.",
                "PA001",
            ),
            2450,
            DenialStatus::Pending,
            Priority::High,
            "Dr. Smith",
            "Patient requires urgent follow-up. Prior auth was submitted but not approved in time.",
            ("2024-01-15T10:30:00Z", "2024-01-15T10:30:00Z"),
        ),
        denial(
            "denial_002",
            "CLM-2024-002",
            "Michael Chen",
            "PAT-002",
            "Aetna Healthcare",
            ("2024-01-14", "2024-01-08"),
            (
                "Medical Necessity Documentation - Additional documentation required to establish medical necessity.",
                "MN002",
            ),
            1890,
            DenialStatus::Appealing,
            Priority::Medium,
            "Dr. Johnson",
            "Appeal submitted with additional clinical notes and test results.",
            ("2024-01-14T14:20:00Z", "2024-01-16T09:15:00Z"),
        ),
        denial(
            "denial_003",
            "CLM-2024-003",
            "Emily Davis",
            "PAT-003",
            "Cigna Health",
            ("2024-01-13", "2024-01-05"),
            (
                "Duplicate Claim Submission - This claim appears to be a duplicate of a previously processed claim.",
                "DUP001",
            ),
            3200,
            DenialStatus::Resolved,
            Priority::Low,
            "Dr. Wilson",
            "Resolved - Found original claim was processed under different member ID.",
            ("2024-01-13T11:45:00Z", "2024-01-18T16:30:00Z"),
        ),
        denial(
            "denial_004",
            "CLM-2024-004",
            "Robert Wilson",
            "PAT-004",
            "UnitedHealthcare",
            ("2024-01-12", "2024-01-03"),
            (
                "Experimental Treatment - The procedure is considered experimental and not covered under current policy.",
                "EXP001",
            ),
            4750,
            DenialStatus::Pending,
            Priority::Urgent,
            "Dr. Brown",
            "Researching recent FDA approvals and clinical trial data for appeal.",
            ("2024-01-12T08:15:00Z", "2024-01-12T08:15:00Z"),
        ),
        denial(
            "denial_005",
            "CLM-2024-005",
            "Lisa Anderson",
            "PAT-005",
            "Humana",
            ("2024-01-11", "2024-01-02"),
            (
                "Incorrect Procedure Code - The submitted procedure code does not match the documented service.",
                "IPC001",
            ),
            1250,
            DenialStatus::Appealing,
            Priority::Medium,
            "Dr. Davis",
            "Corrected procedure code submitted with appeal documentation.",
            ("2024-01-11T13:20:00Z", "2024-01-15T10:45:00Z"),
        ),
        denial(
            "denial_006",
            "CLM-2024-006",
            "James Rodriguez",
            "PAT-006",
            "Kaiser Permanente",
            ("2024-01-10", "2023-12-28"),
            (
                "Timely Filing Limit Exceeded - Claim was submitted after the timely filing deadline.",
                "TFL001",
            ),
            890,
            DenialStatus::Rejected,
            Priority::Low,
            "Dr. Martinez",
            "Unable to appeal due to timely filing limits. Process improvement needed.",
            ("2024-01-10T16:00:00Z", "2024-01-10T16:00:00Z"),
        ),
    ]
}

pub fn appeals() -> Vec<Appeal> {
    vec![
        Appeal {
            id: "appeal_001".to_string(),
            denial_id: "denial_002".to_string(),
            appeal_type: AppealType::FirstLevel,
            appeal_date: date("2024-01-16"),
            deadline_date: Some(date("2024-01-30")),
            status: AppealStatus::Submitted,
            appeal_reason: "Submitting additional clinical documentation to support medical necessity including lab results, imaging studies, and physician notes.".to_string(),
            submitted_by: "Dr. Johnson".to_string(),
            supporting_documents: String::new(),
            created_at: ts("2024-01-16T09:15:00Z"),
            user_id: FALLBACK_OWNER.to_string(),
        },
        Appeal {
            id: "appeal_002".to_string(),
            denial_id: "denial_005".to_string(),
            appeal_type: AppealType::FirstLevel,
            appeal_date: date("2024-01-15"),
            deadline_date: Some(date("2024-01-29")),
            status: AppealStatus::UnderReview,
            appeal_reason: "Correcting procedure code from 99213 to 99214 based on documentation review and time spent with patient.".to_string(),
            submitted_by: "Dr. Davis".to_string(),
            supporting_documents: String::new(),
            created_at: ts("2024-01-15T10:45:00Z"),
            user_id: FALLBACK_OWNER.to_string(),
        },
    ]
}
