// src/domain/denial.rs

use crate::domain::money::Cents;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DenialStatus {
    Pending,
    Appealing,
    Resolved,
    Rejected,
}

impl DenialStatus {
    pub const ALL: [DenialStatus; 4] = [
        DenialStatus::Pending,
        DenialStatus::Appealing,
        DenialStatus::Resolved,
        DenialStatus::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DenialStatus::Pending => "pending",
            DenialStatus::Appealing => "appealing",
            DenialStatus::Resolved => "resolved",
            DenialStatus::Rejected => "rejected",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DenialStatus::Pending => "Pending",
            DenialStatus::Appealing => "Appealing",
            DenialStatus::Resolved => "Resolved",
            DenialStatus::Rejected => "Rejected",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw.trim())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// Most pressing first, the order the filter dropdown uses.
    pub const ALL: [Priority; 4] = [
        Priority::Urgent,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == raw.trim())
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

/// A denied insurance claim being worked by the billing team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Denial {
    pub id: String,
    pub claim_number: String,
    pub patient_name: String,
    pub patient_id: String,
    pub insurance_company: String,
    pub denial_date: NaiveDate,
    #[serde(default, with = "crate::domain::blank_date")]
    pub service_date: Option<NaiveDate>,
    pub denial_reason: String,
    pub denial_code: String,
    pub claim_amount: Cents,
    pub status: DenialStatus,
    pub priority: Priority,
    pub assigned_to: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_id: String,
}

/// Fields supplied by the create form. Identity, status and timestamps are
/// assigned by whoever stores the record.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDenial {
    pub claim_number: String,
    pub patient_name: String,
    pub patient_id: String,
    pub insurance_company: String,
    pub denial_date: NaiveDate,
    pub service_date: Option<NaiveDate>,
    pub denial_reason: String,
    pub denial_code: String,
    pub claim_amount: Cents,
    pub priority: Priority,
    pub assigned_to: String,
    pub notes: String,
}

impl NewDenial {
    /// Materializes a stored record: status is always `Pending` at creation.
    pub fn into_denial(self, id: String, owner: &str, now: DateTime<Utc>) -> Denial {
        Denial {
            id,
            claim_number: self.claim_number,
            patient_name: self.patient_name,
            patient_id: self.patient_id,
            insurance_company: self.insurance_company,
            denial_date: self.denial_date,
            service_date: self.service_date,
            denial_reason: self.denial_reason,
            denial_code: self.denial_code,
            claim_amount: self.claim_amount,
            status: DenialStatus::Pending,
            priority: self.priority,
            assigned_to: self.assigned_to,
            notes: self.notes,
            created_at: now,
            updated_at: now,
            user_id: owner.to_string(),
        }
    }
}

/// Shallow partial update: `None` leaves the stored field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DenialPatch {
    pub claim_number: Option<String>,
    pub patient_name: Option<String>,
    pub patient_id: Option<String>,
    pub insurance_company: Option<String>,
    pub denial_date: Option<NaiveDate>,
    pub service_date: Option<Option<NaiveDate>>,
    pub denial_reason: Option<String>,
    pub denial_code: Option<String>,
    pub claim_amount: Option<Cents>,
    pub status: Option<DenialStatus>,
    pub priority: Option<Priority>,
    pub assigned_to: Option<String>,
    pub notes: Option<String>,
}

impl DenialPatch {
    pub fn status(status: DenialStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn priority(priority: Priority) -> Self {
        Self {
            priority: Some(priority),
            ..Self::default()
        }
    }

    pub fn apply(self, denial: &mut Denial) {
        merge_patch!(self => denial;
            claim_number,
            patient_name,
            patient_id,
            insurance_company,
            denial_date,
            service_date,
            denial_reason,
            denial_code,
            claim_amount,
            status,
            priority,
            assigned_to,
            notes,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Denial {
        NewDenial {
            claim_number: "CLM-1".into(),
            patient_name: "Ada Lovelace".into(),
            patient_id: "PAT-9".into(),
            insurance_company: "Acme Health".into(),
            denial_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            service_date: None,
            denial_reason: "Coding error".into(),
            denial_code: "CO-16".into(),
            claim_amount: Cents(12_345),
            priority: Priority::High,
            assigned_to: "Dr. Who".into(),
            notes: String::new(),
        }
        .into_denial(
            "denial_x".into(),
            "owner_a",
            Utc.with_ymd_and_hms(2024, 2, 2, 9, 0, 0).unwrap(),
        )
    }

    #[test]
    fn new_denials_start_pending() {
        let d = sample();
        assert_eq!(d.status, DenialStatus::Pending);
        assert_eq!(d.created_at, d.updated_at);
        assert_eq!(d.user_id, "owner_a");
    }

    #[test]
    fn patch_only_touches_given_fields() {
        let mut d = sample();
        let before = d.clone();
        DenialPatch {
            status: Some(DenialStatus::Rejected),
            notes: Some("called payer".into()),
            ..DenialPatch::default()
        }
        .apply(&mut d);

        assert_eq!(d.status, DenialStatus::Rejected);
        assert_eq!(d.notes, "called payer");
        assert_eq!(d.claim_amount, before.claim_amount);
        assert_eq!(d.priority, before.priority);
        assert_eq!(d.patient_name, before.patient_name);
    }

    #[test]
    fn wire_names_are_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["claimNumber"], "CLM-1");
        assert_eq!(json["userId"], "owner_a");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["priority"], "high");
        assert_eq!(json["denialDate"], "2024-02-01");
    }

    #[test]
    fn parses_status_and_priority_labels() {
        assert_eq!(DenialStatus::parse("appealing"), Some(DenialStatus::Appealing));
        assert_eq!(DenialStatus::parse("all"), None);
        assert_eq!(Priority::parse(" urgent "), Some(Priority::Urgent));
        assert_eq!(Priority::parse("URGENT"), None);
    }
}
