// src/domain/appeal.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppealType {
    FirstLevel,
    SecondLevel,
    ExternalReview,
    PeerToPeer,
}

impl AppealType {
    pub const ALL: [AppealType; 4] = [
        AppealType::FirstLevel,
        AppealType::SecondLevel,
        AppealType::ExternalReview,
        AppealType::PeerToPeer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AppealType::FirstLevel => "first-level",
            AppealType::SecondLevel => "second-level",
            AppealType::ExternalReview => "external-review",
            AppealType::PeerToPeer => "peer-to-peer",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AppealType::FirstLevel => "First Level",
            AppealType::SecondLevel => "Second Level",
            AppealType::ExternalReview => "External Review",
            AppealType::PeerToPeer => "Peer-to-Peer",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw.trim())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppealStatus {
    Draft,
    Submitted,
    UnderReview,
    Approved,
    Denied,
    PendingResponse,
}

impl AppealStatus {
    pub const ALL: [AppealStatus; 6] = [
        AppealStatus::Draft,
        AppealStatus::Submitted,
        AppealStatus::UnderReview,
        AppealStatus::Approved,
        AppealStatus::Denied,
        AppealStatus::PendingResponse,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AppealStatus::Draft => "draft",
            AppealStatus::Submitted => "submitted",
            AppealStatus::UnderReview => "under-review",
            AppealStatus::Approved => "approved",
            AppealStatus::Denied => "denied",
            AppealStatus::PendingResponse => "pending-response",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AppealStatus::Draft => "Draft",
            AppealStatus::Submitted => "Submitted",
            AppealStatus::UnderReview => "Under Review",
            AppealStatus::Approved => "Approved",
            AppealStatus::Denied => "Denied",
            AppealStatus::PendingResponse => "Pending Response",
        }
    }

    /// Sent to the payer and not yet decided.
    pub fn is_awaiting_decision(self) -> bool {
        matches!(
            self,
            AppealStatus::Submitted | AppealStatus::UnderReview | AppealStatus::PendingResponse
        )
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw.trim())
    }
}

/// An appeal filed against a denial. `denial_id` is a soft reference:
/// nothing checks that the denial exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appeal {
    pub id: String,
    pub denial_id: String,
    pub appeal_type: AppealType,
    pub appeal_date: NaiveDate,
    #[serde(default, with = "crate::domain::blank_date")]
    pub deadline_date: Option<NaiveDate>,
    pub status: AppealStatus,
    pub appeal_reason: String,
    pub submitted_by: String,
    /// Generated appeal letter, when one was attached at creation.
    #[serde(default)]
    pub supporting_documents: String,
    pub created_at: DateTime<Utc>,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAppeal {
    pub denial_id: String,
    pub appeal_type: AppealType,
    pub appeal_date: NaiveDate,
    pub deadline_date: Option<NaiveDate>,
    pub appeal_reason: String,
    pub submitted_by: String,
    pub supporting_documents: String,
}

impl NewAppeal {
    /// Appeals always start as drafts.
    pub fn into_appeal(self, id: String, owner: &str, now: DateTime<Utc>) -> Appeal {
        Appeal {
            id,
            denial_id: self.denial_id,
            appeal_type: self.appeal_type,
            appeal_date: self.appeal_date,
            deadline_date: self.deadline_date,
            status: AppealStatus::Draft,
            appeal_reason: self.appeal_reason,
            submitted_by: self.submitted_by,
            supporting_documents: self.supporting_documents,
            created_at: now,
            user_id: owner.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppealPatch {
    pub denial_id: Option<String>,
    pub appeal_type: Option<AppealType>,
    pub appeal_date: Option<NaiveDate>,
    pub deadline_date: Option<Option<NaiveDate>>,
    pub status: Option<AppealStatus>,
    pub appeal_reason: Option<String>,
    pub submitted_by: Option<String>,
    pub supporting_documents: Option<String>,
}

impl AppealPatch {
    pub fn status(status: AppealStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn apply(self, appeal: &mut Appeal) {
        merge_patch!(self => appeal;
            denial_id,
            appeal_type,
            appeal_date,
            deadline_date,
            status,
            appeal_reason,
            submitted_by,
            supporting_documents,
        );
    }
}
