// src/domain/filters.rs

use crate::domain::{Appeal, AppealStatus, AppealType, Denial, DenialStatus, Priority};
use std::collections::HashMap;

/// `"all"` and blank mean "no filter". Unknown values are treated the same
/// way, so a stale bookmark shows everything instead of nothing.
fn choice<T>(raw: Option<&str>, parse: fn(&str) -> Option<T>) -> Option<T> {
    match raw.map(str::trim) {
        None | Some("") | Some("all") => None,
        Some(v) => parse(v),
    }
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DenialFilter {
    /// Already lower-cased; empty matches everything.
    pub query: String,
    pub status: Option<DenialStatus>,
    pub priority: Option<Priority>,
}

impl DenialFilter {
    pub fn from_params(query: Option<&str>, status: Option<&str>, priority: Option<&str>) -> Self {
        Self {
            query: query.unwrap_or("").trim().to_lowercase(),
            status: choice(status, DenialStatus::parse),
            priority: choice(priority, Priority::parse),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.status.is_some() || self.priority.is_some()
    }

    /// Search covers patient, claim number, insurer and denial reason.
    pub fn matches(&self, denial: &Denial) -> bool {
        let text_ok = self.query.is_empty()
            || contains_ci(&denial.patient_name, &self.query)
            || contains_ci(&denial.claim_number, &self.query)
            || contains_ci(&denial.insurance_company, &self.query)
            || contains_ci(&denial.denial_reason, &self.query);

        text_ok
            && self.status.map_or(true, |s| denial.status == s)
            && self.priority.map_or(true, |p| denial.priority == p)
    }

    pub fn apply<'a>(&self, denials: &'a [Denial]) -> Vec<&'a Denial> {
        denials.iter().filter(|d| self.matches(d)).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppealFilter {
    pub query: String,
    pub status: Option<AppealStatus>,
    pub appeal_type: Option<AppealType>,
}

impl AppealFilter {
    pub fn from_params(
        query: Option<&str>,
        status: Option<&str>,
        appeal_type: Option<&str>,
    ) -> Self {
        Self {
            query: query.unwrap_or("").trim().to_lowercase(),
            status: choice(status, AppealStatus::parse),
            appeal_type: choice(appeal_type, AppealType::parse),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.status.is_some() || self.appeal_type.is_some()
    }

    /// Search covers submitter and justification, plus the linked denial's
    /// claim number and patient when that denial is known.
    pub fn matches(&self, appeal: &Appeal, denial: Option<&Denial>) -> bool {
        let text_ok = self.query.is_empty()
            || contains_ci(&appeal.submitted_by, &self.query)
            || contains_ci(&appeal.appeal_reason, &self.query)
            || denial.map_or(false, |d| {
                contains_ci(&d.claim_number, &self.query)
                    || contains_ci(&d.patient_name, &self.query)
            });

        text_ok
            && self.status.map_or(true, |s| appeal.status == s)
            && self.appeal_type.map_or(true, |t| appeal.appeal_type == t)
    }

    pub fn apply<'a>(
        &self,
        appeals: &'a [Appeal],
        denials: &HashMap<String, Denial>,
    ) -> Vec<&'a Appeal> {
        appeals
            .iter()
            .filter(|a| self.matches(a, denials.get(&a.denial_id)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    fn denial_index() -> HashMap<String, Denial> {
        seed::denials()
            .into_iter()
            .map(|d| (d.id.clone(), d))
            .collect()
    }

    #[test]
    fn blank_filter_keeps_everything() {
        let denials = seed::denials();
        let filter = DenialFilter::from_params(None, Some("all"), Some(""));
        assert!(!filter.is_active());
        assert_eq!(filter.apply(&denials).len(), denials.len());
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let denials = seed::denials();

        let by_patient = DenialFilter::from_params(Some("sarah"), None, None);
        assert_eq!(by_patient.apply(&denials)[0].id, "denial_001");

        let by_claim = DenialFilter::from_params(Some("clm-2024-003"), None, None);
        assert_eq!(by_claim.apply(&denials)[0].id, "denial_003");

        let by_insurer = DenialFilter::from_params(Some("HUMANA"), None, None);
        assert_eq!(by_insurer.apply(&denials)[0].id, "denial_005");

        let by_reason = DenialFilter::from_params(Some("timely filing"), None, None);
        assert_eq!(by_reason.apply(&denials)[0].id, "denial_006");
    }

    #[test]
    fn status_and_priority_are_exact() {
        let denials = seed::denials();
        let pending = DenialFilter::from_params(None, Some("pending"), None);
        let ids: Vec<_> = pending.apply(&denials).iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["denial_001", "denial_004"]);

        let pending_urgent = DenialFilter::from_params(None, Some("pending"), Some("urgent"));
        let ids: Vec<_> = pending_urgent
            .apply(&denials)
            .iter()
            .map(|d| d.id.as_str())
            .collect();
        assert_eq!(ids, vec!["denial_004"]);
    }

    #[test]
    fn unknown_choice_is_ignored() {
        let filter = DenialFilter::from_params(None, Some("archived"), None);
        assert_eq!(filter.status, None);
    }

    #[test]
    fn appeal_search_reaches_linked_denial() {
        let appeals = seed::appeals();
        let index = denial_index();

        let by_patient = AppealFilter::from_params(Some("michael"), None, None);
        let ids: Vec<_> = by_patient
            .apply(&appeals, &index)
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, vec!["appeal_001"]);

        let by_claim = AppealFilter::from_params(Some("CLM-2024-005"), None, None);
        assert_eq!(by_claim.apply(&appeals, &index)[0].id, "appeal_002");
    }

    #[test]
    fn missing_denial_never_matches_denial_fields() {
        let mut appeals = seed::appeals();
        appeals[0].denial_id = "denial_gone".into();
        let filter = AppealFilter::from_params(Some("michael"), None, None);
        assert!(filter.apply(&appeals, &denial_index()).is_empty());
    }

    #[test]
    fn appeal_status_and_type_filters() {
        let appeals = seed::appeals();
        let index = denial_index();
        let review = AppealFilter::from_params(None, Some("under-review"), Some("first-level"));
        assert_eq!(review.apply(&appeals, &index).len(), 1);

        let external = AppealFilter::from_params(None, None, Some("external-review"));
        assert!(external.apply(&appeals, &index).is_empty());
    }
}
