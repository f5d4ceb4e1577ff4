// src/domain/stats.rs

use crate::domain::{Appeal, Cents, Denial, DenialStatus};
use serde::Serialize;

/// Headline numbers for one owner's workload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DenialStats {
    pub total_denials: usize,
    pub pending_denials: usize,
    pub appealing_denials: usize,
    pub resolved_denials: usize,
    pub total_appeals: usize,
    /// Sum of `claim_amount` over every denial, whatever its status.
    pub total_amount: Cents,
}

impl DenialStats {
    /// Callers pass records already scoped to one owner.
    pub fn compute<'a, D, A>(denials: D, appeals: A) -> Self
    where
        D: IntoIterator<Item = &'a Denial>,
        A: IntoIterator<Item = &'a Appeal>,
    {
        let mut stats = DenialStats::default();
        for denial in denials {
            stats.total_denials += 1;
            stats.total_amount = stats.total_amount + denial.claim_amount;
            match denial.status {
                DenialStatus::Pending => stats.pending_denials += 1,
                DenialStatus::Appealing => stats.appealing_denials += 1,
                DenialStatus::Resolved => stats.resolved_denials += 1,
                DenialStatus::Rejected => {}
            }
        }
        stats.total_appeals = appeals.into_iter().count();
        stats
    }

    /// Whole-number share of denials that are resolved, 0 when there are none.
    pub fn resolution_percent(&self) -> u32 {
        if self.total_denials == 0 {
            return 0;
        }
        ((self.resolved_denials as f64 / self.total_denials as f64) * 100.0).round() as u32
    }
}
