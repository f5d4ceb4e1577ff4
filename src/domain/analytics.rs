// src/domain/analytics.rs
//
// Reference figures for the analytics page. These are fixed sample series,
// not derived from the store.

pub struct MonthlyPoint {
    pub month: &'static str,
    pub denials: u32,
    pub appeals: u32,
    pub resolved: u32,
    pub recovered_dollars: u32,
}

pub struct ReasonShare {
    pub name: &'static str,
    pub percent: u32,
    pub color: &'static str,
}

pub struct InsurerPerformance {
    pub name: &'static str,
    pub denials: u32,
    pub success_percent: u32,
}

pub struct Kpi {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    /// Whether the change is good news (drives the colour).
    pub favourable: bool,
}

pub const MONTHLY: [MonthlyPoint; 6] = [
    MonthlyPoint { month: "Jan", denials: 45, appeals: 32, resolved: 28, recovered_dollars: 125_000 },
    MonthlyPoint { month: "Feb", denials: 52, appeals: 38, resolved: 35, recovered_dollars: 145_000 },
    MonthlyPoint { month: "Mar", denials: 48, appeals: 41, resolved: 39, recovered_dollars: 165_000 },
    MonthlyPoint { month: "Apr", denials: 61, appeals: 45, resolved: 42, recovered_dollars: 185_000 },
    MonthlyPoint { month: "May", denials: 55, appeals: 48, resolved: 45, recovered_dollars: 195_000 },
    MonthlyPoint { month: "Jun", denials: 67, appeals: 52, resolved: 48, recovered_dollars: 215_000 },
];

pub const DENIAL_REASONS: [ReasonShare; 5] = [
    ReasonShare { name: "Prior Authorization", percent: 35, color: "#0066CC" },
    ReasonShare { name: "Medical Necessity", percent: 28, color: "#FF6B35" },
    ReasonShare { name: "Incorrect Coding", percent: 18, color: "#10B981" },
    ReasonShare { name: "Duplicate Claims", percent: 12, color: "#F59E0B" },
    ReasonShare { name: "Other", percent: 7, color: "#8B5CF6" },
];

pub const INSURERS: [InsurerPerformance; 5] = [
    InsurerPerformance { name: "Blue Cross", denials: 45, success_percent: 73 },
    InsurerPerformance { name: "Aetna", denials: 38, success_percent: 68 },
    InsurerPerformance { name: "Cigna", denials: 32, success_percent: 75 },
    InsurerPerformance { name: "UnitedHealth", denials: 28, success_percent: 71 },
    InsurerPerformance { name: "Humana", denials: 22, success_percent: 69 },
];

pub const KPIS: [Kpi; 4] = [
    Kpi { title: "Average Resolution Time", value: "4.2 days", change: "-12%", favourable: true },
    Kpi { title: "Appeal Success Rate", value: "73%", change: "+5%", favourable: true },
    Kpi { title: "Total Recovery", value: "$1.2M", change: "+18%", favourable: true },
    Kpi { title: "Active Cases", value: "89", change: "+3%", favourable: false },
];

/// Width of a bar relative to the largest value in its series, in percent.
pub fn bar_percent(value: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    ((value as f64 / max as f64) * 100.0).round() as u32
}

pub fn max_monthly<F>(pick: F) -> u32
where
    F: Fn(&MonthlyPoint) -> u32,
{
    MONTHLY.iter().map(pick).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_shares_sum_to_one_hundred() {
        let total: u32 = DENIAL_REASONS.iter().map(|r| r.percent).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn bar_percent_scales_to_max() {
        assert_eq!(bar_percent(67, 67), 100);
        assert_eq!(bar_percent(0, 67), 0);
        assert_eq!(bar_percent(5, 0), 0);
        assert_eq!(max_monthly(|p| p.denials), 67);
        assert_eq!(max_monthly(|p| p.recovered_dollars), 215_000);
    }
}
