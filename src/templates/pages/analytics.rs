use crate::domain::analytics::{bar_percent, max_monthly, DENIAL_REASONS, INSURERS, KPIS, MONTHLY};
use crate::domain::format::compact_amount;
use crate::domain::Cents;
use crate::templates::components::{bar, card};
use crate::templates::{desktop_layout, Chrome};
use maud::{html, Markup};

pub fn analytics_page(chrome: Chrome<'_>) -> Markup {
    let max_denials = max_monthly(|p| p.denials);
    let max_recovered = max_monthly(|p| p.recovered_dollars);

    desktop_layout(
        "Analytics",
        chrome,
        html! {
            div class="page-head" {
                div {
                    h1 { "Analytics" }
                    p class="muted" { "Insights and performance metrics for denial management" }
                }
                a class="btn outline" href="/analytics/export" { "Export Report" }
            }

            div class="grid four" {
                @for kpi in &KPIS {
                    div class="card stat" {
                        p class="stat-label" { (kpi.title) }
                        p class="stat-value" { (kpi.value) }
                        p class={ "small " (if kpi.favourable { "good" } else { "bad" }) } {
                            (kpi.change) " from last month"
                        }
                    }
                }
            }

            div class="grid two" {
                (card("Monthly Trends", html! {
                    table class="chart" {
                        thead { tr { th { "Month" } th { "Denials" } th { "Appeals" } th { "Resolved" } } }
                        tbody {
                            @for p in &MONTHLY {
                                tr {
                                    td { (p.month) }
                                    td { (bar(bar_percent(p.denials, max_denials), "#EF4444")) span class="small" { (p.denials) } }
                                    td { (bar(bar_percent(p.appeals, max_denials), "#0066CC")) span class="small" { (p.appeals) } }
                                    td { (bar(bar_percent(p.resolved, max_denials), "#10B981")) span class="small" { (p.resolved) } }
                                }
                            }
                        }
                    }
                }))

                (card("Top Denial Reasons", html! {
                    ul class="legend" {
                        @for r in &DENIAL_REASONS {
                            li {
                                span class="split" { span { (r.name) } strong { (r.percent) "%" } }
                                (bar(r.percent, r.color))
                            }
                        }
                    }
                }))
            }

            (card("Insurance Performance", html! {
                table {
                    thead { tr { th { "Insurer" } th { "Denials" } th { "Appeal Success Rate" } } }
                    tbody {
                        @for i in &INSURERS {
                            tr {
                                td { (i.name) }
                                td { (i.denials) }
                                td { (bar(i.success_percent, "#10B981")) span class="small" { (i.success_percent) "%" } }
                            }
                        }
                    }
                }
            }))

            (card("Recovery Amount Trend", html! {
                p class="muted" { "Monthly recovery amounts from successful appeals" }
                ul class="legend" {
                    @for p in &MONTHLY {
                        li {
                            span class="split" {
                                span { (p.month) }
                                strong { (compact_amount(Cents::from_dollars(p.recovered_dollars as i64))) }
                            }
                            (bar(bar_percent(p.recovered_dollars, max_recovered), "#0066CC"))
                        }
                    }
                }
            }))
        },
    )
}
