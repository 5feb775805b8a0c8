//! Dashboard summary view state.
//!
//! The view is either waiting for its one statistics request or showing four
//! summary cards. A failed request is logged and rendered as all-zero cards.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::api::ApiError;
use crate::net::types::DashboardStats;
use crate::util::currency::format_inr;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum DashboardView {
    #[default]
    Loading,
    Loaded(DashboardStats),
}

impl DashboardView {
    /// Resolve the statistics request into the loaded view.
    pub fn settle(result: Result<DashboardStats, ApiError>) -> Self {
        match result {
            Ok(stats) => Self::Loaded(stats),
            Err(e) => {
                log::error!("dashboard stats request failed: {e}");
                Self::Loaded(DashboardStats::default())
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardTone {
    Neutral,
    Warning,
    Danger,
}

/// One rendered summary card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryCard {
    pub label: &'static str,
    pub value: String,
    pub tone: CardTone,
}

/// Cards in display order: invoices, clients, outstanding, overdue.
pub fn summary_cards(stats: &DashboardStats) -> [SummaryCard; 4] {
    [
        SummaryCard { label: "Total Invoices", value: stats.total_invoices.to_string(), tone: CardTone::Neutral },
        SummaryCard { label: "Total Clients", value: stats.total_clients.to_string(), tone: CardTone::Neutral },
        SummaryCard {
            label: "Outstanding Amount",
            value: format_inr(stats.outstanding_amount),
            tone: CardTone::Warning,
        },
        SummaryCard { label: "Overdue Invoices", value: stats.overdue_invoices.to_string(), tone: CardTone::Danger },
    ]
}
