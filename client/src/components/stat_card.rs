//! Single dashboard summary card.

use leptos::prelude::*;

use crate::state::dashboard::{CardTone, SummaryCard};

fn tone_class(tone: CardTone) -> &'static str {
    match tone {
        CardTone::Neutral => "stat-card",
        CardTone::Warning => "stat-card stat-card--warning",
        CardTone::Danger => "stat-card stat-card--danger",
    }
}

#[component]
pub fn StatCard(card: SummaryCard) -> impl IntoView {
    view! {
        <div class=tone_class(card.tone)>
            <span class="stat-card__label">{card.label}</span>
            <span class="stat-card__value">{card.value}</span>
        </div>
    }
}
