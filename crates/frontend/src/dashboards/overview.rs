//! Landing page of a dashboard: one counter card per managed collection.

use contracts::domain::entity_ref::EntityRef;
use contracts::shared::query::ListQuery;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_client::{log_api_error, use_api_client};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::system::auth::context::use_session;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverviewCard {
    pub label: &'static str,
    pub icon: &'static str,
    /// Page opened by the card
    pub href: &'static str,
    /// List endpoint whose `totalCount` is shown
    pub count_path: &'static str,
}

/// `totalCount` of a list endpoint, fetched with a one-row page
fn total_count(path: &'static str) -> RwSignal<Option<usize>> {
    let value = RwSignal::new(None);
    let client = use_api_client();
    spawn_local(async move {
        match client.get_list::<EntityRef>(path, &ListQuery::first_page(1)).await {
            Ok(list) => {
                value.try_set(Some(list.total_count));
            }
            Err(e) => log_api_error(&format!("overview {}", path), &e),
        }
    });
    value
}

#[component]
pub fn OverviewPage(#[prop(into)] title: String, cards: Vec<OverviewCard>) -> impl IntoView {
    let greeting = use_session().map(|s| format!("Welcome back, {}", s.name));

    view! {
        <div class="page">
            <PageHeader title=title icon_name="eye" subtitle=greeting>
                <span></span>
            </PageHeader>
            <div class="stat-grid">
                {cards
                    .into_iter()
                    .map(|card| {
                        let count = total_count(card.count_path);
                        view! {
                            <StatCard
                                label=card.label
                                icon_name=card.icon
                                value=count
                                href=card.href
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
