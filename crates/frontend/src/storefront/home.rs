use contracts::domain::a003_product::aggregate::Product;
use contracts::shared::query::ListQuery;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::api;
use super::carousel::DealsCarousel;
use super::product_card::product_card;
use super::showcase::Showcase;
use crate::shared::api_client::{log_api_error, use_api_client};
use crate::shared::config::use_config;
use crate::shared::message::use_messages;

fn product_grid(products: Vec<Product>) -> impl IntoView {
    view! {
        <div class="product-grid">
            {products.iter().map(product_card).collect_view()}
        </div>
    }
}

/// Storefront landing page. The sample is fetched and reshuffled on every mount.
#[component]
pub fn HomePage() -> impl IntoView {
    let config = use_config();
    let client = use_api_client();
    let messages = use_messages();
    let showcase = RwSignal::new(Option::<Showcase>::None);
    let (loading, set_loading) = signal(true);

    let query = ListQuery::first_page(config.showcase_size);
    spawn_local(async move {
        match api::fetch_products(client, &query).await {
            Ok(list) => {
                let built = Showcase::build(list.items, &mut rand::thread_rng());
                log::debug!("showcase: {} deal slides", built.deals.len());
                showcase.try_set(Some(built));
            }
            Err(e) => {
                log_api_error("home products", &e);
                messages.error(e.user_message());
            }
        }
        set_loading.try_set(false);
    });

    let interval_ms = config.carousel_interval_ms;

    view! {
        <div class="storefront-home">
            <Show when=move || !loading.get() fallback=|| view! { <div class="page__loading">"Loading products..."</div> }>
                {move || match showcase.get() {
                    Some(s) if !s.latest.is_empty() => view! {
                        <section class="storefront-section">
                            <h2 class="storefront-section__title">"Deals of the day"</h2>
                            <DealsCarousel slides=s.deals.clone() interval_ms=interval_ms />
                        </section>
                        <section class="storefront-section">
                            <h2 class="storefront-section__title">"Trending now"</h2>
                            {product_grid(s.trending.clone())}
                        </section>
                        <section class="storefront-section">
                            <div class="storefront-section__header">
                                <h2 class="storefront-section__title">"Latest arrivals"</h2>
                                <A href="/products">"View all"</A>
                            </div>
                            {product_grid(s.latest)}
                        </section>
                    }
                    .into_any(),
                    _ => view! { <div class="page__empty">"No products available yet"</div> }.into_any(),
                }}
            </Show>
        </div>
    }
}
