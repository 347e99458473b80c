use contracts::domain::a003_product::aggregate::Product;
use contracts::domain::entity_ref::ref_label;
use contracts::shared::format::format_money;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use super::api;
use crate::shared::api_client::{log_api_error, use_api_client};
use crate::shared::message::use_messages;

fn stock_label(stock: i64) -> &'static str {
    match stock {
        s if s <= 0 => "Out of stock",
        s if s < 10 => "Only a few left",
        _ => "In stock",
    }
}

fn details_view(product: Product) -> impl IntoView {
    let selected = RwSignal::new(product.main_image().map(str::to_string));
    let discount = product.discount_percent();
    let images = product.images.clone();

    view! {
        <div class="product-details">
            <div class="product-details__gallery">
                <div class="product-details__main-image">
                    {move || match selected.get() {
                        Some(src) => view! { <img src=src alt="" /> }.into_any(),
                        None => view! { <div class="product-card__no-image">"No image"</div> }.into_any(),
                    }}
                </div>
                <div class="product-details__thumbs">
                    {images
                        .into_iter()
                        .map(|src| {
                            let value = src.clone();
                            view! {
                                <img
                                    class="product-details__thumb"
                                    src=src
                                    alt=""
                                    on:click=move |_| selected.set(Some(value.clone()))
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="product-details__info">
                <h1 class="product-details__name">{product.name.clone()}</h1>
                <div class="product-details__meta">
                    <span>{format!("Sold by {}", ref_label(&product.vendor))}</span>
                    <span>{ref_label(&product.category)}</span>
                </div>
                <div class="product-details__price">
                    <span class="product-details__price-current">
                        {format_money(product.effective_price())}
                    </span>
                    {(discount > 0).then(|| view! {
                        <s class="product-details__price-list">{format_money(product.price)}</s>
                        <span class="product-details__discount">{format!("{}% off", discount)}</span>
                    })}
                </div>
                <div class="product-details__stock">{stock_label(product.stock)}</div>
                <p class="product-details__description">{product.description.clone()}</p>
            </div>
        </div>
    }
}

#[component]
pub fn ProductDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let client = use_api_client();
    let messages = use_messages();
    let product = RwSignal::new(Option::<Product>::None);
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let Some(id) = params.with(|p| p.get("id")) else {
            set_loading.set(false);
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_product(client, &id).await {
                Ok(p) => {
                    product.try_set(Some(p));
                }
                Err(e) => {
                    log_api_error(&format!("product {}", id), &e);
                    messages.error(e.user_message());
                    product.try_set(None);
                }
            }
            set_loading.try_set(false);
        });
    });

    view! {
        <div class="storefront-product">
            <A href="/products" attr:class="storefront-product__back">"Back to products"</A>
            {move || {
                if loading.get() {
                    view! { <div class="page__loading">"Loading product..."</div> }.into_any()
                } else {
                    match product.get() {
                        Some(p) => details_view(p).into_any(),
                        None => view! { <div class="page__empty">"Product not found"</div> }.into_any(),
                    }
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_label() {
        assert_eq!(stock_label(0), "Out of stock");
        assert_eq!(stock_label(-3), "Out of stock");
        assert_eq!(stock_label(4), "Only a few left");
        assert_eq!(stock_label(40), "In stock");
    }
}
