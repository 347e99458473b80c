use contracts::domain::a003_product::aggregate::Product;
use contracts::shared::format::format_money;
use leptos::prelude::*;
use leptos_router::components::A;

/// Card linking to the product page
pub fn product_card(product: &Product) -> impl IntoView {
    let href = format!("/products/{}", product.id);
    let discount = product.discount_percent();
    let image = product.main_image().map(str::to_string);
    let price = format_money(product.effective_price());
    let list_price = (discount > 0).then(|| format_money(product.price));
    let vendor = product.vendor.as_ref().map(|v| v.label().to_string());
    let name = product.name.clone();

    view! {
        <A href=href attr:class="product-card">
            <div class="product-card__image">
                {match image {
                    Some(src) => view! { <img src=src alt=name.clone() loading="lazy" /> }.into_any(),
                    None => view! { <div class="product-card__no-image">"No image"</div> }.into_any(),
                }}
                {(discount > 0).then(|| view! {
                    <span class="product-card__discount">{format!("{}% OFF", discount)}</span>
                })}
            </div>
            <div class="product-card__body">
                <div class="product-card__name">{name}</div>
                {vendor.map(|v| view! { <div class="product-card__vendor">{v}</div> })}
                <div class="product-card__price">
                    <span class="product-card__price-current">{price}</span>
                    {list_price.map(|p| view! { <s class="product-card__price-list">{p}</s> })}
                </div>
            </div>
        </A>
    }
}
