use contracts::domain::a003_product::aggregate::{Product, ProductDto};
use contracts::domain::entity_ref::EntityRef;
use contracts::enums::status::NoStatus;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Input};

use super::api::PRODUCTS_PATH;
use super::product_card::product_card;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::use_config;
use crate::shared::resource::controller::ResourceController;
use crate::shared::resource::field::FieldSpec;
use crate::shared::resource::{any_contains, Column, Resource};

/// Public, read-only product catalogue
pub struct Catalog;

impl Resource for Catalog {
    type Item = Product;
    type Draft = ProductDto;
    type Status = NoStatus;

    const KEY: &'static str = "catalog";
    const TITLE: &'static str = "Products";
    const ELEMENT: &'static str = "product";

    fn base_path() -> &'static str {
        PRODUCTS_PATH
    }

    fn id(item: &Product) -> &str {
        &item.id
    }

    fn draft_from(item: &Product) -> ProductDto {
        ProductDto::from(item)
    }

    fn draft_id(draft: &ProductDto) -> Option<String> {
        draft.id.clone()
    }

    fn validate(_draft: &ProductDto) -> Result<(), String> {
        Ok(())
    }

    fn matches_search(item: &Product, needle: &str) -> bool {
        let vendor = item.vendor.as_ref().map(EntityRef::label).unwrap_or_default();
        any_contains(needle, &[item.name.as_str(), item.description.as_str(), vendor])
    }

    fn columns() -> Vec<Column<Product>> {
        Vec::new()
    }

    fn fields() -> Vec<FieldSpec<ProductDto>> {
        Vec::new()
    }

    fn can_create() -> bool {
        false
    }

    fn can_edit() -> bool {
        false
    }

    fn can_delete() -> bool {
        false
    }

    fn vendor_of(item: &Product) -> Option<EntityRef> {
        item.vendor.clone()
    }
}

#[component]
pub fn ProductListPage() -> impl IntoView {
    let ctl = ResourceController::<Catalog>::new();
    let config = use_config();
    ctl.load();

    let search = RwSignal::new(String::new());
    Effect::new(move |_| {
        let term = search.get();
        ctl.set_search_term(term);
    });

    let products = Memo::new(move |_| ctl.state.with(|s| s.visible_items()));
    let loading = Memo::new(move |_| ctl.state.with(|s| s.is_loading()));
    let vendors = Memo::new(move |_| ctl.state.with(|s| s.vendor_options()));

    view! {
        <div class="storefront-products">
            <div class="storefront-toolbar">
                <div class="storefront-toolbar__search">
                    <Input value=search placeholder="Search products..." />
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| ctl.apply_search()>
                        "Search"
                    </Button>
                </div>
                {move || {
                    let names = vendors.get();
                    (!names.is_empty()).then(|| view! {
                        <select
                            class="form__select"
                            prop:value=move || ctl.state.with(|s| s.filter.vendor.clone().unwrap_or_default())
                            on:change=move |ev| ctl.set_vendor_filter(event_target_value(&ev))
                        >
                            <option value="">"All sellers"</option>
                            {names
                                .into_iter()
                                .map(|n| view! { <option value=n.clone()>{n.clone()}</option> })
                                .collect_view()}
                        </select>
                    })
                }}
            </div>

            {move || {
                let items = products.get();
                let loading = loading.get();
                if loading && items.is_empty() {
                    view! { <div class="page__loading">"Loading products..."</div> }.into_any()
                } else if items.is_empty() {
                    view! { <div class="page__empty">"No products found"</div> }.into_any()
                } else {
                    view! {
                        {loading.then(|| view! { <div class="page__loading page__loading--inline">"Loading products..."</div> })}
                        <div class="product-grid" class:product-grid--loading=loading>
                            {items.iter().map(product_card).collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}

            <PaginationControls
                current_page=Signal::derive(move || ctl.state.with(|s| s.filter.page))
                total_pages=Signal::derive(move || ctl.state.with(|s| s.list.total_pages))
                total_count=Signal::derive(move || ctl.state.with(|s| s.list.total_count))
                page_size=Signal::derive(move || ctl.state.with(|s| s.filter.limit))
                on_page_change=Callback::new(move |page| ctl.set_page(page))
                on_page_size_change=Callback::new(move |size| ctl.set_limit(size))
                page_size_options=config.page_size_options.clone()
            />
        </div>
    }
}
