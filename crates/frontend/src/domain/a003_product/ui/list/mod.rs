//! Product management for admins (all vendors) and vendors (own catalogue).

use contracts::domain::a003_product::aggregate::{Product, ProductDto};
use contracts::domain::entity_ref::{ref_label, EntityRef};
use contracts::enums::status::{ActiveStatus, EntityStatus};
use contracts::shared::format::format_money;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::shared::resource::field::{coerce_int, coerce_number, number_to_input, FieldKind, FieldSpec};
use crate::shared::resource::list_page::{resource_list_page, ListPageOptions};
use crate::shared::resource::{any_contains, Column, Resource};

fn price_cell(p: &Product) -> String {
    match p.discount_percent() {
        0 => format_money(p.price),
        pct => format!("{} ({}% off)", format_money(p.effective_price()), pct),
    }
}

fn product_search(item: &Product, needle: &str) -> bool {
    let category = ref_label(&item.category);
    let vendor = ref_label(&item.vendor);
    any_contains(
        needle,
        &[item.name.as_str(), category.as_str(), vendor.as_str()],
    )
}

fn product_fields(
    categories_path: &'static str,
    subcategories_path: &'static str,
) -> Vec<FieldSpec<ProductDto>> {
    vec![
        FieldSpec::new(
            "name",
            "Name",
            FieldKind::Text,
            |d: &ProductDto| d.name.clone(),
            |d, v| d.name = v,
        )
        .required(),
        FieldSpec::new(
            "description",
            "Description",
            FieldKind::TextArea,
            |d| d.description.clone(),
            |d, v| d.description = v,
        ),
        FieldSpec::new(
            "price",
            "Price",
            FieldKind::Number,
            |d: &ProductDto| number_to_input(d.price),
            |d, v| d.price = coerce_number(&v),
        )
        .required(),
        FieldSpec::new(
            "salePrice",
            "Sale price",
            FieldKind::Number,
            |d| number_to_input(d.sale_price),
            |d, v| d.sale_price = coerce_number(&v),
        ),
        FieldSpec::new(
            "stock",
            "Stock",
            FieldKind::Number,
            |d| d.stock.to_string(),
            |d, v| d.stock = coerce_int(&v),
        ),
        FieldSpec::new(
            "category",
            "Category",
            FieldKind::RemoteSelect {
                path: categories_path,
            },
            |d: &ProductDto| d.category_id.clone(),
            |d, v| d.category_id = v,
        )
        .required(),
        FieldSpec::new(
            "subcategory",
            "Subcategory",
            FieldKind::RemoteSelect {
                path: subcategories_path,
            },
            |d| d.subcategory_id.clone(),
            |d, v| d.subcategory_id = v,
        ),
        FieldSpec::new(
            "image",
            "Image URL",
            FieldKind::Text,
            |d| d.image.clone(),
            |d, v| d.image = v,
        ),
        FieldSpec::new(
            "status",
            "Status",
            FieldKind::status_select::<ActiveStatus>(),
            |d| d.status.code().to_string(),
            |d, v| d.status = ActiveStatus::from_code(&v).unwrap_or_default(),
        ),
    ]
}

/// Every vendor's products; admins moderate but do not create them
pub struct AdminProducts;

impl Resource for AdminProducts {
    type Item = Product;
    type Draft = ProductDto;
    type Status = ActiveStatus;

    const KEY: &'static str = "admin_products";
    const TITLE: &'static str = "Products";
    const ELEMENT: &'static str = "product";

    fn base_path() -> &'static str {
        "/api/admins/products"
    }

    fn id(item: &Product) -> &str {
        &item.id
    }

    fn label(item: &Product) -> String {
        item.name.clone()
    }

    fn draft_from(item: &Product) -> ProductDto {
        ProductDto::from(item)
    }

    fn draft_id(draft: &ProductDto) -> Option<String> {
        draft.id.clone()
    }

    fn validate(draft: &ProductDto) -> Result<(), String> {
        draft.validate().map_err(str::to_string)
    }

    fn prepare(draft: &mut ProductDto) {
        draft.prepare();
    }

    fn matches_search(item: &Product, needle: &str) -> bool {
        product_search(item, needle)
    }

    fn columns() -> Vec<Column<Product>> {
        vec![
            Column::text("Name", |p| p.name.clone()),
            Column::text("Vendor", |p| ref_label(&p.vendor)),
            Column::muted("Category", |p| ref_label(&p.category)),
            Column::money("Price", price_cell),
            Column::money("Stock", |p| p.stock.to_string()),
        ]
    }

    fn fields() -> Vec<FieldSpec<ProductDto>> {
        product_fields("/api/admins/categories", "/api/admins/subcategories")
    }

    fn can_create() -> bool {
        false
    }

    fn status(item: &Product) -> Option<ActiveStatus> {
        Some(item.status)
    }

    fn set_status(item: &mut Product, status: ActiveStatus) {
        item.status = status;
    }

    fn vendor_of(item: &Product) -> Option<EntityRef> {
        item.vendor.clone()
    }
}

/// Products of the signed-in vendor
pub struct VendorProducts;

impl Resource for VendorProducts {
    type Item = Product;
    type Draft = ProductDto;
    type Status = ActiveStatus;

    const KEY: &'static str = "vendor_products";
    const TITLE: &'static str = "My products";
    const ELEMENT: &'static str = "product";

    fn base_path() -> &'static str {
        "/api/vendors/products"
    }

    fn id(item: &Product) -> &str {
        &item.id
    }

    fn label(item: &Product) -> String {
        item.name.clone()
    }

    fn draft_from(item: &Product) -> ProductDto {
        ProductDto::from(item)
    }

    fn draft_id(draft: &ProductDto) -> Option<String> {
        draft.id.clone()
    }

    fn validate(draft: &ProductDto) -> Result<(), String> {
        draft.validate().map_err(str::to_string)
    }

    fn prepare(draft: &mut ProductDto) {
        draft.prepare();
    }

    fn matches_search(item: &Product, needle: &str) -> bool {
        product_search(item, needle)
    }

    fn columns() -> Vec<Column<Product>> {
        vec![
            Column::text("Name", |p| p.name.clone()),
            Column::muted("Category", |p| ref_label(&p.category)),
            Column::money("Price", price_cell),
            Column::money("Stock", |p| p.stock.to_string()),
        ]
    }

    fn fields() -> Vec<FieldSpec<ProductDto>> {
        product_fields("/api/routes/categories", "/api/routes/subcategories")
    }

    fn status(item: &Product) -> Option<ActiveStatus> {
        Some(item.status)
    }

    fn set_status(item: &mut Product, status: ActiveStatus) {
        item.status = status;
    }
}

/// Storefront detail page of the row
fn view_in_store() -> Callback<String> {
    let navigate = use_navigate();
    Callback::new(move |id: String| navigate(&format!("/products/{}", id), Default::default()))
}

#[component]
#[allow(non_snake_case)]
pub fn AdminProductList() -> impl IntoView {
    resource_list_page::<AdminProducts>(ListPageOptions {
        icon: Some("products"),
        on_view: Some(view_in_store()),
        ..ListPageOptions::default()
    })
}

#[component]
#[allow(non_snake_case)]
pub fn VendorProductList() -> impl IntoView {
    resource_list_page::<VendorProducts>(ListPageOptions {
        icon: Some("products"),
        on_view: Some(view_in_store()),
        ..ListPageOptions::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(json: &str) -> Product {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_price_cell_shows_discount() {
        let plain = product(r#"{"_id":"p1","name":"Lamp","price":1299}"#);
        assert_eq!(price_cell(&plain), "₹1,299");

        let sale = product(r#"{"_id":"p2","name":"Lamp","price":100,"salePrice":80}"#);
        assert_eq!(price_cell(&sale), "₹80 (20% off)");
    }

    #[test]
    fn test_search_covers_vendor_and_category() {
        let p = product(
            r#"{"_id":"p1","name":"Desk Lamp","price":10,
                "vendor":{"_id":"v1","businessName":"Bright Co"},
                "category":{"_id":"c1","name":"Home"}}"#,
        );
        assert!(AdminProducts::matches_search(&p, "bright"));
        assert!(VendorProducts::matches_search(&p, "home"));
        assert!(!AdminProducts::matches_search(&p, "garden"));
        assert_eq!(AdminProducts::vendor_of(&p).map(|v| v.label().to_string()), Some("Bright Co".into()));
    }

    #[test]
    fn test_number_fields_coerce_garbage_to_zero() {
        let fields = VendorProducts::fields();
        let price = fields.iter().find(|f| f.name == "price").unwrap();
        let stock = fields.iter().find(|f| f.name == "stock").unwrap();
        let mut draft = ProductDto::default();
        (price.set)(&mut draft, "12.5".into());
        (stock.set)(&mut draft, "abc".into());
        assert_eq!(draft.price, 12.5);
        assert_eq!(draft.stock, 0);
        assert_eq!((price.get)(&draft), "12.5");
    }

    #[test]
    fn test_only_vendors_create_products() {
        assert!(!AdminProducts::can_create());
        assert!(VendorProducts::can_create());
    }
}
