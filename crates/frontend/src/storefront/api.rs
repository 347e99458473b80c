use contracts::domain::a003_product::aggregate::Product;
use contracts::shared::envelope::ApiError;
use contracts::shared::pagination::ListResource;
use contracts::shared::query::ListQuery;

use crate::shared::api_client::ApiClient;
use crate::shared::api_utils::item_path;

pub const PRODUCTS_PATH: &str = "/api/routes/products";
pub const ORDERS_PATH: &str = "/api/routes/orders";

pub async fn fetch_products(
    client: ApiClient,
    query: &ListQuery,
) -> Result<ListResource<Product>, ApiError> {
    client.get_list(PRODUCTS_PATH, query).await
}

pub async fn fetch_product(client: ApiClient, id: &str) -> Result<Product, ApiError> {
    client.get(&item_path(PRODUCTS_PATH, id)).await
}

