//! Public storefront pages and the customer's own orders.

pub mod api;
pub mod carousel;
pub mod home;
pub mod my_orders;
pub mod product_card;
pub mod product_details;
pub mod product_list;
pub mod showcase;
pub mod store_layout;
