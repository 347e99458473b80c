pub mod a001_category;
pub mod a002_subcategory;
pub mod a003_product;
pub mod a004_order;
pub mod a005_discount;
pub mod a006_customer;
pub mod a007_vendor;
pub mod a008_admin;
pub mod a009_help_content;
