pub mod discount_type;
pub mod status;
