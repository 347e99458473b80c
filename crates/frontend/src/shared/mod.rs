pub mod api_client;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod icons;
pub mod message;
pub mod modal_frame;
pub mod resource;
