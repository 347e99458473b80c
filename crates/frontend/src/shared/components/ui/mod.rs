pub mod badge;

pub use badge::{status_badge, Badge};
