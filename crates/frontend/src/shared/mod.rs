pub mod api_utils;
pub mod config;
pub mod error;
pub mod export;
pub mod i18n;
pub mod locale;
pub mod number_format;
