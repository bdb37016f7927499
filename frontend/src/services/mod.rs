pub mod api;
pub mod date_utils;
pub mod download;
pub mod logging;
pub mod session;
