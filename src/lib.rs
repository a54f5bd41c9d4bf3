//! Takkeh marketing site: a bilingual English/Arabic single page for the
//! delivery platform's three audiences (customers, vendors, drivers).
//!
//! Language and text direction live in a single context at the top of the
//! tree; everything below renders from fixed per-language string tables.

pub mod app;
pub mod components;
pub mod config;
pub mod i18n;
pub mod pages;
pub mod sections;
pub mod utils;

pub use app::App;
