pub mod accordion;
pub mod download;
pub mod footer;
pub mod header;
