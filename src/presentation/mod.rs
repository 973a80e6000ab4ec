pub mod export;
pub mod table;
pub mod timeline;
