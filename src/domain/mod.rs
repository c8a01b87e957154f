pub mod book;
pub mod code;
pub mod entry;
pub mod error;
