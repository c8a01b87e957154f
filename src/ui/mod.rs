pub mod client;
pub mod dialog;
pub mod presenter;
