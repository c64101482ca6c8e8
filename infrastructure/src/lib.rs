pub mod catalog;
pub mod config;
pub mod error;
pub mod export_writer;
pub mod marketplace_client;
pub mod preview;
