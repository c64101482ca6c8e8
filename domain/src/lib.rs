pub mod export;
pub mod format;
pub mod form;
pub mod input_meter;
pub mod message;
pub mod notification;
pub mod product;
pub mod session;
pub mod transport;
