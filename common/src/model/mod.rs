pub mod label;
pub mod session;
