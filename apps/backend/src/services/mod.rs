pub mod store;
pub mod study;
