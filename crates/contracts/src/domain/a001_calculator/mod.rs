pub mod catalog;
pub mod send;
