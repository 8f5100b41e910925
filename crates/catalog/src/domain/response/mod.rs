pub mod api;
pub mod comment;
pub mod product;
