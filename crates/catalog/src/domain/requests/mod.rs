pub mod comment;
pub mod product;
