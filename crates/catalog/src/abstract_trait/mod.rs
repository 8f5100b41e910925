pub mod comment;
pub mod product;
mod schema;

pub use self::schema::{DynSchemaInitializer, SchemaInitializerTrait};
