mod database;
mod myconfig;

pub use self::database::{ConnectionManager, ConnectionPool, DatabaseBackend};
pub use self::myconfig::Config;
