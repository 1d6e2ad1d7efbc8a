mod database;
mod http;
mod myconfig;

pub use self::database::{ConnectionManager, ConnectionPool, DatabaseConfig};
pub use self::http::HttpClientConfig;
pub use self::myconfig::{Config, MailConfig, PushConfig, ReconciliationConfig};
