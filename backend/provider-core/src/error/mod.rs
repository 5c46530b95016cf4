pub mod config;
pub mod todo_client;

pub use config::ConfigError;
pub use todo_client::TodoClientError;
