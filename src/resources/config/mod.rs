pub mod server;

pub use server::{ServerConfig, CONFIG_PATH_VAR};
