pub mod components;
pub mod resources;
pub mod server;
pub mod systems;
pub mod utils;
