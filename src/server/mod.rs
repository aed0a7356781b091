mod errors;
mod extract;
mod handlers;
mod startup;
mod structures;

pub use errors::ApiError;
pub use extract::JsonBody;
pub use startup::{create_router, setup_state};
pub use structures::{AppState, ErrorBody, SaveResponse};
