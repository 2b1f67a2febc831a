pub mod forms;
pub mod handlers;
pub mod helpers;
pub mod markup;
pub mod middleware;
pub mod security;
pub mod session;
pub mod state;
pub mod templates;
pub mod views;

pub use state::AppState;
