//! API layer - HTTP endpoints and shared types

pub mod health;
pub mod predict;
pub mod router;
pub mod state;
pub mod types;

pub use router::create_router_with_state;
pub use state::AppState;
