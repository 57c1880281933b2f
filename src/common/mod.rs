pub mod state;

pub use state::{AppState, DashboardState, ResponseCache};
