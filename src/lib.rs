pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod loader;
pub mod models;
pub mod seed;
pub mod stats;
pub mod store;
pub mod ui;
pub mod state;
pub mod validation;

pub use app::router;
pub use config::Config;
pub use loader::spawn_load;
pub use state::AppState;
pub use store::HabitStore;
