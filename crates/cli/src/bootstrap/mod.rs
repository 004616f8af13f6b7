pub mod config;
pub mod database;
pub mod logging;
pub mod state;

pub use config::load_config;
pub use database::init_database;
pub use logging::init_logging;
pub use state::build_app_state;
