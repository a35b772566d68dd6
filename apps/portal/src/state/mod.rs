pub mod app_state;
pub mod security_config;

pub use app_state::AppState;
pub use security_config::SecurityConfig;
