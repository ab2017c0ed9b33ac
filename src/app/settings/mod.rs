pub mod read_settings;
pub mod write_settings;
pub mod config_dirs;
pub mod keybinds;
pub mod runtime_keybinds;

// Re-export commonly used types/functions for convenience
pub use read_settings::{load_settings, load_settings_or_default};
pub use write_settings::save_settings;
pub use write_settings::Settings;
pub use config_dirs::{default_settings_path, project_config_dir, user_cache_dir};
pub use keybinds::*;
