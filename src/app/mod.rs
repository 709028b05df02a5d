pub(crate) mod buffer;
mod command;
mod command_line;
mod config;
mod edit;
mod file;
mod input;
mod theme;
mod types;
mod viewport;

pub use config::{load_config, Config};
pub use edit::App;
pub use input::handle_key;
pub use types::{char_display_width, Key, Mode};
