pub mod logging;
pub mod paths;
pub mod terminal;

pub use logging::{LogTarget, init_logging};
pub use paths::{default_data_dir, format_path_with_tilde, resolve_data_dir};
pub use terminal::{sanitize_line, strip_ansi_codes};
