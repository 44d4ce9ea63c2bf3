//! Engine module: command surface, converter capability, path helpers

pub mod arg_parser;
pub mod cli;
pub mod converter;
pub mod tools;

// Re-export commonly used items
pub use arg_parser::Cli;
pub use cli::handle_run;
pub use converter::{Converter, ImageConverter};
pub use tools::{file_extension, has_extension, path_relative_to, target_path_for};
