pub mod config;
pub mod imgconv_toml;
pub mod logger;

pub use config::*;
pub use imgconv_toml::{ImgconvToml, apply_file_to_opts, load_imgconv_toml, parse_imgconv_toml};
pub use logger::setup_logging;
