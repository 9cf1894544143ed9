pub mod config;
pub mod palette_file;

pub use config::AppConfig;
pub use palette_file::{HslValue, LabValue, PaletteEntry, RgbValue};
