pub mod normalizer;
pub mod palette_store;

pub use normalizer::{normalize_entries, NormalizeReport};
pub use palette_store::PaletteStore;
