pub mod colors;
pub mod convert;
pub mod matching;
pub mod params;
pub mod schema;

pub use colors::{__path_handle_get_color, __path_handle_list_colors, __path_handle_palette_summary};
pub use colors::{handle_get_color, handle_list_colors, handle_palette_summary, ColorsQuery};
pub use convert::{handle_convert, ConvertQuery, __path_handle_convert};
pub use matching::{handle_match, MatchQuery, __path_handle_match};
pub use schema::{ColorInfo, ColorListResponse, MatchEntry, MatchResponse, PaletteSummary, SwatchResponse};
