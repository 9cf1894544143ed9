//! Test fixtures and constants.

/// Query colors
pub mod colors {
    /// PANTONE 2097 C, present in the embedded palette
    pub const PANTONE_2097: &str = "%235F3EFF";

    /// Same color without the leading '#'
    pub const PANTONE_2097_BARE: &str = "5F3EFF";

    /// Mid gray, where CIE76 and CIEDE2000 rank the gray fixture differently
    pub const MID_GRAY: &str = "808080";
}

/// A two-entry palette of grays. For #808080 CIE76 prefers "SG" and
/// CIEDE2000 prefers "LG".
pub const GRAY_PALETTE: &str = r##"[
    {"name": "Light Gray", "code": "LG", "hex": "#9A9A9A"},
    {"name": "Sage Gray", "code": "SG", "hex": "#7A8A80"}
]"##;

/// Small palette mixing hex-only, rgb-only and Lab-carrying entries
pub const SMALL_PALETTE: &str = r##"[
    {"name": "PANTONE 2097 C", "code": "2097 C", "hex": "#5F3EFF",
     "lab": {"L": 42.91, "a": 64.24, "b": -90.1}},
    {"name": "PANTONE 072 C", "code": "072 C", "rgb": {"r": 16, "g": 6, "b": 159}},
    {"name": "PANTONE 266 C", "code": "266 C", "hex": "#753BBD"},
    {"name": "PANTONE Black C", "code": "Black C", "hex": "#2D2926"},
    {"name": "Paper White", "code": "White", "hex": "#FFFFFF"}
]"##;
