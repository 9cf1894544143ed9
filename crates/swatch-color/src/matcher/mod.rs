//! Palette matching
//!
//! This module provides the reference palette entry type and the top-K
//! nearest-color ranking built on the difference metrics.

mod ranking;
mod reference;

pub use ranking::{find_matches, find_matches_by, MatchResult};
pub use reference::ReferenceColor;
