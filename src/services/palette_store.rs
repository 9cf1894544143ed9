use std::collections::HashMap;

use swatch_color::{
    find_matches, hex_to_lab, DistanceMetric, Lab, MatchResult, ParseColorError, ReferenceColor,
};

use crate::assets::AssetLoader;
use crate::error::PaletteLoadError;
use crate::models::PaletteEntry;

/// Read-only reference palette with lookup indexes
///
/// Loaded once at startup and shared behind an `Arc`; nothing mutates it
/// afterwards.
#[derive(Debug, Default)]
pub struct PaletteStore {
    entries: Vec<ReferenceColor>,
    /// Lowercased code -> position in `entries`
    by_code: HashMap<String, usize>,
    /// Lowercased name -> first position in `entries`
    by_name: HashMap<String, usize>,
}

impl PaletteStore {
    /// Build a store from parsed file entries.
    ///
    /// Fails on the first invalid entry or on a code that appears twice
    /// (case-insensitively).
    pub fn from_entries(entries: Vec<PaletteEntry>) -> Result<Self, PaletteLoadError> {
        let mut store = Self {
            entries: Vec::with_capacity(entries.len()),
            ..Self::default()
        };

        for (index, entry) in entries.into_iter().enumerate() {
            let reference = entry.into_reference(index)?;
            let code_key = reference.code().to_lowercase();
            if store.by_code.contains_key(&code_key) {
                return Err(PaletteLoadError::DuplicateCode {
                    code: reference.code().to_string(),
                });
            }
            store.by_code.insert(code_key, index);
            store
                .by_name
                .entry(reference.name().to_lowercase())
                .or_insert(index);
            store.entries.push(reference);
        }

        Ok(store)
    }

    /// Parse a palette JSON array.
    pub fn from_json(json: &str) -> Result<Self, PaletteLoadError> {
        let entries: Vec<PaletteEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Load the palette from the asset loader (external file or embedded default).
    pub fn load(loader: &AssetLoader) -> Result<Self, PaletteLoadError> {
        let json = loader.read_palette_string()?;
        let store = Self::from_json(&json)?;
        tracing::info!(
            entries = store.len(),
            source = %loader.palette_source(),
            "Loaded palette"
        );
        if store.is_empty() {
            tracing::warn!("Palette is empty, every match query will return no results");
        }
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in file order.
    pub fn entries(&self) -> &[ReferenceColor] {
        &self.entries
    }

    /// Case-insensitive exact lookup by code, e.g. `"2097 c"`.
    pub fn get_by_code(&self, code: &str) -> Option<&ReferenceColor> {
        self.by_code
            .get(&code.to_lowercase())
            .map(|&i| &self.entries[i])
    }

    /// Case-insensitive exact lookup by name. Returns the first entry when
    /// names repeat.
    pub fn get_by_name(&self, name: &str) -> Option<&ReferenceColor> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&i| &self.entries[i])
    }

    /// Entries whose name or code contains `query` (case-insensitive), in
    /// palette order, at most `limit` of them. An empty query lists the
    /// palette from the start.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&ReferenceColor> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| {
                e.name().to_lowercase().contains(&needle)
                    || e.code().to_lowercase().contains(&needle)
            })
            .take(limit)
            .collect()
    }

    /// Rank the palette against a Lab query.
    pub fn rank(&self, query: Lab, limit: usize, metric: DistanceMetric) -> Vec<MatchResult<'_>> {
        find_matches(query, &self.entries, limit, metric)
    }

    /// Parse a hex color and rank the palette against it.
    pub fn find_matches(
        &self,
        color: &str,
        limit: usize,
        metric: DistanceMetric,
    ) -> Result<Vec<MatchResult<'_>>, ParseColorError> {
        let query = hex_to_lab(color)?;
        Ok(self.rank(query, limit, metric))
    }
}
