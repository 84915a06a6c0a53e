use serde::Deserialize;
use std::collections::HashMap;

/// Top-level container for the game-data document. Only the `items` mapping
/// is consumed here; the document also carries recipes, buildings and the
/// like, which serde skips.
#[derive(Debug, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    items: HashMap<String, super::Item>,
}

impl Catalog {
    /// Borrow the catalogue entries keyed by their item class name.
    pub fn items(&self) -> &HashMap<String, super::Item> {
        &self.items
    }
}
