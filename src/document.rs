//! The document table: a mapping from document id to the *current* original
//! string. Needed for similarity scoring (`|s|`) and `document(id)`. A
//! repeated `insert` under the same id overwrites the entry here, but edge
//! labels never resolve through this table — they address the tree's frozen
//! per-insertion buffers instead (see `crate::edge::BufferIdx`), so an
//! overwrite here cannot corrupt bytes an earlier insertion already indexed.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub(crate) struct DocumentTable {
    texts: BTreeMap<u32, String>,
}

impl DocumentTable {
    pub fn new() -> Self {
        Self {
            texts: BTreeMap::new(),
        }
    }

    /// Records (or re-records, for a repeated id) the text inserted under `id`.
    pub fn insert(&mut self, id: u32, text: String) {
        self.texts.insert(id, text);
    }

    pub fn text(&self, id: u32) -> Option<&str> {
        self.texts.get(&id).map(String::as_str)
    }
}
