//! Append-only owner of generated chunks, keyed by [`ChunkCoord`].

use atlas_terrain::{Chunk, ChunkCoord};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// All generated chunks.
///
/// Chunks are inserted once and never replaced or removed. Persisted as a
/// list sorted by coordinate so save files are stable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChunkStore {
    chunks: FxHashMap<ChunkCoord, Chunk>,
}

impl ChunkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from chunks; later duplicates of a coordinate are ignored.
    pub fn from_chunks(chunks: impl IntoIterator<Item = Chunk>) -> Self {
        let mut store = Self::new();
        for chunk in chunks {
            store.insert(chunk);
        }
        store
    }

    /// Insert a chunk if its coordinate is vacant. Returns `false` and drops
    /// the chunk when one already exists there.
    pub fn insert(&mut self, chunk: Chunk) -> bool {
        match self.chunks.entry(chunk.coord) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(chunk);
                true
            }
        }
    }

    pub fn get(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    pub fn contains(&self, coord: ChunkCoord) -> bool {
        self.chunks.contains_key(&coord)
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Chunks in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.values()
    }

    /// Coordinates in ascending order.
    pub fn coords(&self) -> Vec<ChunkCoord> {
        let mut coords: Vec<_> = self.chunks.keys().copied().collect();
        coords.sort_unstable();
        coords
    }

    /// Chunks in ascending coordinate order.
    pub fn sorted(&self) -> Vec<&Chunk> {
        let mut chunks: Vec<_> = self.chunks.values().collect();
        chunks.sort_unstable_by_key(|c| c.coord);
        chunks
    }
}

impl Serialize for ChunkStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.sorted())
    }
}

impl<'de> Deserialize<'de> for ChunkStore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Chunk>::deserialize(deserializer).map(Self::from_chunks)
    }
}
