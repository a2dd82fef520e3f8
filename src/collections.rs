//! In-memory multi-image collection store.
//!
//! This is the host side of the sync contract: it keeps one rectangle list
//! per image, accepts replace-style updates from the canvas, and hands a
//! list back when the canvas switches images. Nothing here touches disk.

use crate::store::CollectionObserver;
use crate::types::{ImageId, Rectangle};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct ImageCollections {
    collections: HashMap<ImageId, Vec<Rectangle>>,
}

impl ImageCollections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list for `image_id`. Returns false if nothing changed.
    pub fn replace(&mut self, image_id: &ImageId, rectangles: &[Rectangle]) -> bool {
        match self.collections.get_mut(image_id) {
            Some(existing) if existing.as_slice() == rectangles => false,
            Some(existing) => {
                existing.clear();
                existing.extend_from_slice(rectangles);
                true
            }
            None => {
                self.collections.insert(image_id.clone(), rectangles.to_vec());
                true
            }
        }
    }

    /// Copy of the list for `image_id`, if one was ever stored.
    pub fn get(&self, image_id: &ImageId) -> Option<Vec<Rectangle>> {
        self.collections.get(image_id).cloned()
    }

    pub fn contains(&self, image_id: &ImageId) -> bool {
        self.collections.contains_key(image_id)
    }

    /// Number of images with a stored list.
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

#[derive(Debug, Default)]
struct SharedState {
    collections: ImageCollections,
    /// Count of payloads that actually changed something
    writes: u64,
}

/// Shared handle to an [`ImageCollections`], subscribable on a canvas.
///
/// The collections and the write count sit behind one lock, so a reader
/// never sees a stored list without its write counted.
#[derive(Debug, Clone, Default)]
pub struct SharedCollections {
    inner: Arc<Mutex<SharedState>>,
}

impl SharedCollections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, image_id: &ImageId) -> Option<Vec<Rectangle>> {
        self.inner.lock().collections.get(image_id)
    }

    pub fn replace(&self, image_id: &ImageId, rectangles: &[Rectangle]) -> bool {
        let mut state = self.inner.lock();
        let changed = state.collections.replace(image_id, rectangles);
        if changed {
            state.writes += 1;
        }
        changed
    }

    /// Number of updates that were not no-ops.
    pub fn write_count(&self) -> u64 {
        self.inner.lock().writes
    }

    pub fn with<T>(&self, f: impl FnOnce(&ImageCollections) -> T) -> T {
        f(&self.inner.lock().collections)
    }
}

impl CollectionObserver for SharedCollections {
    fn collection_changed(&mut self, image_id: &ImageId, rectangles: &[Rectangle]) {
        if self.replace(image_id, rectangles) {
            tracing::trace!(image = %image_id, count = rectangles.len(), "Collection stored");
        }
    }
}
