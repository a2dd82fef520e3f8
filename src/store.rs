//! Active rectangle collection and its change observers.
//!
//! The store holds the collection for exactly one image at a time. Every
//! mutation pushes the full `(image, rectangles)` pair to all observers;
//! re-hydrating for another image replaces the list silently.

use crate::types::{ImageId, Rectangle};

/// Receives the full collection after every mutation.
///
/// Payloads are replacements, never deltas, and the same payload may be
/// delivered more than once in a row.
pub trait CollectionObserver {
    fn collection_changed(&mut self, image_id: &ImageId, rectangles: &[Rectangle]);
}

impl<F> CollectionObserver for F
where
    F: FnMut(&ImageId, &[Rectangle]),
{
    fn collection_changed(&mut self, image_id: &ImageId, rectangles: &[Rectangle]) {
        (*self)(image_id, rectangles)
    }
}

/// Handle returned by [`RectangleStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct RectangleStore {
    image_id: ImageId,
    rectangles: Vec<Rectangle>,
    observers: Vec<(SubscriptionId, Box<dyn CollectionObserver>)>,
    next_subscription: u64,
    /// Bumped on every change to `rectangles`
    revision: u64,
}

impl RectangleStore {
    pub fn new(image_id: ImageId, rectangles: Option<Vec<Rectangle>>) -> Self {
        Self {
            image_id,
            rectangles: rectangles.unwrap_or_default(),
            observers: Vec::new(),
            next_subscription: 0,
            revision: 0,
        }
    }

    pub fn image_id(&self) -> &ImageId {
        &self.image_id
    }

    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }

    pub fn get(&self, index: usize) -> Option<&Rectangle> {
        self.rectangles.get(index)
    }

    pub fn len(&self) -> usize {
        self.rectangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rectangles.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn subscribe(&mut self, observer: impl CollectionObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Append a committed rectangle and notify. Returns its index.
    pub fn push(&mut self, rect: Rectangle) -> usize {
        self.rectangles.push(rect);
        self.revision += 1;
        self.notify();
        self.rectangles.len() - 1
    }

    /// Edit a rectangle in place and notify.
    ///
    /// Returns false without notifying if `index` is out of range.
    pub fn update(&mut self, index: usize, edit: impl FnOnce(&mut Rectangle)) -> bool {
        let Some(rect) = self.rectangles.get_mut(index) else {
            return false;
        };
        edit(rect);
        self.revision += 1;
        self.notify();
        true
    }

    /// Replace the active collection with another image's list.
    ///
    /// Observers are not notified: the list came from the host to begin with.
    pub fn rehydrate(&mut self, image_id: ImageId, rectangles: Option<Vec<Rectangle>>) {
        self.image_id = image_id;
        self.rectangles = rectangles.unwrap_or_default();
        self.revision += 1;
    }

    fn notify(&mut self) {
        let image_id = &self.image_id;
        let rectangles = &self.rectangles;
        for (_, observer) in self.observers.iter_mut() {
            observer.collection_changed(image_id, rectangles);
        }
    }
}
