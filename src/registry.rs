/// Ordered set of animatable element ids, filled as tiles mount.
///
/// Registering the same id twice is a no-op, so re-renders cannot inflate the
/// stagger index of later tiles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registry<T> {
    items: Vec<T>,
}

impl<T: PartialEq> Registry<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns false if `item` was already present.
    pub fn register(&mut self, item: T) -> bool {
        if self.items.contains(&item) {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
