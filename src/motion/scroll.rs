use super::Surface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Crossing {
    /// Top edge moved up past the threshold line (scrolling down).
    Enter,
    /// Top edge moved back below the threshold line (scrolling up).
    Exit,
}

#[derive(Debug)]
struct Subscription<K> {
    target: String,
    threshold: f64,
    key: K,
    entered: bool,
}

/// Page-level scroll observer.
///
/// Each subscription watches one element's top edge against a line at
/// `threshold` of the viewport height. Only state changes are reported, so a
/// crossing produces exactly one event however often the page is sampled.
#[derive(Debug)]
pub struct ScrollDispatcher<K> {
    subscriptions: Vec<Subscription<K>>,
}

impl<K> Default for ScrollDispatcher<K> {
    fn default() -> Self {
        Self {
            subscriptions: Vec::new(),
        }
    }
}

impl<K: Clone> ScrollDispatcher<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, target: impl Into<String>, threshold: f64, key: K) {
        self.subscriptions.push(Subscription {
            target: target.into(),
            threshold,
            key,
            entered: false,
        });
    }

    pub fn clear(&mut self) {
        self.subscriptions.clear();
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    pub fn dispatch(&mut self, surface: &impl Surface) -> Vec<(K, Crossing)> {
        let viewport = surface.viewport_height();
        let mut events = Vec::new();
        for sub in self.subscriptions.iter_mut() {
            let Some(top) = surface.viewport_top(&sub.target) else {
                continue;
            };
            let entered = top <= sub.threshold * viewport;
            if entered == sub.entered {
                continue;
            }
            sub.entered = entered;
            let crossing = if entered {
                Crossing::Enter
            } else {
                Crossing::Exit
            };
            events.push((sub.key.clone(), crossing));
        }
        events
    }
}
