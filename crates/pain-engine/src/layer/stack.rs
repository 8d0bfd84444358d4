use std::fmt;

use crate::event::Event;

use super::{Layer, Propagation, UpdateCtx};

/// Identifies a layer for the duration of its membership in a stack.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct LayerId(u64);

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

struct Entry {
    id: LayerId,
    layer: Box<dyn Layer>,
}

impl Entry {
    fn view(&self) -> (LayerId, &dyn Layer) {
        (self.id, self.layer.as_ref())
    }
}

/// Owns the application's layers and defines their dispatch order.
///
/// The sequence is split in two regions: regular layers first, then overlays.
/// `push_layer` appends to the end of the regular region, `push_overlay` to the
/// end of the whole sequence, so overlays always sit above regular layers.
///
/// Index 0 is the bottom of the stack. Updates walk `0..len`, events walk
/// `len..0`. Dropping the stack detaches the remaining layers top-down.
#[derive(Default)]
pub struct LayerStack {
    entries: Vec<Entry>,
    /// First index of the overlay region.
    overlay_start: usize,
    next_id: u64,
}

impl LayerStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `layer` after all regular layers and attaches it.
    pub fn push_layer<L: Layer + 'static>(&mut self, layer: L) -> LayerId {
        let at = self.overlay_start;
        self.overlay_start += 1;
        self.insert(at, Box::new(layer))
    }

    /// Inserts `layer` on top of everything and attaches it.
    pub fn push_overlay<L: Layer + 'static>(&mut self, layer: L) -> LayerId {
        let at = self.entries.len();
        self.insert(at, Box::new(layer))
    }

    fn insert(&mut self, at: usize, mut layer: Box<dyn Layer>) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;

        layer.on_attach();
        log::debug!("attached layer `{}` {id} at position {at}", layer.name());

        self.entries.insert(at, Entry { id, layer });
        id
    }

    /// Removes the layer with `id`, detaches it and hands it back.
    ///
    /// Returns `None` and leaves the stack untouched if `id` is not present.
    pub fn pop_layer(&mut self, id: LayerId) -> Option<Box<dyn Layer>> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        if index < self.overlay_start {
            self.overlay_start -= 1;
        }

        let Entry { mut layer, .. } = self.entries.remove(index);
        layer.on_detach();
        log::debug!("detached layer `{}` {id}", layer.name());
        Some(layer)
    }

    /// Detaches and drops every layer, top-most first.
    pub fn clear(&mut self) {
        while let Some(Entry { id, mut layer }) = self.entries.pop() {
            layer.on_detach();
            log::debug!("detached layer `{}` {id}", layer.name());
        }
        self.overlay_start = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: LayerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Number of layers below the overlay region.
    pub fn regular_len(&self) -> usize {
        self.overlay_start
    }

    /// Bottom-to-top, the order in which layers are updated.
    pub fn update_order(
        &self,
    ) -> impl DoubleEndedIterator<Item = (LayerId, &dyn Layer)> + ExactSizeIterator {
        self.entries.iter().map(Entry::view)
    }

    /// Top-to-bottom, the order in which layers receive events.
    pub fn event_order(
        &self,
    ) -> impl DoubleEndedIterator<Item = (LayerId, &dyn Layer)> + ExactSizeIterator {
        self.update_order().rev()
    }

    /// Offers `event` to each layer top-down.
    ///
    /// Only input can be consumed: a layer returning [`Propagation::Stop`] for
    /// an [`Event::Input`] hides it from the layers below. Lifecycle events
    /// always reach every layer.
    pub fn dispatch_event(&mut self, event: &Event) -> Propagation {
        let consumable = matches!(event, Event::Input(_));
        for entry in self.entries.iter_mut().rev() {
            if entry.layer.on_event(event) == Propagation::Stop && consumable {
                log::trace!("event consumed by layer `{}` {}", entry.layer.name(), entry.id);
                return Propagation::Stop;
            }
        }
        Propagation::Continue
    }

    /// Runs one update pass bottom-up.
    pub fn update(&mut self, ctx: &mut UpdateCtx<'_>) {
        for entry in self.entries.iter_mut() {
            entry.layer.on_update(ctx);
        }
    }
}

impl Drop for LayerStack {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for LayerStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|e| (e.id, e.layer.name())))
            .finish()
    }
}
