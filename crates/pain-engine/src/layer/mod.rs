//! Ordered update/event participants.
//!
//! Layers are pushed onto a [`LayerStack`]. Updates run bottom-up (first pushed
//! first); events run top-down so that overlays see input before the layers
//! underneath them.

mod ctx;
mod stack;

pub use ctx::UpdateCtx;
pub use stack::{LayerId, LayerStack};

use crate::event::Event;

/// Whether an event keeps travelling down the stack.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Propagation {
    Continue,
    /// The input was consumed; lower layers do not see it. Ignored for
    /// lifecycle events, which always reach every layer.
    Stop,
}

/// One participant in the frame pipeline.
///
/// Every hook has a no-op default. `on_attach` and `on_detach` bracket exactly
/// one stack membership.
pub trait Layer {
    /// Name used in diagnostics.
    fn name(&self) -> &str {
        "layer"
    }

    /// Called once when the layer is pushed.
    fn on_attach(&mut self) {}

    /// Called once when the layer is popped or the stack is torn down.
    fn on_detach(&mut self) {}

    /// Called once per frame while the application is not minimized.
    fn on_update(&mut self, ctx: &mut UpdateCtx<'_>) {
        let _ = ctx;
    }

    /// Called once per polled event, top-most layer first.
    fn on_event(&mut self, event: &Event) -> Propagation {
        let _ = event;
        Propagation::Continue
    }
}
