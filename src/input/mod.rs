//! Input handling: event types, per-frame snapshots, and the collector that
//! folds raw window events into snapshots.

/// Raw-event accumulator implementing [`InputSource`].
pub mod collector;
/// Platform-agnostic input events.
pub mod event;
/// Bindable rig actions.
pub mod keyboard;
/// Per-frame input snapshot and source trait.
pub mod snapshot;

pub use collector::InputCollector;
pub use event::InputEvent;
pub use keyboard::RigAction;
pub use snapshot::{InputSnapshot, InputSource};
