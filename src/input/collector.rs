//! Folds raw platform events into per-frame snapshots.
//!
//! The `InputCollector` owns all transient input state (held keys, pointer
//! position, pending scroll, screen size) and the key-binding map. It sits
//! between raw window events and [`RigSession::frame`](crate::engine::RigSession::frame).

use std::collections::HashSet;

use super::event::InputEvent;
use super::keyboard::RigAction;
use super::snapshot::{InputSnapshot, InputSource};
use crate::options::KeybindingOptions;

/// Accumulates [`InputEvent`]s between frames.
///
/// Scroll is summed until the next snapshot. Held actions persist across
/// frames until released. Recenter is edge-triggered: it is reported only
/// in the first snapshot after the key went down.
pub struct InputCollector {
    bindings: KeybindingOptions,
    held: HashSet<RigAction>,
    /// Last cursor position, top-left origin. `None` until the cursor moves.
    pointer: Option<(f32, f32)>,
    screen: (f32, f32),
    pending_scroll: f32,
    recenter_latched: bool,
}

impl InputCollector {
    /// Create a collector with the given key bindings and an 800×600 screen.
    #[must_use]
    pub fn new(bindings: KeybindingOptions) -> Self {
        Self {
            bindings,
            held: HashSet::new(),
            pointer: None,
            screen: (800.0, 600.0),
            pending_scroll: 0.0,
            recenter_latched: false,
        }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn bindings(&self) -> &KeybindingOptions {
        &self.bindings
    }

    /// Replace the key bindings. Held actions are released.
    pub fn set_bindings(&mut self, bindings: KeybindingOptions) {
        self.bindings = bindings;
        self.held.clear();
    }

    /// Whether `action` is currently held.
    #[must_use]
    pub fn is_held(&self, action: RigAction) -> bool {
        self.held.contains(&action)
    }

    /// Record one raw event.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => self.pointer = Some((x, y)),
            InputEvent::Scroll { delta } => self.pending_scroll += delta,
            InputEvent::Key { code, pressed } => self.handle_key(&code, pressed),
            InputEvent::Resized { width, height } => {
                self.screen = (width as f32, height as f32);
            }
        }
    }

    fn handle_key(&mut self, code: &str, pressed: bool) {
        let Some(action) = self.bindings.lookup(code) else {
            return;
        };
        if pressed {
            let newly_down = self.held.insert(action);
            if newly_down && action == RigAction::Recenter {
                self.recenter_latched = true;
            }
        } else {
            let _ = self.held.remove(&action);
        }
    }
}

impl InputSource for InputCollector {
    fn next_snapshot(&mut self) -> InputSnapshot {
        let (width, height) = self.screen;
        let mut snapshot = InputSnapshot::centered(width, height);
        if let Some((x, y)) = self.pointer {
            snapshot = snapshot.with_pointer(x, height - y);
        }
        snapshot.scroll_delta = std::mem::take(&mut self.pending_scroll);
        snapshot.rotate_left = self.is_held(RigAction::RotateLeft);
        snapshot.rotate_right = self.is_held(RigAction::RotateRight);
        snapshot.tilt_up = self.is_held(RigAction::TiltUp);
        snapshot.tilt_down = self.is_held(RigAction::TiltDown);
        snapshot.recenter_pressed = std::mem::take(&mut self.recenter_latched);
        snapshot
    }
}
