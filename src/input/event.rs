/// Platform-agnostic input events.
///
/// These are fed into an [`InputCollector`](super::InputCollector) which
/// folds everything that happened between two frames into one
/// [`InputSnapshot`](super::InputSnapshot).
///
/// # Example
///
/// ```
/// use orbit_rig::input::{InputCollector, InputEvent, InputSource};
/// use orbit_rig::options::KeybindingOptions;
///
/// let mut collector = InputCollector::new(KeybindingOptions::default());
/// collector.handle_event(InputEvent::Resized { width: 800, height: 600 });
/// collector.handle_event(InputEvent::CursorMoved { x: 2.0, y: 300.0 });
/// let snapshot = collector.next_snapshot();
/// assert_eq!(snapshot.pointer_x, 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position (top-left origin).
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels, growing downward.
        y: f32,
    },
    /// Scroll wheel (positive = wheel pushed away from the user).
    Scroll {
        /// Scroll amount in lines.
        delta: f32,
    },
    /// Physical key pressed or released.
    Key {
        /// Key string in `winit::keyboard::KeyCode` debug format
        /// (`"KeyA"`, `"KeyM"`, ...).
        code: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Window surface resized.
    Resized {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Translate a winit window event, if the rig cares about it.
    #[must_use]
    pub fn from_window_event(event: &winit::event::WindowEvent) -> Option<Self> {
        use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
        use winit::keyboard::PhysicalKey;

        match event {
            WindowEvent::CursorMoved { position, .. } => Some(Self::CursorMoved {
                x: position.x as f32,
                y: position.y as f32,
            }),
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                Some(Self::Scroll { delta })
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return None;
                }
                match event.physical_key {
                    PhysicalKey::Code(code) => Some(Self::Key {
                        code: format!("{code:?}"),
                        pressed: event.state == ElementState::Pressed,
                    }),
                    PhysicalKey::Unidentified(_) => None,
                }
            }
            WindowEvent::Resized(size) => Some(Self::Resized {
                width: size.width,
                height: size.height,
            }),
            _ => None,
        }
    }
}
