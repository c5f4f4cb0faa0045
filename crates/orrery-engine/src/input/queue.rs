/// Input event types the engine understands.
/// Generic; no visualization-specific semantics.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// A pointer button was pressed at screen coordinates (x, y).
    PointerDown { x: f32, y: f32 },
    /// A pointer button was released at screen coordinates (x, y).
    PointerUp { x: f32, y: f32 },
    /// The pointer moved to screen coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// Wheel scroll; positive delta scrolls away from the user.
    Wheel { delta: f32 },
    /// A key was pressed.
    KeyDown { key_code: u32 },
}

/// Key code for the space bar (camera reset binding).
pub const KEY_SPACE: u32 = 32;

/// A queue of input events.
/// The browser writes events into the queue; the frame step drains them.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from the event-listener exports).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0 });
        q.push(InputEvent::KeyDown { key_code: KEY_SPACE });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn wheel_event_carries_delta() {
        let mut q = InputQueue::new();
        q.push(InputEvent::Wheel { delta: -3.0 });
        match q.drain()[0] {
            InputEvent::Wheel { delta } => assert_eq!(delta, -3.0),
            _ => panic!("expected wheel event"),
        }
    }
}
