// world_core/src/events.rs

/// Broadcast dispatcher for one event type.
///
/// Listeners are plain closures; emitting with no listeners is fine.
pub struct Signal<T = ()> {
    listeners: Vec<Box<dyn FnMut(&T)>>,
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self { listeners: Vec::new() }
    }
}

impl<T> Signal<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Every `emit` calls it with the payload.
    pub fn connect(&mut self, handler: impl FnMut(&T) + 'static) {
        self.listeners.push(Box::new(handler));
    }

    /// Notify all registered listeners.
    pub fn emit(&mut self, payload: &T) {
        for cb in self.listeners.iter_mut() {
            cb(payload);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn emit_reaches_every_listener() {
        let hits = Rc::new(Cell::new(0));
        let mut signal: Signal<u32> = Signal::new();

        for _ in 0..3 {
            let hits = hits.clone();
            signal.connect(move |n| hits.set(hits.get() + *n));
        }

        signal.emit(&2);
        assert_eq!(hits.get(), 6);
    }

    #[test]
    fn emit_without_listeners_is_a_no_op() {
        let mut signal: Signal<()> = Signal::new();
        signal.emit(&());
    }
}
