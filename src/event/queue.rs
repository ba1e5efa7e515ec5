//! Intentional event queue

use crate::event::model::GameEvent;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

/// FIFO of events that game-state triggers have decided must fire.
///
/// Queued events are served before any ambient event is considered.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<Arc<GameEvent>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the tail. `None` is dropped without taking a slot.
    #[inline]
    pub fn enqueue(&mut self, event: impl Into<Option<Arc<GameEvent>>>) {
        if let Some(event) = event.into() {
            self.events.push_back(event);
        }
    }

    #[inline]
    pub fn try_dequeue(&mut self) -> Option<Arc<GameEvent>> {
        self.events.pop_front()
    }

    #[inline]
    pub fn peek(&self) -> Option<&Arc<GameEvent>> {
        self.events.front()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

/// Enqueue-only handle to a dispatcher's queue.
///
/// Cloneable and `Send + Sync`, so subsystems running on other threads can
/// fire triggers. Each enqueue takes the queue lock; ordering is FIFO among
/// lock acquisitions.
#[derive(Debug, Clone)]
pub struct EventTrigger {
    queue: Arc<Mutex<EventQueue>>,
}

impl EventTrigger {
    pub(crate) fn new(queue: Arc<Mutex<EventQueue>>) -> Self {
        Self { queue }
    }

    pub fn enqueue(&self, event: impl Into<Option<Arc<GameEvent>>>) {
        self.queue.lock().enqueue(event);
    }

    /// Number of events waiting in the shared queue
    pub fn pending(&self) -> usize {
        self.queue.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(title: &str) -> Arc<GameEvent> {
        Arc::new(GameEvent::new(title, "", 1.0))
    }

    #[test]
    fn test_enqueue_none_is_noop() {
        let mut queue = EventQueue::new();
        queue.enqueue(None::<Arc<GameEvent>>);
        assert_eq!(queue.len(), 0);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_enqueue_then_dequeue() {
        let mut queue = EventQueue::new();
        let e = event("Wolves");
        queue.enqueue(e.clone());
        assert_eq!(queue.len(), 1);

        let out = queue.try_dequeue().unwrap();
        assert!(Arc::ptr_eq(&out, &e));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_dequeue_empty() {
        let mut queue = EventQueue::new();
        assert!(queue.try_dequeue().is_none());
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_fifo_order() {
        let mut queue = EventQueue::new();
        queue.enqueue(event("first"));
        queue.enqueue(event("second"));
        queue.enqueue(event("third"));

        let titles: Vec<String> = std::iter::from_fn(|| queue.try_dequeue())
            .map(|e| e.title().to_string())
            .collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[test]
    fn test_peek_does_not_mutate() {
        let mut queue = EventQueue::new();
        queue.enqueue(event("Blizzard"));

        assert_eq!(queue.peek().unwrap().title(), "Blizzard");
        assert_eq!(queue.peek().unwrap().title(), "Blizzard");
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut queue = EventQueue::new();
        queue.enqueue(event("a"));
        queue.enqueue(event("b"));
        queue.clear();
        assert!(queue.is_empty());
        assert!(queue.peek().is_none());
    }

    #[test]
    fn test_trigger_from_other_threads() {
        let shared = Arc::new(Mutex::new(EventQueue::new()));
        let trigger = EventTrigger::new(shared.clone());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let trigger = trigger.clone();
                std::thread::spawn(move || {
                    for j in 0..25 {
                        trigger.enqueue(event(&format!("t{}-{}", i, j)));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(trigger.pending(), 100);
        assert_eq!(shared.lock().len(), 100);
    }
}
