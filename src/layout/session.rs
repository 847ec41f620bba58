//! Pointer-drag sessions (event resize, row divider, column divider)

use std::fmt::Debug;
use tracing::debug;

/// A drag gesture anchored at the pointer position and value captured on press.
///
/// Only one session of a kind runs at a time: starting while one is active is ignored
/// and the first gesture keeps control until the pointer is released.
#[derive(Debug, Clone, PartialEq)]
pub enum DragSession<K, V> {
    Idle,
    Active { key: K, origin: f32, value: V },
}

impl<K, V> Default for DragSession<K, V> {
    fn default() -> Self {
        DragSession::Idle
    }
}

impl<K: Copy + PartialEq + Debug, V: Debug> DragSession<K, V> {
    /// Begin a session. Returns false when another one is still active.
    pub fn start(&mut self, key: K, origin: f32, value: V) -> bool {
        if let DragSession::Active { key: current, .. } = self {
            debug!(?current, ignored = ?key, "drag session already active");
            return false;
        }
        debug!(?key, origin, ?value, "drag session started");
        *self = DragSession::Active { key, origin, value };
        true
    }

    pub fn is_active(&self) -> bool {
        matches!(self, DragSession::Active { .. })
    }

    pub fn key(&self) -> Option<K> {
        match self {
            DragSession::Active { key, .. } => Some(*key),
            DragSession::Idle => None,
        }
    }

    /// Pointer travel since the press, with the captured key and value
    pub fn delta(&self, pointer: f32) -> Option<(K, f32, &V)> {
        match self {
            DragSession::Active { key, origin, value } => Some((*key, pointer - origin, value)),
            DragSession::Idle => None,
        }
    }

    /// Return to idle. Safe to call when already idle.
    pub fn end(&mut self) -> Option<K> {
        let key = self.key();
        if key.is_some() {
            debug!(?key, "drag session ended");
        }
        *self = DragSession::Idle;
        key
    }

    /// End the session if the pointer is no longer held, including when the release was missed
    pub fn end_unless_held(&mut self, primary_down: bool) -> Option<K> {
        if primary_down {
            None
        } else {
            self.end()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_start_is_ignored() {
        let mut session: DragSession<u32, f32> = DragSession::default();
        assert!(session.start(1, 100.0, 60.0));
        assert!(!session.start(2, 0.0, 15.0));
        assert_eq!(session.key(), Some(1));
        assert_eq!(session.delta(130.0), Some((1, 30.0, &60.0)));
    }

    #[test]
    fn end_always_returns_to_idle() {
        let mut session: DragSession<u32, ()> = DragSession::default();
        assert_eq!(session.end(), None);
        session.start(3, 0.0, ());
        assert_eq!(session.end(), Some(3));
        assert!(!session.is_active());
        assert_eq!(session.delta(10.0), None);
    }

    #[test]
    fn lost_pointer_ends_session() {
        let mut session: DragSession<u32, ()> = DragSession::default();
        session.start(4, 0.0, ());
        assert_eq!(session.end_unless_held(true), None);
        assert!(session.is_active());
        assert_eq!(session.end_unless_held(false), Some(4));
        assert!(session.start(5, 0.0, ()));
    }
}
