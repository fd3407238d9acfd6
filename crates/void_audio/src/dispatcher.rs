//! Audio event dispatch

use crate::event::{AudioEvent, PlayingId};
use std::collections::HashMap;
use void_core::ObjectId;

/// Something that can post and stop audio events on engine objects.
///
/// Posting never fails from the caller's point of view: a backend that
/// could not start anything returns [`PlayingId::INVALID`].
pub trait AudioEventDispatcher {
    /// Start an event on a game object
    fn post(&mut self, event: &AudioEvent, game_object: ObjectId) -> PlayingId;

    /// Stop every instance of an event playing on a game object
    fn stop(&mut self, event: &AudioEvent, game_object: ObjectId);
}

impl<T: AudioEventDispatcher + ?Sized> AudioEventDispatcher for &mut T {
    fn post(&mut self, event: &AudioEvent, game_object: ObjectId) -> PlayingId {
        (**self).post(event, game_object)
    }

    fn stop(&mut self, event: &AudioEvent, game_object: ObjectId) {
        (**self).stop(event, game_object)
    }
}

impl<T: AudioEventDispatcher + ?Sized> AudioEventDispatcher for Box<T> {
    fn post(&mut self, event: &AudioEvent, game_object: ObjectId) -> PlayingId {
        (**self).post(event, game_object)
    }

    fn stop(&mut self, event: &AudioEvent, game_object: ObjectId) {
        (**self).stop(event, game_object)
    }
}

/// Dispatcher that plays nothing and logs every call.
///
/// Keeps track of which events are "playing" on which objects so headless
/// runs can still reason about stop semantics. Nothing plays, so an instance
/// stays tracked until it is stopped.
pub struct LogDispatcher {
    playing: HashMap<(u32, ObjectId), Vec<PlayingId>>,
    next_id: u32,
}

impl LogDispatcher {
    /// Create a new dispatcher
    pub fn new() -> Self {
        Self {
            playing: HashMap::new(),
            next_id: 1,
        }
    }

    /// Check if an event has live instances on an object
    pub fn is_playing(&self, event: &AudioEvent, game_object: ObjectId) -> bool {
        self.playing
            .get(&(event.id(), game_object))
            .map(|ids| !ids.is_empty())
            .unwrap_or(false)
    }

    /// Number of instances posted and not yet stopped
    pub fn active_count(&self) -> usize {
        self.playing.values().map(Vec::len).sum()
    }
}

impl AudioEventDispatcher for LogDispatcher {
    fn post(&mut self, event: &AudioEvent, game_object: ObjectId) -> PlayingId {
        let id = PlayingId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1).max(1);

        self.playing.entry((event.id(), game_object)).or_default().push(id);
        log::info!("Post {} on {} -> {:?}", event, game_object, id);
        id
    }

    fn stop(&mut self, event: &AudioEvent, game_object: ObjectId) {
        let stopped = self
            .playing
            .remove(&(event.id(), game_object))
            .map(|ids| ids.len())
            .unwrap_or(0);
        log::info!("Stop {} on {} ({} instances)", event, game_object, stopped);
    }
}

impl Default for LogDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_and_stop() {
        let mut audio = LogDispatcher::new();
        let event = AudioEvent::new("Play_Rain");
        let owner = ObjectId::from_raw(1);

        let first = audio.post(&event, owner);
        let second = audio.post(&event, owner);
        assert!(first.is_valid());
        assert_ne!(first, second);
        assert!(audio.is_playing(&event, owner));
        assert_eq!(audio.active_count(), 2);

        audio.stop(&event, owner);
        assert!(!audio.is_playing(&event, owner));
        assert_eq!(audio.active_count(), 0);
    }

    #[test]
    fn test_stop_is_scoped_to_object() {
        let mut audio = LogDispatcher::new();
        let event = AudioEvent::new("Play_Rain");
        let a = ObjectId::from_raw(1);
        let b = ObjectId::from_raw(2);

        audio.post(&event, a);
        audio.post(&event, b);
        audio.stop(&event, a);

        assert!(!audio.is_playing(&event, a));
        assert!(audio.is_playing(&event, b));
    }

    #[test]
    fn test_dispatch_through_trait_object() {
        let mut boxed: Box<dyn AudioEventDispatcher> = Box::new(LogDispatcher::new());
        let id = boxed.post(&AudioEvent::new("Play_Boxed"), ObjectId::from_raw(5));
        assert!(id.is_valid());
    }
}
