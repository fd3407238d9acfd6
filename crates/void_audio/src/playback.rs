//! Rodio playback backend

use crate::bank::EventBank;
use crate::dispatcher::AudioEventDispatcher;
use crate::error::AudioError;
use crate::event::{AudioEvent, PlayingId};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use void_core::ObjectId;

/// One started instance of an event
struct PlayingEvent {
    id: PlayingId,
    sink: Sink,
    looping: bool,
}

/// Dispatcher that plays event clips through the default output device
pub struct RodioDispatcher {
    /// Output stream (must be kept alive)
    _stream: OutputStream,
    /// Stream handle for creating sinks
    stream_handle: OutputStreamHandle,
    /// Clip descriptions
    bank: EventBank,
    /// Live instances per (event id, game object)
    playing: HashMap<(u32, ObjectId), Vec<PlayingEvent>>,
    /// Next playing id
    next_id: u32,
    /// Global master volume
    master_volume: f32,
}

impl RodioDispatcher {
    /// Open the default output device
    pub fn new(bank: EventBank) -> Result<Self, AudioError> {
        let (stream, stream_handle) =
            OutputStream::try_default().map_err(|e| AudioError::DeviceInit(e.to_string()))?;

        Ok(Self {
            _stream: stream,
            stream_handle,
            bank,
            playing: HashMap::new(),
            next_id: 1,
            master_volume: 1.0,
        })
    }

    /// Set master volume
    pub fn set_master_volume(&mut self, volume: f32) {
        self.master_volume = volume.clamp(0.0, 1.0);
    }

    /// Get master volume
    pub fn master_volume(&self) -> f32 {
        self.master_volume
    }

    /// Start an event, reporting why it could not start
    pub fn start(&mut self, event: &AudioEvent, game_object: ObjectId) -> Result<PlayingId, AudioError> {
        let desc = self
            .bank
            .get(event)
            .ok_or_else(|| AudioError::UnknownEvent(event.name().to_string()))?;
        let path = self.bank.resolve_clip(desc);
        let (volume, looping) = (desc.volume, desc.looping);

        let file = File::open(&path).map_err(|_| AudioError::FileNotFound(path.display().to_string()))?;
        let source = Decoder::new(BufReader::new(file)).map_err(|e| AudioError::LoadError(e.to_string()))?;

        let sink = Sink::try_new(&self.stream_handle).map_err(|e| AudioError::DeviceInit(e.to_string()))?;
        sink.set_volume(volume * self.master_volume);

        if looping {
            sink.append(rodio::source::Source::repeat_infinite(source));
        } else {
            sink.append(source);
        }

        let id = PlayingId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1).max(1);

        self.playing
            .entry((event.id(), game_object))
            .or_default()
            .push(PlayingEvent {
                id,
                sink,
                looping,
            });

        Ok(id)
    }

    /// Drop finished one-shot instances (call each frame)
    pub fn update(&mut self) {
        for instances in self.playing.values_mut() {
            instances.retain(|p| p.looping || !p.sink.empty());
        }
        self.playing.retain(|_, instances| !instances.is_empty());
    }

    /// Check if a playing id is still live
    pub fn is_playing(&self, id: PlayingId) -> bool {
        self.playing
            .values()
            .flatten()
            .any(|p| p.id == id && !p.sink.empty())
    }

    /// Stop everything
    pub fn stop_all(&mut self) {
        for (_, instances) in self.playing.drain() {
            for p in instances {
                p.sink.stop();
            }
        }
    }

    /// Get number of live instances
    pub fn active_count(&self) -> usize {
        self.playing.values().map(Vec::len).sum()
    }
}

impl AudioEventDispatcher for RodioDispatcher {
    fn post(&mut self, event: &AudioEvent, game_object: ObjectId) -> PlayingId {
        match self.start(event, game_object) {
            Ok(id) => id,
            Err(e) => {
                log::warn!("Could not post {} on {}: {}", event, game_object, e);
                PlayingId::INVALID
            }
        }
    }

    fn stop(&mut self, event: &AudioEvent, game_object: ObjectId) {
        if let Some(instances) = self.playing.remove(&(event.id(), game_object)) {
            for p in instances {
                p.sink.stop();
            }
        }
    }
}
