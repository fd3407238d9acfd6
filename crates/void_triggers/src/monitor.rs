//! Area trigger monitor

use crate::area::Area;
use crate::debug::{DebugSink, LogSink};
use crate::events::{AreaTransition, TransitionKind};
use glam::Vec3;
use void_audio::AudioEventDispatcher;
use void_core::ObjectId;
use void_physics::{ColliderHandle, SpatialQuery};

/// Watches one target collider against a small list of areas.
///
/// Poll once per frame. Each area remembers only whether the target was
/// inside at the previous poll; enter and exit are the edges of that flag.
/// Events are always posted on the owner, not on the target.
#[derive(Debug, Clone)]
pub struct AreaTriggerMonitor {
    /// Object the areas are attached to
    owner: ObjectId,
    /// Collider being tracked
    target: Option<ColliderHandle>,
    /// Last collider the area state belongs to
    tracked: Option<ColliderHandle>,
    /// Areas, evaluated in order
    areas: Vec<Area>,
    /// Whether polling does anything
    enabled: bool,
}

impl AreaTriggerMonitor {
    /// Create a monitor with no areas and no target
    pub fn new(owner: ObjectId) -> Self {
        Self {
            owner,
            target: None,
            tracked: None,
            areas: Vec::new(),
            enabled: true,
        }
    }

    /// Set the tracked collider
    pub fn with_target(mut self, target: ColliderHandle) -> Self {
        self.set_target(Some(target));
        self
    }

    /// Add an area
    pub fn with_area(mut self, area: Area) -> Self {
        self.areas.push(area);
        self
    }

    /// Add several areas
    pub fn with_areas<I: IntoIterator<Item = Area>>(mut self, areas: I) -> Self {
        self.areas.extend(areas);
        self
    }

    /// Owner object
    pub fn owner(&self) -> ObjectId {
        self.owner
    }

    /// Tracked collider
    pub fn target(&self) -> Option<ColliderHandle> {
        self.target
    }

    /// Change or clear the tracked collider.
    ///
    /// Switching to a different collider resets every area without
    /// dispatching, so the new target starts outside. Clearing the target
    /// keeps the area state frozen until a target is set again; restoring
    /// the same collider picks up where it left off.
    pub fn set_target(&mut self, target: Option<ColliderHandle>) {
        if let Some(handle) = target {
            if self.tracked != Some(handle) {
                self.reset();
                self.tracked = Some(handle);
            }
        }
        self.target = target;
    }

    /// All areas
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    /// All areas, mutable
    pub fn areas_mut(&mut self) -> &mut [Area] {
        &mut self.areas
    }

    /// Get an area
    pub fn area(&self, index: usize) -> Option<&Area> {
        self.areas.get(index)
    }

    /// Get a mutable area
    pub fn area_mut(&mut self, index: usize) -> Option<&mut Area> {
        self.areas.get_mut(index)
    }

    /// Append an area, returning its index
    pub fn add_area(&mut self, area: Area) -> usize {
        self.areas.push(area);
        self.areas.len() - 1
    }

    /// Insert an area at `index`, clamped to the end of the list
    pub fn insert_area(&mut self, index: usize, area: Area) -> usize {
        let index = index.min(self.areas.len());
        self.areas.insert(index, area);
        index
    }

    /// Remove an area (indices after it shift down)
    pub fn remove_area(&mut self, index: usize) -> Option<Area> {
        (index < self.areas.len()).then(|| self.areas.remove(index))
    }

    /// Number of areas
    pub fn area_count(&self) -> usize {
        self.areas.len()
    }

    /// Indices of areas the target was inside at the last poll
    pub fn inside_areas(&self) -> impl Iterator<Item = usize> + '_ {
        self.areas
            .iter()
            .enumerate()
            .filter(|(_, area)| area.is_inside())
            .map(|(index, _)| index)
    }

    /// Enable polling
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Disable polling (area state is kept as is)
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Whether polling is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Put every area back outside without dispatching anything
    pub fn reset(&mut self) {
        for area in &mut self.areas {
            area.reset();
        }
    }

    /// Evaluate every area once.
    ///
    /// `origin` is the owner's world position. Returns the transitions raised
    /// by this poll in area order.
    pub fn poll<Q, A, L>(&mut self, origin: Vec3, query: &Q, audio: &mut A, debug: &mut L) -> Vec<AreaTransition>
    where
        Q: SpatialQuery + ?Sized,
        A: AudioEventDispatcher + ?Sized,
        L: DebugSink + ?Sized,
    {
        let mut transitions = Vec::new();
        if !self.enabled {
            return transitions;
        }
        let Some(target) = self.target else {
            return transitions;
        };

        let owner = self.owner;
        for (index, area) in self.areas.iter_mut().enumerate() {
            let contained = query.overlap_box(&area.world_box(origin)).contains(&target);

            let Some(kind) = area.transition(contained) else {
                continue;
            };

            match kind {
                TransitionKind::Enter => {
                    if let Some(event) = &area.enter_event {
                        audio.post(event, owner);
                    }
                    if area.log_on_enter {
                        debug.message(&area.enter_message);
                    }
                    transitions.push(AreaTransition::enter(owner, index, area.name.as_str()));
                }
                TransitionKind::Exit => {
                    if area.stop_enter_event_on_exit {
                        if let Some(event) = &area.enter_event {
                            audio.stop(event, owner);
                        }
                    }
                    if area.exit_event_enabled {
                        if let Some(event) = &area.exit_event {
                            audio.post(event, owner);
                        }
                    }
                    if area.log_on_exit {
                        debug.message(&area.exit_message);
                    }
                    transitions.push(AreaTransition::exit(owner, index, area.name.as_str()));
                }
            }

            log::debug!("Area '{}' of {}: {:?} ({:?})", area.name, owner, kind, target);
        }

        transitions
    }

    /// Poll with debug messages written through `log`
    pub fn poll_logged<Q, A>(&mut self, origin: Vec3, query: &Q, audio: &mut A) -> Vec<AreaTransition>
    where
        Q: SpatialQuery + ?Sized,
        A: AudioEventDispatcher + ?Sized,
    {
        self.poll(origin, query, audio, &mut LogSink)
    }
}
