//! Trigger system polling every registered monitor

use crate::debug::DebugSink;
use crate::error::{Result, TriggerError};
use crate::events::{AreaTransition, TransitionHandler};
use crate::monitor::AreaTriggerMonitor;
use glam::Vec3;
use std::collections::BTreeMap;
use void_audio::AudioEventDispatcher;
use void_core::ObjectId;
use void_physics::{ColliderHandle, SpatialQuery};

/// A registered monitor and its owner's current position
struct MonitorEntry {
    monitor: AreaTriggerMonitor,
    origin: Vec3,
}

/// The trigger system that polls all area monitors once per frame
pub struct AreaTriggerSystem {
    /// Registered monitors (owner -> monitor), polled in owner order
    monitors: BTreeMap<ObjectId, MonitorEntry>,
    /// Transitions raised by the last update
    last_transitions: Vec<AreaTransition>,
    /// Optional callbacks
    handler: Option<TransitionHandler>,
    /// Number of updates run
    frame: u64,
}

impl AreaTriggerSystem {
    /// Create a new trigger system
    pub fn new() -> Self {
        Self {
            monitors: BTreeMap::new(),
            last_transitions: Vec::new(),
            handler: None,
            frame: 0,
        }
    }

    /// Set transition callbacks
    pub fn with_handler(mut self, handler: TransitionHandler) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Register a monitor for its owner, replacing any previous one
    pub fn register(&mut self, monitor: AreaTriggerMonitor, origin: Vec3) -> Option<AreaTriggerMonitor> {
        let owner = monitor.owner();
        self.monitors
            .insert(owner, MonitorEntry { monitor, origin })
            .map(|entry| entry.monitor)
    }

    /// Unregister a monitor
    pub fn unregister(&mut self, owner: ObjectId) -> Option<AreaTriggerMonitor> {
        self.monitors.remove(&owner).map(|entry| entry.monitor)
    }

    /// Get a monitor
    pub fn get(&self, owner: ObjectId) -> Option<&AreaTriggerMonitor> {
        self.monitors.get(&owner).map(|entry| &entry.monitor)
    }

    /// Get a mutable monitor
    pub fn get_mut(&mut self, owner: ObjectId) -> Option<&mut AreaTriggerMonitor> {
        self.monitors.get_mut(&owner).map(|entry| &mut entry.monitor)
    }

    /// Move a monitor's owner
    pub fn set_owner_position(&mut self, owner: ObjectId, position: Vec3) -> Result<()> {
        let entry = self
            .monitors
            .get_mut(&owner)
            .ok_or(TriggerError::UnknownOwner(owner))?;
        entry.origin = position;
        Ok(())
    }

    /// Current position of a monitor's owner
    pub fn owner_position(&self, owner: ObjectId) -> Option<Vec3> {
        self.monitors.get(&owner).map(|entry| entry.origin)
    }

    /// Point every monitor at the same target
    pub fn set_target(&mut self, target: Option<ColliderHandle>) {
        for entry in self.monitors.values_mut() {
            entry.monitor.set_target(target);
        }
    }

    /// Poll every monitor once
    pub fn update<Q, A, L>(&mut self, query: &Q, audio: &mut A, debug: &mut L) -> &[AreaTransition]
    where
        Q: SpatialQuery + ?Sized,
        A: AudioEventDispatcher + ?Sized,
        L: DebugSink + ?Sized,
    {
        self.frame += 1;
        self.last_transitions.clear();

        for entry in self.monitors.values_mut() {
            let transitions = entry.monitor.poll(entry.origin, query, audio, debug);
            self.last_transitions.extend(transitions);
        }

        if let Some(ref handler) = self.handler {
            for transition in &self.last_transitions {
                handler.handle(transition);
            }
        }

        if !self.last_transitions.is_empty() {
            log::debug!(
                "Frame {}: {} area transitions",
                self.frame,
                self.last_transitions.len()
            );
        }

        &self.last_transitions
    }

    /// Transitions from the last update
    pub fn transitions(&self) -> &[AreaTransition] {
        &self.last_transitions
    }

    /// Drain transitions from the last update
    pub fn drain_transitions(&mut self) -> Vec<AreaTransition> {
        std::mem::take(&mut self.last_transitions)
    }

    /// Registered owners
    pub fn owners(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.monitors.keys().copied()
    }

    /// Number of registered monitors
    pub fn monitor_count(&self) -> usize {
        self.monitors.len()
    }

    /// Number of updates run
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl Default for AreaTriggerSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::Area;
    use crate::debug::LogSink;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use void_audio::LogDispatcher;
    use void_physics::{ColliderDesc, ColliderShape, PhysicsWorld};

    fn unit_monitor(owner: u64) -> AreaTriggerMonitor {
        AreaTriggerMonitor::new(ObjectId::from_raw(owner)).with_area(Area::new("box").with_size(Vec3::splat(2.0)))
    }

    #[test]
    fn test_register_and_replace() {
        let mut system = AreaTriggerSystem::new();

        assert!(system.register(unit_monitor(1), Vec3::ZERO).is_none());
        assert!(system.register(unit_monitor(1), Vec3::ONE).is_some());
        assert_eq!(system.monitor_count(), 1);
        assert_eq!(system.owner_position(ObjectId::from_raw(1)), Some(Vec3::ONE));

        assert!(system.unregister(ObjectId::from_raw(1)).is_some());
        assert_eq!(system.monitor_count(), 0);
    }

    #[test]
    fn test_unknown_owner() {
        let mut system = AreaTriggerSystem::new();
        let err = system.set_owner_position(ObjectId::from_raw(4), Vec3::ZERO).unwrap_err();
        assert!(matches!(err, TriggerError::UnknownOwner(id) if id == ObjectId::from_raw(4)));
    }

    #[test]
    fn test_update_polls_every_monitor() {
        let mut world = PhysicsWorld::new();
        let target = world.create_collider(ColliderDesc::new(ColliderShape::sphere(0.1)));

        let mut system = AreaTriggerSystem::new();
        system.register(unit_monitor(1), Vec3::ZERO);
        system.register(unit_monitor(2), Vec3::new(10.0, 0.0, 0.0));
        system.set_target(Some(target));

        let mut audio = LogDispatcher::new();
        let transitions = system.update(&world, &mut audio, &mut LogSink).to_vec();
        assert_eq!(transitions.len(), 1);
        assert_eq!(transitions[0].owner, ObjectId::from_raw(1));

        // Move the second owner onto the target
        system
            .set_owner_position(ObjectId::from_raw(2), Vec3::ZERO)
            .unwrap();
        let transitions = system.update(&world, &mut audio, &mut LogSink).to_vec();
        assert_eq!(transitions.len(), 1);
        assert_eq!(transitions[0].owner, ObjectId::from_raw(2));
        assert!(transitions[0].is_enter());
        assert_eq!(system.frame(), 2);

        assert_eq!(system.drain_transitions().len(), 1);
        assert!(system.transitions().is_empty());
    }

    #[test]
    fn test_handler_sees_transitions() {
        let mut world = PhysicsWorld::new();
        let target = world.create_collider(ColliderDesc::new(ColliderShape::sphere(0.1)));

        let enters = Arc::new(AtomicU32::new(0));
        let exits = Arc::new(AtomicU32::new(0));
        let (enters_clone, exits_clone) = (enters.clone(), exits.clone());

        let mut system = AreaTriggerSystem::new().with_handler(
            TransitionHandler::new()
                .on_enter(move |_| {
                    enters_clone.fetch_add(1, Ordering::SeqCst);
                })
                .on_exit(move |_| {
                    exits_clone.fetch_add(1, Ordering::SeqCst);
                }),
        );
        system.register(unit_monitor(1).with_target(target), Vec3::ZERO);

        let mut audio = LogDispatcher::new();
        system.update(&world, &mut audio, &mut LogSink);
        world.set_collider_position(target, Vec3::new(0.0, 5.0, 0.0)).unwrap();
        system.update(&world, &mut audio, &mut LogSink);

        assert_eq!(enters.load(Ordering::SeqCst), 1);
        assert_eq!(exits.load(Ordering::SeqCst), 1);
    }
}
