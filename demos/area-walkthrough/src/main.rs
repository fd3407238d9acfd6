//! Area Walkthrough
//!
//! Loads a scene of area monitors, moves its target along the waypoints
//! one frame at a time and prints every enter/exit.
//!
//! Run with: cargo run -p area-walkthrough [scene.toml]

mod scene;

use std::collections::HashMap;

use scene::Scene;
use void_core::{IdGenerator, ObjectId};
use void_physics::{ColliderDesc, PhysicsWorld};
use void_triggers::{AreaTriggerSystem, LogSink, TransitionHandler, TriggerError};

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let scene = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading scene from {}", path);
            Scene::load(&path)?
        }
        None => {
            log::info!("Using the bundled scene");
            Scene::from_toml_str(scene::BUNDLED)?
        }
    };

    let bank = scene.bank();
    let triggers = scene.triggers();
    if !bank.events.is_empty() {
        triggers.validate_events(&bank)?;
    }

    let path = scene.path();
    let Some(start) = path.first().copied() else {
        log::warn!("Target '{}' has no waypoints", scene.target.name);
        return Ok(());
    };

    let ids = IdGenerator::new();
    let mut world = PhysicsWorld::new();
    let player = ids.next();
    let target = world.create_collider_for_object(
        player,
        ColliderDesc::new(scene.target.shape.clone()).with_position(start),
    );

    let handler = TransitionHandler::new().on_exit(|transition| {
        log::debug!("Target left '{}' of {}", transition.area_name, transition.owner);
    });

    // Owner names for printing
    let mut names: HashMap<ObjectId, String> = HashMap::new();
    let mut system = AreaTriggerSystem::new().with_handler(handler);
    for config in &triggers.monitors {
        let owner = ids.next();
        let tracked = match config.target.as_deref() {
            Some(name) if name == scene.target.name => Some(target),
            Some(name) => return Err(TriggerError::UnknownTarget(name.to_string()).into()),
            None => {
                log::warn!("Monitor '{}' has no target and will never fire", config.name);
                None
            }
        };
        system.register(config.build(owner, tracked), config.position);
        names.insert(owner, config.name.clone());
    }
    log::info!("{} monitors, {} frames", system.monitor_count(), path.len());

    #[cfg(feature = "playback")]
    let mut audio = void_audio::RodioDispatcher::new(bank)?;
    #[cfg(not(feature = "playback"))]
    let mut audio = void_audio::LogDispatcher::new();

    for position in path {
        world.set_collider_position(target, position)?;
        system.update(&world, &mut audio, &mut LogSink);
        #[cfg(feature = "playback")]
        audio.update();
        for transition in system.transitions() {
            let owner = names.get(&transition.owner).map(String::as_str).unwrap_or("?");
            println!(
                "frame {:>3}  ({:>6.2}, {:>6.2}, {:>6.2})  {:<5} {}/{}",
                system.frame(),
                position.x,
                position.y,
                position.z,
                transition.kind.to_string(),
                owner,
                transition.area_name,
            );
        }
    }

    #[cfg(feature = "playback")]
    println!("{} events still playing", audio.active_count());
    // Without a device nothing ever finishes, only stops
    #[cfg(not(feature = "playback"))]
    println!("{} events posted and not stopped", audio.active_count());
    Ok(())
}
