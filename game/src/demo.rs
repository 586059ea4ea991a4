// game/src/demo.rs
use std::cell::Cell;
use std::rc::Rc;
use glam::Vec2;
use world_core::error::WorldError;
use world_core::scene::content::{PlayerAvatar, SceneContent};
use world_core::scene::loader::{SceneLoad, SceneLoader};
use world_core::storage::config::TransistorSettings;
use world_core::storage::world_storage::{load_graph_from_folder, save_graph_to_folder};
use world_core::transitions::cross_fade::CrossFade;
use world_core::transitions::letterbox::Letterbox;
use world_core::world::area_handle::AreaHandle;
use world_core::world::connectable::Connectable;
use world_core::world::connection::Connection;
use world_core::world::passage::Passage;
use world_core::world::transistor::{AreaTarget, PassageTarget, TransitionPhase, Transistor};
use world_core::world::world_graph::WorldGraph;

/// Scripted load whose progress the demo loop drives by hand.
struct ScriptedLoad {
    scene: String,
    progress: Rc<Cell<f32>>,
    allow: Cell<bool>,
}

impl SceneLoad for ScriptedLoad {
    fn scene(&self) -> &str {
        &self.scene
    }

    fn progress(&self) -> f32 {
        self.progress.get()
    }

    fn allow_activation(&mut self, allow: bool) {
        self.allow.set(allow);
    }

    fn activation_allowed(&self) -> bool {
        self.allow.get()
    }

    fn is_activated(&self) -> bool {
        self.allow.get() && self.progress.get() >= 1.0
    }
}

struct ScriptedLoader {
    progress: Rc<Cell<f32>>,
}

impl SceneLoader for ScriptedLoader {
    fn begin_load(&mut self, scene: &str) -> Result<Box<dyn SceneLoad>, WorldError> {
        log::info!("Loading scene: {scene}");
        self.progress.set(0.0);
        Ok(Box::new(ScriptedLoad {
            scene: scene.to_string(),
            progress: self.progress.clone(),
            allow: Cell::new(false),
        }))
    }
}

struct DemoPlayer {
    position: Vec2,
    collider_offset: Vec2,
}

impl PlayerAvatar for DemoPlayer {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn collider_offset(&self) -> Vec2 {
        self.collider_offset
    }
}

/// One loaded scene: its passage triggers plus the player.
struct DemoScene {
    name: String,
    passages: Vec<Passage>,
    player: DemoPlayer,
}

impl SceneContent for DemoScene {
    fn connectables_mut(&mut self) -> Vec<&mut dyn Connectable> {
        self.passages
            .iter_mut()
            .map(|p| p as &mut dyn Connectable)
            .collect()
    }

    fn player_mut(&mut self) -> Option<&mut dyn PlayerAvatar> {
        Some(&mut self.player)
    }
}

/// The tour the demo runs once the first passage fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    ThroughToCave,
    BackToForest,
    Reload,
    ToCredits,
    Done,
}

pub struct DemoGame {
    transistor: Transistor,
    scene: DemoScene,
    progress: Rc<Cell<f32>>,
    pending_scene: Option<String>,
    completed: Rc<Cell<u32>>,
    acknowledged: u32,
    stage: Stage,
}

impl DemoGame {
    pub fn new() -> Self {
        let graph = demo_graph();

        let progress = Rc::new(Cell::new(0.0));
        let loader = ScriptedLoader {
            progress: progress.clone(),
        };

        let settings = TransistorSettings {
            settle_delay: 0.1,
            show_progress: true,
            ..TransistorSettings::default()
        };

        let mut transistor = Transistor::new(Box::new(loader), graph, settings);
        transistor.add_transition(Box::new(CrossFade::default()));
        transistor.add_transition(Box::new(Letterbox::default()));

        let completed = Rc::new(Cell::new(0));
        {
            let completed = completed.clone();
            transistor
                .events
                .completed
                .connect(move |_| completed.set(completed.get() + 1));
        }
        transistor
            .events
            .end_passage_changed
            .connect(|name: &String| log::info!("Recovered end passage: {name}"));

        let scene = build_scene(&transistor, "Forest");

        Self {
            transistor,
            scene,
            progress,
            pending_scene: None,
            completed,
            acknowledged: 0,
            stage: Stage::ThroughToCave,
        }
    }

    /// Walk the player into the Forest exit trigger.
    pub fn enter_forest_passage(&mut self) {
        self.pending_scene = Some("Cave".to_string());
        if let Some(passage) = self
            .scene
            .passages
            .iter_mut()
            .find(|p| p.value() == "ToCave")
        {
            passage.on_player_enter(&mut self.transistor);
        }
    }

    pub fn finished(&self) -> bool {
        self.stage == Stage::Done && self.transistor.is_idle()
    }

    pub fn update(&mut self, dt: f32) {
        // The scripted load crawls forward while a transition is in flight.
        if !self.transistor.is_idle() {
            let p = self.progress.get();
            self.progress.set((p + dt).min(1.0));
        }

        // Once activation is permitted the host swaps scene content in.
        if self.transistor.phase() == TransitionPhase::Activating {
            if let Some(next) = self.pending_scene.take() {
                self.scene = build_scene(&self.transistor, &next);
                log::info!("Scene swapped in: {next}");
            }
        }

        self.transistor.tick(&mut self.scene, dt);

        if self.transistor.is_idle() && self.completed.get() > self.acknowledged {
            self.acknowledged = self.completed.get();
            log::info!(
                "Arrived in {} at {:?}",
                self.scene.name,
                self.scene.player.position
            );
            self.advance();
        }
    }

    fn advance(&mut self) {
        match self.stage {
            Stage::ThroughToCave => {
                self.stage = Stage::BackToForest;
                self.pending_scene = Some("Forest".to_string());
                self.transistor.change_area(
                    AreaTarget::Name("Forest"),
                    PassageTarget::Name("ToCave"),
                    Some("Letterbox"),
                );
            }
            Stage::BackToForest => {
                self.stage = Stage::Reload;
                self.pending_scene = Some("Forest".to_string());
                self.transistor.reload_current_area();
            }
            Stage::Reload => {
                self.stage = Stage::ToCredits;
                self.pending_scene = Some("Credits".to_string());
                self.transistor
                    .change_area(AreaTarget::Name("Credits"), PassageTarget::Default, None);
            }
            Stage::ToCredits => {
                self.stage = Stage::Done;
            }
            Stage::Done => {}
        }
    }
}

/// Author the tour's world graph, then push it through the folder storage
/// so the demo also exercises the .ron round trip.
fn demo_graph() -> WorldGraph {
    let mut graph = WorldGraph::new();
    graph.add_area(AreaHandle::new("Forest"));
    graph.add_area(AreaHandle::new("Cave"));
    graph.add_area(AreaHandle::new("Credits"));

    if let Err(e) = graph.add_connection("Forest", Connection::new("ToCave", "Cave")) {
        log::error!("Graph authoring failed: {e}");
    }
    if let Err(e) = graph.add_connection("Cave", Connection::new("CaveEntrance", "Forest")) {
        log::error!("Graph authoring failed: {e}");
    }

    if let Some(connection) = graph
        .area_mut("Forest")
        .and_then(|a| a.get_connection_mut("ToCave"))
    {
        connection.passage.select("CaveEntrance");
    }
    if let Some(connection) = graph
        .area_mut("Cave")
        .and_then(|a| a.get_connection_mut("CaveEntrance"))
    {
        connection.passage.select("ToCave");
    }

    let folder = std::env::temp_dir().join("world_shaper_demo");
    match save_graph_to_folder(&folder, &graph) {
        Ok(()) => match load_graph_from_folder(&folder) {
            Ok(loaded) => return loaded,
            Err(e) => log::warn!("Could not read the graph back ({e}); using the in-memory one."),
        },
        Err(e) => log::warn!("Could not save the graph ({e}); using the in-memory one."),
    }
    graph
}

/// Build the content of a scene from its area handle: one passage trigger
/// per connection, player at the origin.
fn build_scene(transistor: &Transistor, name: &str) -> DemoScene {
    let mut passages = Vec::new();

    if let Some(handle) = transistor.graph().area(name) {
        for (i, connection) in handle.connections.iter().enumerate() {
            let mut passage = Passage::new(handle, Vec2::new(8.0 * (i as f32 + 1.0), 0.0));
            passage.passage.select(&connection.name);
            passages.push(passage);
        }
    }

    DemoScene {
        name: name.to_string(),
        passages,
        player: DemoPlayer {
            position: Vec2::ZERO,
            collider_offset: Vec2::new(0.0, 0.5),
        },
    }
}
