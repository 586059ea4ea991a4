// world_core/src/world/transistor.rs
use crate::error::WorldError;
use crate::events::Signal;
use crate::scene::content::SceneContent;
use crate::scene::loader::{SceneLoad, SceneLoader};
use crate::storage::config::TransistorSettings;
use crate::transitions::transition_animation::TransitionAnimation;
use crate::world::world_graph::WorldGraph;

/// Where the transition sequence currently is. Each variant is one
/// suspension point of the per-frame tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPhase {
    /// No scene load in flight.
    #[default]
    Idle,
    /// Animate-in running. Load progress is not polled yet.
    AnimatingIn,
    /// Async load in flight with activation withheld; progress polled per tick.
    Loading,
    /// Progress crossed the threshold; waiting out the settle delay.
    ReadyToActivate,
    /// Activation permitted; waiting for the scene swap to happen.
    Activating,
    /// Animate-out running.
    AnimatingOut,
}

/// How a caller names the destination area.
#[derive(Debug, Clone, Copy)]
pub enum AreaTarget<'a> {
    Name(&'a str),
    Index(usize),
}

impl<'a> From<&'a str> for AreaTarget<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl From<usize> for AreaTarget<'_> {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// How a caller names the connection to arrive through.
#[derive(Debug, Clone, Copy, Default)]
pub enum PassageTarget<'a> {
    /// Connection 0 of the destination, by convention.
    #[default]
    Default,
    Name(&'a str),
    Index(usize),
}

impl<'a> From<&'a str> for PassageTarget<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl From<usize> for PassageTarget<'_> {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// Broadcast notifications around a transition. No listener is required.
#[derive(Default)]
pub struct TransitionEvents {
    pub started: Signal,
    pub completed: Signal,
    /// Fired when the end passage is recovered after a scene load.
    pub end_passage_changed: Signal<String>,
}

/// Passage data staged by a successful resolution, committed atomically.
struct ResolvedChange {
    /// Area handle the passage fields belong to.
    area: String,
    /// Scene the loader is asked for.
    scene: String,
    start_passage: String,
    end_passage: String,
}

/// The area changer: owns the area registry, the current-area/passage
/// fields and the in-flight load, and drives the whole transition sequence
/// from the per-frame tick.
///
/// At most one transition runs at a time; requests made while one is in
/// flight are ignored. Callers that need feedback check `is_idle` first.
pub struct Transistor {
    /// Area handle the passage fields refer to.
    pub current_area: Option<String>,
    /// Passage value searched for inside the newly loaded scene.
    pub start_passage: String,
    /// Name of the connection used to leave the previous scene.
    pub end_passage: String,
    /// Last observed load progress, if progress reporting is on.
    pub progress: f32,
    pub events: TransitionEvents,
    settings: TransistorSettings,
    graph: WorldGraph,
    transitions: Vec<Box<dyn TransitionAnimation>>,
    loader: Box<dyn SceneLoader>,
    phase: TransitionPhase,
    /// In-flight load. Doubles as the concurrency mutex: `Some` means a
    /// transition is running and new requests are dropped.
    load: Option<Box<dyn SceneLoad>>,
    active_transition: Option<usize>,
    settle_timer: f32,
}

impl Transistor {
    pub fn new(loader: Box<dyn SceneLoader>, graph: WorldGraph, settings: TransistorSettings) -> Self {
        Self {
            current_area: None,
            start_passage: String::new(),
            end_passage: String::new(),
            progress: 0.0,
            events: TransitionEvents::default(),
            settings,
            graph,
            transitions: Vec::new(),
            loader,
            phase: TransitionPhase::Idle,
            load: None,
            active_transition: None,
            settle_timer: 0.0,
        }
    }

    /// Register a transition effect the orchestrator can look up by name.
    pub fn add_transition(&mut self, transition: Box<dyn TransitionAnimation>) {
        self.transitions.push(transition);
    }

    pub fn graph(&self) -> &WorldGraph {
        &self.graph
    }

    /// Editor-time graph access. Only mutate the graph while idle.
    pub fn graph_mut(&mut self) -> &mut WorldGraph {
        &mut self.graph
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.load.is_none() && self.phase == TransitionPhase::Idle
    }

    /// Request a transition to `area`, arriving through `passage`.
    ///
    /// A request while another transition is in flight is dropped. A target
    /// or connection that does not resolve logs a configuration error and
    /// leaves every passage field untouched.
    pub fn change_area(
        &mut self,
        area: AreaTarget,
        passage: PassageTarget,
        transition: Option<&str>,
    ) {
        if !self.is_idle() {
            log::debug!("change_area ignored: a transition is already in flight.");
            return;
        }

        let change = match self.resolve_change(area, passage) {
            Ok(change) => change,
            Err(e) => {
                log::error!("Area change rejected: {e}");
                return;
            }
        };

        self.begin(change, transition);
    }

    /// Passage-trigger entry point: leave `origin_area` through the
    /// connection whose name is `passage_value`, loading `scene`. The end
    /// passage is recovered after the load completes.
    pub fn change_area_through(
        &mut self,
        origin_area: &str,
        scene: &str,
        passage_value: &str,
        transition: &str,
    ) {
        if !self.is_idle() {
            log::debug!("change_area_through ignored: a transition is already in flight.");
            return;
        }

        if !self.graph.contains(origin_area) {
            log::error!(
                "Area change rejected: {}",
                WorldError::AreaNotFound(origin_area.to_string())
            );
            return;
        }

        let change = ResolvedChange {
            area: origin_area.to_string(),
            scene: scene.to_string(),
            start_passage: passage_value.to_string(),
            end_passage: String::new(),
        };
        self.begin(change, Some(transition));
    }

    /// Reload the scene of the current area, re-entering through the last
    /// used connection, or connection 0 when none is recorded.
    pub fn reload_current_area(&mut self) {
        if !self.is_idle() {
            log::debug!("reload_current_area ignored: a transition is already in flight.");
            return;
        }

        self.start_passage.clear();

        let Some(current) = self.current_area.clone() else {
            log::warn!("reload_current_area: no current area is set.");
            return;
        };
        let Some(handle) = self.graph.area(&current) else {
            log::error!(
                "Area change rejected: {}",
                WorldError::AreaNotFound(current)
            );
            return;
        };

        let (start_passage, end_passage) = if handle.has_connections() {
            if self.end_passage.is_empty() {
                let first = &handle.connections[0];
                (first.passage.value.clone(), first.name.clone())
            } else {
                match handle.get_connection(&self.end_passage) {
                    Some(connection) => {
                        (connection.passage.value.clone(), self.end_passage.clone())
                    }
                    None => {
                        log::error!(
                            "Area change rejected: {}",
                            WorldError::ConnectionNotFound {
                                area: current,
                                name: self.end_passage.clone(),
                            }
                        );
                        return;
                    }
                }
            }
        } else {
            (String::new(), String::new())
        };

        let change = ResolvedChange {
            area: current.clone(),
            scene: current,
            start_passage,
            end_passage,
        };
        self.begin(change, None);
    }

    /// Advance the transition sequence by one frame.
    ///
    /// `scene` is the content of the currently active scene; it is only
    /// touched on the frame the new scene reports in. The settle delay runs
    /// on whatever clock `dt` comes from, so hosts should pass real time.
    pub fn tick(&mut self, scene: &mut dyn SceneContent, dt: f32) {
        if let Some(index) = self.active_transition {
            self.transitions[index].tick(dt);
        }

        match self.phase {
            TransitionPhase::Idle => {}

            TransitionPhase::AnimatingIn => {
                if !self.transition_animating_in() {
                    self.phase = TransitionPhase::Loading;
                }
            }

            TransitionPhase::Loading => {
                let Some(load) = self.load.as_ref() else {
                    self.abort("load handle disappeared while loading");
                    return;
                };
                let progress = load.progress();
                if self.settings.show_progress {
                    self.progress = progress;
                }
                if progress >= self.settings.activation_threshold {
                    self.settle_timer = self.settings.settle_delay;
                    self.phase = TransitionPhase::ReadyToActivate;
                }
            }

            TransitionPhase::ReadyToActivate => {
                self.settle_timer -= dt;
                if self.settle_timer <= 0.0 {
                    match self.load.as_mut() {
                        Some(load) => {
                            load.allow_activation(true);
                            self.phase = TransitionPhase::Activating;
                        }
                        None => self.abort("load handle disappeared before activation"),
                    }
                }
            }

            TransitionPhase::Activating => {
                let Some(load) = self.load.as_ref() else {
                    self.abort("load handle disappeared during activation");
                    return;
                };
                if load.is_activated() {
                    let scene_name = load.scene().to_string();
                    self.on_scene_loaded(&scene_name, scene);

                    if let Some(index) = self.active_transition {
                        self.transitions[index].animate_out(self.settings.real_time_animations);
                    }
                    self.progress = 0.0;
                    self.phase = TransitionPhase::AnimatingOut;
                }
            }

            TransitionPhase::AnimatingOut => {
                if !self.transition_animating_out() {
                    self.load = None;
                    self.active_transition = None;
                    self.phase = TransitionPhase::Idle;
                }
            }
        }
    }

    /// The newly loaded scene is active. Places the player at the matching
    /// connectable and fires the completed notification.
    pub fn on_scene_loaded(&mut self, scene_name: &str, content: &mut dyn SceneContent) {
        if self.ignored_scene(scene_name) {
            log::info!("Scene is ignored: {scene_name}");
            self.events.completed.emit(&());
            return;
        }

        if self.end_passage.is_empty() {
            let found = self.find_end_passage(content);
            self.end_passage = found.clone();
            self.events.end_passage_changed.emit(&found);
        }

        if self.can_move_player() {
            self.place_player(scene_name, content);
        }

        self.events.completed.emit(&());
    }

    // ---- internals -------------------------------------------------------

    fn resolve_change(
        &self,
        area: AreaTarget,
        passage: PassageTarget,
    ) -> Result<ResolvedChange, WorldError> {
        let handle = match area {
            AreaTarget::Name(name) => self
                .graph
                .area(name)
                .ok_or_else(|| WorldError::AreaNotFound(name.to_string()))?,
            AreaTarget::Index(index) => self
                .graph
                .area_at(index)
                .ok_or(WorldError::AreaIndexOutOfRange(index))?,
        };

        if !handle.has_connections() {
            // Dead-end scene: nothing to resolve, placement is skipped.
            return Ok(ResolvedChange {
                area: handle.scene.clone(),
                scene: handle.scene.clone(),
                start_passage: String::new(),
                end_passage: String::new(),
            });
        }

        let connection = match passage {
            PassageTarget::Default => &handle.connections[0],
            PassageTarget::Name(name) => handle.get_connection(name).ok_or_else(|| {
                WorldError::ConnectionNotFound {
                    area: handle.scene.clone(),
                    name: name.to_string(),
                }
            })?,
            PassageTarget::Index(index) => {
                handle
                    .connections
                    .get(index)
                    .ok_or(WorldError::ConnectionIndexOutOfRange {
                        area: handle.scene.clone(),
                        index,
                    })?
            }
        };

        Ok(ResolvedChange {
            area: handle.scene.clone(),
            scene: handle.scene.clone(),
            start_passage: connection.passage.value.clone(),
            end_passage: connection.name.clone(),
        })
    }

    /// Commit a resolved change and start the sequence. Nothing is mutated
    /// until both the transition effect and the load handle resolve.
    fn begin(&mut self, change: ResolvedChange, transition: Option<&str>) {
        let name = transition.unwrap_or(&self.settings.default_transition);
        let Some(index) = self.transitions.iter().position(|t| t.name() == name) else {
            log::error!(
                "Area change rejected: {}",
                WorldError::TransitionNotFound(name.to_string())
            );
            return;
        };

        let mut load = match self.loader.begin_load(&change.scene) {
            Ok(load) => load,
            Err(e) => {
                log::error!("Area change aborted: {e}");
                return;
            }
        };

        self.current_area = Some(change.area);
        self.start_passage = change.start_passage;
        self.end_passage = change.end_passage;
        self.progress = 0.0;

        self.events.started.emit(&());

        load.allow_activation(false);
        self.load = Some(load);
        self.active_transition = Some(index);
        self.transitions[index].animate_in(self.settings.real_time_animations);
        self.phase = TransitionPhase::AnimatingIn;
    }

    /// An area handle with zero connections marks its scene as ignored:
    /// the player is never placed there by a transition.
    fn ignored_scene(&self, scene_name: &str) -> bool {
        self.graph
            .area(scene_name)
            .map(|handle| !handle.has_connections())
            .unwrap_or(false)
    }

    fn can_move_player(&self) -> bool {
        !self.start_passage.is_empty() && self.current_area.is_some()
    }

    /// Recover the end passage from the current area and start passage by
    /// matching against the connectables of the freshly loaded scene.
    fn find_end_passage(&self, content: &mut dyn SceneContent) -> String {
        let mut linked = String::new();

        let area = self
            .current_area
            .as_deref()
            .and_then(|name| self.graph.area(name));

        if let Some(area) = area {
            if let Some(connection) = area.get_connection(&self.start_passage) {
                let linked_value = connection.passage.value.clone();
                let connectables = content.connectables_mut();

                if connectables.len() > 1 {
                    for connectable in &connectables {
                        if connectable.value() == linked_value {
                            linked = linked_value.clone();
                        }
                    }
                } else if let Some(first) = connectables.first() {
                    linked = first.value().to_string();
                }
            }
        }

        linked
    }

    /// Teleport the player to the entry connectable and lock it against an
    /// immediate re-trigger.
    fn place_player(&mut self, scene_name: &str, content: &mut dyn SceneContent) {
        let end = self.end_passage.clone();

        let spawn = content
            .connectables_mut()
            .iter()
            .find(|c| c.value() == end)
            .map(|c| c.position());

        let Some(mut spawn) = spawn else {
            log::warn!("No connectable matching '{end}' in scene '{scene_name}'.");
            return;
        };

        match content.player_mut() {
            Some(player) => {
                spawn.y -= player.collider_offset().y;
                player.set_position(spawn);
            }
            None => {
                log::warn!("No player found in the scene; skipping placement.");
            }
        }

        for connectable in content.connectables_mut() {
            if connectable.value() == end {
                connectable.set_can_interact(false);
            }
        }
    }

    /// Drop back to idle after an unrecoverable sequence error so future
    /// requests are not blocked forever.
    fn abort(&mut self, reason: &str) {
        log::error!("Transition aborted: {reason}.");
        self.load = None;
        self.active_transition = None;
        self.settle_timer = 0.0;
        self.progress = 0.0;
        self.phase = TransitionPhase::Idle;
    }

    fn transition_animating_in(&self) -> bool {
        self.active_transition
            .map(|index| self.transitions[index].animating_in())
            .unwrap_or(false)
    }

    fn transition_animating_out(&self) -> bool {
        self.active_transition
            .map(|index| self.transitions[index].animating_out())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use crate::constants::DEFAULT_TRANSITION;
    use crate::scene::content::PlayerAvatar;
    use crate::transitions::cross_fade::CrossFade;
    use crate::world::area_handle::AreaHandle;
    use crate::world::connectable::Connectable;
    use crate::world::connection::Connection;
    use crate::world::passage::Passage;

    #[derive(Default)]
    struct LoadState {
        progress: f32,
        allow: bool,
    }

    struct StubLoad {
        scene: String,
        state: Rc<RefCell<LoadState>>,
    }

    impl SceneLoad for StubLoad {
        fn scene(&self) -> &str {
            &self.scene
        }

        fn progress(&self) -> f32 {
            self.state.borrow().progress
        }

        fn allow_activation(&mut self, allow: bool) {
            self.state.borrow_mut().allow = allow;
        }

        fn activation_allowed(&self) -> bool {
            self.state.borrow().allow
        }

        fn is_activated(&self) -> bool {
            let state = self.state.borrow();
            state.allow && state.progress >= 1.0
        }
    }

    struct StubLoader {
        state: Rc<RefCell<LoadState>>,
        began: Rc<RefCell<Vec<String>>>,
        fail: bool,
    }

    impl StubLoader {
        fn new() -> (Self, Rc<RefCell<LoadState>>, Rc<RefCell<Vec<String>>>) {
            let state = Rc::new(RefCell::new(LoadState::default()));
            let began = Rc::new(RefCell::new(Vec::new()));
            let loader = Self {
                state: state.clone(),
                began: began.clone(),
                fail: false,
            };
            (loader, state, began)
        }
    }

    impl SceneLoader for StubLoader {
        fn begin_load(&mut self, scene: &str) -> Result<Box<dyn SceneLoad>, WorldError> {
            if self.fail {
                return Err(WorldError::LoadFailed {
                    scene: scene.to_string(),
                    reason: "stub".to_string(),
                });
            }
            // Loads finish instantly in tests.
            *self.state.borrow_mut() = LoadState { progress: 1.0, allow: true };
            self.began.borrow_mut().push(scene.to_string());
            Ok(Box::new(StubLoad {
                scene: scene.to_string(),
                state: self.state.clone(),
            }))
        }
    }

    struct TestPlayer {
        position: Vec2,
        offset: Vec2,
    }

    impl PlayerAvatar for TestPlayer {
        fn position(&self) -> Vec2 {
            self.position
        }

        fn set_position(&mut self, position: Vec2) {
            self.position = position;
        }

        fn collider_offset(&self) -> Vec2 {
            self.offset
        }
    }

    struct TestScene {
        passages: Vec<Passage>,
        player: Option<TestPlayer>,
    }

    impl TestScene {
        fn empty() -> Self {
            Self {
                passages: Vec::new(),
                player: Some(TestPlayer {
                    position: Vec2::new(5.0, 5.0),
                    offset: Vec2::new(0.0, 0.5),
                }),
            }
        }
    }

    impl SceneContent for TestScene {
        fn connectables_mut(&mut self) -> Vec<&mut dyn Connectable> {
            self.passages
                .iter_mut()
                .map(|p| p as &mut dyn Connectable)
                .collect()
        }

        fn player_mut(&mut self) -> Option<&mut dyn PlayerAvatar> {
            self.player.as_mut().map(|p| p as &mut dyn PlayerAvatar)
        }
    }

    /// Forest <-> Cave, plus a connection-less Credits scene.
    fn world() -> WorldGraph {
        let mut graph = WorldGraph::new();
        graph.add_area(AreaHandle::new("Forest"));
        graph.add_area(AreaHandle::new("Cave"));
        graph.add_area(AreaHandle::new("Credits"));
        graph
            .add_connection("Forest", Connection::new("ToCave", "Cave"))
            .unwrap();
        graph
            .add_connection("Cave", Connection::new("CaveEntrance", "Forest"))
            .unwrap();

        graph
            .area_mut("Forest")
            .unwrap()
            .get_connection_mut("ToCave")
            .unwrap()
            .passage
            .select("CaveEntrance");
        graph
            .area_mut("Cave")
            .unwrap()
            .get_connection_mut("CaveEntrance")
            .unwrap()
            .passage
            .select("ToCave");
        graph
    }

    fn transistor() -> (Transistor, Rc<RefCell<Vec<String>>>) {
        let (loader, _, began) = StubLoader::new();
        let mut settings = TransistorSettings::default();
        settings.settle_delay = 0.0;
        settings.show_progress = true;

        let mut transistor = Transistor::new(Box::new(loader), world(), settings);
        transistor.add_transition(Box::new(CrossFade::new(0.1)));
        (transistor, began)
    }

    fn run_until_idle(transistor: &mut Transistor, scene: &mut TestScene) {
        for _ in 0..32 {
            transistor.tick(scene, 0.2);
            if transistor.is_idle() {
                return;
            }
        }
        panic!("transition never returned to idle");
    }

    #[test]
    fn change_area_resolves_start_and_end_passages() {
        let (mut transistor, began) = transistor();

        transistor.change_area(AreaTarget::Name("Forest"), PassageTarget::Name("ToCave"), None);

        assert_eq!(transistor.current_area.as_deref(), Some("Forest"));
        assert_eq!(transistor.start_passage, "CaveEntrance");
        assert_eq!(transistor.end_passage, "ToCave");
        assert_eq!(began.borrow().as_slice(), ["Forest".to_string()]);
        assert!(!transistor.is_idle());
    }

    #[test]
    fn default_passage_is_connection_zero() {
        let (mut transistor, _) = transistor();

        transistor.change_area(AreaTarget::Name("Cave"), PassageTarget::Default, None);

        assert_eq!(transistor.start_passage, "ToCave");
        assert_eq!(transistor.end_passage, "CaveEntrance");
    }

    #[test]
    fn change_area_by_index_matches_by_name() {
        let (mut transistor, _) = transistor();

        transistor.change_area(AreaTarget::Index(0), PassageTarget::Index(0), None);

        assert_eq!(transistor.current_area.as_deref(), Some("Forest"));
        assert_eq!(transistor.end_passage, "ToCave");
    }

    #[test]
    fn busy_orchestrator_drops_new_requests() {
        let (mut transistor, began) = transistor();

        transistor.change_area(AreaTarget::Name("Forest"), PassageTarget::Name("ToCave"), None);
        transistor.change_area(AreaTarget::Name("Cave"), PassageTarget::Default, None);

        // Passage fields still belong to the first request, and no second
        // load was started.
        assert_eq!(transistor.current_area.as_deref(), Some("Forest"));
        assert_eq!(transistor.start_passage, "CaveEntrance");
        assert_eq!(began.borrow().len(), 1);
    }

    #[test]
    fn unresolved_connection_leaves_state_untouched() {
        let (mut transistor, began) = transistor();

        transistor.change_area(AreaTarget::Name("Forest"), PassageTarget::Name("ToVolcano"), None);

        assert!(transistor.is_idle());
        assert_eq!(transistor.current_area, None);
        assert_eq!(transistor.start_passage, "");
        assert!(began.borrow().is_empty());
    }

    #[test]
    fn unknown_area_leaves_state_untouched() {
        let (mut transistor, began) = transistor();

        transistor.change_area(AreaTarget::Name("Volcano"), PassageTarget::Default, None);
        transistor.change_area(AreaTarget::Index(9), PassageTarget::Default, None);

        assert!(transistor.is_idle());
        assert!(began.borrow().is_empty());
    }

    #[test]
    fn unknown_transition_name_aborts_before_loading() {
        let (mut transistor, began) = transistor();

        transistor.change_area(
            AreaTarget::Name("Forest"),
            PassageTarget::Default,
            Some("Swirl"),
        );

        assert!(transistor.is_idle());
        assert!(began.borrow().is_empty());
    }

    #[test]
    fn failed_load_returns_to_idle() {
        let (mut loader, _state, _began) = StubLoader::new();
        loader.fail = true;

        let mut transistor =
            Transistor::new(Box::new(loader), world(), TransistorSettings::default());
        transistor.add_transition(Box::new(CrossFade::new(0.1)));

        transistor.change_area(AreaTarget::Name("Forest"), PassageTarget::Default, None);

        assert!(transistor.is_idle());
        assert_eq!(transistor.current_area, None);
    }

    #[test]
    fn full_sequence_places_and_locks_the_entry_passage() {
        let (mut transistor, _) = transistor();

        let mut scene = TestScene::empty();
        scene.passages = {
            let graph = transistor.graph();
            let forest = graph.area("Forest").unwrap();
            let mut passage = Passage::new(forest, Vec2::new(10.0, 2.0));
            passage.passage.select("ToCave");
            vec![passage]
        };

        let started = Rc::new(Cell::new(0));
        let completed = Rc::new(Cell::new(0));
        {
            let started = started.clone();
            transistor.events.started.connect(move |_| started.set(started.get() + 1));
            let completed = completed.clone();
            transistor
                .events
                .completed
                .connect(move |_| completed.set(completed.get() + 1));
        }

        transistor.change_area(AreaTarget::Name("Forest"), PassageTarget::Name("ToCave"), None);
        run_until_idle(&mut transistor, &mut scene);

        assert_eq!(started.get(), 1);
        assert_eq!(completed.get(), 1);

        // Player spawned at the entry passage, offset by the collider anchor.
        let player = scene.player.as_ref().unwrap();
        assert_eq!(player.position, Vec2::new(10.0, 1.5));

        // Entry passage is locked until the overlap ends.
        let entry = &mut scene.passages[0];
        assert!(!entry.can_interact());
        entry.on_player_exit();
        assert!(entry.can_interact());
    }

    #[test]
    fn ignored_scene_fires_only_completed() {
        let (mut transistor, _) = transistor();
        let mut scene = TestScene::empty();
        let original_position = scene.player.as_ref().unwrap().position;

        let completed = Rc::new(Cell::new(0));
        {
            let completed = completed.clone();
            transistor
                .events
                .completed
                .connect(move |_| completed.set(completed.get() + 1));
        }

        transistor.change_area(AreaTarget::Name("Credits"), PassageTarget::Default, None);
        run_until_idle(&mut transistor, &mut scene);

        assert_eq!(completed.get(), 1);
        assert_eq!(scene.player.as_ref().unwrap().position, original_position);
    }

    #[test]
    fn through_entry_recovers_the_end_passage() {
        let (mut transistor, began) = transistor();

        // The Cave scene the player is heading into.
        let mut scene = TestScene::empty();
        scene.passages = {
            let graph = transistor.graph();
            let cave = graph.area("Cave").unwrap();
            let mut passage = Passage::new(cave, Vec2::new(3.0, 4.0));
            passage.passage.select("CaveEntrance");
            vec![passage]
        };

        let recovered = Rc::new(RefCell::new(String::new()));
        {
            let recovered = recovered.clone();
            transistor
                .events
                .end_passage_changed
                .connect(move |name: &String| *recovered.borrow_mut() = name.clone());
        }

        transistor.change_area_through("Forest", "Cave", "ToCave", DEFAULT_TRANSITION);
        run_until_idle(&mut transistor, &mut scene);

        assert_eq!(began.borrow().as_slice(), ["Cave".to_string()]);
        assert_eq!(transistor.end_passage, "CaveEntrance");
        assert_eq!(&*recovered.borrow(), "CaveEntrance");
        assert!(!scene.passages[0].can_interact());
        assert_eq!(
            scene.player.as_ref().unwrap().position,
            Vec2::new(3.0, 3.5)
        );
    }

    #[test]
    fn passage_trigger_starts_a_transition_and_debounces() {
        let (mut transistor, began) = transistor();

        let mut passage = {
            let forest = transistor.graph().area("Forest").unwrap();
            Passage::new(forest, Vec2::ZERO)
        };
        passage.passage.select("ToCave");

        passage.on_player_enter(&mut transistor);
        assert!(!transistor.is_idle());
        assert!(!passage.can_interact());
        assert_eq!(began.borrow().as_slice(), ["Cave".to_string()]);

        // Re-entering while locked does nothing.
        passage.on_player_enter(&mut transistor);
        assert_eq!(began.borrow().len(), 1);
    }

    #[test]
    fn none_selector_never_transitions() {
        let (mut transistor, began) = transistor();

        let mut passage = {
            let forest = transistor.graph().area("Forest").unwrap();
            Passage::new(forest, Vec2::ZERO)
        };
        // Selector left at the sentinel.

        passage.on_player_enter(&mut transistor);

        assert!(transistor.is_idle());
        assert!(began.borrow().is_empty());
        // Still interactable; the warning state is not a lockout.
        assert!(passage.can_interact());
    }

    #[test]
    fn reload_reenters_through_the_recorded_connection() {
        let (mut transistor, began) = transistor();
        let mut scene = TestScene::empty();

        transistor.change_area(AreaTarget::Name("Forest"), PassageTarget::Name("ToCave"), None);
        run_until_idle(&mut transistor, &mut scene);

        transistor.reload_current_area();

        assert_eq!(transistor.current_area.as_deref(), Some("Forest"));
        assert_eq!(transistor.start_passage, "CaveEntrance");
        assert_eq!(transistor.end_passage, "ToCave");
        assert_eq!(
            began.borrow().as_slice(),
            ["Forest".to_string(), "Forest".to_string()]
        );
    }

    #[test]
    fn progress_is_published_only_while_loading() {
        let (mut transistor, _) = transistor();
        let mut scene = TestScene::empty();

        transistor.change_area(AreaTarget::Name("Forest"), PassageTarget::Name("ToCave"), None);
        run_until_idle(&mut transistor, &mut scene);

        // Reset once the sequence ends.
        assert_eq!(transistor.progress, 0.0);
    }
}
