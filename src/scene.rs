//! Main Scene Controller
//!
//! Owns the two-mode lifecycle of the presentation surface. In inventory
//! mode the selection grid and detail panel answer edge-triggered
//! navigation; in playing mode the movement controller steers the spawned
//! entity from level-triggered reads. One `tick` runs per rendered frame
//! and dispatches on the current mode; all state mutation happens inside
//! that call.
//!
//! # Mode transitions
//!
//! - inventory -> playing: confirm edge, only when the selected slot has a
//!   backing item. Entry hides the browser UI and spawns the entity.
//! - playing -> inventory: cancel level signal. Exit restores the UI and
//!   drops the entity. The exit is idempotent; repeats while the key is
//!   held are no-ops.

use std::collections::HashMap;

use log::debug;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

use crate::config::SceneConfig;
use crate::detail::DetailPanel;
use crate::entity::MovableEntity;
use crate::grid::SelectionGrid;
use crate::input::{ControlKey, InputSampler};
use crate::item::ItemCatalog;
use crate::movement::MovementController;

/// The two operating states of the scene. The machine cycles between them
/// for the life of the scene; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneMode {
    Inventory,
    Playing,
}

/// An image the host must load before the scene starts.
pub struct AssetRequest {
    /// Texture key the scene will look the image up under.
    pub id: String,
    /// Resource locator to load it from.
    pub path: String,
}

/// Frame-tick participant: asset preparation, one-time setup, per-frame
/// update. Implemented by plain objects; no engine base class.
pub trait Scene {
    /// Assets to load before [`Scene::initialize`] runs.
    fn prepare(&self) -> Vec<AssetRequest>;

    /// One-time setup once assets are available.
    fn initialize(&mut self);

    /// Per-frame update driven by this frame's input readings.
    fn tick(&mut self, input: &dyn InputSampler, dt: f32);
}

pub struct MainScene {
    config: SceneConfig,
    catalog: ItemCatalog,
    mode: SceneMode,
    grid: SelectionGrid,
    detail: DetailPanel,
    mover: MovementController,
    active_entity: Option<MovableEntity>,
    /// Entry/exit actions toggle this; rendering consults it.
    ui_visible: bool,
}

impl MainScene {
    pub fn new(config: SceneConfig, catalog: ItemCatalog) -> Self {
        let grid = SelectionGrid::new(config.grid.columns, config.grid.rows);
        let mover = MovementController::new(config.entity.speed);
        MainScene {
            config,
            catalog,
            mode: SceneMode::Inventory,
            grid,
            detail: DetailPanel::new(),
            mover,
            active_entity: None,
            ui_visible: true,
        }
    }

    /// Edge-triggered browser controls, evaluated in fixed priority order:
    /// right, left, down, up, confirm. At most one action per frame; a move
    /// blocked at a grid edge still consumes the frame's dispatch.
    fn tick_inventory(&mut self, input: &dyn InputSampler) {
        if input.was_just_pressed(ControlKey::Right) {
            if self.grid.move_right() {
                self.refresh_detail();
            }
        } else if input.was_just_pressed(ControlKey::Left) {
            if self.grid.move_left() {
                self.refresh_detail();
            }
        } else if input.was_just_pressed(ControlKey::Down) {
            if self.grid.move_down() {
                self.refresh_detail();
            }
        } else if input.was_just_pressed(ControlKey::Up) {
            if self.grid.move_up() {
                self.refresh_detail();
            }
        } else if input.was_just_pressed(ControlKey::Confirm) {
            self.start_playing();
        }
    }

    /// Level-triggered movement, then the cancel check. Cancel is read as a
    /// level signal every frame; the transition flips the mode, so it fires
    /// the exit once per entry even while the key stays held.
    fn tick_playing(&mut self, input: &dyn InputSampler, dt: f32) {
        if let Some(entity) = self.active_entity.as_mut() {
            self.mover.steer(entity, input);
            entity.step(
                dt,
                self.config.entity.gravity,
                (self.config.canvas_width, self.config.canvas_height),
            );
        }

        if input.is_held(ControlKey::Cancel) {
            self.return_to_inventory();
        }
    }

    fn refresh_detail(&mut self) {
        self.detail
            .rebuild(&self.catalog, self.grid.selected(), &self.config);
    }

    /// Confirm on an empty slot is a silent no-op; the mode never changes.
    fn start_playing(&mut self) {
        let Some(item) = self.catalog.get(self.grid.selected()) else {
            return;
        };

        debug!("entering playing mode with item {}", item.id);
        self.mode = SceneMode::Playing;
        self.ui_visible = false;

        let entity = &self.config.entity;
        self.active_entity = Some(MovableEntity::spawn(
            entity.spawn_x,
            entity.spawn_y,
            entity.size,
            &item.id,
        ));
    }

    /// Exit action for playing mode. Idempotent: the mode guard makes every
    /// call after the first a no-op, and the entity reference is cleared
    /// synchronously so nothing can act on a stale handle.
    fn return_to_inventory(&mut self) {
        if self.mode != SceneMode::Playing {
            return;
        }

        debug!("returning to inventory mode");
        self.mode = SceneMode::Inventory;
        self.ui_visible = true;
        self.active_entity = None;
    }

    /// Draws whichever surface the current visibility state calls for.
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        textures: &HashMap<String, Texture<'_>>,
    ) -> Result<(), String> {
        if self.ui_visible {
            self.detail.render(canvas, textures, &self.config)?;
            self.grid.render(canvas, &self.catalog, textures, &self.config)?;
        }

        if let Some(entity) = &self.active_entity {
            entity.render(canvas, textures, &self.config)?;
        }

        Ok(())
    }
}

/// Observation points for the controller's state, exercised by the tests.
#[allow(dead_code)]
impl MainScene {
    pub fn mode(&self) -> SceneMode {
        self.mode
    }

    pub fn selected_index(&self) -> usize {
        self.grid.selected()
    }

    pub fn ui_visible(&self) -> bool {
        self.ui_visible
    }

    pub fn active_entity(&self) -> Option<&MovableEntity> {
        self.active_entity.as_ref()
    }

    pub fn detail_panel(&self) -> &DetailPanel {
        &self.detail
    }
}

impl Scene for MainScene {
    fn prepare(&self) -> Vec<AssetRequest> {
        self.catalog
            .iter()
            .map(|item| AssetRequest {
                id: item.id.clone(),
                path: item.image.clone(),
            })
            .collect()
    }

    fn initialize(&mut self) {
        self.refresh_detail();
    }

    fn tick(&mut self, input: &dyn InputSampler, dt: f32) {
        match self.mode {
            SceneMode::Inventory => self.tick_inventory(input),
            SceneMode::Playing => self.tick_playing(input, dt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedInput;
    use crate::item::Item;

    const DT: f32 = 1.0 / 60.0;

    fn item(id: &str) -> Item {
        Item {
            id: id.to_string(),
            image: format!("assets/items/{}.png", id),
            name: Some(format!("The {}", id)),
            description: None,
        }
    }

    /// 3x5 grid over four items, as in the browser walkthrough.
    fn scene_with_items(count: usize) -> MainScene {
        let items: Vec<Item> = ["lantern", "key", "marble", "postcard"]
            .into_iter()
            .take(count)
            .map(item)
            .collect();
        let mut scene = MainScene::new(SceneConfig::default(), ItemCatalog::new(items));
        scene.initialize();
        scene
    }

    fn tap(scene: &mut MainScene, key: ControlKey) {
        scene.tick(&ScriptedInput::tap(key), DT);
    }

    #[test]
    fn starts_in_inventory_with_slot_zero_selected() {
        let scene = scene_with_items(4);
        assert_eq!(scene.mode(), SceneMode::Inventory);
        assert_eq!(scene.selected_index(), 0);
        assert!(scene.ui_visible());
        assert!(scene.active_entity().is_none());
    }

    #[test]
    fn prepare_requests_one_asset_per_item() {
        let scene = scene_with_items(4);
        let requests = scene.prepare();
        assert_eq!(requests.len(), 4);
        assert_eq!(requests[0].id, "lantern");
        assert_eq!(requests[0].path, "assets/items/lantern.png");
    }

    #[test]
    fn navigation_updates_the_detail_panel() {
        let mut scene = scene_with_items(4);
        assert_eq!(scene.detail_panel().payload().unwrap().image_id, "lantern");

        tap(&mut scene, ControlKey::Right);
        assert_eq!(scene.detail_panel().payload().unwrap().image_id, "key");
    }

    #[test]
    fn navigating_to_an_empty_slot_clears_the_panel() {
        let mut scene = scene_with_items(4);
        tap(&mut scene, ControlKey::Down);
        tap(&mut scene, ControlKey::Down);
        assert_eq!(scene.selected_index(), 6);
        assert!(scene.detail_panel().payload().is_none());
    }

    #[test]
    fn confirm_on_a_backed_slot_enters_playing() {
        let mut scene = scene_with_items(4);
        tap(&mut scene, ControlKey::Confirm);

        assert_eq!(scene.mode(), SceneMode::Playing);
        assert!(!scene.ui_visible());
        let entity = scene.active_entity().expect("entity spawned on confirm");
        assert_eq!(entity.image_id, "lantern");
        assert!(entity.clamp_to_bounds);
    }

    #[test]
    fn confirm_on_an_empty_slot_is_a_no_op() {
        let mut scene = scene_with_items(4);
        tap(&mut scene, ControlKey::Down);
        tap(&mut scene, ControlKey::Down);
        assert_eq!(scene.selected_index(), 6);

        tap(&mut scene, ControlKey::Confirm);

        assert_eq!(scene.mode(), SceneMode::Inventory);
        assert!(scene.ui_visible());
        assert!(scene.active_entity().is_none());
    }

    #[test]
    fn cancel_restores_the_inventory() {
        let mut scene = scene_with_items(4);
        tap(&mut scene, ControlKey::Confirm);
        assert_eq!(scene.mode(), SceneMode::Playing);

        scene.tick(&ScriptedInput::hold(&[ControlKey::Cancel]), DT);

        assert_eq!(scene.mode(), SceneMode::Inventory);
        assert!(scene.ui_visible());
        assert!(scene.active_entity().is_none());
    }

    #[test]
    fn held_cancel_fires_the_exit_once_and_stays_quiet() {
        let mut scene = scene_with_items(4);
        tap(&mut scene, ControlKey::Confirm);

        // Key stays held across many frames; exit ran on the first one
        for _ in 0..10 {
            scene.tick(&ScriptedInput::hold(&[ControlKey::Cancel]), DT);
            assert_eq!(scene.mode(), SceneMode::Inventory);
            assert!(scene.ui_visible());
            assert!(scene.active_entity().is_none());
        }
        // Selection is unchanged and the scene can be confirmed again
        assert_eq!(scene.selected_index(), 0);
        tap(&mut scene, ControlKey::Confirm);
        assert_eq!(scene.mode(), SceneMode::Playing);
    }

    #[test]
    fn navigation_signals_are_ignored_while_playing() {
        let mut scene = scene_with_items(4);
        tap(&mut scene, ControlKey::Confirm);

        tap(&mut scene, ControlKey::Right);
        assert_eq!(scene.selected_index(), 0);

        tap(&mut scene, ControlKey::Confirm);
        assert_eq!(scene.mode(), SceneMode::Playing);
        // Still exactly one entity
        assert!(scene.active_entity().is_some());
    }

    #[test]
    fn held_directions_move_the_entity() {
        let mut scene = scene_with_items(4);
        tap(&mut scene, ControlKey::Confirm);
        let start_x = scene.active_entity().unwrap().x;

        scene.tick(&ScriptedInput::hold(&[ControlKey::Right]), DT);

        let entity = scene.active_entity().unwrap();
        assert!(entity.x > start_x);
        assert_eq!(entity.velocity_x, 200.0);
    }

    #[test]
    fn one_directional_action_per_frame() {
        let mut scene = scene_with_items(4);

        // Right and down both edge in the same frame; right wins
        scene.tick(
            &ScriptedInput::tap_many(&[ControlKey::Right, ControlKey::Down]),
            DT,
        );
        assert_eq!(scene.selected_index(), 1);
    }

    #[test]
    fn blocked_move_consumes_the_frame() {
        let mut scene = scene_with_items(4);
        tap(&mut scene, ControlKey::Right);
        tap(&mut scene, ControlKey::Right);
        assert_eq!(scene.selected_index(), 2);

        // Right is blocked at the row edge and down edges too; nothing moves
        scene.tick(
            &ScriptedInput::tap_many(&[ControlKey::Right, ControlKey::Down]),
            DT,
        );
        assert_eq!(scene.selected_index(), 2);
    }

    #[test]
    fn browser_walkthrough() {
        let mut scene = scene_with_items(4);

        tap(&mut scene, ControlKey::Right);
        tap(&mut scene, ControlKey::Right);
        assert_eq!(scene.selected_index(), 2);

        // Row boundary
        tap(&mut scene, ControlKey::Right);
        assert_eq!(scene.selected_index(), 2);

        tap(&mut scene, ControlKey::Down);
        assert_eq!(scene.selected_index(), 5);

        // Slot 5 has no item
        tap(&mut scene, ControlKey::Confirm);
        assert_eq!(scene.mode(), SceneMode::Inventory);

        tap(&mut scene, ControlKey::Up);
        tap(&mut scene, ControlKey::Left);
        tap(&mut scene, ControlKey::Left);
        assert_eq!(scene.selected_index(), 0);

        tap(&mut scene, ControlKey::Confirm);
        assert_eq!(scene.mode(), SceneMode::Playing);
        assert_eq!(scene.active_entity().unwrap().image_id, "lantern");

        scene.tick(&ScriptedInput::hold(&[ControlKey::Cancel]), DT);
        assert_eq!(scene.mode(), SceneMode::Inventory);
        assert!(scene.active_entity().is_none());
        assert!(scene.ui_visible());
    }

    #[test]
    fn empty_catalog_never_leaves_inventory() {
        let mut scene = scene_with_items(0);
        assert!(scene.detail_panel().payload().is_none());

        // Walk every reachable slot and confirm on each
        for _ in 0..4 {
            for _ in 0..2 {
                tap(&mut scene, ControlKey::Confirm);
                assert_eq!(scene.mode(), SceneMode::Inventory);
                tap(&mut scene, ControlKey::Right);
            }
            tap(&mut scene, ControlKey::Down);
        }
        tap(&mut scene, ControlKey::Confirm);

        assert_eq!(scene.mode(), SceneMode::Inventory);
        assert!(scene.active_entity().is_none());
        assert!(scene.ui_visible());
    }

    #[test]
    fn cancel_while_in_inventory_is_ignored() {
        let mut scene = scene_with_items(4);
        scene.tick(&ScriptedInput::hold(&[ControlKey::Cancel]), DT);

        assert_eq!(scene.mode(), SceneMode::Inventory);
        assert!(scene.ui_visible());
        assert_eq!(scene.selected_index(), 0);
    }
}
