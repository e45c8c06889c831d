//! Scene Configuration
//!
//! Every tunable constant of the scene (canvas size, grid layout, detail
//! panel layout, entity physics, colors) lives in one immutable structure
//! handed to the controller at construction. A JSON file can override the
//! compiled defaults.

use sdl2::pixels::Color;
use serde::{Deserialize, Serialize};

/// Converts a configured `[r, g, b]` triple into an SDL2 color.
pub fn rgb(c: [u8; 3]) -> Color {
    Color::RGB(c[0], c[1], c[2])
}

/// Same as [`rgb`] with an explicit alpha channel.
pub fn rgba(c: [u8; 3], alpha: u8) -> Color {
    Color::RGBA(c[0], c[1], c[2], alpha)
}

/// Top-level scene configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Logical canvas width; the host scales the window, never the scene.
    pub canvas_width: u32,
    /// Logical canvas height.
    pub canvas_height: u32,
    pub grid: GridConfig,
    pub panel: PanelConfig,
    pub entity: EntityConfig,
    pub colors: Palette,
}

/// Fixed grid layout for the item browser.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub columns: usize,
    pub rows: usize,
    /// Cell edge length in canvas units.
    pub cell_size: u32,
    /// Gap between adjacent cells.
    pub cell_padding: u32,
    /// Grid offset from the detail panel's right edge.
    pub inset_x: i32,
    /// Grid offset from the canvas top.
    pub inset_y: i32,
}

/// Detail panel layout on the left edge of the canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub width: u32,
    /// Edge length of the enlarged item image.
    pub image_size: u32,
    /// Vertical center of the enlarged image.
    pub image_center_y: i32,
    pub name_y: i32,
    pub description_y: i32,
    /// Left/right margin for panel text; wrapping uses the remaining width.
    pub text_margin: i32,
}

/// Spawn point and physics constants for the movable entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityConfig {
    /// Spawn point (entity center) in canvas units.
    pub spawn_x: i32,
    pub spawn_y: i32,
    /// Rendered edge length of the entity sprite.
    pub size: u32,
    /// Steering speed in canvas units per second.
    pub speed: f32,
    /// Downward acceleration in canvas units per second squared.
    pub gravity: f32,
}

/// Scene colors as `[r, g, b]` triples.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Clear color behind everything.
    pub backdrop: [u8; 3],
    /// Detail panel background.
    pub panel_bg: [u8; 3],
    /// Grid area background.
    pub grid_bg: [u8; 3],
    pub cell_fill: [u8; 3],
    pub cell_border: [u8; 3],
    /// Border of the selected cell.
    pub highlight: [u8; 3],
    pub heading_text: [u8; 3],
    pub name_text: [u8; 3],
    pub description_text: [u8; 3],
    /// Fallback fill when an entity sprite texture is unavailable.
    pub entity_fallback: [u8; 3],
}

impl SceneConfig {
    /// Loads a configuration from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: SceneConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Number of addressable slots in the grid.
    pub fn slot_count(&self) -> usize {
        self.grid.columns * self.grid.rows
    }

    /// Top-left corner of the first grid cell.
    pub fn grid_origin(&self) -> (i32, i32) {
        (self.panel.width as i32 + self.grid.inset_x, self.grid.inset_y)
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            canvas_width: 800,
            canvas_height: 600,
            grid: GridConfig::default(),
            panel: PanelConfig::default(),
            entity: EntityConfig::default(),
            colors: Palette::default(),
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            columns: 3,
            rows: 5,
            cell_size: 80,
            cell_padding: 8,
            inset_x: 50,
            inset_y: 50,
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        PanelConfig {
            width: 200,
            image_size: 160,
            image_center_y: 200,
            name_y: 300,
            description_y: 340,
            text_margin: 10,
        }
    }
}

impl Default for EntityConfig {
    fn default() -> Self {
        EntityConfig {
            spawn_x: 400,
            spawn_y: 300,
            size: 64,
            speed: 200.0,
            gravity: 300.0,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            backdrop: [40, 44, 52],
            panel_bg: [45, 45, 45],
            grid_bg: [45, 45, 61],
            cell_fill: [77, 77, 77],
            cell_border: [102, 102, 102],
            highlight: [255, 255, 0],
            heading_text: [255, 255, 255],
            name_text: [255, 255, 255],
            description_text: [204, 204, 204],
            entity_fallback: [90, 90, 110],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_address_fifteen_slots() {
        let config = SceneConfig::default();
        assert_eq!(config.slot_count(), 15);
    }

    #[test]
    fn default_grid_fits_the_canvas() {
        let config = SceneConfig::default();
        let (origin_x, origin_y) = config.grid_origin();
        let step = (config.grid.cell_size + config.grid.cell_padding) as i32;
        let right = origin_x + config.grid.columns as i32 * step;
        let bottom = origin_y + config.grid.rows as i32 * step;
        assert!(right <= config.canvas_width as i32);
        assert!(bottom <= config.canvas_height as i32);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: SceneConfig =
            serde_json::from_str(r#"{ "grid": { "columns": 4 } }"#).unwrap();
        assert_eq!(config.grid.columns, 4);
        assert_eq!(config.grid.rows, 5);
        assert_eq!(config.canvas_width, 800);
        assert_eq!(config.entity.speed, 200.0);
    }
}
