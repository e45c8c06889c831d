//! Detail Panel
//!
//! The left-hand panel showing the current selection: enlarged image, name,
//! and description, word-wrapped to the panel width. The panel holds at most
//! one item's payload; every rebuild releases the previous payload before
//! constructing the new one, so stale visuals can never coexist with new
//! ones. Slots without a backing item produce an empty payload.

use std::collections::HashMap;

use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas, Texture};
use sdl2::video::Window;

use crate::config::{self, SceneConfig};
use crate::item::ItemCatalog;
use crate::text;

const NAME_SCALE: u32 = 2;
const DESCRIPTION_SCALE: u32 = 1;
const HEADING_SCALE: u32 = 3;

/// Alpha for the panel backdrops (0.9 of full opacity).
const BACKDROP_ALPHA: u8 = 230;

const FALLBACK_NAME: &str = "Untitled";
const FALLBACK_DESCRIPTION: &str = "No description available";

/// Display payload derived from one selected item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPayload {
    /// Texture key of the enlarged image; the texture itself may be absent.
    pub image_id: String,
    pub name_lines: Vec<String>,
    pub description_lines: Vec<String>,
}

pub struct DetailPanel {
    payload: Option<DetailPayload>,
}

impl DetailPanel {
    pub fn new() -> Self {
        DetailPanel { payload: None }
    }

    /// Payload currently on display, if the selected slot had an item.
    pub fn payload(&self) -> Option<&DetailPayload> {
        self.payload.as_ref()
    }

    /// Rebuilds the payload for a new selection.
    ///
    /// The previous payload is dropped before the new one exists; a slot
    /// beyond the catalog leaves the panel empty.
    pub fn rebuild(&mut self, catalog: &ItemCatalog, selected: usize, config: &SceneConfig) {
        self.payload = None;

        let Some(item) = catalog.get(selected) else {
            return;
        };

        let text_width = config.panel.width - 2 * config.panel.text_margin as u32;
        let name = item.name.as_deref().unwrap_or(FALLBACK_NAME);
        let description = item.description.as_deref().unwrap_or(FALLBACK_DESCRIPTION);

        self.payload = Some(DetailPayload {
            image_id: item.id.clone(),
            name_lines: text::wrap_text(name, text::max_columns(text_width, NAME_SCALE)),
            description_lines: text::wrap_text(
                description,
                text::max_columns(text_width, DESCRIPTION_SCALE),
            ),
        });
    }

    /// Draws the panel backdrops, the heading, and the current payload.
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        textures: &HashMap<String, Texture<'_>>,
        config: &SceneConfig,
    ) -> Result<(), String> {
        let panel = &config.panel;
        let colors = &config.colors;

        // Translucent backdrops: detail panel on the left, grid area right
        canvas.set_blend_mode(BlendMode::Blend);
        canvas.set_draw_color(config::rgba(colors.panel_bg, BACKDROP_ALPHA));
        canvas.fill_rect(Rect::new(0, 0, panel.width, config.canvas_height))?;
        canvas.set_draw_color(config::rgba(colors.grid_bg, BACKDROP_ALPHA));
        canvas.fill_rect(Rect::new(
            panel.width as i32,
            0,
            config.canvas_width - panel.width,
            config.canvas_height,
        ))?;
        canvas.set_blend_mode(BlendMode::None);

        // Heading centered over the panel
        let heading = "INVENTORY";
        let heading_x = (panel.width as i32 - text::text_width(heading, HEADING_SCALE) as i32) / 2;
        text::draw_text(
            canvas,
            heading,
            heading_x.max(panel.text_margin),
            20,
            config::rgb(colors.heading_text),
            HEADING_SCALE,
        )?;

        let Some(payload) = &self.payload else {
            return Ok(());
        };

        if let Some(texture) = textures.get(&payload.image_id) {
            let image = Rect::new(
                (panel.width as i32 - panel.image_size as i32) / 2,
                panel.image_center_y - panel.image_size as i32 / 2,
                panel.image_size,
                panel.image_size,
            );
            canvas.copy(texture, None, image)?;
        }

        let mut y = panel.name_y;
        for line in &payload.name_lines {
            text::draw_text(
                canvas,
                line,
                panel.text_margin,
                y,
                config::rgb(colors.name_text),
                NAME_SCALE,
            )?;
            y += text::line_height(NAME_SCALE) as i32;
        }

        let mut y = panel.description_y;
        for line in &payload.description_lines {
            text::draw_text(
                canvas,
                line,
                panel.text_margin,
                y,
                config::rgb(colors.description_text),
                DESCRIPTION_SCALE,
            )?;
            y += text::line_height(DESCRIPTION_SCALE) as i32;
        }

        Ok(())
    }
}

impl Default for DetailPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;

    fn item(id: &str, name: Option<&str>, description: Option<&str>) -> Item {
        Item {
            id: id.to_string(),
            image: format!("assets/items/{}.png", id),
            name: name.map(str::to_string),
            description: description.map(str::to_string),
        }
    }

    fn catalog() -> ItemCatalog {
        ItemCatalog::new(vec![
            item("lantern", Some("Storm Lantern"), Some("A dented lantern that still lights.")),
            item("marble", None, None),
        ])
    }

    #[test]
    fn payload_carries_the_item_fields() {
        let config = SceneConfig::default();
        let mut panel = DetailPanel::new();

        panel.rebuild(&catalog(), 0, &config);

        let payload = panel.payload().expect("payload for a backed slot");
        assert_eq!(payload.image_id, "lantern");
        assert_eq!(payload.name_lines.join(" "), "Storm Lantern");
        assert_eq!(
            payload.description_lines.join(" "),
            "A dented lantern that still lights."
        );
    }

    #[test]
    fn absent_fields_fall_back_to_placeholders() {
        let config = SceneConfig::default();
        let mut panel = DetailPanel::new();

        panel.rebuild(&catalog(), 1, &config);

        let payload = panel.payload().unwrap();
        assert_eq!(payload.name_lines.join(" "), "Untitled");
        assert_eq!(
            payload.description_lines.join(" "),
            "No description available"
        );
    }

    #[test]
    fn empty_slot_yields_an_empty_panel() {
        let config = SceneConfig::default();
        let mut panel = DetailPanel::new();

        panel.rebuild(&catalog(), 0, &config);
        assert!(panel.payload().is_some());

        // Slot 5 has no backing item: the old payload must be gone
        panel.rebuild(&catalog(), 5, &config);
        assert!(panel.payload().is_none());
    }

    #[test]
    fn rebuild_replaces_rather_than_accumulates() {
        let config = SceneConfig::default();
        let mut panel = DetailPanel::new();

        panel.rebuild(&catalog(), 0, &config);
        panel.rebuild(&catalog(), 1, &config);

        let payload = panel.payload().unwrap();
        assert_eq!(payload.image_id, "marble");
    }

    #[test]
    fn lines_are_wrapped_to_the_panel_width() {
        let config = SceneConfig::default();
        let text_width = config.panel.width - 2 * config.panel.text_margin as u32;
        let max_cols = text::max_columns(text_width, DESCRIPTION_SCALE);

        let long = "This description goes on for quite a while and certainly \
                    cannot fit on a single panel line at any reasonable scale.";
        let catalog = ItemCatalog::new(vec![item("scroll", Some("Scroll"), Some(long))]);

        let mut panel = DetailPanel::new();
        panel.rebuild(&catalog, 0, &config);

        let payload = panel.payload().unwrap();
        assert!(payload.description_lines.len() > 1);
        for line in &payload.description_lines {
            assert!(line.chars().count() <= max_cols);
        }
    }
}
