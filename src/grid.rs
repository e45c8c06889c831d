//! Selection Grid
//!
//! Maps a single flat selection index onto the fixed columns x rows browser
//! layout. Navigation is bounds-checked and clamping: horizontal moves stay
//! inside the current row, vertical moves stay inside the grid, and there is
//! no wraparound. The grid also owns the cell layout math and renders the
//! cell boxes, item thumbnails, and selection highlight.

use std::collections::HashMap;

use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

use crate::config::{self, SceneConfig};
use crate::item::ItemCatalog;

/// Inset of a thumbnail from its cell edges.
const THUMBNAIL_INSET: u32 = 10;

pub struct SelectionGrid {
    columns: usize,
    rows: usize,
    selected: usize,
}

impl SelectionGrid {
    /// Creates a grid with the selection on slot 0.
    pub fn new(columns: usize, rows: usize) -> Self {
        debug_assert!(columns > 0 && rows > 0);
        SelectionGrid {
            columns,
            rows,
            selected: 0,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn slot_count(&self) -> usize {
        self.columns * self.rows
    }

    /// Moves one column right; no-op at the end of a row. Returns whether
    /// the selection changed.
    pub fn move_right(&mut self) -> bool {
        if self.selected % self.columns < self.columns - 1 {
            self.selected += 1;
            true
        } else {
            false
        }
    }

    /// Moves one column left; no-op at the start of a row.
    pub fn move_left(&mut self) -> bool {
        if self.selected % self.columns > 0 {
            self.selected -= 1;
            true
        } else {
            false
        }
    }

    /// Moves one row down; no-op on the last row.
    pub fn move_down(&mut self) -> bool {
        if self.selected + self.columns < self.slot_count() {
            self.selected += self.columns;
            true
        } else {
            false
        }
    }

    /// Moves one row up; no-op on the first row.
    pub fn move_up(&mut self) -> bool {
        if self.selected >= self.columns {
            self.selected -= self.columns;
            true
        } else {
            false
        }
    }

    /// Screen rectangle of a slot.
    pub fn cell_rect(&self, index: usize, config: &SceneConfig) -> Rect {
        let (origin_x, origin_y) = config.grid_origin();
        let step = (config.grid.cell_size + config.grid.cell_padding) as i32;
        let col = (index % self.columns) as i32;
        let row = (index / self.columns) as i32;
        Rect::new(
            origin_x + col * step,
            origin_y + row * step,
            config.grid.cell_size,
            config.grid.cell_size,
        )
    }

    /// Draws every cell, thumbnails for slots backed by an item, and the
    /// highlight border on the selected cell.
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        catalog: &ItemCatalog,
        textures: &HashMap<String, Texture<'_>>,
        config: &SceneConfig,
    ) -> Result<(), String> {
        for index in 0..self.slot_count() {
            let cell = self.cell_rect(index, config);

            canvas.set_draw_color(config::rgb(config.colors.cell_fill));
            canvas.fill_rect(cell)?;

            if let Some(item) = catalog.get(index) {
                if let Some(texture) = textures.get(&item.id) {
                    let thumb = Rect::new(
                        cell.x() + THUMBNAIL_INSET as i32,
                        cell.y() + THUMBNAIL_INSET as i32,
                        config.grid.cell_size - 2 * THUMBNAIL_INSET,
                        config.grid.cell_size - 2 * THUMBNAIL_INSET,
                    );
                    canvas.copy(texture, None, thumb)?;
                }
            }

            if index == self.selected {
                // Double stroke stands in for a thicker border
                canvas.set_draw_color(config::rgb(config.colors.highlight));
                canvas.draw_rect(cell)?;
                canvas.draw_rect(Rect::new(
                    cell.x() + 1,
                    cell.y() + 1,
                    cell.width() - 2,
                    cell.height() - 2,
                ))?;
            } else {
                canvas.set_draw_color(config::rgb(config.colors.cell_border));
                canvas.draw_rect(cell)?;
            }
        }

        Ok(())
    }
}
