use std::collections::HashMap;

use log::{info, warn};
use sdl2::event::Event;
use sdl2::image::LoadTexture;

mod config;
mod detail;
mod entity;
mod grid;
mod input;
mod item;
mod movement;
mod scene;
mod text;

use config::SceneConfig;
use input::KeyboardSampler;
use item::ItemCatalog;
use scene::{MainScene, Scene};

const ITEM_MANIFEST: &str = "assets/items/items.json";
const SCENE_CONFIG: &str = "assets/config/scene.json";

/// Frame delta for the fixed ~60 FPS loop.
const FRAME_DT: f32 = 1.0 / 60.0;

/// Generic texture loading helper
///
/// Loads a texture from the given path with consistent error handling
fn load_texture<'a>(
    texture_creator: &'a sdl2::render::TextureCreator<sdl2::video::WindowContext>,
    path: &str,
) -> Result<sdl2::render::Texture<'a>, String> {
    texture_creator
        .load_texture(path)
        .map_err(|e| format!("Failed to load {}: {}", path, e))
}

/// Calculate the best window scale based on monitor size
///
/// The scene always runs on its fixed logical canvas; only the window
/// grows by integer multiples.
fn calculate_window_scale(video_subsystem: &sdl2::VideoSubsystem, config: &SceneConfig) -> u32 {
    match video_subsystem.desktop_display_mode(0) {
        Ok(display_mode) => {
            // Leave 10% margin for taskbars/decorations
            let usable_w = (display_mode.w as f32 * 0.9) as i32;
            let usable_h = (display_mode.h as f32 * 0.9) as i32;

            let max_scale_w = usable_w / config.canvas_width as i32;
            let max_scale_h = usable_h / config.canvas_height as i32;

            max_scale_w.min(max_scale_h).clamp(1, 2) as u32
        }
        Err(_) => {
            warn!("could not detect monitor size, using 1x scale");
            1
        }
    }
}

fn main() -> Result<(), String> {
    env_logger::init();

    let config = SceneConfig::load_from_file(SCENE_CONFIG).unwrap_or_else(|e| {
        info!("using built-in scene config ({})", e);
        SceneConfig::default()
    });

    // The catalog arrives fully formed; a missing manifest degrades to an
    // empty browser rather than a startup failure.
    let catalog = ItemCatalog::load_from_file(ITEM_MANIFEST).unwrap_or_else(|e| {
        warn!("{} ({})", e, ITEM_MANIFEST);
        ItemCatalog::default()
    });
    info!(
        "catalog holds {} items across {} slots",
        catalog.len(),
        config.slot_count()
    );
    info!("controls: arrows navigate/steer, space confirms, escape returns");

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window_scale = calculate_window_scale(&video_subsystem, &config);
    let window = video_subsystem
        .window(
            "Curio",
            config.canvas_width * window_scale,
            config.canvas_height * window_scale,
        )
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    // Fixed logical canvas; SDL2 scales to the actual window
    canvas
        .set_logical_size(config.canvas_width, config.canvas_height)
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    let backdrop = config::rgb(config.colors.backdrop);
    let mut scene = MainScene::new(config, catalog);

    // Asset preparation: a failed image load is not fatal, the slot just
    // renders without a picture
    let mut textures = HashMap::new();
    for request in scene.prepare() {
        match load_texture(&texture_creator, &request.path) {
            Ok(texture) => {
                textures.insert(request.id, texture);
            }
            Err(e) => warn!("image for item {} unavailable: {}", request.id, e),
        }
    }

    scene.initialize();

    let mut sampler = KeyboardSampler::new();

    'running: loop {
        for event in event_pump.poll_iter() {
            if let Event::Quit { .. } = event {
                break 'running;
            }
        }

        sampler.sample(&event_pump.keyboard_state());
        scene.tick(&sampler, FRAME_DT);

        canvas.set_draw_color(backdrop);
        canvas.clear();
        scene.render(&mut canvas, &textures)?;
        canvas.present();

        // Cap framerate to ~60 FPS
        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }

    Ok(())
}
