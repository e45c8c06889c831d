//! Input Sampling
//!
//! Decouples the scene from the SDL2 keyboard. Two query semantics are
//! required by different parts of the scene: edge-triggered ("just became
//! pressed this frame") for grid navigation and confirm, level-triggered
//! ("currently held") for movement and cancel. The sampler derives edges by
//! comparing against the previous frame's key state, so it must be advanced
//! exactly once per frame before the scene tick.

use sdl2::keyboard::{KeyboardState, Scancode};

/// The six controls the scene reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKey {
    Left,
    Right,
    Up,
    Down,
    Confirm,
    Cancel,
}

impl ControlKey {
    pub const COUNT: usize = 6;

    pub const ALL: [ControlKey; ControlKey::COUNT] = [
        ControlKey::Left,
        ControlKey::Right,
        ControlKey::Up,
        ControlKey::Down,
        ControlKey::Confirm,
        ControlKey::Cancel,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Physical key bound to this control.
    fn scancode(self) -> Scancode {
        match self {
            ControlKey::Left => Scancode::Left,
            ControlKey::Right => Scancode::Right,
            ControlKey::Up => Scancode::Up,
            ControlKey::Down => Scancode::Down,
            ControlKey::Confirm => Scancode::Space,
            ControlKey::Cancel => Scancode::Escape,
        }
    }
}

/// Per-frame input queries consumed by the scene.
pub trait InputSampler {
    /// True only on the frame the key transitioned to pressed.
    fn was_just_pressed(&self, key: ControlKey) -> bool;

    /// True on every frame the key is currently down.
    fn is_held(&self, key: ControlKey) -> bool;
}

/// SDL2-backed sampler over the six control scancodes.
pub struct KeyboardSampler {
    held: [bool; ControlKey::COUNT],
    previous: [bool; ControlKey::COUNT],
}

impl KeyboardSampler {
    pub fn new() -> Self {
        KeyboardSampler {
            held: [false; ControlKey::COUNT],
            previous: [false; ControlKey::COUNT],
        }
    }

    /// Reads the current keyboard state. Call once per frame, after event
    /// pumping and before the scene tick.
    pub fn sample(&mut self, keyboard: &KeyboardState) {
        let mut now = [false; ControlKey::COUNT];
        for key in ControlKey::ALL {
            now[key.index()] = keyboard.is_scancode_pressed(key.scancode());
        }
        self.advance(now);
    }

    fn advance(&mut self, now: [bool; ControlKey::COUNT]) {
        self.previous = self.held;
        self.held = now;
    }
}

impl InputSampler for KeyboardSampler {
    fn was_just_pressed(&self, key: ControlKey) -> bool {
        self.held[key.index()] && !self.previous[key.index()]
    }

    fn is_held(&self, key: ControlKey) -> bool {
        self.held[key.index()]
    }
}

impl Default for KeyboardSampler {
    fn default() -> Self {
        Self::new()
    }
}

/// Canned input for tests: a fixed answer per query, no frame advance.
#[cfg(test)]
pub struct ScriptedInput {
    pressed: Vec<ControlKey>,
    held: Vec<ControlKey>,
}

#[cfg(test)]
impl ScriptedInput {
    /// No keys pressed or held.
    pub fn idle() -> Self {
        ScriptedInput {
            pressed: Vec::new(),
            held: Vec::new(),
        }
    }

    /// A key on its first pressed frame (edge and level both read true).
    pub fn tap(key: ControlKey) -> Self {
        ScriptedInput {
            pressed: vec![key],
            held: vec![key],
        }
    }

    /// Several keys on their first pressed frame at once.
    pub fn tap_many(keys: &[ControlKey]) -> Self {
        ScriptedInput {
            pressed: keys.to_vec(),
            held: keys.to_vec(),
        }
    }

    /// Keys held past their first frame (level true, edge false).
    pub fn hold(keys: &[ControlKey]) -> Self {
        ScriptedInput {
            pressed: Vec::new(),
            held: keys.to_vec(),
        }
    }
}

#[cfg(test)]
impl InputSampler for ScriptedInput {
    fn was_just_pressed(&self, key: ControlKey) -> bool {
        self.pressed.contains(&key)
    }

    fn is_held(&self, key: ControlKey) -> bool {
        self.held.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(sampler: &mut KeyboardSampler, down: &[ControlKey]) {
        let mut now = [false; ControlKey::COUNT];
        for key in down {
            now[key.index()] = true;
        }
        sampler.advance(now);
    }

    #[test]
    fn press_is_an_edge_on_the_first_frame_only() {
        let mut sampler = KeyboardSampler::new();

        frame(&mut sampler, &[ControlKey::Right]);
        assert!(sampler.was_just_pressed(ControlKey::Right));
        assert!(sampler.is_held(ControlKey::Right));

        frame(&mut sampler, &[ControlKey::Right]);
        assert!(!sampler.was_just_pressed(ControlKey::Right));
        assert!(sampler.is_held(ControlKey::Right));
    }

    #[test]
    fn release_clears_both_semantics() {
        let mut sampler = KeyboardSampler::new();
        frame(&mut sampler, &[ControlKey::Confirm]);
        frame(&mut sampler, &[]);

        assert!(!sampler.was_just_pressed(ControlKey::Confirm));
        assert!(!sampler.is_held(ControlKey::Confirm));
    }

    #[test]
    fn release_and_repress_fires_a_second_edge() {
        let mut sampler = KeyboardSampler::new();
        frame(&mut sampler, &[ControlKey::Down]);
        frame(&mut sampler, &[]);
        frame(&mut sampler, &[ControlKey::Down]);

        assert!(sampler.was_just_pressed(ControlKey::Down));
    }

    #[test]
    fn keys_are_sampled_independently() {
        let mut sampler = KeyboardSampler::new();
        frame(&mut sampler, &[ControlKey::Left]);
        frame(&mut sampler, &[ControlKey::Left, ControlKey::Up]);

        assert!(!sampler.was_just_pressed(ControlKey::Left));
        assert!(sampler.is_held(ControlKey::Left));
        assert!(sampler.was_just_pressed(ControlKey::Up));
        assert!(sampler.is_held(ControlKey::Up));
        assert!(!sampler.is_held(ControlKey::Cancel));
    }
}
