// controller.rs - Turns per-tick input into grid edits, mode changes and timed steps

use log::{debug, info};

use crate::config::LifeConfig;
use crate::grid::LifeGrid;
use crate::patterns;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Editing,
    Playing,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Editing => "Editing",
            Mode::Playing => "Playing",
        }
    }
}

/// Discrete "just pressed" key events for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    TogglePlay,
    ToggleHelp,
    Clear,
    Randomize,
    Stamp(usize), // Index into patterns::PATTERNS
}

/// Pointer position in pixels relative to the grid origin, plus held buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub primary: bool,
    pub secondary: bool,
}

#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub keys: Vec<KeyAction>,
    pub pointer: Option<PointerState>, // None when the pointer is outside the window
}

/// Held-button painting stays enabled while playing.
#[derive(Debug, Clone)]
pub struct InteractionController {
    mode: Mode,
    help_visible: bool,
    frame: u64,
    ticks: u64,
    cell_size: u32,
    step_interval: u32,
}

impl InteractionController {
    pub fn new(config: &LifeConfig) -> Self {
        Self {
            mode: Mode::Editing,
            help_visible: true,
            frame: 0,
            ticks: 0,
            cell_size: config.cell_size.max(1),
            step_interval: config.step_interval.max(1),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_playing(&self) -> bool {
        self.mode == Mode::Playing
    }

    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Runs one tick. Returns true when a generation was stepped.
    pub fn on_tick<G: LifeGrid>(&mut self, grid: &mut G, input: &TickInput) -> bool {
        self.ticks = self.ticks.wrapping_add(1);

        for &key in &input.keys {
            self.apply_key(grid, key);
        }

        if let Some(pointer) = input.pointer {
            self.apply_pointer(grid, pointer);
        }

        match self.mode {
            Mode::Playing => {
                self.frame += 1;
                if self.frame % u64::from(self.step_interval) == 0 {
                    grid.step_generation();
                    return true;
                }
                false
            }
            Mode::Editing => {
                self.frame = 0;
                false
            }
        }
    }

    fn apply_key<G: LifeGrid>(&mut self, grid: &mut G, key: KeyAction) {
        match key {
            KeyAction::TogglePlay => {
                let mode = match self.mode {
                    Mode::Editing => Mode::Playing,
                    Mode::Playing => Mode::Editing,
                };
                self.set_mode(mode);
            }
            KeyAction::ToggleHelp => self.help_visible = !self.help_visible,
            KeyAction::Clear => {
                grid.clear_all();
                debug!("grid cleared");
            }
            KeyAction::Randomize => {
                self.set_mode(Mode::Editing);
                patterns::randomize(grid, self.ticks);
                debug!("grid randomized with seed {}", self.ticks);
            }
            KeyAction::Stamp(index) => match patterns::PATTERNS.get(index) {
                Some(pattern) => {
                    self.set_mode(Mode::Editing);
                    patterns::stamp(grid, pattern);
                    debug!("stamped pattern {}", pattern.name);
                }
                None => debug!("no pattern at index {index}"),
            },
        }
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.frame = 0;
        info!("mode changed to {}", mode.label());
    }

    fn apply_pointer<G: LifeGrid>(&mut self, grid: &mut G, pointer: PointerState) {
        if !pointer.primary && !pointer.secondary {
            return;
        }
        let (cx, cy) = self.pointer_to_cell(pointer.x, pointer.y, grid.size());
        // Erase first so drawing wins when both buttons are held
        if pointer.secondary {
            grid.set_alive(cx, cy, false);
        }
        if pointer.primary {
            grid.set_alive(cx, cy, true);
        }
    }

    /// Pixel position to cell coordinates, clamped to `[0, size - 1]`.
    pub fn pointer_to_cell(&self, px: f32, py: f32, size: usize) -> (usize, usize) {
        let last = size.saturating_sub(1) as f32;
        let cell = self.cell_size as f32;
        // NaN clamps to NaN and then casts to 0
        let to_cell = |p: f32| (p / cell).floor().clamp(0.0, last) as usize;
        (to_cell(px), to_cell(py))
    }
}
