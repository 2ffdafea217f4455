// engine.rs - Owns the grid and the controller for the lifetime of the window

use crate::config::LifeConfig;
use crate::controller::{InteractionController, Mode, TickInput};
use crate::grid::GridState;

/// Everything the tick and render handlers share, constructed once at startup.
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    config: LifeConfig,
    grid: GridState,
    controller: InteractionController,
}

impl SimulationEngine {
    pub fn new(config: LifeConfig) -> Self {
        Self {
            config,
            grid: GridState::new(config.grid_size),
            controller: InteractionController::new(&config),
        }
    }

    /// Processes one tick of input. Returns true when a generation was stepped.
    pub fn on_tick(&mut self, input: &TickInput) -> bool {
        self.controller.on_tick(&mut self.grid, input)
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut GridState {
        &mut self.grid
    }

    pub fn mode(&self) -> Mode {
        self.controller.mode()
    }

    pub fn help_visible(&self) -> bool {
        self.controller.help_visible()
    }

    pub fn frame(&self) -> u64 {
        self.controller.frame()
    }

    /// One-line summary for the window title.
    pub fn status_line(&self) -> String {
        format!(
            "Life - {} - generation {} - population {}",
            self.mode().label(),
            self.grid.generation(),
            self.grid.population()
        )
    }
}
