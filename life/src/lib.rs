// lib.rs - Conway's Game of Life: double-buffered grid plus the input/timing controller

pub mod config;      // Startup configuration
pub mod controller;  // Mode, frame counter and input handling
pub mod engine;      // Grid + controller owned together
pub mod grid;        // Cell buffers and the generation rule
pub mod patterns;    // Presets and random fill

pub use config::LifeConfig;
pub use controller::{InteractionController, KeyAction, Mode, PointerState, TickInput};
pub use engine::SimulationEngine;
pub use grid::{Grid, GridState, LifeGrid};
pub use patterns::{PATTERNS, Pattern};
