// config.rs - Startup configuration for the simulation and its window

use std::env;
use std::str::FromStr;

use anyhow::{Context, Result, bail};

pub const DEFAULT_CELL_SIZE: u32 = 8;      // Pixels per cell side
pub const DEFAULT_GRID_SIZE: usize = 64;   // Cells per grid side (64x64 board)
pub const DEFAULT_STEP_INTERVAL: u32 = 4;  // Ticks per generation while playing
pub const MAX_GRID_SIZE: usize = 1024;
pub const MAX_CELL_SIZE: u32 = 256;

pub const CELL_SIZE_VAR: &str = "LIFE_CELL_SIZE";
pub const GRID_SIZE_VAR: &str = "LIFE_GRID_SIZE";
pub const STEP_INTERVAL_VAR: &str = "LIFE_STEP_INTERVAL";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeConfig {
    pub cell_size: u32,
    pub grid_size: usize,
    pub step_interval: u32,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            grid_size: DEFAULT_GRID_SIZE,
            step_interval: DEFAULT_STEP_INTERVAL,
        }
    }
}

impl LifeConfig {
    /// Defaults overridden by `LIFE_CELL_SIZE`, `LIFE_GRID_SIZE` and
    /// `LIFE_STEP_INTERVAL` when they are set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let config = Self {
            cell_size: parse_var(&lookup, CELL_SIZE_VAR, defaults.cell_size)?,
            grid_size: parse_var(&lookup, GRID_SIZE_VAR, defaults.grid_size)?,
            step_interval: parse_var(&lookup, STEP_INTERVAL_VAR, defaults.step_interval)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.cell_size == 0 || self.cell_size > MAX_CELL_SIZE {
            bail!("cell size must be between 1 and {MAX_CELL_SIZE} pixels, got {}", self.cell_size);
        }
        if self.grid_size == 0 || self.grid_size > MAX_GRID_SIZE {
            bail!("grid size must be between 1 and {MAX_GRID_SIZE}, got {}", self.grid_size);
        }
        if self.step_interval == 0 {
            bail!("step interval must be at least 1 tick");
        }
        self.screen_size()?;
        Ok(())
    }

    /// Window side length in pixels.
    pub fn screen_size(&self) -> Result<u32> {
        u32::try_from(self.grid_size)
            .ok()
            .and_then(|n| n.checked_mul(self.cell_size))
            .with_context(|| {
                format!("{n}x{n} grid of {} px cells does not fit a window", self.cell_size, n = self.grid_size)
            })
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a positive integer, got {raw:?}")),
        None => Ok(default),
    }
}
