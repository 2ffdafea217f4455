// ui.rs - eframe front end: one tick per frame, then draw live cells and help

use eframe::egui;
use egui::{Align2, Color32, FontId, Rect, Vec2};
use life::{LifeConfig, Mode, PATTERNS, SimulationEngine};
use log::debug;

use crate::input;

const LIVE_COLOR: Color32 = Color32::WHITE;
const BACKGROUND: Color32 = Color32::BLACK;
const HELP_COLOR: Color32 = Color32::from_rgb(0, 200, 0);

pub struct LifeApp {
    engine: SimulationEngine,
    title: String,
}

impl LifeApp {
    pub fn new(config: LifeConfig) -> Self {
        Self {
            engine: SimulationEngine::new(config),
            title: String::new(),
        }
    }

    fn help_text(&self) -> String {
        let space = match self.engine.mode() {
            Mode::Editing => "Play",
            Mode::Playing => "Stop",
        };
        let mut text = format!(
            "Mouse Left: Draw\nMouse Right: Erase\n[SPACE]: {space}\n[C]: Clear the Table\n[R]: Random\n[F1]: Toggle Help\n"
        );
        for (i, pattern) in PATTERNS.iter().enumerate() {
            text.push_str(&format!("[{}]: {}\n", i + 1, pattern.name));
        }
        text
    }

    fn update_title(&mut self, ctx: &egui::Context) {
        let title = self.engine.status_line();
        if title != self.title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.title = title;
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Input and stepping finish before anything reads the grid
        let origin = ctx.screen_rect().min;
        let tick = input::collect(ctx, origin);
        if self.engine.on_tick(&tick) {
            debug!("generation {}", self.engine.grid().generation());
        }
        self.update_title(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BACKGROUND))
            .show(ctx, |ui| {
                let painter = ui.painter();
                let cell = self.engine.config().cell_size as f32;

                for (x, y) in self.engine.grid().live_cells() {
                    let min = origin + Vec2::new(x as f32 * cell, y as f32 * cell);
                    painter.rect_filled(Rect::from_min_size(min, Vec2::splat(cell)), 0.0, LIVE_COLOR);
                }

                if self.engine.help_visible() {
                    painter.text(
                        origin + Vec2::splat(4.0),
                        Align2::LEFT_TOP,
                        self.help_text(),
                        FontId::monospace(12.0),
                        HELP_COLOR,
                    );
                }
            });

        // Keep ticking at the display rate even without input
        ctx.request_repaint();
    }
}
