// input.rs - Reads egui's per-frame input into a TickInput

use eframe::egui;
use egui::{Key, Pos2};
use life::{KeyAction, PointerState, TickInput};

// Number keys stamp the preset at the same position in patterns::PATTERNS
const PRESET_KEYS: [Key; 7] = [
    Key::Num1, Key::Num2, Key::Num3, Key::Num4, Key::Num5, Key::Num6, Key::Num7,
];

/// `origin` is the top-left corner of the grid in screen points.
pub fn collect(ctx: &egui::Context, origin: Pos2) -> TickInput {
    ctx.input(|i| {
        let mut keys = Vec::new();
        if i.key_pressed(Key::Space) { keys.push(KeyAction::TogglePlay); }
        if i.key_pressed(Key::F1)    { keys.push(KeyAction::ToggleHelp); }
        if i.key_pressed(Key::C)     { keys.push(KeyAction::Clear); }
        if i.key_pressed(Key::R)     { keys.push(KeyAction::Randomize); }
        for (index, key) in PRESET_KEYS.iter().enumerate() {
            if i.key_pressed(*key) {
                keys.push(KeyAction::Stamp(index));
            }
        }

        let pointer = i.pointer.hover_pos().map(|pos| PointerState {
            x: pos.x - origin.x,
            y: pos.y - origin.y,
            primary: i.pointer.primary_down(),
            secondary: i.pointer.secondary_down(),
        });

        TickInput { keys, pointer }
    })
}
