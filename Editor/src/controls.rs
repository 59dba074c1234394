use bevy_egui::egui;
use perlin_engine::params::{OCTAVES_RANGE, PERSISTENCE_RANGE, SCALE_RANGE, SEED_RANGE};
use perlin_engine::NoiseParameters;
use crate::ui_strings::UiStrings;

/// What the parameter panel asked for this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlAction {
    Update(NoiseParameters),
    Reset,
    CopyPreset,
}

pub fn controls_ui(ui: &mut egui::Ui, params: NoiseParameters, strings: &UiStrings) -> Option<ControlAction> {
    let text = &strings.controls;
    let mut next = params;
    let mut changed = false;

    ui.heading(&text.title);
    ui.separator();

    changed |= ui.add(egui::Slider::new(&mut next.scale, SCALE_RANGE).logarithmic(true).text(&text.scale)).changed();
    changed |= ui.add(egui::Slider::new(&mut next.octaves, OCTAVES_RANGE).text(&text.octaves)).changed();
    changed |= ui.add(egui::Slider::new(&mut next.persistence, PERSISTENCE_RANGE).text(&text.persistence)).changed();
    changed |= ui.add(egui::Slider::new(&mut next.seed, SEED_RANGE).text(&text.seed)).changed();

    ui.separator();

    let mut action = None;
    ui.horizontal(|ui| {
        if ui.button(&text.reset).clicked() { action = Some(ControlAction::Reset); }
        if ui.button(&text.copy_preset).clicked() { action = Some(ControlAction::CopyPreset); }
    });

    action.or(changed.then_some(ControlAction::Update(next)))
}
