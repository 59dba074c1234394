use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin};
mod config; mod controls; mod preview; mod state; mod ui_strings;
use controls::ControlAction;
use preview::PreviewTexture;
use state::ViewerState;
use ui_strings::UiStrings;

const PANEL_WIDTH: f32 = 280.0;

fn setup(mut commands: Commands) { commands.spawn(Camera2dBundle::default()); }

fn ui_system(mut contexts: EguiContexts, mut state: ResMut<ViewerState>, mut texture: ResMut<PreviewTexture>, strings: Res<UiStrings>) {
    // Slider edits from the previous frame land here, so a drag costs one
    // regenerate per frame at most.
    state.refresh();

    let ctx = contexts.ctx_mut();
    preview::sync_texture(ctx, &mut texture, &state);

    let mut action = None;
    egui::SidePanel::left("noise_parameters").exact_width(PANEL_WIDTH).show(ctx, |ui| {
        action = controls::controls_ui(ui, state.params(), &strings);
    });
    egui::CentralPanel::default().show(ctx, |ui| {
        preview::preview_ui(ui, &texture, &state, &strings);
    });

    match action {
        Some(ControlAction::Update(params)) => { state.apply(params); }
        Some(ControlAction::Reset) => { if state.reset() { info!("Parameters reset to {:?}", state.params()); } }
        Some(ControlAction::CopyPreset) => match state.params().to_ron() {
            Ok(text) => ctx.output_mut(|o| o.copied_text = text),
            Err(e) => warn!("Failed to serialize preset: {e}"),
        },
        None => {}
    }
}

fn main() {
    // Logging goes up first so config problems are reported.
    let mut app = App::new();
    app.add_plugins(LogPlugin::default());

    let config_path = std::env::args().nth(1).unwrap_or_else(|| config::DEFAULT_CONFIG_PATH.to_string());
    let config = config::load_or_default(&config_path);
    let strings = ui_strings::load_or_default(ui_strings::DEFAULT_STRINGS_PATH);

    let window_size = (config.width as f32 + PANEL_WIDTH + 32.0, config.height.max(480) as f32 + 64.0);

    app.insert_resource(ViewerState::new(&config))
        .insert_resource(PreviewTexture::default())
        .add_plugins((
            DefaultPlugins.build().disable::<LogPlugin>().set(WindowPlugin {
                primary_window: Some(Window {
                    title: strings.app.window_title.clone(),
                    resolution: window_size.into(),
                    ..default()
                }),
                ..default()
            }),
            EguiPlugin,
        ))
        .insert_resource(strings)
        .add_systems(Startup, setup)
        .add_systems(Update, ui_system)
        .run();
}
