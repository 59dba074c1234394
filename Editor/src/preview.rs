use bevy::prelude::*;
use bevy_egui::egui;
use perlin_engine::NoiseImage;
use crate::state::ViewerState;
use crate::ui_strings::UiStrings;

/// GPU copy of the last image, tagged with the state generation it came from.
#[derive(Resource, Default)]
pub struct PreviewTexture {
    handle: Option<egui::TextureHandle>,
    generation: u64,
}

pub fn to_color_image(image: &NoiseImage) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied([image.width as usize, image.height as usize], &image.to_rgba8())
}

/// Uploads the state's image when it is newer than the texture.
pub fn sync_texture(ctx: &egui::Context, texture: &mut PreviewTexture, state: &ViewerState) {
    if texture.handle.is_some() && texture.generation == state.generation() {
        return;
    }
    let img = to_color_image(state.image());
    match &mut texture.handle {
        Some(handle) => handle.set(img, egui::TextureOptions::NEAREST),
        None => texture.handle = Some(ctx.load_texture("noise_preview", img, egui::TextureOptions::NEAREST)),
    }
    texture.generation = state.generation();
}

pub fn preview_ui(ui: &mut egui::Ui, texture: &PreviewTexture, state: &ViewerState, ui_text: &UiStrings) {
    ui.horizontal(|ui| {
        ui.heading(&ui_text.preview.title);
        ui.separator();
        let image = state.image();
        ui.label(format!("{}: {}x{}", ui_text.preview.resolution, image.width, image.height));
    });

    ui.separator();

    let Some(tex) = &texture.handle else {
        ui.label(&ui_text.preview.empty);
        return;
    };

    // Fit the window; nearest filtering keeps upscaled pixels crisp.
    let tex_size = tex.size_vec2();
    let available = ui.available_size_before_wrap();
    let scale = (available.x / tex_size.x).min(available.y / tex_size.y).max(0.0);
    let draw_size = tex_size * scale;
    ui.image(egui::load::SizedTexture::new(tex.id(), draw_size));
}
