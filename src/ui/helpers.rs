// src/ui/helpers.rs
use crate::view_models::{OptionMark, OptionView};
use egui::{Button, Color32, RichText, Ui, Vec2};

pub fn big_list_button(
    ui: &mut Ui,
    label: String,
    width: f32,
    height: f32,
    enabled: bool,
) -> bool {
    ui.add_enabled(
        enabled,
        Button::new(label).min_size(Vec2::new(width, height)),
    )
    .clicked()
}

/// Botón de una opción de respuesta, coloreado según su estado.
/// Con `enabled == false` (pregunta ya respondida) el botón no acepta clics.
pub fn option_button(
    ui: &mut Ui,
    option: &OptionView,
    width: f32,
    height: f32,
    enabled: bool,
) -> bool {
    let fill = match option.mark {
        Some(OptionMark::Correct) => Color32::DARK_GREEN,
        Some(OptionMark::Incorrect) => Color32::DARK_RED,
        None => ui.visuals().widgets.inactive.weak_bg_fill,
    };

    let mut text = RichText::new(option.label());
    if option.mark.is_some() {
        text = text.color(Color32::WHITE);
    }
    if option.selected {
        text = text.strong();
    }

    let btn = Button::new(text)
        .min_size(Vec2::new(width, height))
        .fill(fill)
        .selected(option.selected);
    ui.add_enabled(enabled, btn).clicked()
}
