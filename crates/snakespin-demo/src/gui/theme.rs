use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgb;
use snakespin::Color;

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.snakespin-window {
    background-color: #f9fafb;
}

.snakespin-controls label {
    color: #374151;
    font-weight: 500;
}

.snakespin-controls .value-label {
    color: #6b7280;
    font-weight: normal;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}

pub fn to_rgba(color: Color) -> gdk::RGBA {
    let (r, g, b) = color.components();
    gdk::RGBA::new(r as f32, g as f32, b as f32, 1.0)
}

/// Drops alpha; the indicator only varies opacity per element.
pub fn color_from_rgba(rgba: &gdk::RGBA) -> Color {
    Srgb::new(rgba.red(), rgba.green(), rgba.blue())
        .into_format::<u8>()
        .into()
}
