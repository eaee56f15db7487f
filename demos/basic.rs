//! Standalone demo: opens a window with two color fields.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_color_field::{color_field, ColorFieldProps, FieldOptions};

fn main() {
    env_logger::init();

    let accent = RwSignal::new(Some("#3b82f6".to_string()));
    let backdrop = RwSignal::new(Some("linear-gradient(90deg, #ff0000 0%, #0000ff 100%)".to_string()));
    let options = FieldOptions {
        required: true,
        ..FieldOptions::default()
    };

    let view = move || {
        let options = options.clone();
        v_stack((
            color_field(
                accent,
                ColorFieldProps::new("accent")
                    .label("Accent")
                    .hint("Hex, rgb() or rgba()")
                    .required(true)
                    .error(move || {
                        let value = accent.get().unwrap_or_default();
                        options.validate(&value).err().map(|e| e.to_string())
                    })
                    .on_change(|change| log::info!("{} = {}", change.name, change.value)),
            ),
            color_field(
                backdrop,
                ColorFieldProps::new("backdrop")
                    .label("Backdrop")
                    .on_change(|change| log::info!("{} = {}", change.name, change.value)),
            ),
        ))
        .style(|s| s.padding(16.0).gap(16.0).width(320.0))
        .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
            floem::quit_app()
        })
    };

    floem::Application::new()
        .window(
            move |_| view(),
            Some(
                WindowConfig::default()
                    .size((360.0, 720.0))
                    .title("floem-color-field"),
            ),
        )
        .run();
}
