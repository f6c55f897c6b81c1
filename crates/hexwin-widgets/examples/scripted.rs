//! Scripted session example
//!
//! Builds the demo windows, replays a short pointer gesture through the host
//! callbacks and prints what a frame would draw. Runs headless.
//!
//! Run with `RUST_LOG=trace` to follow the event routing.

use hexwin::{
    palette, BoxLayout, DebugOptions, DrawCommand, DrawList, Game, GuiApp, HostConfig,
    LayoutFlags, Metrics, MouseButton, Window,
};
use hexwin_widgets::{Button, Checkbox, Label, Slider, Space};

fn build_app(metrics: Metrics) -> GuiApp {
    GuiApp::new(HostConfig::default().with_name("scripted")).with_setup(move |manager| {
        manager.add_window(
            Window::new(100, 100).at(10, 10).with_layout(
                BoxLayout::vbox()
                    .with_child(Label::new("blabla", metrics.clone()), LayoutFlags::empty())
                    .with_child(
                        Slider::new(10).on_change(|value| println!("slider -> {value}")),
                        LayoutFlags::EXPAND,
                    ),
            ),
        );

        manager.add_window(
            Window::new(150, 60).at(150, 10).with_layout(
                BoxLayout::vbox()
                    .with_border(palette::SURFACE)
                    .with_child(
                        Checkbox::new("sound", metrics.clone())
                            .on_change(|checked| println!("sound -> {checked}")),
                        LayoutFlags::empty(),
                    )
                    .with_child(Space::new(0, 4), LayoutFlags::EXPAND)
                    .with_child(
                        Button::new("quit", metrics.clone()).on_click(|| println!("quit clicked")),
                        LayoutFlags::RIGHT,
                    ),
            ),
        );

        manager.set_debug_options(DebugOptions::none().with_show_capture(true));
    })
}

fn main() {
    env_logger::init();

    let metrics = Metrics::default();
    let mut app = build_app(metrics.clone());
    app.init();

    // Drag the slider past both ends, then click the checkbox and the button
    app.mouse_down(20, 60, MouseButton::Left);
    for x in [40, 70, 400, -50, 60] {
        app.mouse_motion(x, 60);
    }
    app.mouse_up(60, 60, MouseButton::Left);

    app.mouse_down(160, 12, MouseButton::Left);
    app.mouse_up(160, 12, MouseButton::Left);

    app.mouse_down(295, 60, MouseButton::Left);
    app.mouse_up(295, 60, MouseButton::Left);

    let mut frame = DrawList::new(metrics);
    app.update(1.0 / 60.0);
    app.draw(&mut frame);

    for command in frame.commands() {
        match command {
            DrawCommand::Text { text, bounds } => {
                println!("text {text:?} at ({}, {})", bounds.x, bounds.y);
            }
            DrawCommand::FillRect(rect) => {
                println!("fill {}x{} at ({}, {})", rect.w, rect.h, rect.x, rect.y);
            }
            _ => {}
        }
    }
    app.quit();
}
