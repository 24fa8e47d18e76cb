//! file: app.rs
//! author: Jacob Xie
//! date: 2025/12/14 23:45:00 Sunday
//! brief:

use gpui::{
    App, AppContext, Application, Bounds, Focusable, KeyBinding, WindowBounds, WindowOptions, px,
    size,
};

use crate::{
    config::QuizConfig,
    source::source_from_config,
    view::{CapitalsQuiz, PlayAgain, QuitGame},
};

pub fn run(config: QuizConfig) {
    Application::new().run(move |cx: &mut App| {
        cx.bind_keys([
            KeyBinding::new("enter", PlayAgain, None),
            KeyBinding::new("escape", QuitGame, None),
        ]);

        let source = source_from_config(&config);
        let bounds = Bounds::centered(None, size(px(960.), px(640.)), cx);
        let window = cx
            .open_window(
                WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    ..Default::default()
                },
                move |_, cx| cx.new(|cx| CapitalsQuiz::new(&config, source, cx)),
            )
            .unwrap();

        window
            .update(cx, |view: &mut CapitalsQuiz, window, cx| {
                window.focus(&view.focus_handle(cx));
                view.request_round(cx);
                cx.activate(true);
            })
            .unwrap();

        cx.on_action(|_: &QuitGame, cx| cx.quit());
        cx.activate(true);
    });
}
