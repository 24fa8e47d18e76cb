//! file: view.rs
//! author: Jacob Xie
//! date: 2025/12/20 14:03:27 Saturday
//! brief: gpui view driving the quiz

use std::{sync::Arc, time::Duration};

use gpui::{
    App, ClickEvent, Context, FocusHandle, Focusable, Render, SharedString, Task, Window, actions,
    div, prelude::*, px, rgb, rgba,
};
use tracing::{info, warn};

use crate::{
    config::QuizConfig,
    error::FetchError,
    game::{ClickOutcome, Country, Quiz, RoundStatus},
    source::CountrySource,
};

const TILE_WIDTH: f32 = 168.0;
const TILE_HEIGHT: f32 = 72.0;
const BOARD_MIN_HEIGHT: f32 = 260.0;

actions!(capitals, [PlayAgain, QuitGame]);

pub struct CapitalsQuiz {
    quiz: Quiz,
    source: Arc<dyn CountrySource>,
    mismatch_delay: Duration,
    focus_handle: FocusHandle,
    // Replacing either task drops the old one, which cancels it.
    fetch_task: Option<Task<()>>,
    mismatch_task: Option<Task<()>>,
}

impl CapitalsQuiz {
    pub fn new(config: &QuizConfig, source: Arc<dyn CountrySource>, cx: &mut Context<Self>) -> Self {
        Self {
            quiz: Quiz::new(config.pair_count),
            source,
            mismatch_delay: config.mismatch_delay,
            focus_handle: cx.focus_handle(),
            fetch_task: None,
            mismatch_task: None,
        }
    }

    /// Throws away the current round and fetches countries for a new one.
    pub fn request_round(&mut self, cx: &mut Context<Self>) {
        self.mismatch_task = None;
        self.quiz.begin_loading();

        let source = self.source.clone();
        let fetch = cx
            .background_executor()
            .spawn(async move { source.fetch() });

        self.fetch_task = Some(cx.spawn(async move |this, cx| {
            let result = fetch.await;
            this.update(cx, |view, cx| view.finish_fetch(result, cx)).ok();
        }));
        cx.notify();
    }

    fn finish_fetch(&mut self, result: Result<Vec<Country>, FetchError>, cx: &mut Context<Self>) {
        match result {
            Ok(countries) => {
                if let Err(err) = self.quiz.start_round(&countries) {
                    warn!(error = %err, countries = countries.len(), "cannot start round");
                }
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch countries");
                self.quiz.fail();
            }
        }
        cx.notify();
    }

    fn schedule_mismatch_clear(&mut self, cx: &mut Context<Self>) {
        let delay = self.mismatch_delay;
        self.mismatch_task = Some(cx.spawn(async move |this, cx| {
            cx.background_executor().timer(delay).await;
            this.update(cx, |view, cx| {
                if view.quiz.clear_mismatch() {
                    cx.notify();
                }
            })
            .ok();
        }));
    }

    fn handle_tile_click(&mut self, id: usize, cx: &mut Context<Self>) {
        match self.quiz.click(id) {
            ClickOutcome::Ignored => return,
            ClickOutcome::Mismatched => self.schedule_mismatch_clear(cx),
            ClickOutcome::Won => info!(rounds_won = self.quiz.rounds_won(), "all pairs matched"),
            ClickOutcome::Selected | ClickOutcome::Matched => {}
        }
        cx.notify();
    }

    fn handle_play_again(&mut self, cx: &mut Context<Self>) {
        self.request_round(cx);
    }

    fn status_text(&self) -> (&'static str, u32) {
        match self.quiz.status() {
            RoundStatus::Loading => ("Loading", 0x93c5fd),
            RoundStatus::Playing => ("Playing", 0x34d399),
            RoundStatus::Won => ("Round won", 0xfbbf24),
            RoundStatus::Failed => ("Error", 0xf87171),
        }
    }

    /// Background and border colours for a tile.
    fn tile_colors(&self, id: usize) -> (u32, u32) {
        if self.quiz.is_matched(id) {
            (0x064e3b, 0x34d399)
        } else if self.quiz.is_mismatched(id) {
            (0x7f1d1d, 0xf87171)
        } else if self.quiz.is_pending(id) {
            (0x1e3a8a, 0x93c5fd)
        } else {
            (0x1e293b, 0x334155)
        }
    }

    fn overlay(&self) -> Option<(&'static str, bool)> {
        match self.quiz.status() {
            RoundStatus::Loading => Some(("Loading countries...", false)),
            RoundStatus::Failed => Some(("Error fetching data", true)),
            RoundStatus::Won => Some(("You matched every capital!", true)),
            RoundStatus::Playing => None,
        }
    }
}

impl Render for CapitalsQuiz {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (status_text, status_color) = self.status_text();

        let board = div()
            .flex()
            .flex_wrap()
            .gap_3()
            .children(self.quiz.deck().iter().map(|tile| {
                let id = tile.id;
                let (bg, border) = self.tile_colors(id);

                div()
                    .id(SharedString::from(format!("tile-{id}")))
                    .w(px(TILE_WIDTH))
                    .h(px(TILE_HEIGHT))
                    .flex()
                    .flex_col()
                    .items_center()
                    .justify_center()
                    .rounded_lg()
                    .border_2()
                    .border_color(rgb(border))
                    .bg(rgb(bg))
                    .cursor_pointer()
                    .child(
                        div()
                            .text_xs()
                            .text_color(rgb(0x94a3b8))
                            .child(tile.kind.label()),
                    )
                    .child(div().text_lg().child(tile.value.clone()))
                    .on_click(cx.listener(move |this, _: &ClickEvent, _, cx| {
                        this.handle_tile_click(id, cx)
                    }))
            }));

        let instructions = [
            "Click a country, then its capital",
            "Enter for a new round",
            "Esc to quit",
        ];

        div()
            .bg(rgb(0x020617))
            .text_color(rgb(0xf8fafc))
            .size_full()
            .p_5()
            .gap_4()
            .flex()
            .flex_col()
            .track_focus(&self.focus_handle(cx))
            .key_context("gpui-capitals")
            .on_action(cx.listener(|this, _: &PlayAgain, _, cx| this.handle_play_again(cx)))
            .child(
                div()
                    .flex()
                    .gap_4()
                    .items_center()
                    .child(
                        div()
                            .text_3xl()
                            .child(format!("Rounds won: {}", self.quiz.rounds_won())),
                    )
                    .child(
                        div()
                            .text_lg()
                            .text_color(rgb(status_color))
                            .child(status_text),
                    )
                    .child(div().text_sm().text_color(rgb(0xa5f3fc)).child(format!(
                        "Matched: {}/{}",
                        self.quiz.matched_count(),
                        self.quiz.deck().len()
                    ))),
            )
            .child({
                div()
                    .p_4()
                    .min_h(px(BOARD_MIN_HEIGHT))
                    .rounded_2xl()
                    .bg(rgb(0x111827))
                    .shadow_lg()
                    .relative()
                    .child(board)
                    .when_some(self.overlay(), |this, (message, show_button)| {
                        this.child(
                            div()
                                .absolute()
                                .top(px(0.))
                                .bottom(px(0.))
                                .left(px(0.))
                                .right(px(0.))
                                .flex()
                                .flex_col()
                                .gap_4()
                                .items_center()
                                .justify_center()
                                .rounded_2xl()
                                .bg(rgba(0x020617A6))
                                .text_xl()
                                .text_color(rgb(0xf8fafc))
                                .child(message)
                                .when(show_button, |this| {
                                    this.child(
                                        div()
                                            .id("play-again")
                                            .px_4()
                                            .py_2()
                                            .rounded_md()
                                            .bg(rgb(0x2563eb))
                                            .text_lg()
                                            .cursor_pointer()
                                            .child("Play Again")
                                            .on_click(cx.listener(|this, _: &ClickEvent, _, cx| {
                                                this.handle_play_again(cx)
                                            })),
                                    )
                                }),
                        )
                    })
            })
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .gap_3()
                    .text_sm()
                    .text_color(rgb(0xcbd5f5))
                    .children(instructions.into_iter().map(|text| {
                        div()
                            .px_3()
                            .py_2()
                            .rounded_md()
                            .bg(rgb(0x1e293b))
                            .child(text)
                    })),
            )
    }
}

impl Focusable for CapitalsQuiz {
    fn focus_handle(&self, _: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

#[cfg(test)]
mod tests {
    use gpui::{AppContext as _, Entity, TestAppContext};

    use super::*;
    use crate::{game::Selection, source::StaticSource};

    const DELAY: Duration = Duration::from_millis(1000);

    fn quiz_view(cx: &mut TestAppContext, countries: Vec<Country>) -> Entity<CapitalsQuiz> {
        let config = QuizConfig {
            mismatch_delay: DELAY,
            offline: true,
            ..QuizConfig::default()
        };
        let source: Arc<dyn CountrySource> = Arc::new(StaticSource::new(countries));
        cx.new(|cx| CapitalsQuiz::new(&config, source, cx))
    }

    fn france_japan() -> Vec<Country> {
        vec![
            Country::new("France", "Paris"),
            Country::new("Japan", "Tokyo"),
        ]
    }

    fn tile_id(view: &Entity<CapitalsQuiz>, cx: &mut TestAppContext, value: &str) -> usize {
        view.read_with(cx, |view, _| {
            view.quiz
                .deck()
                .iter()
                .find(|t| t.value == value)
                .map(|t| t.id)
                .expect("tile on deck")
        })
    }

    fn click(view: &Entity<CapitalsQuiz>, cx: &mut TestAppContext, values: &[&str]) {
        for value in values {
            let id = tile_id(view, cx, value);
            view.update(cx, |view, cx| view.handle_tile_click(id, cx));
        }
    }

    fn selection(view: &Entity<CapitalsQuiz>, cx: &mut TestAppContext) -> Selection {
        view.read_with(cx, |view, _| view.quiz.selection())
    }

    #[gpui::test]
    fn mismatch_stays_highlighted_for_the_delay(cx: &mut TestAppContext) {
        let view = quiz_view(cx, france_japan());
        view.update(cx, |view, cx| view.request_round(cx));
        cx.run_until_parked();
        assert_eq!(
            view.read_with(cx, |view, _| view.quiz.status()),
            RoundStatus::Playing
        );

        click(&view, cx, &["France", "Tokyo"]);
        let france = tile_id(&view, cx, "France");
        let tokyo = tile_id(&view, cx, "Tokyo");

        cx.executor().advance_clock(DELAY - Duration::from_millis(1));
        cx.run_until_parked();
        assert!(view.read_with(cx, |view, _| view.quiz.is_mismatched(france)));
        assert!(view.read_with(cx, |view, _| view.quiz.is_mismatched(tokyo)));

        cx.executor().advance_clock(Duration::from_millis(2));
        cx.run_until_parked();
        assert_eq!(selection(&view, cx), Selection::Idle);
        assert_eq!(view.read_with(cx, |view, _| view.quiz.matched_count()), 0);
    }

    #[gpui::test]
    fn newer_request_wins_over_stale_fetch(cx: &mut TestAppContext) {
        let view = quiz_view(cx, vec![Country::new("Peru", "Lima")]);

        view.update(cx, |view, cx| {
            view.request_round(cx);
            view.source = Arc::new(StaticSource::new(france_japan()));
            view.request_round(cx);
        });
        cx.run_until_parked();

        let values: Vec<String> = view.read_with(cx, |view, _| {
            view.quiz.deck().iter().map(|t| t.value.clone()).collect()
        });
        assert_eq!(values.len(), 4);
        assert!(!values.iter().any(|v| v == "Peru" || v == "Lima"));
        assert_eq!(
            view.read_with(cx, |view, _| view.quiz.status()),
            RoundStatus::Playing
        );
    }

    #[gpui::test]
    fn new_round_drops_pending_mismatch_timer(cx: &mut TestAppContext) {
        let view = quiz_view(cx, france_japan());
        view.update(cx, |view, cx| view.request_round(cx));
        cx.run_until_parked();

        // Old timer would fire at DELAY.
        click(&view, cx, &["France", "Tokyo"]);
        cx.executor().advance_clock(DELAY / 2);
        cx.run_until_parked();

        view.update(cx, |view, cx| view.request_round(cx));
        cx.run_until_parked();

        // New timer fires at DELAY * 3 / 2.
        click(&view, cx, &["Japan", "Paris"]);
        let japan = tile_id(&view, cx, "Japan");
        let paris = tile_id(&view, cx, "Paris");

        cx.executor().advance_clock(DELAY / 2 + Duration::from_millis(100));
        cx.run_until_parked();
        assert_eq!(
            selection(&view, cx),
            Selection::Comparing {
                first: japan,
                second: paris
            }
        );

        cx.executor().advance_clock(DELAY / 2);
        cx.run_until_parked();
        assert_eq!(selection(&view, cx), Selection::Idle);
    }
}
