use gpui::prelude::*;
use gpui::*;
use gpui_sortviz::data_types::{AlgorithmId, VisualizerConfig};
use gpui_sortviz::rendering::{paint_bars, value_labels};
use gpui_sortviz::{
    AnimationSpeed, BarFrame, DataGenerator, FrameSink, Pacing, RunController, SortTheme,
};
use std::cell::Cell;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

actions!(
    sortviz_demo,
    [TogglePause, Stop, Restart, NextAlgorithm, Shuffle, SpeedUp, SlowDown]
);

struct SortVizApp {
    focus_handle: FocusHandle,
    controller: RunController<i64>,
    sink: FrameSink<i64>,
    frame: BarFrame<i64>,
    generator: DataGenerator,
    config: VisualizerConfig,
    theme: SortTheme,
    algorithm: AlgorithmId,
    speed: AnimationSpeed,
    status: String,
    awaiting_report: bool,
    canvas_bounds: Rc<Cell<Bounds<Pixels>>>,
}

impl SortVizApp {
    fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let config = VisualizerConfig::default();
        let mut generator = DataGenerator::new(config.array.clone());
        let array = generator.random_default();
        let speed = config.animation.speed();

        let mut app = Self {
            focus_handle: cx.focus_handle(),
            controller: RunController::new(Pacing::Animated(speed)),
            sink: FrameSink::new(),
            frame: BarFrame::idle(&array),
            generator,
            theme: SortTheme::preset(&config.theme),
            config,
            algorithm: AlgorithmId::QuickSort,
            speed,
            status: String::new(),
            awaiting_report: false,
            canvas_bounds: Rc::new(Cell::new(Bounds::default())),
        };
        app.start(array);

        cx.on_next_frame(window, |this, window, cx| this.tick(window, cx));
        app
    }

    fn start(&mut self, array: Vec<i64>) {
        self.controller.reset();
        self.sink = FrameSink::new();
        self.frame = BarFrame::idle(&array);
        if let Err(err) = self
            .controller
            .start(self.algorithm.as_str(), array, self.sink.clone())
        {
            self.status = err.to_string();
            return;
        }
        self.awaiting_report = true;
    }

    // Pulls the newest frame from the worker once per rendered frame.
    fn tick(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if let Some(frame) = self.sink.take() {
            self.frame = frame;
        }

        let stats = self.controller.snapshot();
        let state = self.controller.state();
        self.status = format!(
            "{} | {:?}{} | speed {} | comparisons {} | swaps {} | {:.2}s",
            self.algorithm.descriptor().name,
            state,
            if self.controller.is_paused() { " (paused)" } else { "" },
            self.speed.get(),
            stats.comparisons,
            stats.swaps,
            stats.elapsed_seconds,
        );

        if state.is_terminal() && self.awaiting_report {
            self.awaiting_report = false;
            match self.controller.wait() {
                Ok(report) => tracing::info!(
                    report = %serde_json::to_string(&report).unwrap_or_default(),
                    "run report"
                ),
                Err(err) => tracing::debug!(%err, "no report"),
            }
        }

        cx.notify();
        cx.on_next_frame(window, |this, window, cx| this.tick(window, cx));
    }

    fn toggle_pause(&mut self, _: &TogglePause, _window: &mut Window, cx: &mut Context<Self>) {
        if let Err(err) = self.controller.toggle_pause() {
            tracing::debug!(%err, "toggle ignored");
        }
        cx.notify();
    }

    fn stop(&mut self, _: &Stop, _window: &mut Window, cx: &mut Context<Self>) {
        if let Err(err) = self.controller.request_stop() {
            tracing::debug!(%err, "stop ignored");
        }
        cx.notify();
    }

    fn restart(&mut self, _: &Restart, _window: &mut Window, cx: &mut Context<Self>) {
        let array = self.controller.original().to_vec();
        self.start(array);
        cx.notify();
    }

    fn shuffle(&mut self, _: &Shuffle, _window: &mut Window, cx: &mut Context<Self>) {
        let array = self.generator.random_default();
        self.start(array);
        cx.notify();
    }

    fn next_algorithm(&mut self, _: &NextAlgorithm, _window: &mut Window, cx: &mut Context<Self>) {
        let position = AlgorithmId::ALL
            .iter()
            .position(|id| *id == self.algorithm)
            .unwrap_or(0);
        self.algorithm = AlgorithmId::ALL[(position + 1) % AlgorithmId::ALL.len()];
        let array = self.controller.original().to_vec();
        self.start(array);
        cx.notify();
    }

    fn change_speed(&mut self, delta: i16) {
        let speed = (self.speed.get() as i16 + delta).clamp(1, 10) as u8;
        self.speed = AnimationSpeed::new(speed);
        self.controller.set_pacing(Pacing::Animated(self.speed));
    }

    fn speed_up(&mut self, _: &SpeedUp, _window: &mut Window, cx: &mut Context<Self>) {
        self.change_speed(1);
        cx.notify();
    }

    fn slow_down(&mut self, _: &SlowDown, _window: &mut Window, cx: &mut Context<Self>) {
        self.change_speed(-1);
        cx.notify();
    }
}

impl Render for SortVizApp {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let frame = self.frame.clone();
        let theme = self.theme.clone();
        let visual = self.config.visual.clone();
        let label_visual = self.config.visual.clone();
        let label_values = self.frame.values.clone();
        let label_color = self.theme.text;
        let bounds_for_paint = self.canvas_bounds.clone();

        div()
            .track_focus(&self.focus_handle)
            .key_context("SortVizApp")
            .on_action(cx.listener(Self::toggle_pause))
            .on_action(cx.listener(Self::stop))
            .on_action(cx.listener(Self::restart))
            .on_action(cx.listener(Self::shuffle))
            .on_action(cx.listener(Self::next_algorithm))
            .on_action(cx.listener(Self::speed_up))
            .on_action(cx.listener(Self::slow_down))
            .size_full()
            .flex()
            .flex_col()
            .bg(self.theme.surface)
            .child(
                div()
                    .h(px(28.0))
                    .px(px(8.0))
                    .flex()
                    .items_center()
                    .text_color(self.theme.text)
                    .text_size(px(13.0))
                    .child(self.status.clone()),
            )
            .child(
                div()
                    .flex_1()
                    .relative()
                    .child(
                        canvas(
                            |_, _, _| {},
                            move |bounds, (), window, _cx| {
                                bounds_for_paint.set(bounds);
                                paint_bars(window, bounds, &frame, &theme, &visual);
                            },
                        )
                        .size_full()
                        .absolute(),
                    )
                    .children(value_labels(
                        self.canvas_bounds.get(),
                        &label_values,
                        &label_visual,
                        label_color,
                    )),
            )
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gpui_sortviz=info")),
        )
        .init();

    Application::new().run(|cx: &mut App| {
        cx.bind_keys([
            KeyBinding::new("space", TogglePause, None),
            KeyBinding::new("escape", Stop, None),
            KeyBinding::new("r", Restart, None),
            KeyBinding::new("s", Shuffle, None),
            KeyBinding::new("n", NextAlgorithm, None),
            KeyBinding::new("+", SpeedUp, None),
            KeyBinding::new("=", SpeedUp, None),
            KeyBinding::new("-", SlowDown, None),
        ]);

        cx.open_window(WindowOptions::default(), |window, cx| {
            let view = cx.new(|cx| SortVizApp::new(window, cx));
            window.focus(&view.read(cx).focus_handle);
            view
        })
        .expect("failed to open window");
    });
}
