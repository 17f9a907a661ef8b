//! Event loop tying tracker results, mouse input and controls to the canvas.

use anyhow::{Context, Result};
use log::{debug, error, info, warn};
use std::io::BufRead;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

use crate::config::Config;
use crate::draw::CairoCanvas;
use crate::input::{ControlAction, InputEvent, InputState, StrokeStyle, parse_line, parse_script};
use crate::tracking::{
    CameraConstraints, DetectorOptions, StartOutcome, TrackingDependencies, TrackingSession,
};
use crate::{export, util};

/// Options picked on the command line.
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    /// Fixed PNG path for save and exit
    pub output: Option<PathBuf>,
    /// Start with drawing disabled regardless of config
    pub start_disabled: bool,
}

/// Owns all drawing state and dispatches events one at a time.
pub struct App {
    config: Config,
    state: InputState,
    canvas: CairoCanvas,
    tracking: TrackingSession,
    /// Tokio runtime for the tracker process and its reader task
    runtime: tokio::runtime::Runtime,
    events_tx: mpsc::Sender<InputEvent>,
    events_rx: mpsc::Receiver<InputEvent>,
    output: Option<PathBuf>,
    should_exit: bool,
}

impl App {
    pub fn new(config: Config, options: AppOptions) -> Result<Self> {
        let dependencies = TrackingDependencies::from_config(&config);
        Self::with_dependencies(config, options, dependencies)
    }

    /// Builds the app around the given camera, detector and alert.
    pub fn with_dependencies(
        config: Config,
        options: AppOptions,
        dependencies: TrackingDependencies,
    ) -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new()
            .context("Failed to create Tokio runtime for hand tracking")?;
        let canvas = CairoCanvas::new(config.camera.width, config.camera.height)?;

        let style = StrokeStyle::from_config(&config.drawing);
        let enabled = config.drawing.start_enabled && !options.start_disabled;
        let state = InputState::new(style, enabled);

        let tracking = TrackingSession::new(
            dependencies,
            CameraConstraints::from(&config.camera),
            DetectorOptions::from(&config.tracking),
        );
        let (events_tx, events_rx) = mpsc::channel(config.tracking.channel_capacity);

        debug!(
            "Canvas {}x{}, drawing {}, hand stroke {}, mouse stroke {}",
            config.camera.width,
            config.camera.height,
            if enabled { "enabled" } else { "disabled" },
            util::color_to_hex(&style.hand_color),
            util::color_to_hex(&style.mouse_color)
        );

        Ok(Self {
            config,
            state,
            canvas,
            tracking,
            runtime,
            events_tx,
            events_rx,
            output: options.output,
            should_exit: false,
        })
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn canvas(&self) -> &CairoCanvas {
        &self.canvas
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking.is_started()
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    /// Sender for feeding events from other threads.
    pub fn event_sender(&self) -> mpsc::Sender<InputEvent> {
        self.events_tx.clone()
    }

    /// Applies one event. Hand results go through the gesture classifier;
    /// mouse events and controls bypass it.
    pub fn dispatch(&mut self, event: InputEvent) {
        match event {
            InputEvent::Hand(hand) => self.state.on_hand_result(hand.as_ref(), &mut self.canvas),
            InputEvent::MousePress { button, x, y } => self.state.on_mouse_press(button, x, y),
            InputEvent::MouseMotion { x, y } => {
                self.state.on_mouse_motion(x, y, &mut self.canvas)
            }
            InputEvent::MouseRelease { button } => self.state.on_mouse_release(button),
            InputEvent::Control(action) => self.handle_control(action),
            InputEvent::TrackerStopped(failure) => self.tracker_stopped(failure),
        }
    }

    fn handle_control(&mut self, action: ControlAction) {
        match action {
            ControlAction::Start => {
                self.start_tracking();
            }
            ControlAction::ToggleDrawing => {
                self.state.toggle_drawing();
                info!("{}", self.state.toggle_label());
            }
            ControlAction::Clear => self.state.clear_canvas(&mut self.canvas),
            ControlAction::Save => {
                if let Err(e) = self.save() {
                    error!("Failed to save canvas: {:#}", e);
                    self.state.status.update("Failed to save canvas");
                }
            }
            ControlAction::Quit => {
                debug!("Quit requested");
                self.should_exit = true;
            }
        }
    }

    /// Runs the start sequence to completion, alert included.
    pub fn start_tracking(&mut self) -> StartOutcome {
        let results = self.events_tx.clone();
        let tracking = &mut self.tracking;
        let status = &mut self.state.status;
        self.runtime
            .block_on(async { tracking.start(status, results).await })
    }

    /// The detector ended on its own: drop any run in progress and return
    /// the session to its pre-start state.
    fn tracker_stopped(&mut self, failure: Option<String>) {
        self.state.end_pen_run();
        let tracking = &mut self.tracking;
        let status = &mut self.state.status;
        self.runtime
            .block_on(async { tracking.tracker_stopped(status, failure).await });
    }

    /// Writes the canvas to the output path and returns where it went.
    pub fn save(&mut self) -> Result<PathBuf> {
        let path = match &self.output {
            Some(path) => path.clone(),
            None => export::default_output_path(&self.config.output)?,
        };

        let status_text = self.state.status.text();
        let overlay = self
            .config
            .ui
            .show_status_bar
            .then_some((status_text.as_str(), &self.config.ui));
        let png = self.canvas.encode_png(overlay)?;

        export::save_png(&png, &path)?;
        info!("Canvas saved to {}", path.display());
        Ok(path)
    }

    /// Dispatches a recorded event script, then saves the result.
    pub fn run_replay(&mut self, script: &Path) -> Result<()> {
        let text = std::fs::read_to_string(script)
            .with_context(|| format!("Failed to read event script {}", script.display()))?;
        let events = parse_script(&text)
            .with_context(|| format!("Invalid event script {}", script.display()))?;
        info!("Replaying {} events from {}", events.len(), script.display());

        for event in events {
            self.dispatch(event);
            self.drain_pending();
            if self.should_exit {
                break;
            }
        }

        self.finish()
    }

    /// Starts tracking and dispatches tracker results and stdin commands
    /// until `quit` or end of input.
    pub fn run_live(&mut self) -> Result<()> {
        spawn_stdin_reader(self.event_sender());

        self.dispatch(InputEvent::Control(ControlAction::Start));

        while !self.should_exit {
            match self.events_rx.blocking_recv() {
                Some(event) => self.dispatch(event),
                None => break,
            }
        }

        self.tracking.stop();
        self.finish()
    }

    /// Dispatches whatever is already queued without waiting.
    fn drain_pending(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.dispatch(event);
        }
    }

    /// Saves on exit when an output path was given or something was drawn.
    fn finish(&mut self) -> Result<()> {
        if self.output.is_some() || !self.canvas.frame().is_empty() {
            self.save()?;
        } else {
            debug!("Nothing drawn, skipping save on exit");
        }
        Ok(())
    }
}

/// Reads control lines from stdin on a plain thread. Bad lines are logged
/// and skipped; end of input becomes `quit`.
fn spawn_stdin_reader(events: mpsc::Sender<InputEvent>) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for (idx, line) in stdin.lock().lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!("Failed to read stdin: {}", e);
                    break;
                }
            };
            match parse_line(idx + 1, &line) {
                Ok(Some(event)) => {
                    if events.blocking_send(event).is_err() {
                        return;
                    }
                }
                Ok(None) => {}
                Err(e) => warn!("Ignoring command: {}", e),
            }
        }
        let _ = events.blocking_send(InputEvent::Control(ControlAction::Quit));
    });
}
