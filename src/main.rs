// main.rs - hudshift Application Entry Point
//
// The orchestrator: parse flags, load and validate the overlay profile,
// build the capture pipeline, then run the winit event loop that drives
// it. One timer tick = one capture fanned out to every mirrored region
// and indicator; the cursor readout polls on its own interval.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use log::{error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

mod platform;
mod window_manager;

use hudshift::constants::timing;
use hudshift::{create_frame_source, MousePositionView, OverlayCompositor, OverlayConfig};
use window_manager::{IndicatorWindow, MouseWindow, RegionWindow};

struct CliArgs {
    profile: Option<PathBuf>,
    mouse: bool,
    tick_ms: Option<u64>,
}

fn print_help() {
    let version = env!("CARGO_PKG_VERSION");
    println!("hudshift v{version}");
    println!("Mirrors fixed screen regions into always-on-top overlay windows and");
    println!("flags in-game states with pixel-triggered borders.");
    println!();
    println!("USAGE:");
    println!("    hudshift [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --profile <PATH>      Load an overlay profile (JSON) instead of the built-in one");
    println!("    --mouse               Show the cursor position readout window");
    println!("    --tick <MS>           Tick interval in milliseconds (default: {})", timing::DEFAULT_TICK_MS);
    println!("    -h, --help            Print this help message");
    println!("    -v, --version         Print version information");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    RUST_LOG              Log level (error/warn/info/debug/trace)");
    println!();
    println!("Press ESC in any overlay window to exit.");
}

/// Parse command-line flags. Returns None when help/version was printed
/// and the process should just exit.
fn parse_args() -> Result<Option<CliArgs>> {
    let mut parsed = CliArgs {
        profile: None,
        mouse: false,
        tick_ms: None,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--profile" => {
                let path = args.next().context("--profile requires a path")?;
                parsed.profile = Some(PathBuf::from(path));
            }
            "--mouse" => parsed.mouse = true,
            "--tick" => {
                let ms = args.next().context("--tick requires milliseconds")?;
                parsed.tick_ms = Some(ms.parse().context("--tick expects an integer")?);
            }
            "-h" | "--help" => {
                print_help();
                return Ok(None);
            }
            "-v" | "--version" => {
                println!("hudshift v{}", env!("CARGO_PKG_VERSION"));
                return Ok(None);
            }
            other => bail!("unknown argument '{other}' (see --help)"),
        }
    }

    Ok(Some(parsed))
}

/// Main application state: the pipeline plus one window per surface.
struct HudshiftApp {
    config: OverlayConfig,
    compositor: OverlayCompositor,
    tick: Duration,
    next_tick: Instant,

    regions: Vec<RegionWindow>,
    indicators: Vec<IndicatorWindow>,
    mouse_view: Option<MousePositionView>,
    mouse_window: Option<MouseWindow>,
}

impl HudshiftApp {
    fn new(config: OverlayConfig, compositor: OverlayCompositor) -> Self {
        let tick = Duration::from_millis(config.tick_ms);
        let mouse_view = config
            .show_mouse_position
            .then(|| MousePositionView::new(Duration::from_millis(timing::MOUSE_POLL_MS)));

        Self {
            config,
            compositor,
            tick,
            next_tick: Instant::now(),
            regions: Vec::new(),
            indicators: Vec::new(),
            mouse_view,
            mouse_window: None,
        }
    }

    /// Run one compositor tick and push the results into the windows.
    /// Indicator borders are only touched on transitions.
    fn run_tick(&mut self, event_loop: &ActiveEventLoop) {
        let outcome = match self.compositor.tick() {
            Ok(outcome) => outcome,
            Err(err) => {
                // No recovery for a dead capture source
                error!("screen capture failed, shutting down: {err:#}");
                event_loop.exit();
                return;
            }
        };

        for (window, view) in self.regions.iter_mut().zip(self.compositor.views()) {
            if let Err(err) = window.paint(view) {
                warn!("region '{}' paint failed: {err:#}", view.name());
            }
        }

        for transition in &outcome.transitions {
            let indicator = &self.compositor.indicators()[transition.index];
            info!(
                "indicator '{}' {}",
                indicator.name(),
                if transition.visible { "on" } else { "off" }
            );
            if let Err(err) = self.indicators[transition.index].set_border_visible(transition.visible)
            {
                warn!("indicator '{}' paint failed: {err:#}", indicator.name());
            }
        }
    }

    /// Poll the cursor readout if it is due.
    fn poll_mouse(&mut self, now: Instant) {
        let (Some(view), Some(window)) = (self.mouse_view.as_mut(), self.mouse_window.as_mut())
        else {
            return;
        };

        if view.due(now) && view.record(now, platform::cursor_position()) {
            if let Err(err) = window.paint_label(&view.label()) {
                warn!("cursor readout paint failed: {err:#}");
            }
        }
    }

    /// Earliest instant any timer wants to fire again.
    fn next_wakeup(&self, now: Instant) -> Instant {
        let mut next = self.next_tick;
        if let Some(view) = &self.mouse_view {
            next = next.min(view.next_due(now));
        }
        next
    }
}

impl ApplicationHandler for HudshiftApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if !self.regions.is_empty() || !self.indicators.is_empty() {
            return;
        }
        info!("creating overlay windows");

        for view in self.compositor.views() {
            match RegionWindow::new(event_loop, view.spec()) {
                Ok(window) => self.regions.push(window),
                Err(err) => {
                    error!("failed to create region window '{}': {err:#}", view.name());
                    event_loop.exit();
                    return;
                }
            }
        }

        for indicator in self.compositor.indicators() {
            match IndicatorWindow::new(event_loop, indicator.spec()) {
                Ok(window) => self.indicators.push(window),
                Err(err) => {
                    error!(
                        "failed to create indicator window '{}': {err:#}",
                        indicator.name()
                    );
                    event_loop.exit();
                    return;
                }
            }
        }

        if self.config.show_mouse_position {
            let label = self
                .mouse_view
                .as_ref()
                .map(|view| view.label())
                .unwrap_or_default();
            match MouseWindow::new(event_loop, &label) {
                Ok(window) => self.mouse_window = Some(window),
                Err(err) => warn!("failed to create cursor readout window: {err:#}"),
            }
        }

        self.next_tick = Instant::now();
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if event_loop.exiting() {
            return;
        }

        let now = Instant::now();
        if now >= self.next_tick {
            self.run_tick(event_loop);
            // Late ticks slide instead of piling up; nothing queues frames
            self.next_tick = now + self.tick;
        }
        self.poll_mouse(now);

        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_wakeup(now)));
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("close requested, shutting down");
                event_loop.exit();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                {
                    info!("ESC pressed, shutting down");
                    event_loop.exit();
                }
            }

            // OS expose: repaint whichever surface was uncovered
            WindowEvent::RedrawRequested => {
                for (window, view) in self.regions.iter_mut().zip(self.compositor.views()) {
                    if window.window_id() == window_id {
                        if let Err(err) = window.paint(view) {
                            warn!("region '{}' repaint failed: {err:#}", view.name());
                        }
                        return;
                    }
                }
                for (window, indicator) in
                    self.indicators.iter_mut().zip(self.compositor.indicators())
                {
                    if window.window_id() == window_id && indicator.visible() {
                        if let Err(err) = window.repaint() {
                            warn!("indicator '{}' repaint failed: {err:#}", indicator.name());
                        }
                        return;
                    }
                }
                if let (Some(window), Some(view)) =
                    (self.mouse_window.as_mut(), self.mouse_view.as_ref())
                {
                    if window.window_id() == window_id {
                        if let Err(err) = window.paint_label(&view.label()) {
                            warn!("cursor readout repaint failed: {err:#}");
                        }
                    }
                }
            }

            _ => {}
        }
    }
}

fn main() -> Result<()> {
    let Some(args) = parse_args()? else {
        return Ok(());
    };

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("hudshift starting");

    let mut config = match &args.profile {
        Some(path) => OverlayConfig::from_json_file(path)
            .with_context(|| format!("failed to load profile {}", path.display()))?,
        None => OverlayConfig::builtin(),
    };
    if args.mouse {
        config.show_mouse_position = true;
    }
    if let Some(tick_ms) = args.tick_ms {
        config.tick_ms = tick_ms;
    }

    // Geometry problems end here, before any window or capture work
    config.validate().context("invalid overlay profile")?;
    info!(
        "profile: {} regions, {} indicators, {} ms tick, bounds {}",
        config.regions.len(),
        config.indicators.len(),
        config.tick_ms,
        config.bounds
    );

    let source = create_frame_source(config.bounds)?;
    let compositor = OverlayCompositor::new(&config, source)?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = HudshiftApp::new(config, compositor);
    event_loop.run_app(&mut app)?;

    info!("hudshift shutting down");
    Ok(())
}
