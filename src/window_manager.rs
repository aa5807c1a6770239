// window_manager.rs - Overlay Window Management
//
// One frameless, transparent, always-on-top, click-through window per
// mirrored region, per indicator border, and (optionally) for the cursor
// readout. Each wraps a winit window plus a softbuffer surface; all
// painting goes through the library's CPU painter.
//
// Windows are created hidden and shown after their first paint, so no
// blank surface ever flashes on screen.

use std::num::NonZeroU32;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use log::{info, warn};
use softbuffer::{Context as BufferContext, Surface};
use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event_loop::ActiveEventLoop,
    window::{Window, WindowAttributes, WindowId, WindowLevel},
};

use hudshift::config::{IndicatorSpec, RegionSpec};
use hudshift::constants::{colors, mouse_window};
use hudshift::geometry::Point;
use hudshift::painter;
use hudshift::view::RegionView;

use crate::platform;

/// A winit window plus its CPU presentation surface.
struct OverlaySurface {
    window: Arc<Window>,
    // Kept alive for the surface; softbuffer ties presentation to it
    _context: BufferContext<Arc<Window>>,
    surface: Surface<Arc<Window>, Arc<Window>>,
    width: u32,
    height: u32,
}

impl OverlaySurface {
    fn new(
        event_loop: &ActiveEventLoop,
        title: &str,
        position: Point,
        size: (u32, u32),
    ) -> Result<Self> {
        let (width, height) = size;
        let attributes = WindowAttributes::default()
            .with_title(title)
            .with_inner_size(PhysicalSize::new(width, height))
            .with_position(PhysicalPosition::new(position.x, position.y))
            .with_resizable(false)
            .with_decorations(false)
            .with_transparent(true)
            .with_visible(false)
            .with_window_level(WindowLevel::AlwaysOnTop);

        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .with_context(|| format!("failed to create window '{title}'"))?,
        );

        // Click-through: the game underneath keeps receiving input
        if let Err(err) = window.set_cursor_hittest(false) {
            warn!("click-through not available for '{title}': {err}");
        }
        platform::apply_overlay_style(&window);

        let context = BufferContext::new(window.clone())
            .map_err(|err| anyhow!("display context failed for '{title}': {err}"))?;
        let mut surface = Surface::new(&context, window.clone())
            .map_err(|err| anyhow!("surface failed for '{title}': {err}"))?;
        surface
            .resize(
                NonZeroU32::new(width).context("zero-width surface")?,
                NonZeroU32::new(height).context("zero-height surface")?,
            )
            .map_err(|err| anyhow!("surface resize failed for '{title}': {err}"))?;

        info!("created overlay window '{title}' ({width}x{height} at {position})");

        Ok(Self {
            window,
            _context: context,
            surface,
            width,
            height,
        })
    }

    fn window_id(&self) -> WindowId {
        self.window.id()
    }

    fn paint(&mut self, draw: impl FnOnce(&mut [u32], u32, u32)) -> Result<()> {
        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|err| anyhow!("buffer lock failed: {err}"))?;
        draw(&mut buffer, self.width, self.height);
        buffer
            .present()
            .map_err(|err| anyhow!("present failed: {err}"))?;
        Ok(())
    }

    fn show(&self) {
        self.window.set_visible(true);
    }

    fn hide(&self) {
        self.window.set_visible(false);
    }
}

/// Window showing the scaled copy of one mirrored region.
pub struct RegionWindow {
    surface: OverlaySurface,
    shown: bool,
}

impl RegionWindow {
    pub fn new(event_loop: &ActiveEventLoop, spec: &RegionSpec) -> Result<Self> {
        let surface = OverlaySurface::new(
            event_loop,
            &format!("hudshift {}", spec.name),
            spec.display,
            spec.scaled_size(),
        )?;
        Ok(Self {
            surface,
            shown: false,
        })
    }

    pub fn window_id(&self) -> WindowId {
        self.surface.window_id()
    }

    /// Blit the view's latest image. A view that has not rendered yet
    /// stays hidden.
    pub fn paint(&mut self, view: &RegionView) -> Result<()> {
        let Some(image) = view.image() else {
            return Ok(());
        };

        self.surface.paint(|buffer, width, height| {
            painter::fill(buffer, 0xFF00_0000);
            painter::blit_image(buffer, width, height, image);
        })?;

        if !self.shown {
            self.surface.show();
            self.shown = true;
        }
        Ok(())
    }
}

/// Window carrying one indicator's border. Hidden while the indicator is
/// off; shown and stroked on the rising edge only.
pub struct IndicatorWindow {
    surface: OverlaySurface,
    stroke_color: u32,
    thickness: u32,
}

impl IndicatorWindow {
    pub fn new(event_loop: &ActiveEventLoop, spec: &IndicatorSpec) -> Result<Self> {
        let surface = OverlaySurface::new(
            event_loop,
            &format!("hudshift {}", spec.name),
            Point::new(spec.area.x, spec.area.y),
            (spec.area.width, spec.area.height),
        )?;

        // Clip to the border band where the platform supports it
        platform::apply_hollow_frame(
            &surface.window,
            spec.area.width,
            spec.area.height,
            spec.stroke.thickness,
        );

        Ok(Self {
            surface,
            stroke_color: painter::pack(spec.stroke.color),
            thickness: spec.stroke.thickness,
        })
    }

    pub fn window_id(&self) -> WindowId {
        self.surface.window_id()
    }

    /// Apply a visibility transition: stroke and show on the rising
    /// edge, hide on the falling edge.
    pub fn set_border_visible(&mut self, visible: bool) -> Result<()> {
        if visible {
            self.repaint()?;
            self.surface.show();
        } else {
            self.surface.hide();
        }
        Ok(())
    }

    /// Redraw the stroke, e.g. after an OS expose event.
    pub fn repaint(&mut self) -> Result<()> {
        let (color, thickness) = (self.stroke_color, self.thickness);
        self.surface.paint(|buffer, width, height| {
            painter::fill(buffer, 0xFF00_0000);
            painter::stroke_rect(buffer, width, height, thickness, color);
        })
    }
}

/// The cursor readout window.
pub struct MouseWindow {
    surface: OverlaySurface,
}

impl MouseWindow {
    pub fn new(event_loop: &ActiveEventLoop, initial_label: &str) -> Result<Self> {
        let surface = OverlaySurface::new(
            event_loop,
            "hudshift cursor",
            Point::new(mouse_window::X, mouse_window::Y),
            (mouse_window::WIDTH, mouse_window::HEIGHT),
        )?;

        let mut window = Self { surface };
        window.paint_label(initial_label)?;
        window.surface.show();
        Ok(window)
    }

    pub fn window_id(&self) -> WindowId {
        self.surface.window_id()
    }

    pub fn paint_label(&mut self, label: &str) -> Result<()> {
        let scale = mouse_window::TEXT_SCALE;
        self.surface.paint(|buffer, width, height| {
            painter::fill(buffer, colors::MOUSE_BG);
            let x = (width.saturating_sub(painter::text_width(label, scale))) as i32 / 2;
            let y = (height.saturating_sub(painter::GLYPH_HEIGHT * scale)) as i32 / 2;
            painter::draw_text(buffer, width, height, x, y, label, colors::MOUSE_TEXT, scale);
        })
    }
}
