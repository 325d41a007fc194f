use std::sync::Arc;
use std::time::Instant;

use anyhow::Context as _;
use softbuffer::{Context, Surface};
use winit::event_loop::{ActiveEventLoop, OwnedDisplayHandle};
use winit::window::Window;

use tabpager::config::{self, AppConfig, ThemeChoice, ThemePalette};
use tabpager::core::{Rect, Size};
use tabpager::host::TextMeasure;
use tabpager::page::PageView;
use tabpager::text::{CellMeasure, FontMeasure};

use super::render::Renderer;
use super::{DemoHost, DemoPage, EventLog};

/// Approximate advance of one display column when no font file is found.
const FALLBACK_CELL_RATIO: f32 = 0.6;

pub(super) struct App {
    pub config: AppConfig,
    pub context: Option<Context<OwnedDisplayHandle>>,
    pub window: Option<DemoWindow>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            context: None,
            window: None,
        }
    }
}

/// Pointer gesture in progress.
pub(super) enum PointerState {
    Idle,
    /// Pressed on a title; a release over the same title taps it.
    PressedTitle(usize),
    /// Dragging the content.
    Dragging(DragTracker),
}

/// Converts pointer motion into content offsets and a release velocity.
pub(super) struct DragTracker {
    last_x: f64,
    last_time: Instant,
    velocity: f32,
}

impl DragTracker {
    pub fn new(x: f64, now: Instant) -> Self {
        Self {
            last_x: x,
            last_time: now,
            velocity: 0.0,
        }
    }

    /// Records a pointer position and returns the offset change. Moving the
    /// pointer left reveals later pages, so the offset grows.
    pub fn update(&mut self, x: f64, now: Instant) -> f32 {
        let dx = (self.last_x - x) as f32;
        let dt = now.saturating_duration_since(self.last_time).as_secs_f32();
        if dt > 0.0 {
            // Smooth over the last few samples.
            self.velocity = 0.5 * self.velocity + 0.5 * (dx / dt);
        }
        self.last_x = x;
        self.last_time = now;
        dx
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }
}

pub(super) struct DemoWindow {
    pub window: Arc<Window>,
    pub surface: Surface<OwnedDisplayHandle, Arc<Window>>,
    pub view: PageView<DemoPage>,
    pub host: DemoHost,
    pub renderer: Renderer,
    pub palette: ThemePalette,
    pub pointer: PointerState,
    pub mouse_pos: (f64, f64),
    pub log: EventLog,
    pub animating: bool,
    pub titles: Vec<String>,
}

impl DemoWindow {
    pub fn create(
        event_loop: &ActiveEventLoop,
        context: &Context<OwnedDisplayHandle>,
        config: &AppConfig,
    ) -> anyhow::Result<Self> {
        let attrs = Window::default_attributes()
            .with_title("tabpager")
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.window.width as f64,
                config.window.height as f64,
            ));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );
        let surface = Surface::new(context, window.clone())
            .map_err(|err| anyhow::anyhow!("failed to create surface: {err}"))?;

        let palette = config.theme.resolve();
        let mut style = config.style.clone();
        if config.theme == ThemeChoice::Dark {
            palette.apply_to(&mut style);
        }

        let font = config::font_data(&style.title_font)
            .and_then(|data| FontMeasure::from_bytes(&data, style.title_font.size));
        let measure: Box<dyn TextMeasure> = match &font {
            Some(font) => Box::new(font.clone()),
            None => {
                log::warn!("no title font found, drawing without text");
                let size = style.title_font.size;
                Box::new(CellMeasure::new(size * FALLBACK_CELL_RATIO, Some(size)))
            }
        };

        let titles = config.titles.clone();
        let pages = demo_pages(&titles, &palette);
        let size = window.inner_size();
        let frame = Rect::new(0.0, 0.0, size.width as f32, size.height as f32);
        let mut host = DemoHost;
        let mut view = PageView::new(frame, style, titles.clone(), pages, measure, &mut host)?;
        if let Some((w, h)) = config.window.segment_size {
            view = view.with_segment_size(Size::new(w, h));
        }

        window.request_redraw();
        Ok(Self {
            window,
            surface,
            view,
            host,
            renderer: Renderer::new(font),
            palette,
            pointer: PointerState::Idle,
            mouse_pos: (0.0, 0.0),
            log: EventLog::default(),
            animating: false,
            titles,
        })
    }

    /// Routes queued page view events and reflects the settled page in the
    /// window title.
    pub fn drain_events(&mut self) {
        self.view.dispatch_events(&mut self.log);
        if let Some(index) = self.log.settled.take()
            && let Some(title) = self.view.segment().tabs().get(index).map(|t| &t.title)
        {
            self.window.set_title(&format!("tabpager: {title}"));
        }
    }

    /// Replaces titles and pages, reversing their order each time.
    pub fn reset_reversed(&mut self) {
        self.titles.reverse();
        let pages = demo_pages(&self.titles, &self.palette);
        match self
            .view
            .reset_content(self.titles.clone(), pages, &mut self.host)
        {
            Ok(old) => log::info!("reset content, dropped {} pages", old.len()),
            Err(err) => log::warn!("reset rejected: {err}"),
        }
    }
}

pub(super) fn demo_pages(titles: &[String], palette: &ThemePalette) -> Vec<DemoPage> {
    titles
        .iter()
        .enumerate()
        .map(|(index, title)| DemoPage {
            caption: title.clone(),
            color: palette.page_color(index),
        })
        .collect()
}
