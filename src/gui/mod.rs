//! Demo host: a winit window drawing a [`PageView`] into a softbuffer surface.

mod input;
mod lifecycle;
mod render;
mod state;

use winit::event_loop::EventLoop;

use tabpager::config::AppConfig;
use tabpager::core::Color;
use tabpager::host::{PageHost, PageObserver};

use self::state::App;

/// Page content shown by the demo: a colored panel with a caption.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DemoPage {
    pub caption: String,
    pub color: Color,
}

/// Pages need no real parent here; attachment is only logged.
#[derive(Debug, Default)]
pub(crate) struct DemoHost;

impl PageHost<DemoPage> for DemoHost {
    fn attach(&mut self, page: &DemoPage, index: usize) {
        log::debug!("attach page {index} ({})", page.caption);
    }

    fn detach(&mut self, page: &DemoPage, index: usize) {
        log::debug!("detach page {index} ({})", page.caption);
    }
}

/// Collects the page view's events for the window to act on.
#[derive(Debug, Default)]
pub(crate) struct EventLog {
    pub settled: Option<usize>,
}

impl PageObserver for EventLog {
    fn on_settled_page(&mut self, index: usize) {
        log::info!("settled on page {index}");
        self.settled = Some(index);
    }

    fn on_tab_selected(&mut self, title: &str, index: usize) {
        log::info!("selected tab {index} ({title})");
    }
}

pub fn run(config: AppConfig) -> anyhow::Result<()> {
    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}
