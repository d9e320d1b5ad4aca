//! The shared winit event loop.
//!
//! winit allows one event loop per process and it must stay on the thread
//! that created it, so it lives in a thread-local. Events are pumped without
//! blocking; the only state kept per window is whether a close was requested.
//! Events for windows that were never registered, or have been dropped, are
//! discarded.

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window as NativeWindow, WindowAttributes, WindowId};

thread_local! {
    static PLATFORM: RefCell<Option<Platform>> = const { RefCell::new(None) };
}

/// Close flag per live window.
type Registry = HashMap<WindowId, bool>;

struct Platform {
    event_loop: EventLoop<()>,
    windows: Registry,
}

impl Platform {
    fn new() -> Result<Self> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut platform = Self { event_loop, windows: HashMap::new() };
        // Some backends only allow window creation after the first resume.
        platform.pump();
        Ok(platform)
    }

    fn pump(&mut self) {
        let Self { event_loop, windows } = self;
        let mut collector = Collector { windows };
        if let PumpStatus::Exit(code) = event_loop.pump_app_events(Some(Duration::ZERO), &mut collector) {
            log::debug!("event loop reported exit (code {code})");
        }
    }
}

/// Records close requests for registered windows.
fn observe(windows: &mut Registry, id: WindowId, event: &WindowEvent) {
    let Some(close_requested) = windows.get_mut(&id) else {
        return;
    };
    if matches!(event, WindowEvent::CloseRequested | WindowEvent::Destroyed) {
        *close_requested = true;
    }
}

struct Collector<'a> {
    windows: &'a mut Registry,
}

impl ApplicationHandler for Collector<'_> {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {}

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        observe(self.windows, window_id, &event);
    }
}

fn with_platform<R>(f: impl FnOnce(&mut Platform) -> Result<R>) -> Result<R> {
    PLATFORM.with(|cell| {
        let mut slot = cell
            .try_borrow_mut()
            .map_err(|_| anyhow!("event loop accessed re-entrantly"))?;
        let platform = match slot.take() {
            Some(p) => p,
            None => Platform::new()?,
        };
        f(slot.insert(platform))
    })
}

/// Creates a native window and registers it for close tracking.
pub(super) fn create_window(attrs: WindowAttributes) -> Result<NativeWindow> {
    with_platform(|p| {
        #[allow(deprecated)]
        let window = p.event_loop.create_window(attrs).context("failed to create window")?;
        p.windows.insert(window.id(), false);
        Ok(window)
    })
}

/// Pumps the event loop and reports whether `id` has been asked to close.
pub(super) fn close_requested(id: WindowId) -> Result<bool> {
    with_platform(|p| {
        p.pump();
        Ok(p.windows.get(&id).copied().unwrap_or(false))
    })
}

/// Stops tracking `id`. Later events for it are discarded.
pub(super) fn forget(id: WindowId) {
    // The platform may already be gone during thread teardown.
    let _ = PLATFORM.try_with(|cell| {
        if let Ok(mut slot) = cell.try_borrow_mut() {
            if let Some(p) = slot.as_mut() {
                p.windows.remove(&id);
            }
        }
    });
}
