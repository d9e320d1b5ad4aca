use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};
use ouroboros::self_referencing;
use winit::window::Window as NativeWindow;

use crate::coords::View;
use crate::device::{Gpu, SurfaceErrorAction};
use crate::memo::Memo;
use crate::paint::Color;
use crate::render::{PolygonRenderer, RenderCtx, RenderTarget};
use crate::scene::{DrawList, Drawable};
use crate::time::{FrameClock, FrameTime};

use super::platform;
use super::WindowConfig;

/// Shared handle returned by [`Window::memo`].
pub type WindowHandle = Rc<RefCell<Window>>;

thread_local! {
    /// Windows created through [`Window::memo`]. Created on first use, never
    /// emptied; lives as long as the render thread.
    static WINDOWS: Memo<RefCell<Window>> = Memo::new();
}

#[self_referencing]
struct Surface {
    native: NativeWindow,

    #[borrows(native)]
    #[covariant]
    gpu: Gpu<'this>,
}

/// A native window and its render surface.
pub struct Window {
    name: String,
    surface: Surface,
    open: bool,
    background: Color,
    view: View,
    clock: FrameClock,
    frame_time: Option<FrameTime>,
    draw_list: DrawList,
    polygons: PolygonRenderer,
}

impl Window {
    /// Opens a window titled `name` with the default configuration.
    ///
    /// Must be called on the render thread.
    pub fn new(name: &str) -> Result<Self> {
        Self::with_config(name, WindowConfig::default())
    }

    pub fn with_config(name: &str, config: WindowConfig) -> Result<Self> {
        let WindowConfig { title, initial_size, background, gpu } = config;

        let attrs = NativeWindow::default_attributes()
            .with_title(title.unwrap_or_else(|| name.to_owned()))
            .with_inner_size(initial_size);
        let native = platform::create_window(attrs)?;

        let surface = SurfaceTryBuilder {
            native,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu)),
        }
        .try_build()
        .with_context(|| format!("failed to initialize GPU for window {name:?}"))?;

        log::debug!("window {name:?} opened");

        Ok(Self {
            name: name.to_owned(),
            surface,
            open: true,
            background,
            view: View::default(),
            clock: FrameClock::new(),
            frame_time: None,
            draw_list: DrawList::new(),
            polygons: PolygonRenderer::new(),
        })
    }

    /// Returns the window registered under `name`, opening it on first use.
    ///
    /// Repeated calls with the same name return the same window for the life
    /// of the render thread. A failed open registers nothing.
    pub fn memo(name: &str) -> Result<WindowHandle> {
        WINDOWS.with(|windows| {
            windows.get_or_try_insert_with(name, |n| Window::new(n).map(RefCell::new))
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `true` until a close request has been observed.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// View used for the most recent frame.
    pub fn view(&self) -> View {
        self.view
    }

    /// Timing of the most recently presented frame.
    pub fn frame_time(&self) -> Option<FrameTime> {
        self.frame_time
    }

    /// Renders one frame of `root` and returns whether it was presented.
    ///
    /// Drains pending events, recomputes the view from the surface size, clears
    /// to the background, draws `root` and presents. A closed window only
    /// drains events. Presenting may block on vertical sync; a frame that is
    /// not presented (closed, minimized, surface unavailable) returns at once.
    pub fn render(&mut self, root: &dyn Drawable) -> bool {
        self.drain_events();
        if !self.open {
            return false;
        }

        let size = self.surface.borrow_gpu().size();
        let Some(view) = View::for_surface(size.width, size.height) else {
            // Minimized.
            return false;
        };
        self.view = view;

        match self.draw_frame(root) {
            None => true,
            Some(SurfaceErrorAction::Fatal) => {
                log::error!("window {:?}: unrecoverable surface error, closing", self.name);
                self.close();
                false
            }
            Some(_) => false,
        }
    }

    fn drain_events(&mut self) {
        let id = self.surface.borrow_native().id();
        match platform::close_requested(id) {
            Ok(true) => self.close(),
            Ok(false) => {}
            Err(e) => {
                log::error!("window {:?}: failed to pump events: {e:#}", self.name);
                return;
            }
        }

        // Follow the native size even when a backend coalesces resize events.
        self.surface.with_mut(|fields| {
            let size = fields.native.inner_size();
            if size != fields.gpu.size() {
                fields.gpu.resize(size);
            }
        });
    }

    fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        self.surface.borrow_native().set_visible(false);
        log::debug!("window {:?} closed", self.name);
    }

    /// Returns the surface error action if no frame could be acquired.
    fn draw_frame(&mut self, root: &dyn Drawable) -> Option<SurfaceErrorAction> {
        let Self { surface, background, view, clock, frame_time, draw_list, polygons, .. } = self;

        surface.with_mut(|fields| {
            let gpu = fields.gpu;

            let mut frame = match gpu.begin_frame() {
                Ok(frame) => frame,
                Err(err) => {
                    let action = gpu.handle_surface_error(err);
                    log::debug!("surface unavailable ({action:?}), skipping frame");
                    return Some(action);
                }
            };

            // Clear pass; dropped before the tree is rendered.
            {
                let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("vesper clear"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &frame.view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(background.to_wgpu()),
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                    multiview_mask: None,
                });
            }

            draw_list.clear();
            root.draw(draw_list);

            {
                let ctx = RenderCtx::new(gpu.device(), gpu.queue(), gpu.surface_format(), *view);
                let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
                polygons.render(&ctx, &mut target, draw_list);
            }

            fields.native.pre_present_notify();
            gpu.present(frame);
            *frame_time = Some(clock.tick());
            None
        })
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        platform::forget(self.surface.borrow_native().id());
    }
}
