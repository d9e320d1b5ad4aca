use winit::dpi::LogicalSize;

use crate::device::GpuInit;
use crate::paint::Color;

/// Window creation parameters.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    /// Native title. `None` uses the window name.
    pub title: Option<String>,
    pub initial_size: LogicalSize<f64>,
    /// Color the surface is cleared to before each frame.
    pub background: Color,
    pub gpu: GpuInit,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: None,
            initial_size: LogicalSize::new(800.0, 600.0),
            background: Color::black(),
            gpu: GpuInit::default(),
        }
    }
}
