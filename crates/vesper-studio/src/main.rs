use std::f32::consts::TAU;
use std::thread;
use std::time::Duration;

use anyhow::Result;

use vesper_engine::logging::{init_logging, LoggingConfig};
use vesper_engine::scene::{node, Drawable, Group, Node, Polygon};
use vesper_engine::signal::Signal;
use vesper_engine::window::Window;

const PETALS: usize = 6;
const IDLE_WAIT: Duration = Duration::from_millis(16);

/// Halo size relative to its resting scale.
fn pulse(t: f32) -> f32 {
    1.0 + 0.08 * (t * 4.0).sin()
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let window = Window::memo("vesper studio")?;

    // ── scene ─────────────────────────────────────────────────────────────
    let halo = node(Polygon::new(64));
    {
        let mut h = halo.borrow_mut();
        h.attribute("scale", Signal::scalar(0.6));
        h.attribute("fill", Signal::quad(0.05, 0.05, 0.1, 1.0));
        h.attribute("line", Signal::scalar(0.02));
        h.attribute("stroke", Signal::quad(0.4, 0.4, 0.9, 1.0));
    }

    let petals: Vec<Node> = (0..PETALS).map(|_| node(Polygon::new(3))).collect();
    let ring = node({
        let mut g = Group::new();
        for p in &petals {
            g.add(p.clone());
        }
        g
    });
    ring.borrow_mut().attribute("scale", Signal::scalar(0.15));
    ring.borrow_mut().attribute("line", Signal::scalar(0.1));

    let mut root = Group::new();
    root.add(halo.clone());
    root.add(ring.clone());

    // ── frame loop ────────────────────────────────────────────────────────
    let mut t = 0.0f32;
    let mut dt = 1.0 / 60.0;
    let mut last_pulse = pulse(t);
    let mut advance = true;
    while window.borrow().is_open() {
        // Relative attributes are applied once per presented frame.
        if advance {
            ring.borrow_mut().attribute("rotate", Signal::scalar(dt * 1.5));
            for (i, petal) in petals.iter().enumerate() {
                let phase = t * 0.5 + i as f32 * TAU / PETALS as f32;
                let mut p = petal.borrow_mut();
                p.attribute("translate", Signal::pair(0.45 * phase.cos(), 0.45 * phase.sin()));
                p.attribute("fill", Signal::quad(0.5 + 0.5 * phase.sin(), 0.3, 0.5 + 0.5 * phase.cos(), 0.9));
            }

            let next_pulse = pulse(t);
            halo.borrow_mut().attribute("scale", Signal::scalar(next_pulse / last_pulse));
            last_pulse = next_pulse;

            // Unknown commands are ignored; a live driver may send these.
            root.attribute("wobble", Signal::scalar(t));
        }

        advance = window.borrow_mut().render(&root);
        if !advance {
            // Closed, minimized or surface unavailable: nothing blocked on vsync.
            thread::sleep(IDLE_WAIT);
            continue;
        }

        if let Some(ft) = window.borrow().frame_time() {
            dt = ft.dt;
            if ft.frame_index % 300 == 0 {
                log::info!("frame {} at {:.1} fps", ft.frame_index, ft.fps);
            }
        }
        t += dt;
    }

    log::info!("window closed, exiting");
    Ok(())
}
