// File: crates/tardy-viewer/src/main.rs
// Summary: Minimal windowed viewer that renders the chart to a window via RGBA blit
// (CPU) using winit + softbuffer, driving hover/click interaction from pointer events.

use std::num::NonZeroU32;
use std::time::Instant;

use tardy_chart::interaction::{click, hit_test};
use tardy_chart::task::{parse_tasks, points, TaskAgePoint};
use tardy_chart::{HoverState, Navigation, RenderOptions, TaskAgeChart};
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() {
    // Arg: JSON file with the tasks API response; sample data otherwise
    let pts = match std::env::args().nth(1) {
        Some(path) => match load_points(&path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("failed to load {path}: {e}");
                return;
            }
        },
        None => sample_points(),
    };
    if pts.is_empty() {
        eprintln!("no chartable tasks");
        return;
    }

    let opts = RenderOptions::default();
    let chart = TaskAgeChart::new(pts);
    let bars = chart.bars(&opts.viewport);
    let margin = opts.viewport.margin;

    // Window + softbuffer setup; the chart canvas is fixed-size
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("tardy — task age")
        .with_inner_size(winit::dpi::LogicalSize::new(
            opts.viewport.width as f64,
            opts.viewport.height as f64,
        ))
        .with_resizable(false)
        .build(&event_loop)
        .expect("build window");

    let context = unsafe { softbuffer::Context::new(&window) }.expect("softbuffer context");
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }.expect("softbuffer surface");

    let mut hover = HoverState::new();
    let mut last_tick = Instant::now();

    let mut draw = move |hover: &HoverState| {
        let w = opts.viewport.width as u32;
        let h = opts.viewport.height as u32;
        surface
            .resize(NonZeroU32::new(w).unwrap(), NonZeroU32::new(h).unwrap())
            .ok();

        let (rgba, _, _, _) = chart
            .render_to_rgba8_with(&opts, Some(hover))
            .expect("render rgba");
        let mut frame = surface.buffer_mut().expect("frame");
        let max_px = frame.len().min(rgba.len() / 4);
        for (i, px) in rgba.chunks_exact(4).take(max_px).enumerate() {
            let r = px[0] as u32;
            let g = px[1] as u32;
            let b = px[2] as u32;
            let a = px[3] as u32;
            frame[i] = (a << 24) | (r << 16) | (g << 8) | b;
        }
        if let Err(e) = frame.present() {
            eprintln!("present error: {e:?}");
        }
    };

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Poll;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::CursorMoved { position, .. } => {
                    // Plot-space coordinates: window pixels minus the margins
                    let px = position.x - margin.left as f64;
                    let py = position.y - margin.top as f64;
                    match hit_test(&bars, &hover, px, py) {
                        Some(i) => {
                            hover.pointer_enter(i);
                            window.set_title(&format!("tardy — {}", bars[i].tooltip()));
                        }
                        None => {
                            hover.pointer_leave();
                            window.set_title("tardy — task age");
                        }
                    }
                }
                WindowEvent::CursorLeft { .. } => {
                    hover.pointer_leave();
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    if button == MouseButton::Left && state == ElementState::Pressed {
                        if let Some(i) = hover.hovered() {
                            if let Some(nav) = click(&bars, i) {
                                open_url(&nav);
                            }
                        }
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                let now = Instant::now();
                hover.tick(now - last_tick);
                last_tick = now;
                window.request_redraw();
            }
            Event::RedrawRequested(_) => {
                draw(&hover);
            }
            _ => {}
        }
    });
}

fn load_points(path: &str) -> anyhow::Result<Vec<TaskAgePoint>> {
    let body = std::fs::read(path)?;
    let tasks = parse_tasks(&body)?;
    Ok(points(&tasks))
}

fn sample_points() -> Vec<TaskAgePoint> {
    (0..60)
        .map(|i| TaskAgePoint::new(100 + i * 7, ((i as i64 * 13) % 29) - 11))
        .collect()
}

/// Hand the click-through URL to the OS opener, best-effort.
fn open_url(nav: &Navigation) {
    eprintln!("opening {}", nav.url);
    #[cfg(target_os = "macos")]
    let cmd = "open";
    #[cfg(target_os = "windows")]
    let cmd = "explorer";
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let cmd = "xdg-open";
    if let Err(e) = std::process::Command::new(cmd).arg(&nav.url).spawn() {
        eprintln!("could not open browser: {e}");
    }
}
