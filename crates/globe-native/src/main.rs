use std::time::Instant;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use globe_core::{
    resolve_point_count, Camera, Capabilities, FieldConfig, FrameInputs, Lighting, ParticleField,
    ScrollConfig, ScrollTracker, Viewport,
};

mod gpu;
mod page;

use gpu::GpuState;
use page::{VirtualPage, LINE_STEP};

#[derive(Debug, Default, PartialEq)]
struct Args {
    points: Option<usize>,
    seed: Option<u64>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> anyhow::Result<Args> {
    let mut out = Args::default();
    let mut it = args.into_iter();
    while let Some(arg) = it.next() {
        let mut value = |name: &str| {
            it.next()
                .ok_or_else(|| anyhow::anyhow!("{name} needs a value"))
        };
        match arg.as_str() {
            "--points" => out.points = Some(value("--points")?.parse()?),
            "--seed" => out.seed = Some(value("--seed")?.parse()?),
            other => anyhow::bail!("unknown argument: {other}"),
        }
    }
    Ok(out)
}

fn native_capabilities() -> Capabilities {
    Capabilities {
        cores: std::thread::available_parallelism()
            .ok()
            .map(|n| n.get() as u32),
        ..Default::default()
    }
}

fn logical_viewport(window: &winit::window::Window) -> Viewport {
    let size = window.inner_size().to_logical::<f32>(window.scale_factor());
    Viewport {
        width: size.width,
        height: size.height,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    let point_count = resolve_point_count(args.points, &native_capabilities());
    let mut config = FieldConfig::default().with_point_count(point_count);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let mut field = ParticleField::new(config)?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Particle Globe (native)")
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window, point_count))?;
    let mut camera = Camera::default();
    let lighting = Lighting::default();
    let size = window.inner_size();
    camera.set_viewport(size.width, size.height);

    let mut viewport = logical_viewport(&window);
    let mut page = VirtualPage::new(viewport.height);
    let mut scroll = ScrollTracker::new(ScrollConfig::default());
    scroll.initial(page.sample());
    let mut last_frame = Instant::now();

    log::info!("scroll with the mouse wheel, arrow keys, Home/End; Esc quits");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => {
            state.resize(size);
            camera.set_viewport(size.width, size.height);
            viewport = logical_viewport(state.window);
            page.set_viewport_height(viewport.height);
            scroll.update(page.sample());
        }
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::WindowEvent {
            event: WindowEvent::MouseWheel { delta, .. },
            ..
        } => {
            let dy = match delta {
                MouseScrollDelta::LineDelta(_, y) => -y * LINE_STEP,
                MouseScrollDelta::PixelDelta(p) => -p.y as f32,
            };
            page.scroll_by(dy);
            scroll.update(page.sample());
        }
        Event::WindowEvent {
            event:
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            logical_key: Key::Named(key),
                            state: ElementState::Pressed,
                            ..
                        },
                    ..
                },
            ..
        } => {
            match key {
                NamedKey::ArrowDown => page.scroll_by(LINE_STEP),
                NamedKey::ArrowUp => page.scroll_by(-LINE_STEP),
                NamedKey::PageDown => page.scroll_by(viewport.height),
                NamedKey::PageUp => page.scroll_by(-viewport.height),
                NamedKey::Home => page.scroll_to_top(),
                NamedKey::End => page.scroll_to_end(),
                NamedKey::Escape => elwt.exit(),
                _ => return,
            }
            scroll.update(page.sample());
        }
        Event::AboutToWait => {
            let now = Instant::now();
            let dt = (now - last_frame).as_secs_f32();
            last_frame = now;

            let s = scroll.state();
            let inputs = FrameInputs {
                effect: s.effect,
                scroll_progress: s.progress,
                scroll_offset: s.offset,
                viewport,
            };
            let out = field.step(dt, &inputs);
            match state.render(&camera, &lighting, &out) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    state.resize(state.window.inner_size())
                }
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("render error: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> anyhow::Result<Args> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn no_arguments_uses_policy() {
        assert_eq!(args(&[]).unwrap(), Args::default());
    }

    #[test]
    fn points_and_seed_are_parsed() {
        let a = args(&["--points", "1000", "--seed", "7"]).unwrap();
        assert_eq!(a.points, Some(1000));
        assert_eq!(a.seed, Some(7));
    }

    #[test]
    fn bad_arguments_are_rejected() {
        assert!(args(&["--points"]).is_err());
        assert!(args(&["--points", "many"]).is_err());
        assert!(args(&["--fast"]).is_err());
    }
}
