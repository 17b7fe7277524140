use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tunnel_core::{FrameStatus, SceneConfig, SceneController, StarfieldImage, GALAXY};
use tunnel_render::TunnelRenderer;
use winit::{
    dpi::LogicalSize,
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

const FALLBACK_TEXTURE_SIZE: u32 = 1024;

#[derive(Parser)]
#[command(name = "tunnel-native")]
#[command(about = "Mouse-steered hyperspace tunnel in a desktop window", long_about = None)]
struct Cli {
    /// Starfield texture (JPEG or PNG); a procedural one is used if it cannot be read
    #[arg(short, long, default_value = "img/galaxyTexture.jpg")]
    texture: PathBuf,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Seed for the camera shake ease; random when omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn load_starfield(path: &Path, seed: u64) -> StarfieldImage {
    let loaded = std::fs::read(path)
        .map_err(anyhow::Error::from)
        .and_then(|bytes| Ok(StarfieldImage::decode(GALAXY, &bytes)?));
    match loaded {
        Ok(img) => {
            log::info!("[assets] {} {}x{}", path.display(), img.width, img.height);
            img
        }
        Err(e) => {
            log::warn!(
                "[assets] {} unavailable ({:#}), using procedural starfield",
                path.display(),
                e
            );
            StarfieldImage::procedural(FALLBACK_TEXTURE_SIZE, FALLBACK_TEXTURE_SIZE, seed)
        }
    }
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
    let cli = Cli::parse();

    let starfield = load_starfield(&cli.texture, cli.seed.unwrap_or_default());

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Hyperspace tunnel")
        .with_inner_size(LogicalSize::new(cli.width.max(1), cli.height.max(1)))
        .build(&event_loop)?;

    let logical = window.inner_size().to_logical::<f32>(window.scale_factor());
    let config = match cli.seed {
        Some(seed) => SceneConfig::default().with_seed(seed),
        None => SceneConfig::default(),
    };
    let mut scene = SceneController::with_config(logical.width, logical.height, config);

    let physical = window.inner_size();
    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(&window)?;
    let mut renderer = pollster::block_on(TunnelRenderer::new(
        &instance,
        surface,
        physical.width,
        physical.height,
        &starfield,
        &scene,
    ))?;
    let mut last_frame = Instant::now();
    let window = &window;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => {
                let logical = size.to_logical::<f32>(window.scale_factor());
                scene.on_resize(logical.width, logical.height);
                renderer.resize(size.width, size.height);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let p = position.to_logical::<f32>(window.scale_factor());
                scene.on_pointer_move(p.x, p.y);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            }
            | WindowEvent::CloseRequested => {
                scene.stop();
                elwt.exit();
            }
            _ => {}
        },
        Event::AboutToWait => {
            let now = Instant::now();
            let dt_sec = (now - last_frame).as_secs_f32();
            last_frame = now;
            match scene.frame(dt_sec, &mut renderer) {
                Ok(FrameStatus::Continue) => window.request_redraw(),
                Ok(FrameStatus::Stopped) => elwt.exit(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    renderer.reconfigure()
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("[frame] out of GPU memory, stopping");
                    scene.stop();
                    elwt.exit();
                }
                Err(e) => log::warn!("[frame] skipped: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}
