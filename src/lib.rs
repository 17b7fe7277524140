#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use tunnel_core::{SceneController, TextureManifest, GALAXY};
use tunnel_render::TunnelRenderer;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod dom;
mod events;
mod frame;
mod loading;

use constants::{CANVAS_SELECTOR, GALAXY_TEXTURE_URL};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tunnel-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;
    let canvas = dom::find_canvas(&document, CANVAS_SELECTOR)?;

    if loading::is_loading(&document) {
        log::debug!("[init] waiting for textures");
    }
    let mut manifest = TextureManifest::galaxy(GALAXY_TEXTURE_URL);
    assets::load_manifest(&mut manifest).await?;
    loading::finish(&document);
    let starfield = manifest
        .take(GALAXY)
        .ok_or_else(|| anyhow!("galaxy texture missing from manifest"))?;

    let (css_w, css_h) = dom::viewport_css_size(&window);
    let scene = SceneController::new(css_w, css_h);
    let (px_w, px_h) = dom::sync_canvas_backing_size(&canvas, css_w, css_h);

    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
    let renderer =
        TunnelRenderer::new(&instance, surface, px_w, px_h, &starfield, &scene).await?;

    let scene = Rc::new(RefCell::new(scene));
    events::wire_resize(&window, scene.clone(), canvas.clone());
    events::wire_pointer_move(&document, scene.clone())?;
    events::wire_teardown(&window, scene.clone());

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        scene,
        renderer,
        canvas,
        last_instant: Instant::now(),
    })));
    Ok(())
}
