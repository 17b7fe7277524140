use crate::constants::{FALLBACK_TEXTURE_SEED, FALLBACK_TEXTURE_SIZE};
use anyhow::anyhow;
use js_sys::Uint8Array;
use tunnel_core::{StarfieldImage, TextureManifest};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow!("fetch {}: {:?}", url, e))?
        .dyn_into::<web::Response>()
        .map_err(|e| anyhow!("fetch {}: not a Response: {:?}", url, e))?;
    if !resp.ok() {
        return Err(anyhow!("fetch {}: HTTP {}", url, resp.status()));
    }
    let promise = resp
        .array_buffer()
        .map_err(|e| anyhow!("read {}: {:?}", url, e))?;
    let buf = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow!("read {}: {:?}", url, e))?;
    Ok(Uint8Array::new(&buf).to_vec())
}

async fn load_texture(name: &str, url: &str) -> anyhow::Result<StarfieldImage> {
    let bytes = fetch_bytes(url).await?;
    Ok(StarfieldImage::decode(name, &bytes)?)
}

/// Fetch every texture in `manifest`; any that fail are replaced by a
/// procedural starfield so the scene can still start.
pub async fn load_manifest(manifest: &mut TextureManifest) -> anyhow::Result<()> {
    let entries: Vec<(&'static str, &'static str)> = manifest.entries().collect();
    for (name, url) in entries {
        let image = match load_texture(name, url).await {
            Ok(img) => img,
            Err(e) => {
                log::warn!("[assets] {} unavailable ({:#}), using procedural starfield", name, e);
                StarfieldImage::procedural(
                    FALLBACK_TEXTURE_SIZE,
                    FALLBACK_TEXTURE_SIZE,
                    FALLBACK_TEXTURE_SEED,
                )
            }
        };
        if manifest.insert_loaded(name, image)? {
            log::info!("[assets] all {} textures ready", manifest.len());
        }
    }
    Ok(())
}
