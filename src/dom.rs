use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn find_canvas(
    document: &web::Document,
    selector: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .query_selector(selector)
        .map_err(|e| anyhow!("bad selector {}: {:?}", selector, e))?
        .ok_or_else(|| anyhow!("missing {}", selector))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("{} is not a canvas: {:?}", selector, e))
}

/// Layout size in CSS pixels: the root element's client width (body as a
/// fallback) by the window's inner height.
pub fn viewport_css_size(window: &web::Window) -> (f32, f32) {
    let document = window.document();
    let mut width = document
        .as_ref()
        .and_then(|d| d.document_element())
        .map(|el| el.client_width())
        .unwrap_or(0);
    if width == 0 {
        width = document
            .as_ref()
            .and_then(|d| d.body())
            .map(|b| b.client_width())
            .unwrap_or(0);
    }
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width as f32, height as f32)
}

/// Size the canvas to `css_w` x `css_h` CSS pixels and its backing store to
/// the matching device pixels. Returns the backing size.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    css_w: f32,
    css_h: f32,
) -> (u32, u32) {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let w_px = ((css_w as f64 * dpr) as u32).max(1);
    let h_px = ((css_h as f64 * dpr) as u32).max(1);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    _ = canvas.set_attribute(
        "style",
        &format!("width:{}px;height:{}px", css_w.max(1.0), css_h.max(1.0)),
    );
    (w_px, h_px)
}
