use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use tunnel_core::SceneController;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the scene viewport and canvas backing store in step with the window.
/// The renderer picks up the new backing size on its next frame.
pub fn wire_resize(
    window: &web::Window,
    scene: Rc<RefCell<SceneController>>,
    canvas: web::HtmlCanvasElement,
) {
    let closure = Closure::wrap(Box::new(move || {
        let Some(w) = web::window() else {
            return;
        };
        let (css_w, css_h) = dom::viewport_css_size(&w);
        scene.borrow_mut().on_resize(css_w, css_h);
        dom::sync_canvas_backing_size(&canvas, css_w, css_h);
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
