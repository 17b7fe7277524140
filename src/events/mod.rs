mod pointer;
mod resize;

pub use pointer::wire_pointer_move;
pub use resize::wire_resize;

use std::cell::RefCell;
use std::rc::Rc;
use tunnel_core::SceneController;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Raise the scene's stop flag when the page is being unloaded.
pub fn wire_teardown(window: &web::Window, scene: Rc<RefCell<SceneController>>) {
    let closure = Closure::wrap(Box::new(move || {
        if let Ok(mut s) = scene.try_borrow_mut() {
            s.stop();
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    closure.forget();
}
