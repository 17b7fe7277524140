use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use tunnel_core::SceneController;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed mouse moves over `<body>` to the scene in CSS pixels.
pub fn wire_pointer_move(
    document: &web::Document,
    scene: Rc<RefCell<SceneController>>,
) -> anyhow::Result<()> {
    let body = document.body().ok_or_else(|| anyhow!("no body"))?;
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        scene
            .borrow_mut()
            .on_pointer_move(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);
    body.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("mousemove listener: {:?}", e))?;
    closure.forget();
    Ok(())
}
