use crate::constants::LOADING_CLASS;
use web_sys as web;

#[inline]
pub fn is_loading(document: &web::Document) -> bool {
    document
        .body()
        .map(|b| b.class_list().contains(LOADING_CLASS))
        .unwrap_or(false)
}

/// Drop the loading state from `<body>` once textures are ready.
#[inline]
pub fn finish(document: &web::Document) {
    if let Some(body) = document.body() {
        _ = body.class_list().remove_1(LOADING_CLASS);
    }
}
