/// Page-level names and fallbacks for the web front-end.
///
/// The scene's own tuning values live in `tunnel_core::constants`; these are
/// the hooks into the host page.
// Canvas the tunnel draws into
pub const CANVAS_SELECTOR: &str = "canvas.webgl";

// Starfield texture, relative to the page
pub const GALAXY_TEXTURE_URL: &str = "img/galaxyTexture.jpg";

// Class on <body> until every texture is ready
pub const LOADING_CLASS: &str = "loading";

// Procedural starfield used when the texture cannot be fetched or decoded
pub const FALLBACK_TEXTURE_SIZE: u32 = 1024;
pub const FALLBACK_TEXTURE_SEED: u64 = 0x7e1e_5c0e;
