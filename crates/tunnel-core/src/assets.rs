//! Texture manifest and decoded starfield images.

use fnv::FnvHashMap;
use rand::prelude::*;
use thiserror::Error;

pub const GALAXY: &str = "galaxy";

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to decode texture `{name}`: {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },
    #[error("texture `{0}` has zero size")]
    Empty(String),
    #[error("unknown texture `{0}`")]
    Unknown(String),
}

/// Tightly packed RGBA8 pixels, sRGB encoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StarfieldImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl StarfieldImage {
    pub fn decode(name: &str, bytes: &[u8]) -> Result<Self, AssetError> {
        let img = image::load_from_memory(bytes)
            .map_err(|source| AssetError::Decode {
                name: name.to_string(),
                source,
            })?
            .to_rgba8();
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(AssetError::Empty(name.to_string()));
        }
        Ok(Self {
            width,
            height,
            rgba: img.into_raw(),
        })
    }

    /// Seeded stand-in used when the real texture cannot be loaded: a dim
    /// blue-black field scattered with soft stars of varying tint.
    pub fn procedural(width: u32, height: u32, seed: u64) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut rgba = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..width * height {
            let n: f32 = rng.gen::<f32>() * 6.0;
            rgba.extend_from_slice(&[(6.0 + n) as u8, (7.0 + n) as u8, (16.0 + n * 1.5) as u8, 255]);
        }

        let stars = (width * height / 180).max(1);
        for _ in 0..stars {
            let cx = rng.gen_range(0..width) as i32;
            let cy = rng.gen_range(0..height) as i32;
            let brightness = rng.gen::<f32>().powi(3);
            let radius = if brightness > 0.6 { 2 } else { 1 };
            let tint = [
                0.8 + rng.gen::<f32>() * 0.2,
                0.8 + rng.gen::<f32>() * 0.2,
                0.9 + rng.gen::<f32>() * 0.1,
            ];
            for dy in -radius..=radius {
                for dx in -radius..=radius {
                    let x = (cx + dx).rem_euclid(width as i32) as u32;
                    let y = (cy + dy).rem_euclid(height as i32) as u32;
                    let falloff = 1.0 / (1.0 + (dx * dx + dy * dy) as f32 * 1.5);
                    let idx = ((y * width + x) * 4) as usize;
                    for c in 0..3 {
                        let add = 255.0 * brightness * falloff * tint[c];
                        rgba[idx + c] = (rgba[idx + c] as f32 + add).min(255.0) as u8;
                    }
                }
            }
        }
        Self {
            width,
            height,
            rgba,
        }
    }
}

#[derive(Debug)]
struct TextureSlot {
    url: &'static str,
    image: Option<StarfieldImage>,
}

/// Named textures the scene needs before it can start.
#[derive(Debug, Default)]
pub struct TextureManifest {
    slots: FnvHashMap<&'static str, TextureSlot>,
    loaded: usize,
}

impl TextureManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// The single starfield texture the tunnel uses.
    pub fn galaxy(url: &'static str) -> Self {
        Self::new().with_texture(GALAXY, url)
    }

    pub fn with_texture(mut self, name: &'static str, url: &'static str) -> Self {
        self.slots.insert(name, TextureSlot { url, image: None });
        self
    }

    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.slots.iter().map(|(name, slot)| (*name, slot.url))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn loaded(&self) -> usize {
        self.loaded
    }

    pub fn is_complete(&self) -> bool {
        self.loaded == self.slots.len()
    }

    /// Store a loaded texture. Returns `true` once every entry is present.
    pub fn insert_loaded(&mut self, name: &str, image: StarfieldImage) -> Result<bool, AssetError> {
        let slot = self
            .slots
            .get_mut(name)
            .ok_or_else(|| AssetError::Unknown(name.to_string()))?;
        if slot.image.replace(image).is_none() {
            self.loaded += 1;
        }
        log::info!("[assets] {} loaded ({}/{})", name, self.loaded, self.slots.len());
        Ok(self.is_complete())
    }

    pub fn get(&self, name: &str) -> Option<&StarfieldImage> {
        self.slots.get(name).and_then(|s| s.image.as_ref())
    }

    pub fn take(&mut self, name: &str) -> Option<StarfieldImage> {
        let image = self.slots.get_mut(name)?.image.take();
        if image.is_some() {
            self.loaded -= 1;
        }
        image
    }
}
