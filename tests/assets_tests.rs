// Host-side tests for the texture manifest and starfield images.

use std::io::Cursor;
use tunnel_core::{AssetError, StarfieldImage, TextureManifest, GALAXY};

fn png_bytes(w: u32, h: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba([10, 20, 30, 255]));
    let mut out = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut out, image::ImageFormat::Png)
        .expect("encode png");
    out.into_inner()
}

#[test]
fn galaxy_manifest_completes_after_one_load() {
    let mut m = TextureManifest::galaxy("img/galaxyTexture.jpg");
    assert_eq!(m.len(), 1);
    assert!(!m.is_empty());
    assert_eq!(m.loaded(), 0);
    assert!(!m.is_complete());
    assert_eq!(
        m.entries().collect::<Vec<_>>(),
        vec![(GALAXY, "img/galaxyTexture.jpg")]
    );

    let done = m
        .insert_loaded(GALAXY, StarfieldImage::procedural(8, 8, 1))
        .expect("known texture");
    assert!(done);
    assert!(m.is_complete());
    assert_eq!(m.get(GALAXY).map(|i| i.width), Some(8));
}

#[test]
fn manifest_waits_for_every_texture() {
    let mut m = TextureManifest::galaxy("a.jpg").with_texture("nebula", "b.png");
    assert_eq!(m.len(), 2);
    let first = m.insert_loaded("nebula", StarfieldImage::procedural(4, 4, 1));
    assert!(matches!(first, Ok(false)));
    // reloading the same entry does not count twice
    let again = m.insert_loaded("nebula", StarfieldImage::procedural(4, 4, 2));
    assert!(matches!(again, Ok(false)));
    assert_eq!(m.loaded(), 1);
    let last = m.insert_loaded(GALAXY, StarfieldImage::procedural(4, 4, 3));
    assert!(matches!(last, Ok(true)));
}

#[test]
fn unknown_texture_is_rejected() {
    let mut m = TextureManifest::galaxy("a.jpg");
    let err = m
        .insert_loaded("moon", StarfieldImage::procedural(2, 2, 0))
        .unwrap_err();
    assert!(matches!(err, AssetError::Unknown(ref n) if n == "moon"));
    assert_eq!(err.to_string(), "unknown texture `moon`");
    assert_eq!(m.loaded(), 0);
}

#[test]
fn take_hands_over_the_image() {
    let mut m = TextureManifest::galaxy("a.jpg");
    let img = StarfieldImage::procedural(16, 8, 5);
    m.insert_loaded(GALAXY, img.clone()).expect("known texture");
    assert_eq!(m.take(GALAXY), Some(img));
    assert_eq!(m.take(GALAXY), None);
    assert_eq!(m.loaded(), 0);
    assert!(!m.is_complete());
}

#[test]
fn procedural_starfield_shape() {
    let img = StarfieldImage::procedural(16, 8, 5);
    assert_eq!((img.width, img.height), (16, 8));
    assert_eq!(img.rgba.len(), 16 * 8 * 4);
    assert!(img.rgba.chunks(4).all(|px| px[3] == 255));

    let field = StarfieldImage::procedural(128, 128, 5);
    // background stays dim; stars stand out
    assert!(field.rgba.chunks(4).any(|px| px[0] > 64));
    assert!(field.rgba.chunks(4).filter(|px| px[0] > 64).count() < 128 * 128 / 4);
}

#[test]
fn procedural_starfield_is_seeded() {
    assert_eq!(
        StarfieldImage::procedural(32, 32, 9),
        StarfieldImage::procedural(32, 32, 9)
    );
    assert_ne!(
        StarfieldImage::procedural(32, 32, 9),
        StarfieldImage::procedural(32, 32, 10)
    );
    let tiny = StarfieldImage::procedural(0, 0, 1);
    assert_eq!((tiny.width, tiny.height), (1, 1));
}

#[test]
fn decode_png() {
    let img = StarfieldImage::decode(GALAXY, &png_bytes(3, 2)).expect("valid png");
    assert_eq!((img.width, img.height), (3, 2));
    assert_eq!(&img.rgba[..4], &[10, 20, 30, 255]);
}

#[test]
fn decode_garbage_reports_texture_name() {
    let err = StarfieldImage::decode(GALAXY, b"definitely not a jpeg").unwrap_err();
    assert!(matches!(err, AssetError::Decode { ref name, .. } if name == "galaxy"));
    assert!(err.to_string().contains("galaxy"));
    assert!(std::error::Error::source(&err).is_some());
}
