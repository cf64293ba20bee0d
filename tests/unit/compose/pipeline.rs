use image::{GenericImageView, Rgba};

use super::*;

fn photo(w: u32, h: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(Layer::from_fn(w, h, |x, y| {
        Rgba([(x * 3 % 256) as u8, (y * 5 % 256) as u8, 180, 255])
    }))
}

fn magpie(href: &str) -> SpeciesRecord {
    SpeciesRecord {
        order: "雀形目".to_owned(),
        family: "鸦科".to_owned(),
        species: "喜鹊Pica pica".to_owned(),
        href: href.to_owned(),
    }
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn fast_params() -> RenderParams {
    RenderParams {
        blur_radius: 4.0,
        ..RenderParams::default()
    }
}

#[test]
fn file_name_keeps_only_ideographs() {
    let s = magpie("");
    assert_eq!(
        download_file_name(Some(&s), "北京", day()),
        "喜鹊-北京-2024-01-01.png"
    );
    assert_eq!(download_file_name(None, "x", day()), "-x-2024-01-01.png");
}

#[test]
fn decode_rejects_garbage() {
    let err = decode_upload(b"not an image").unwrap_err();
    assert!(err.to_string().contains("decode image from memory"), "{err}");
}

#[test]
fn decode_reads_png_bytes() {
    let mut buf = Vec::new();
    photo(7, 5)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    assert_eq!(decode_upload(&buf).unwrap().dimensions(), (7, 5));
}

#[test]
fn output_matches_backdrop_size_and_png() {
    let fonts = FontPair::builtin().unwrap();
    let req = CardRequest::new("北京", day());
    let card = compose(&photo(160, 120), &fast_params(), &req, &fonts).unwrap();

    assert_eq!(card.image.dimensions(), (200, 150));
    assert!(card.warnings.is_empty());
    assert!(card.text_boxes.is_none());

    let decoded = image::load_from_memory(&card.png).unwrap().to_rgba8();
    assert_eq!(decoded, card.image);
}

#[test]
fn foreground_lands_at_placement() {
    let fonts = FontPair::builtin().unwrap();
    let src = photo(160, 120);
    let req = CardRequest::new("", day());
    let card = compose(&src, &fast_params(), &req, &fonts).unwrap();

    let p = Placement::compute((200, 150), (160, 120), 1.0, 2.0);
    let (cx, cy) = (80u32, 60u32);
    let at = card
        .image
        .get_pixel(p.foreground.x as u32 + cx, p.foreground.y as u32 + cy);
    assert_eq!(at.0, src.to_rgba8().get_pixel(cx, cy).0);
}

#[test]
fn backdrop_is_darkened_unmasked_photo() {
    let fonts = FontPair::builtin().unwrap();
    let src = DynamicImage::ImageRgba8(Layer::from_pixel(200, 200, Rgba([200, 200, 200, 255])));
    let params = RenderParams {
        corner_radius: 20.0,
        scale_factor: 1.0,
        blur_radius: 1.0,
        shadow_opacity: 0.0,
        ..RenderParams::default()
    };
    let card = compose(&src, &params, &CardRequest::new("", day()), &fonts).unwrap();

    // Foreground covers the whole canvas; its rounded corners reveal the backdrop.
    assert_eq!(card.image.dimensions(), (200, 200));
    for (x, y) in [(0, 0), (199, 0), (0, 199), (199, 199)] {
        let p = card.image.get_pixel(x, y).0;
        assert_eq!(p[3], 255);
        for c in &p[..3] {
            assert!((i32::from(*c) - 80).abs() <= 1, "({x},{y}) {p:?}");
        }
    }
    assert_eq!(card.image.get_pixel(100, 100).0, [200, 200, 200, 255]);
}

#[test]
fn species_adds_watermark_and_qr() {
    let fonts = FontPair::builtin().unwrap();
    let req = CardRequest::new("北京", day()).with_species(magpie("http://example.com/x"));
    let params = fast_params();

    let plain = compose(&photo(400, 400), &params, &CardRequest::new("北京", day()), &fonts)
        .unwrap();
    let card = compose(&photo(400, 400), &params, &req, &fonts).unwrap();

    assert!(card.warnings.is_empty(), "{:?}", card.warnings);
    let boxes = card.text_boxes.unwrap();
    assert!(boxes.iter().all(|b| b.top >= 250 && b.width() > 0));

    // QR quiet zone is pure white in the bottom-right corner.
    let size = qr_size((500, 500));
    let o = qr_origin((500, 500), size);
    assert_eq!(card.image.get_pixel(o.x as u32 + 1, o.y as u32 + 1).0, [255; 4]);
    assert_ne!(plain.image, card.image);
}

#[test]
fn qr_failure_is_a_warning() {
    let fonts = FontPair::builtin().unwrap();
    let req = CardRequest::new("北京", day()).with_species(magpie(""));
    let card = compose(&photo(200, 200), &fast_params(), &req, &fonts).unwrap();
    assert_eq!(card.warnings.len(), 1);
    assert!(card.warnings[0].contains("QR"));
    assert!(card.text_boxes.is_some());
}

#[test]
fn qr_toggle_off_skips_code() {
    let fonts = FontPair::builtin().unwrap();
    let req = CardRequest::new("北京", day()).with_species(magpie(""));
    let params = RenderParams {
        include_qr: false,
        ..fast_params()
    };
    let card = compose(&photo(200, 200), &params, &req, &fonts).unwrap();
    assert!(card.warnings.is_empty());
}

#[test]
fn invalid_params_are_rejected() {
    let fonts = FontPair::builtin().unwrap();
    let params = RenderParams {
        scale_factor: 3.0,
        ..RenderParams::default()
    };
    let err = compose(&photo(10, 10), &params, &CardRequest::new("", day()), &fonts).unwrap_err();
    assert!(matches!(err, BirdcardError::Validation(_)));
}

#[test]
fn compose_is_deterministic() {
    let fonts = FontPair::builtin().unwrap();
    let req = CardRequest::new("北京", day()).with_species(magpie("http://example.com/x"));
    let a = compose(&photo(120, 90), &fast_params(), &req, &fonts).unwrap();
    let b = compose(&photo(120, 90), &fast_params(), &req, &fonts).unwrap();
    assert_eq!(a.png, b.png);
}
