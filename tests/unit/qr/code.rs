use super::*;

#[test]
fn same_input_same_pixels() {
    let a = generate_qr("http://example.com/x", 187).unwrap();
    let b = generate_qr("http://example.com/x", 187).unwrap();
    assert_eq!(a.dimensions(), (187, 187));
    assert_eq!(a, b);
}

#[test]
fn different_urls_differ() {
    let a = generate_qr("http://example.com/x", 200).unwrap();
    let b = generate_qr("http://example.com/y", 200).unwrap();
    assert_ne!(a, b);
}

#[test]
fn black_on_white_with_quiet_zone() {
    let img = generate_qr("http://example.com/x", 330).unwrap();
    assert!(
        img.pixels()
            .all(|p| p.0 == [0, 0, 0, 255] || p.0 == [255, 255, 255, 255])
    );
    // Corners sit in the quiet zone.
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
    assert_eq!(img.get_pixel(329, 329).0, [255, 255, 255, 255]);
    assert!(img.pixels().any(|p| p.0 == [0, 0, 0, 255]));
}

#[test]
fn native_size_skips_resampling() {
    let code = QrCode::with_error_correction_level(b"http://example.com/x", EcLevel::H).unwrap();
    let side = (code.width() as u32 + 2 * QUIET_ZONE) * MODULE_PX;
    let img = generate_qr("http://example.com/x", side).unwrap();
    assert_eq!(img.dimensions(), (side, side));
    // Top-left finder pattern starts right after the quiet zone.
    let edge = QUIET_ZONE * MODULE_PX;
    assert_eq!(img.get_pixel(edge, edge).0, [0, 0, 0, 255]);
    assert_eq!(img.get_pixel(edge - 1, edge).0, [255, 255, 255, 255]);
}

#[test]
fn empty_data_is_an_error() {
    assert!(matches!(generate_qr("", 100), Err(BirdcardError::Qr(_))));
    assert!(matches!(generate_qr("   ", 100), Err(BirdcardError::Qr(_))));
}

#[test]
fn zero_size_is_an_error() {
    assert!(generate_qr("http://example.com/x", 0).is_err());
}

#[test]
fn oversized_data_is_an_error() {
    let long = "x".repeat(4000);
    assert!(matches!(generate_qr(&long, 100), Err(BirdcardError::Qr(_))));
}
