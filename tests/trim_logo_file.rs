// tests/trim_logo_file.rs
use gazette::infrastructure::imaging::{
    Padding, TrimError, TrimOptions, encode_png, process_file,
};
use image::{Rgba, RgbaImage};

fn source_logo() -> RgbaImage {
    let mut img = RgbaImage::new(40, 30);
    for x in 10..25 {
        for y in 5..12 {
            img.put_pixel(x, y, Rgba([20, 40, 200, 255]));
        }
    }
    img
}

fn options() -> TrimOptions {
    TrimOptions {
        threshold: 10,
        padding: Padding {
            top: 2,
            right: 4,
            bottom: 8,
            left: 4,
        },
    }
}

#[test]
fn writes_trimmed_and_padded_png() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("logo-source.png");
    let output = dir.path().join("public/nested/logo.png");
    std::fs::write(&input, encode_png(&source_logo()).unwrap()).unwrap();

    let dims = process_file(&input, &output, &options()).unwrap();
    assert_eq!(dims, (15 + 8, 7 + 10));

    let written = image::open(&output).unwrap().to_rgba8();
    assert_eq!(written.dimensions(), dims);
    assert_eq!(written.get_pixel(4, 2), &Rgba([20, 40, 200, 255]));
    assert_eq!(written.get_pixel(0, 0)[3], 0);
    assert_eq!(written.get_pixel(22, 16)[3], 0);
}

#[test]
fn repeated_runs_produce_identical_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("logo-source.png");
    let first = dir.path().join("first.png");
    let second = dir.path().join("second.png");
    std::fs::write(&input, encode_png(&source_logo()).unwrap()).unwrap();

    process_file(&input, &first, &options()).unwrap();
    process_file(&input, &second, &options()).unwrap();
    assert_eq!(std::fs::read(first).unwrap(), std::fs::read(second).unwrap());
}

#[test]
fn missing_input_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = process_file(
        &dir.path().join("absent.png"),
        &dir.path().join("out.png"),
        &TrimOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, TrimError::Read { .. }));
}

#[test]
fn non_png_input_is_an_image_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("logo-source.png");
    std::fs::write(&input, b"definitely not a png").unwrap();

    let err = process_file(
        &input,
        &dir.path().join("out.png"),
        &TrimOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, TrimError::Image(_)));
}
