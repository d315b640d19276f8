use image::Rgba;

use super::*;
use crate::inspect::read_ico_entries;

fn write_png(path: &Path, size: u32, color: [u8; 4]) {
    RgbaImage::from_pixel(size, size, Rgba(color))
        .save(path)
        .unwrap();
}

#[test]
fn render_frames_keeps_requested_order_and_sizes() {
    let base = RgbaImage::from_pixel(64, 64, Rgba([10, 20, 30, 255]));
    let frames = render_frames(&base, &[64, 48, 16]);
    let dims: Vec<(u32, u32)> = frames.iter().map(|f| f.dimensions()).collect();
    assert_eq!(dims, vec![(64, 64), (48, 48), (16, 16)]);
    assert_eq!(frames[0], base);
}

#[test]
fn render_frames_of_flat_color_stays_flat() {
    let base = RgbaImage::from_pixel(128, 128, Rgba([200, 40, 40, 255]));
    let frames = render_frames(&base, &[32]);
    assert_eq!(*frames[0].get_pixel(16, 16), Rgba([200, 40, 40, 255]));
}

#[test]
fn load_base_normalises_to_rgba() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gray.png");
    image::GrayImage::from_pixel(4, 4, image::Luma([90]))
        .save(&path)
        .unwrap();

    let rgba = load_base(&path).unwrap();
    assert_eq!(rgba.dimensions(), (4, 4));
    assert_eq!(*rgba.get_pixel(0, 0), Rgba([90, 90, 90, 255]));
}

#[test]
fn load_base_reports_decode_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app-32.png");
    std::fs::write(&path, b"definitely not a png").unwrap();

    let err = load_base(&path).unwrap_err();
    assert!(matches!(err, AssemblerError::Decode { .. }));
    assert!(err.to_string().contains("app-32.png"));
}

#[test]
fn write_ico_rejects_empty_frame_list() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("empty.ico");
    assert!(write_ico(&[], &out).is_err());
    assert!(!out.exists());
}

#[test]
fn assemble_without_inputs_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let layout = IconLayout::for_dir(dir.path());

    let err = assemble(&layout).unwrap_err();
    assert!(err.is_no_inputs());
    assert!(!layout.output.exists());
}

#[test]
fn assemble_embeds_available_sizes_largest_first() {
    let dir = tempfile::tempdir().unwrap();
    let layout = IconLayout::for_dir(dir.path());
    write_png(&layout.candidate_path(64), 64, [0, 255, 0, 255]);
    write_png(&layout.candidate_path(32), 32, [0, 0, 255, 255]);

    let report = assemble(&layout).unwrap();
    assert_eq!(report.base, layout.candidate_path(64));
    assert_eq!(report.sizes, vec![(64, 64), (32, 32)]);
    assert_eq!(report.output, layout.output);

    let sizes: Vec<(u32, u32)> = read_ico_entries(&layout.output)
        .unwrap()
        .iter()
        .map(|e| e.size())
        .collect();
    assert_eq!(sizes, vec![(64, 64), (32, 32)]);
}

#[test]
fn assemble_rejects_invalid_layout_before_scanning() {
    let dir = tempfile::tempdir().unwrap();
    let mut layout = IconLayout::for_dir(dir.path());
    layout.sizes = vec![512];
    write_png(&layout.candidate_path(512), 8, [0, 0, 0, 255]);

    let err = assemble(&layout).unwrap_err();
    assert!(matches!(err, AssemblerError::Config(_)));
    assert!(!layout.output.exists());
}

#[test]
fn assemble_creates_missing_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let mut layout = IconLayout::for_dir(dir.path());
    layout.output = dir.path().join("dist").join("win").join("app.ico");
    write_png(&layout.candidate_path(16), 16, [255, 255, 255, 255]);

    let report = assemble(&layout).unwrap();
    assert_eq!(report.sizes, vec![(16, 16)]);
    assert!(layout.output.is_file());
}
