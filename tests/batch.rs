//! End-to-end batch conversion scenarios over real temp directories.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use stack2jxl::batch::{BatchDriver, BatchOptions};
use stack2jxl::image_pipeline::dax::{DAX_FRAME_HEIGHT, DAX_FRAME_WIDTH};

const JXL_CONTAINER: [u8; 12] = [
    0x00, 0x00, 0x00, 0x0C, 0x4A, 0x58, 0x4C, 0x20, 0x0D, 0x0A, 0x87, 0x0A,
];

fn looks_like_jxl(path: &Path) -> bool {
    let bytes = fs::read(path).unwrap();
    (bytes.len() >= 2 && bytes[0] == 0xFF && bytes[1] == 0x0A)
        || (bytes.len() >= 12 && bytes[..12] == JXL_CONTAINER)
}

fn write_tiff_stack(path: &Path, pages: usize, width: u32, height: u32) {
    let file = fs::File::create(path).unwrap();
    let mut encoder = tiff::encoder::TiffEncoder::new(file).unwrap();
    for page in 0..pages {
        let data: Vec<u16> = (0..width * height)
            .map(|i| (i as usize * 31 + page * 7) as u16)
            .collect();
        encoder
            .write_image::<tiff::encoder::colortype::Gray16>(width, height, &data)
            .unwrap();
    }
}

fn write_dax_stack(dir: &Path, stem: &str, frames: usize) {
    let samples = frames * DAX_FRAME_WIDTH * DAX_FRAME_HEIGHT;
    let mut bytes = Vec::with_capacity(samples * 2);
    for i in 0..samples {
        bytes.extend_from_slice(&((i % 4096) as u16).to_be_bytes());
    }
    fs::write(dir.join(format!("{stem}.dax")), bytes).unwrap();
    fs::write(
        dir.join(format!("{stem}.inf")),
        format!("number of frames = {frames}\nframe size = 2048 x 2048\n"),
    )
    .unwrap();
}

fn options(quality: u8, remove: bool) -> BatchOptions {
    BatchOptions {
        quality,
        remove,
        jobs: 2,
    }
}

#[test]
fn converts_directory_without_removing_originals() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    write_tiff_stack(&root.join("a.tif"), 100, 50, 50);
    write_dax_stack(root, "b", 2);
    fs::write(root.join("c.txt"), b"irrelevant").unwrap();

    let summary = BatchDriver::new(options(90, false)).run(root).unwrap();

    assert_eq!(summary.total, 2);
    assert_eq!(summary.converted, 2);
    assert_eq!(summary.failed, 0);

    assert!(looks_like_jxl(&root.join("a.jxl")));
    assert!(looks_like_jxl(&root.join("b.jxl")));
    assert!(root.join("a.tif").exists());
    assert!(root.join("b.dax").exists());
    assert!(root.join("b.inf").exists());
    assert!(root.join("c.txt").exists());
    assert!(!root.join("c.jxl").exists());
}

#[test]
fn remove_flag_deletes_originals_but_keeps_sidecar() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    write_tiff_stack(&root.join("a.tif"), 4, 32, 32);
    write_dax_stack(root, "b", 1);

    let summary = BatchDriver::new(options(90, true)).run(root).unwrap();

    assert_eq!(summary.total, 2);
    assert_eq!(summary.failed, 0);
    assert!(!root.join("a.tif").exists());
    assert!(!root.join("b.dax").exists());
    assert!(root.join("b.inf").exists());
    assert!(looks_like_jxl(&root.join("a.jxl")));
    assert!(looks_like_jxl(&root.join("b.jxl")));
}

#[test]
fn failed_conversion_keeps_original_and_is_counted() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    fs::write(root.join("broken.tif"), b"not really a tiff").unwrap();
    write_tiff_stack(&root.join("good.tif"), 2, 16, 16);

    let summary = BatchDriver::new(options(98, true)).run(root).unwrap();

    assert_eq!(summary.total, 2);
    assert_eq!(summary.converted, 1);
    assert_eq!(summary.failed, 1);

    // The broken file survives even with --remove, the good one is gone
    assert!(root.join("broken.tif").exists());
    assert!(!root.join("broken.jxl").exists());
    assert!(!root.join("good.tif").exists());
    assert!(looks_like_jxl(&root.join("good.jxl")));
}

#[test]
fn truncated_dax_is_isolated_from_the_rest_of_the_batch() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    // Sidecar promises two frames, file holds one
    write_dax_stack(root, "short", 1);
    fs::write(
        root.join("short.inf"),
        "number of frames = 2\nframe size = 2048 x 2048\n",
    )
    .unwrap();
    write_tiff_stack(&root.join("fine.tif"), 2, 16, 16);

    let summary = BatchDriver::new(options(98, false)).run(root).unwrap();

    assert_eq!(summary.failed, 1);
    assert_eq!(summary.converted, 1);
    assert!(root.join("short.dax").exists());
    assert!(!root.join("short.jxl").exists());
    assert!(looks_like_jxl(&root.join("fine.jxl")));
}
