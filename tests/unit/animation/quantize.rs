use std::collections::HashSet;

use super::*;
use image::Rgba;

fn gradient(w: u32, h: u32, shift: u8) -> RgbaImage {
    RgbaImage::from_fn(w, h, |x, y| {
        Rgba([
            (x * 255 / w.max(1)) as u8,
            (y * 255 / h.max(1)) as u8,
            shift.wrapping_add((x * 7 + y * 3) as u8),
            255,
        ])
    })
}

#[test]
fn few_colors_are_kept_exactly() {
    let mut img = RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 255]));
    img.put_pixel(0, 0, Rgba([0, 0, 255, 255]));
    let q = quantize_frames(&[img.clone()], 16, 0.02).unwrap();
    assert_eq!(q.palette.len(), 2);

    let blue = q.palette.nearest([0, 0, 255]);
    let red = q.palette.nearest([255, 0, 0]);
    assert_eq!(q.frames[0][0], blue);
    assert!(q.frames[0][1..].iter().all(|&i| i == red));
}

#[test]
fn palette_cap_is_honored_jointly_across_frames() {
    let frames: Vec<_> = (0..4).map(|i| gradient(48, 24, i * 60)).collect();
    for cap in [2usize, 7, 16, 64, 256] {
        let q = quantize_frames(&frames, cap, 0.02).unwrap();
        assert!(q.palette.len() <= cap, "cap {cap}: {}", q.palette.len());
        assert_eq!(q.frames.len(), 4);
        let used: HashSet<u8> = q.frames.iter().flatten().copied().collect();
        assert!(used.len() <= cap);
        assert!(used.iter().all(|&i| usize::from(i) < q.palette.len()));
        assert!(q.frames.iter().all(|f| f.len() == 48 * 24));
    }
}

#[test]
fn palette_is_deterministic() {
    let frames: Vec<_> = (0..3).map(|i| gradient(32, 16, i * 40)).collect();
    let a = quantize_frames(&frames, 12, 0.02).unwrap();
    let b = quantize_frames(&frames, 12, 0.02).unwrap();
    assert_eq!(a.palette, b.palette);
    assert_eq!(a.frames, b.frames);
}

#[test]
fn dithering_mixes_entries_for_midtones() {
    let palette = Palette {
        colors: vec![[0, 0, 0], [255, 255, 255]],
    };
    let grey = RgbaImage::from_pixel(16, 16, Rgba([128, 128, 128, 255]));
    let idx = dither_frame(&grey, &palette, 0.02);
    let whites = idx.iter().filter(|&&i| i == 1).count();
    // Roughly half the pixels end up white.
    assert!((96..=160).contains(&whites), "{whites}");
}

#[test]
fn near_matches_snap_without_spreading_error() {
    let palette = Palette {
        colors: vec![[100, 100, 100], [0, 0, 0], [255, 255, 255]],
    };
    let img = RgbaImage::from_pixel(8, 8, Rgba([103, 103, 103, 255]));
    let idx = dither_frame(&img, &palette, 0.02);
    assert!(idx.iter().all(|&i| i == 0));
}

#[test]
fn rejects_mismatched_or_empty_input() {
    assert!(quantize_frames(&[], 16, 0.02).is_err());
    let a = RgbaImage::new(2, 2);
    let b = RgbaImage::new(3, 2);
    assert!(quantize_frames(&[a.clone(), b], 16, 0.02).is_err());
    assert!(quantize_frames(&[a], 0, 0.02).is_err());
}
