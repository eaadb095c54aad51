use super::*;

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    assert_eq!(over(dst, [255, 255, 255, 0]), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    assert_eq!(over([0, 0, 0, 255], [255, 0, 0, 255]), [255, 0, 0, 255]);
}

#[test]
fn over_half_alpha_on_opaque_blends_and_stays_opaque() {
    let out = over([0, 0, 0, 255], [255, 255, 255, 128]);
    assert_eq!(out[3], 255);
    for c in &out[..3] {
        assert!((i16::from(*c) - 128).abs() <= 1, "{out:?}");
    }
}

#[test]
fn over_dst_transparent_returns_src() {
    let src = [100, 110, 120, 200];
    let out = over([0, 0, 0, 0], src);
    for i in 0..4 {
        assert!((i16::from(out[i]) - i16::from(src[i])).abs() <= 1, "{out:?}");
    }
}

#[test]
fn flatten_on_opaque_background_is_opaque() {
    let mut img = RgbaImage::new(2, 1);
    img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
    img.put_pixel(1, 0, Rgba([0, 255, 0, 0]));
    let flat = flatten(&img, [0, 0, 255, 255]);
    assert_eq!(flat.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(flat.get_pixel(1, 0).0, [0, 0, 255, 255]);
}

#[test]
fn over_at_clips_to_destination() {
    let mut dst = RgbaImage::from_pixel(3, 3, Rgba([0, 0, 0, 255]));
    let src = RgbaImage::from_pixel(2, 2, Rgba([9, 9, 9, 255]));
    over_at(&mut dst, &src, 2, -1);
    assert_eq!(dst.get_pixel(2, 0).0, [9, 9, 9, 255]);
    assert_eq!(dst.get_pixel(2, 1).0, [0, 0, 0, 255]);
    assert_eq!(dst.get_pixel(1, 0).0, [0, 0, 0, 255]);
}
