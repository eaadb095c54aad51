use super::*;
use crate::animation::quantize::Palette;

fn anim(frames: Vec<Vec<u8>>, colors: Vec<[u8; 3]>) -> QuantizedAnimation {
    QuantizedAnimation {
        width: 4,
        height: 2,
        palette: Palette { colors },
        frames,
    }
}

#[test]
fn first_frame_is_whole_and_later_frames_are_cropped() {
    let f0 = vec![0; 8];
    let mut f1 = f0.clone();
    f1[5] = 1; // (1, 1)
    f1[6] = 1; // (2, 1)
    let a = anim(vec![f0.clone(), f1], vec![[0, 0, 0], [255, 255, 255]]);

    let out = optimize_deltas(&a, &[10, 20], 0.02);
    assert_eq!(out.len(), 2);
    assert_eq!((out[0].left, out[0].top, out[0].width, out[0].height), (0, 0, 4, 2));
    assert_eq!(out[0].indices, f0);
    assert_eq!(out[0].transparent, None);

    assert_eq!((out[1].left, out[1].top, out[1].width, out[1].height), (1, 1, 2, 1));
    assert_eq!(out[1].indices, vec![1, 1]);
    assert_eq!(out[1].transparent, Some(2));
    assert_eq!(out[1].delay_cs, 20);
}

#[test]
fn unchanged_pixels_inside_box_become_transparent() {
    let f0 = vec![0; 8];
    let mut f1 = f0.clone();
    f1[0] = 1;
    f1[7] = 1;
    let a = anim(vec![f0, f1], vec![[0, 0, 0], [255, 255, 255]]);
    let out = optimize_deltas(&a, &[1, 1], 0.0);
    assert_eq!(out[1].indices, vec![1, 2, 2, 2, 2, 2, 2, 1]);
}

#[test]
fn identical_frames_fold_into_previous_delay() {
    let f0 = vec![0; 8];
    let a = anim(vec![f0.clone(), f0.clone(), f0], vec![[0, 0, 0], [255, 255, 255]]);
    let out = optimize_deltas(&a, &[5, 7, 9], 0.02);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].delay_cs, 21);
}

#[test]
fn near_identical_colors_are_not_deltas() {
    let f0 = vec![0; 8];
    let f1 = vec![1; 8];
    let a = anim(vec![f0, f1], vec![[100, 100, 100], [102, 101, 100]]);
    let out = optimize_deltas(&a, &[5, 5], 0.02);
    assert_eq!(out.len(), 1);
}

#[test]
fn full_palette_has_no_transparent_index() {
    let colors: Vec<[u8; 3]> = (0..=255u8).map(|i| [i, i, i]).collect();
    let f0 = vec![0; 8];
    let mut f1 = f0.clone();
    f1[0] = 255;
    f1[2] = 255;
    let a = anim(vec![f0, f1], colors);
    let out = optimize_deltas(&a, &[1, 1], 0.02);
    assert_eq!(out[1].transparent, None);
    assert_eq!(out[1].indices, vec![255, 0, 255]);
    assert_eq!(transparent_index(255), Some(255));
    assert_eq!(transparent_index(256), None);
}

#[test]
fn replaying_deltas_reconstructs_every_frame() {
    let frames = vec![
        vec![0, 0, 0, 0, 0, 0, 0, 0],
        vec![0, 1, 1, 0, 0, 0, 0, 0],
        vec![0, 1, 1, 0, 0, 0, 0, 2],
        vec![2, 2, 2, 2, 2, 2, 2, 2],
    ];
    let a = anim(frames.clone(), vec![[0, 0, 0], [255, 0, 0], [0, 0, 255]]);
    let out = optimize_deltas(&a, &[1, 1, 1, 1], 0.0);

    let mut screen = vec![0u8; 8];
    for (frame, expected) in out.iter().zip(&frames) {
        for dy in 0..frame.height {
            for dx in 0..frame.width {
                let v = frame.indices[(dy * frame.width + dx) as usize];
                if Some(v) == frame.transparent {
                    continue;
                }
                screen[((frame.top + dy) * 4 + frame.left + dx) as usize] = v;
            }
        }
        assert_eq!(&screen, expected);
    }
}
