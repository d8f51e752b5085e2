//! Round-trip and reference-value tests for the model converters

use chroma::*;

/// Largest per-channel difference between two colors
fn drift(a: Rgb, b: Rgb) -> u8 {
    a.r.abs_diff(b.r).max(a.g.abs_diff(b.g)).max(a.b.abs_diff(b.b))
}

fn grid(start: u8, step: usize) -> impl Iterator<Item = Rgb> {
    let values: Vec<u8> = (start..=255).step_by(step).collect();
    let mut colors = Vec::with_capacity(values.len().pow(3));
    for &r in &values {
        for &g in &values {
            for &b in &values {
                colors.push(Rgb::new(r, g, b));
            }
        }
    }
    colors.into_iter()
}

fn worst_roundtrip<C: ColorSpace>(colors: impl Iterator<Item = Rgb>) -> (u8, Rgb) {
    colors
        .map(|rgb| (drift(rgb, C::from_rgb(rgb).to_rgb()), rgb))
        .max_by_key(|(d, _)| *d)
        .unwrap_or((0, Rgb::BLACK))
}

#[test]
fn test_cmyk_roundtrip_within_two() {
    let (worst, at) = worst_roundtrip::<Cmyk>(grid(0, 5));
    assert!(worst <= 2, "CMYK drift {worst} at {at}");
}

#[test]
fn test_yuv_roundtrip_within_two() {
    let (worst, at) = worst_roundtrip::<Yuv>(grid(0, 5));
    assert!(worst <= 2, "YUV drift {worst} at {at}");
}

#[test]
fn test_hsv_roundtrip() {
    // Rounding S and V independently can compound to 3 units on a handful
    // of dark, saturated colors; everything else stays within 2.
    let colors: Vec<Rgb> = grid(0, 5).collect();
    let (worst, at) = worst_roundtrip::<Hsv>(colors.iter().copied());
    assert!(worst <= 3, "HSV drift {worst} at {at}");

    let over_two = colors
        .iter()
        .filter(|&&rgb| drift(rgb, hsv_to_rgb(rgb_to_hsv(rgb))) > 2)
        .count();
    assert!(
        over_two * 100 < colors.len(),
        "{over_two} of {} colors drift more than 2",
        colors.len()
    );
}

#[test]
fn test_lab_roundtrip_grays() {
    for v in 0..=255u8 {
        let gray = Rgb::new(v, v, v);
        let back = lab_to_rgb(rgb_to_lab(gray));
        assert!(drift(gray, back) <= 3, "{gray} -> {back}");
    }
}

#[test]
fn test_lab_roundtrip_light_colors() {
    // Integer L*a*b* is coarse where the sRGB curve is steep, so chromatic
    // colors are only checked away from the dark end.
    let (worst, at) = worst_roundtrip::<Lab>(grid(64, 8));
    assert!(worst <= 6, "LAB drift {worst} at {at}");
}

#[test]
fn test_hsv_reference_values() {
    assert_eq!(rgb_to_hsv(Rgb::new(0, 0, 0)), Hsv::new(0, 0, 0));
    assert_eq!(rgb_to_hsv(Rgb::new(255, 0, 0)), Hsv::new(0, 100, 100));
    assert_eq!(rgb_to_hsv(Rgb::new(0, 255, 0)), Hsv::new(120, 100, 100));
}

#[test]
fn test_cmyk_reference_values() {
    assert_eq!(rgb_to_cmyk(Rgb::new(255, 255, 255)), Cmyk::new(0, 0, 0, 0));
    assert_eq!(rgb_to_cmyk(Rgb::new(0, 0, 0)), Cmyk::new(0, 0, 0, 100));
}

#[test]
fn test_yuv_reference_values() {
    let white = rgb_to_yuv(Rgb::new(255, 255, 255));
    assert!((white.y - 255).abs() <= 1);
    assert!((white.u - 128).abs() <= 1);
    assert!((white.v - 128).abs() <= 1);
}

#[test]
fn test_every_result_is_in_gamut_and_deterministic() {
    for rgb in grid(3, 36) {
        for model in ColorModel::ALL {
            let a = format(rgb, model);
            let b = format(rgb, model);
            assert_eq!(a, b);
        }
        let hsv = rgb_to_hsv(rgb);
        assert!((0..360).contains(&hsv.h));
        assert!((0..=100).contains(&hsv.s) && (0..=100).contains(&hsv.v));

        let lab = rgb_to_lab(rgb);
        assert!((0..=100).contains(&lab.l));
        assert!((-128..=127).contains(&lab.a) && (-128..=127).contains(&lab.b));
    }
}
