//! Human-readable color readouts

use chroma_color::{Cmyk, ColorSpace, Hsv, Lab, Rgb, Yuv};
use chroma_core::ColorModel;

fn read_as<C: ColorSpace>(rgb: Rgb) -> String {
    C::from_rgb(rgb).to_string()
}

/// Render `rgb` as read in `model`, e.g. `HSV(0°, 100%, 100%)`
pub fn format(rgb: Rgb, model: ColorModel) -> String {
    match model {
        ColorModel::Rgb => read_as::<Rgb>(rgb),
        ColorModel::Hsv => read_as::<Hsv>(rgb),
        ColorModel::Cmyk => read_as::<Cmyk>(rgb),
        ColorModel::Lab => read_as::<Lab>(rgb),
        ColorModel::Yuv => read_as::<Yuv>(rgb),
    }
}

/// Like [`format`], taking the model by name. Unknown names read as RGB.
pub fn format_named(rgb: Rgb, model: &str) -> String {
    format(rgb, model.parse().unwrap_or(ColorModel::Rgb))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_model() {
        let red = Rgb::new(255, 0, 0);
        assert_eq!(format(red, ColorModel::Rgb), "RGB(255, 0, 0)");
        assert_eq!(format(red, ColorModel::Hsv), "HSV(0°, 100%, 100%)");
        assert_eq!(format(red, ColorModel::Cmyk), "CMYK(0%, 100%, 100%, 0%)");
        assert_eq!(format(red, ColorModel::Lab), "LAB(53, 80, 67)");
        assert_eq!(format(red, ColorModel::Yuv), "YUV(76, 90, 284)");
    }

    #[test]
    fn test_named_fallback() {
        let rgb = Rgb::new(1, 2, 3);
        assert_eq!(format_named(rgb, "hsv"), format(rgb, ColorModel::Hsv));
        assert_eq!(format_named(rgb, "XYZ"), "RGB(1, 2, 3)");
        assert_eq!(format_named(rgb, ""), "RGB(1, 2, 3)");
    }
}
