//! Per-channel adjustments expressed in a single color model
//!
//! An [`Adjustment`] pairs a model with a delta for each of its channels. To
//! apply it, a color is read in that model, shifted, brought back into the
//! model's valid range (hue wraps, everything else clamps) and converted back
//! to RGB.
//!
//! A delta of zero leaves the color untouched rather than performing the
//! lossy round trip, so "no adjustment" and "zero adjustment" always agree.

use chroma_color::{Cmyk, ColorSpace, Hsv, Lab, Rgb, Yuv};
use chroma_core::{ChromaError, ChromaResult, ColorModel};

/// Delta for the red, green and blue channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RgbDelta {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

/// Delta for hue (degrees), saturation and value (percent points)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HsvDelta {
    pub h: i32,
    pub s: i32,
    pub v: i32,
}

/// Delta for each ink, in percent points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CmykDelta {
    pub c: i32,
    pub m: i32,
    pub y: i32,
    pub k: i32,
}

/// Delta for lightness and the two opponent axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LabDelta {
    pub l: i32,
    pub a: i32,
    pub b: i32,
}

/// Delta for luma and the two chroma channels, in byte units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct YuvDelta {
    pub y: i32,
    pub u: i32,
    pub v: i32,
}

/// A channel delta tagged with the model it is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Adjustment {
    Rgb(RgbDelta),
    Hsv(HsvDelta),
    Cmyk(CmykDelta),
    Lab(LabDelta),
    Yuv(YuvDelta),
}

impl Adjustment {
    /// The identity adjustment for `model`
    pub fn zero(model: ColorModel) -> Self {
        match model {
            ColorModel::Rgb => Adjustment::Rgb(RgbDelta::default()),
            ColorModel::Hsv => Adjustment::Hsv(HsvDelta::default()),
            ColorModel::Cmyk => Adjustment::Cmyk(CmykDelta::default()),
            ColorModel::Lab => Adjustment::Lab(LabDelta::default()),
            ColorModel::Yuv => Adjustment::Yuv(YuvDelta::default()),
        }
    }

    /// Build from deltas listed in the model's channel order.
    ///
    /// Missing trailing channels count as zero.
    pub fn from_deltas(model: ColorModel, deltas: &[i32]) -> ChromaResult<Self> {
        if deltas.len() > model.channel_count() {
            return Err(ChromaError::InvalidParameter(format!(
                "{model} takes {} channel deltas, got {}",
                model.channel_count(),
                deltas.len()
            )));
        }

        let mut adjustment = Self::zero(model);
        for (name, &delta) in model.channels().iter().zip(deltas) {
            adjustment.set_channel(name, delta)?;
        }
        Ok(adjustment)
    }

    pub fn model(&self) -> ColorModel {
        match self {
            Adjustment::Rgb(_) => ColorModel::Rgb,
            Adjustment::Hsv(_) => ColorModel::Hsv,
            Adjustment::Cmyk(_) => ColorModel::Cmyk,
            Adjustment::Lab(_) => ColorModel::Lab,
            Adjustment::Yuv(_) => ColorModel::Yuv,
        }
    }

    /// Channel deltas in the model's channel order
    pub fn deltas(&self) -> Vec<i32> {
        match *self {
            Adjustment::Rgb(d) => vec![d.r, d.g, d.b],
            Adjustment::Hsv(d) => vec![d.h, d.s, d.v],
            Adjustment::Cmyk(d) => vec![d.c, d.m, d.y, d.k],
            Adjustment::Lab(d) => vec![d.l, d.a, d.b],
            Adjustment::Yuv(d) => vec![d.y, d.u, d.v],
        }
    }

    /// Set one channel by its short name (see [`ColorModel::channels`])
    pub fn set_channel(&mut self, name: &str, delta: i32) -> ChromaResult<()> {
        let slot = match (self, name) {
            (Adjustment::Rgb(d), "r") => &mut d.r,
            (Adjustment::Rgb(d), "g") => &mut d.g,
            (Adjustment::Rgb(d), "b") => &mut d.b,
            (Adjustment::Hsv(d), "h") => &mut d.h,
            (Adjustment::Hsv(d), "s") => &mut d.s,
            (Adjustment::Hsv(d), "v") => &mut d.v,
            (Adjustment::Cmyk(d), "c") => &mut d.c,
            (Adjustment::Cmyk(d), "m") => &mut d.m,
            (Adjustment::Cmyk(d), "y") => &mut d.y,
            (Adjustment::Cmyk(d), "k") => &mut d.k,
            (Adjustment::Lab(d), "l") => &mut d.l,
            (Adjustment::Lab(d), "a") => &mut d.a,
            (Adjustment::Lab(d), "b") => &mut d.b,
            (Adjustment::Yuv(d), "y") => &mut d.y,
            (Adjustment::Yuv(d), "u") => &mut d.u,
            (Adjustment::Yuv(d), "v") => &mut d.v,
            (adjustment, _) => {
                return Err(ChromaError::InvalidParameter(format!(
                    "{} has no channel {name:?}",
                    adjustment.model()
                )))
            }
        };
        *slot = delta;
        Ok(())
    }

    pub fn is_zero(&self) -> bool {
        self.deltas().iter().all(|&d| d == 0)
    }

    /// Clamp every delta into the range a user control offers for it
    pub fn clamped_to_input_range(self) -> Self {
        let model = self.model();
        let clamped: Vec<i32> = self
            .deltas()
            .iter()
            .zip(model.delta_limits())
            .map(|(&delta, &limit)| delta.clamp(-limit, limit))
            .collect();

        // same model and channel count, cannot fail
        Self::from_deltas(model, &clamped).unwrap_or(self)
    }

    /// Shift `rgb` by this delta inside the adjustment's model
    pub fn apply(&self, rgb: Rgb) -> Rgb {
        if self.is_zero() {
            return rgb;
        }

        match *self {
            Adjustment::Rgb(d) => {
                let shift = |ch: u8, delta: i32| {
                    (ch as i32).saturating_add(delta).clamp(0, 255) as u8
                };
                Rgb::new(shift(rgb.r, d.r), shift(rgb.g, d.g), shift(rgb.b, d.b))
            }
            Adjustment::Hsv(d) => shift_in(rgb, |c: Hsv| {
                Hsv::new(
                    c.h.saturating_add(d.h),
                    c.s.saturating_add(d.s),
                    c.v.saturating_add(d.v),
                )
            }),
            Adjustment::Cmyk(d) => shift_in(rgb, |c: Cmyk| {
                Cmyk::new(
                    c.c.saturating_add(d.c),
                    c.m.saturating_add(d.m),
                    c.y.saturating_add(d.y),
                    c.k.saturating_add(d.k),
                )
            }),
            Adjustment::Lab(d) => shift_in(rgb, |c: Lab| {
                Lab::new(
                    c.l.saturating_add(d.l),
                    c.a.saturating_add(d.a),
                    c.b.saturating_add(d.b),
                )
            }),
            Adjustment::Yuv(d) => shift_in(rgb, |c: Yuv| {
                Yuv::new(
                    c.y.saturating_add(d.y),
                    c.u.saturating_add(d.u),
                    c.v.saturating_add(d.v),
                )
            }),
        }
    }
}

/// Apply `adjustment` to a single color
pub fn apply_adjustment(rgb: Rgb, adjustment: &Adjustment) -> Rgb {
    adjustment.apply(rgb)
}

fn shift_in<C: ColorSpace>(rgb: Rgb, shift: impl FnOnce(C) -> C) -> Rgb {
    shift(C::from_rgb(rgb)).in_range().to_rgb()
}

/// Deltas for every model at once, as kept by an editing session.
///
/// Only the delta of the model being viewed takes effect; the others are kept
/// untouched until they are explicitly reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AdjustmentSet {
    pub rgb: RgbDelta,
    pub hsv: HsvDelta,
    pub cmyk: CmykDelta,
    pub lab: LabDelta,
    pub yuv: YuvDelta,
}

impl AdjustmentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `adjustment`, replacing the previous delta for its model
    pub fn set(&mut self, adjustment: Adjustment) {
        match adjustment {
            Adjustment::Rgb(d) => self.rgb = d,
            Adjustment::Hsv(d) => self.hsv = d,
            Adjustment::Cmyk(d) => self.cmyk = d,
            Adjustment::Lab(d) => self.lab = d,
            Adjustment::Yuv(d) => self.yuv = d,
        }
    }

    /// The stored delta for `model`, zero if never set
    pub fn get(&self, model: ColorModel) -> Adjustment {
        match model {
            ColorModel::Rgb => Adjustment::Rgb(self.rgb),
            ColorModel::Hsv => Adjustment::Hsv(self.hsv),
            ColorModel::Cmyk => Adjustment::Cmyk(self.cmyk),
            ColorModel::Lab => Adjustment::Lab(self.lab),
            ColorModel::Yuv => Adjustment::Yuv(self.yuv),
        }
    }

    /// The adjustment to render with while `model` is selected, if any
    pub fn active(&self, model: ColorModel) -> Option<Adjustment> {
        Some(self.get(model)).filter(|adjustment| !adjustment.is_zero())
    }

    pub fn reset_model(&mut self, model: ColorModel) {
        self.set(Adjustment::zero(model));
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        ColorModel::ALL.iter().all(|&model| self.get(model).is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_color::rgb_to_hsv;

    const SAMPLES: [Rgb; 5] = [
        Rgb::new(0, 0, 0),
        Rgb::new(255, 255, 255),
        Rgb::new(200, 40, 90),
        Rgb::new(12, 180, 77),
        Rgb::new(90, 90, 250),
    ];

    #[test]
    fn test_zero_adjustment_is_identity() {
        for model in ColorModel::ALL {
            let zero = Adjustment::zero(model);
            assert!(zero.is_zero());
            for rgb in SAMPLES {
                assert_eq!(zero.apply(rgb), rgb, "{model} altered {rgb}");
            }
        }
    }

    #[test]
    fn test_rgb_shift_clamps() {
        let adj = Adjustment::Rgb(RgbDelta { r: 100, g: -100, b: 0 });
        assert_eq!(adj.apply(Rgb::new(200, 50, 7)), Rgb::new(255, 0, 7));
    }

    #[test]
    fn test_hue_wraps() {
        let rgb = Rgb::new(200, 40, 90);
        let plus_10 = Adjustment::Hsv(HsvDelta { h: 10, ..Default::default() });
        let plus_370 = Adjustment::Hsv(HsvDelta { h: 370, ..Default::default() });
        assert_eq!(plus_10.apply(rgb), plus_370.apply(rgb));

        let minus_350 = Adjustment::Hsv(HsvDelta { h: -350, ..Default::default() });
        assert_eq!(plus_10.apply(rgb), minus_350.apply(rgb));
    }

    #[test]
    fn test_hue_rotation_of_red() {
        let adj = Adjustment::Hsv(HsvDelta { h: 120, ..Default::default() });
        assert_eq!(adj.apply(Rgb::new(255, 0, 0)), Rgb::new(0, 255, 0));
    }

    #[test]
    fn test_saturation_clamps() {
        let adj = Adjustment::Hsv(HsvDelta { s: -500, ..Default::default() });
        let out = adj.apply(Rgb::new(200, 40, 90));
        assert_eq!(rgb_to_hsv(out).s, 0);
        assert_eq!(out.r, out.g);
        assert_eq!(out.g, out.b);
    }

    #[test]
    fn test_full_key_is_black() {
        let adj = Adjustment::Cmyk(CmykDelta { k: 100, ..Default::default() });
        for rgb in SAMPLES {
            assert_eq!(adj.apply(rgb), Rgb::BLACK);
        }
    }

    #[test]
    fn test_lab_lightness_extremes() {
        let brighten = Adjustment::Lab(LabDelta { l: 100, ..Default::default() });
        assert_eq!(brighten.apply(Rgb::new(128, 128, 128)), Rgb::WHITE);

        let darken = Adjustment::Lab(LabDelta { l: -100, ..Default::default() });
        assert_eq!(darken.apply(Rgb::new(128, 128, 128)), Rgb::BLACK);
    }

    #[test]
    fn test_yuv_luma_shift() {
        let adj = Adjustment::Yuv(YuvDelta { y: 255, ..Default::default() });
        assert_eq!(adj.apply(Rgb::new(100, 100, 100)), Rgb::WHITE);
    }

    #[test]
    fn test_extreme_deltas_saturate() {
        for model in ColorModel::ALL {
            for extreme in [i32::MAX, i32::MIN] {
                let deltas = vec![extreme; model.channel_count()];
                let adj = Adjustment::from_deltas(model, &deltas).unwrap();
                for rgb in SAMPLES {
                    adj.apply(rgb);
                }
            }
        }

        let brighten = Adjustment::Rgb(RgbDelta { r: i32::MAX, g: i32::MIN, b: 0 });
        assert_eq!(brighten.apply(Rgb::new(200, 30, 7)), Rgb::new(255, 0, 7));

        let darken = Adjustment::Cmyk(CmykDelta { k: i32::MAX, ..Default::default() });
        assert_eq!(darken.apply(Rgb::new(200, 40, 90)), Rgb::BLACK);

        let lighten = Adjustment::Lab(LabDelta { l: i32::MAX, ..Default::default() });
        assert_eq!(lighten.apply(Rgb::new(128, 128, 128)), Rgb::WHITE);

        let luma = Adjustment::Yuv(YuvDelta { y: i32::MIN, ..Default::default() });
        assert_eq!(luma.apply(Rgb::new(100, 100, 100)), Rgb::new(1, 0, 1));

        // hue saturates at i32::MAX, then wraps like any other hue
        let red = Rgb::new(255, 0, 0);
        let spin = Adjustment::Hsv(HsvDelta { h: i32::MAX, ..Default::default() });
        let wrapped = i32::MAX.rem_euclid(360);
        let equivalent = Adjustment::Hsv(HsvDelta { h: wrapped, ..Default::default() });
        assert_eq!(spin.apply(red), equivalent.apply(red));
    }

    #[test]
    fn test_from_deltas() {
        let adj = Adjustment::from_deltas(ColorModel::Cmyk, &[1, 2, 3, 4]).unwrap();
        assert_eq!(adj, Adjustment::Cmyk(CmykDelta { c: 1, m: 2, y: 3, k: 4 }));
        assert_eq!(adj.deltas(), vec![1, 2, 3, 4]);

        let partial = Adjustment::from_deltas(ColorModel::Hsv, &[30]).unwrap();
        assert_eq!(partial, Adjustment::Hsv(HsvDelta { h: 30, s: 0, v: 0 }));

        assert!(Adjustment::from_deltas(ColorModel::Rgb, &[1, 2, 3, 4]).is_err());
    }

    #[test]
    fn test_set_channel_rejects_foreign_names() {
        let mut adj = Adjustment::zero(ColorModel::Lab);
        adj.set_channel("a", -20).unwrap();
        assert_eq!(adj, Adjustment::Lab(LabDelta { l: 0, a: -20, b: 0 }));
        assert!(adj.set_channel("h", 5).is_err());
    }

    #[test]
    fn test_clamped_to_input_range() {
        let adj = Adjustment::Hsv(HsvDelta { h: 370, s: -150, v: 40 });
        assert_eq!(
            adj.clamped_to_input_range(),
            Adjustment::Hsv(HsvDelta { h: 180, s: -100, v: 40 })
        );

        let adj = Adjustment::Lab(LabDelta { l: 0, a: -300, b: 300 });
        assert_eq!(
            adj.clamped_to_input_range(),
            Adjustment::Lab(LabDelta { l: 0, a: -128, b: 128 })
        );
    }

    #[test]
    fn test_adjustment_set_keeps_other_models() {
        let mut set = AdjustmentSet::new();
        assert!(set.is_empty());
        assert_eq!(set.active(ColorModel::Hsv), None);

        set.set(Adjustment::Hsv(HsvDelta { h: 45, ..Default::default() }));
        set.set(Adjustment::Yuv(YuvDelta { u: -10, ..Default::default() }));

        assert_eq!(
            set.active(ColorModel::Hsv),
            Some(Adjustment::Hsv(HsvDelta { h: 45, s: 0, v: 0 }))
        );
        assert_eq!(set.active(ColorModel::Rgb), None);
        assert_eq!(set.get(ColorModel::Yuv).deltas(), vec![0, -10, 0]);

        set.reset_model(ColorModel::Hsv);
        assert_eq!(set.active(ColorModel::Hsv), None);
        assert!(set.active(ColorModel::Yuv).is_some());

        set.reset();
        assert!(set.is_empty());
    }
}
