// File: crates/linkchart-core/src/scale.rs
// Summary: Value-to-pixel scales used by chart layouts (linear and banded ordinal).

use serde::Serialize;

/// Linear map from a data domain onto a pixel range. The range may be inverted
/// (e.g. `[height, 0]` for a Y axis growing upward).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Pixel position of `v`. A zero-width domain maps everything to the range start.
    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return r0;
        }
        r0 + (v - d0) / span * (r1 - r0)
    }

    /// Data value at pixel `px`. A zero-width range maps back to the domain start.
    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        if span == 0.0 {
            return d0;
        }
        d0 + (px - r0) / span * (d1 - d0)
    }
}

/// (min, max) of `values`, or `None` when empty. NaNs are skipped.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values.into_iter().filter(|v| !v.is_nan()).fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Label text for a data value: integral values print without a fraction.
pub fn format_value(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

/// Ordinal positions spaced `step` pixels apart: index `i` sits at `i * step`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BandScale {
    pub count: usize,
    pub step: f64,
}

impl BandScale {
    pub fn new(count: usize, step: f64) -> Self { Self { count, step } }

    #[inline]
    pub fn position(&self, i: usize) -> f64 { i as f64 * self.step }
}
