//! Peak-detection strategies.
//!
//! Three independent heuristics, selected explicitly by the caller:
//!
//! | Policy | Interior index `i` is a peak when |
//! |--------|-----------------------------------|
//! | [`GradientSignChange`] | `g[i-1] > rise`, `g[i+1] < -rise`, `|g[i]| < flat` |
//! | [`MeanThreshold`] | `b[i] > factor·mean`, `|g[i]| < flat` |
//! | [`LocalMaximum`] | `b[i-1] < b[i] > b[i+1]`, `b[i] > factor·baseline` |
//!
//! The first and last samples are never peaks.

use std::fmt;

/// Read-only view of a series and its gradients, handed to a policy.
#[derive(Debug, Clone, Copy)]
pub struct SeriesProfile<'a> {
    /// Bandwidth values.
    pub bandwidth: &'a [f64],
    /// Central-difference gradients, index-aligned with `bandwidth`.
    pub gradients: &'a [f64],
    /// Mean bandwidth.
    pub mean: f64,
    /// Largest bandwidth.
    pub max: f64,
}

impl SeriesProfile<'_> {
    fn interior(&self) -> std::ops::Range<usize> {
        1..self.bandwidth.len().saturating_sub(1)
    }
}

/// A rule that flags peak indices in a series.
pub trait PeakDetectionPolicy {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// Returns the ascending indices flagged as peaks.
    fn detect(&self, profile: &SeriesProfile<'_>) -> Vec<usize>;
}

/// Peak where the gradient turns from rising to falling and is flat at the
/// sample itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientSignChange {
    rise: f64,
    flat: f64,
}

impl GradientSignChange {
    /// Defaults: `rise = 0.05`, `flat = 0.1`.
    pub fn new() -> Self {
        Self {
            rise: 0.05,
            flat: 0.1,
        }
    }

    /// Sets the margin the neighbouring gradients must clear.
    pub fn with_rise(mut self, rise: f64) -> Self {
        self.rise = rise;
        self
    }

    /// Sets the bound on the gradient magnitude at the peak.
    pub fn with_flat(mut self, flat: f64) -> Self {
        self.flat = flat;
        self
    }
}

impl Default for GradientSignChange {
    fn default() -> Self {
        Self::new()
    }
}

impl PeakDetectionPolicy for GradientSignChange {
    fn name(&self) -> &'static str {
        "sign-change"
    }

    fn detect(&self, profile: &SeriesProfile<'_>) -> Vec<usize> {
        let g = profile.gradients;
        profile
            .interior()
            .filter(|&i| g[i - 1] > self.rise && g[i + 1] < -self.rise && g[i].abs() < self.flat)
            .collect()
    }
}

/// Peak where bandwidth is well above the mean and the gradient is flat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanThreshold {
    factor: f64,
    flat: f64,
}

impl MeanThreshold {
    /// Defaults: `factor = 1.2`, `flat = 0.1`.
    pub fn new() -> Self {
        Self {
            factor: 1.2,
            flat: 0.1,
        }
    }

    /// Sets the multiple of the mean a peak must exceed.
    pub fn with_factor(mut self, factor: f64) -> Self {
        self.factor = factor;
        self
    }

    /// Sets the bound on the gradient magnitude at the peak.
    pub fn with_flat(mut self, flat: f64) -> Self {
        self.flat = flat;
        self
    }
}

impl Default for MeanThreshold {
    fn default() -> Self {
        Self::new()
    }
}

impl PeakDetectionPolicy for MeanThreshold {
    fn name(&self) -> &'static str {
        "mean-threshold"
    }

    fn detect(&self, profile: &SeriesProfile<'_>) -> Vec<usize> {
        let limit = profile.mean * self.factor;
        profile
            .interior()
            .filter(|&i| profile.bandwidth[i] > limit && profile.gradients[i].abs() < self.flat)
            .collect()
    }
}

/// Reference level a [`LocalMaximum`] peak is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Baseline {
    /// Mean bandwidth of the series.
    Mean,
    /// Largest bandwidth of the series.
    Max,
}

/// Peak at a strict local maximum that also clears a fraction of a baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalMaximum {
    baseline: Baseline,
    factor: f64,
}

impl LocalMaximum {
    /// Defaults: `1.2 × mean`.
    pub fn new() -> Self {
        Self {
            baseline: Baseline::Mean,
            factor: 1.2,
        }
    }

    /// Compares against `factor × max` instead, as the bar charts do.
    pub fn relative_to_max(factor: f64) -> Self {
        Self {
            baseline: Baseline::Max,
            factor,
        }
    }

    /// Sets the multiple of the baseline a peak must exceed.
    pub fn with_factor(mut self, factor: f64) -> Self {
        self.factor = factor;
        self
    }

    /// Returns the baseline in use.
    pub fn baseline(&self) -> Baseline {
        self.baseline
    }
}

impl Default for LocalMaximum {
    fn default() -> Self {
        Self::new()
    }
}

impl PeakDetectionPolicy for LocalMaximum {
    fn name(&self) -> &'static str {
        "local-maximum"
    }

    fn detect(&self, profile: &SeriesProfile<'_>) -> Vec<usize> {
        let b = profile.bandwidth;
        let reference = match self.baseline {
            Baseline::Mean => profile.mean,
            Baseline::Max => profile.max,
        };
        let limit = reference * self.factor;
        profile
            .interior()
            .filter(|&i| b[i] > b[i - 1] && b[i] > b[i + 1] && b[i] > limit)
            .collect()
    }
}

/// Any of the built-in policies, for selection from configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PeakPolicy {
    /// See [`GradientSignChange`].
    SignChange(GradientSignChange),
    /// See [`MeanThreshold`].
    MeanThreshold(MeanThreshold),
    /// See [`LocalMaximum`].
    LocalMaximum(LocalMaximum),
}

impl Default for PeakPolicy {
    fn default() -> Self {
        Self::MeanThreshold(MeanThreshold::new())
    }
}

impl PeakDetectionPolicy for PeakPolicy {
    fn name(&self) -> &'static str {
        match self {
            Self::SignChange(p) => p.name(),
            Self::MeanThreshold(p) => p.name(),
            Self::LocalMaximum(p) => p.name(),
        }
    }

    fn detect(&self, profile: &SeriesProfile<'_>) -> Vec<usize> {
        match self {
            Self::SignChange(p) => p.detect(profile),
            Self::MeanThreshold(p) => p.detect(profile),
            Self::LocalMaximum(p) => p.detect(profile),
        }
    }
}

impl fmt::Display for PeakPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
