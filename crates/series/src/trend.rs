//! Per-sample trend labels and the volatility level of a whole series.

use std::fmt;

/// Gradient deadband (Mbps/hour) inside which a sample counts as stable.
pub const TREND_DEADBAND: f64 = 0.1;

/// Direction of change at one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trend {
    /// Gradient above the deadband.
    Increasing,
    /// Gradient below the negative deadband.
    Decreasing,
    /// Gradient within the deadband.
    Stable,
}

impl Trend {
    /// Classifies a gradient against a symmetric deadband.
    pub fn from_gradient(gradient: f64, deadband: f64) -> Self {
        if gradient > deadband {
            Self::Increasing
        } else if gradient < -deadband {
            Self::Decreasing
        } else {
            Self::Stable
        }
    }

    /// Arrow glyph used in text charts.
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Increasing => "↗",
            Self::Decreasing => "↘",
            Self::Stable => "→",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Increasing => "Increasing",
            Self::Decreasing => "Decreasing",
            Self::Stable => "Stable",
        })
    }
}

/// Coarse reading of the volatility index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolatilityLevel {
    /// Index below 0.3.
    Stable,
    /// Index in `[0.3, 0.6)`.
    Moderate,
    /// Index of 0.6 or more.
    High,
}

impl VolatilityLevel {
    /// Buckets a volatility index.
    pub fn from_index(volatility: f64) -> Self {
        if volatility < 0.3 {
            Self::Stable
        } else if volatility < 0.6 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    /// Capacity-planning advice for this level.
    pub fn advice(self) -> &'static str {
        match self {
            Self::Stable => "suitable for predictable capacity planning",
            Self::Moderate => "requires adaptive bandwidth management",
            Self::High => "needs dynamic QoS controls",
        }
    }
}

impl fmt::Display for VolatilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Stable => "Stable",
            Self::Moderate => "Moderate",
            Self::High => "High Volatility",
        })
    }
}
