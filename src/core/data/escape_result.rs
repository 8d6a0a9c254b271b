/// Sample value stored for points that never escape.
pub const INTERIOR_SENTINEL: f32 = -1.0;

/// Outcome of iterating a single starting point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EscapeResult {
    /// The orbit left the escape radius. `smooth` is finite and never negative.
    Escaped { smooth: f64 },
    /// The orbit stayed bounded for every iteration.
    Interior,
}

impl EscapeResult {
    #[must_use]
    pub fn escaped(&self) -> bool {
        matches!(self, Self::Escaped { .. })
    }

    #[must_use]
    pub fn smooth(&self) -> Option<f64> {
        match self {
            Self::Escaped { smooth } => Some(*smooth),
            Self::Interior => None,
        }
    }

    /// Buffer encoding: the smooth value narrowed to `f32`, or [`INTERIOR_SENTINEL`].
    #[must_use]
    pub fn to_sample(&self) -> f32 {
        match self {
            Self::Escaped { smooth } => *smooth as f32,
            Self::Interior => INTERIOR_SENTINEL,
        }
    }
}
