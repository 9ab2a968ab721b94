//! Stroke style used to draw and hit-test a route outline.
//!
//! The process-wide default is built once and shared behind an `Arc`. Routes
//! that want a different look get their own copy; nothing ever writes through
//! the shared value.

use std::sync::{Arc, OnceLock};

use gmapkit_core::{Error, LineCap, LineJoin, Result, Rgba};
use gmapkit_settings::{RouteSettings, StrokeSettings};
use smallvec::SmallVec;

/// Alternating on/off lengths along the path, in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct DashPattern {
    intervals: SmallVec<[f32; 4]>,
    offset: f32,
    period: f32,
}

impl DashPattern {
    /// Returns `None` unless there is an even number (at least two) of
    /// finite, non-negative lengths with a positive sum.
    pub fn new(intervals: impl IntoIterator<Item = f32>, offset: f32) -> Option<Self> {
        let intervals: SmallVec<[f32; 4]> = intervals.into_iter().collect();
        if intervals.len() < 2 || intervals.len() % 2 != 0 || !offset.is_finite() {
            return None;
        }
        if intervals.iter().any(|d| !d.is_finite() || *d < 0.0) {
            return None;
        }
        let period: f32 = intervals.iter().sum();
        if period <= 0.0 {
            return None;
        }
        Some(Self {
            intervals,
            offset,
            period,
        })
    }

    pub fn intervals(&self) -> &[f32] {
        &self.intervals
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Whether the arc-length position `distance` falls inside a dash.
    pub fn is_on(&self, distance: f32) -> bool {
        let mut pos = (distance + self.offset).rem_euclid(self.period);
        for (i, len) in self.intervals.iter().enumerate() {
            if pos <= *len {
                return i % 2 == 0;
            }
            pos -= len;
        }
        // Rounding can leave `pos` a hair past the final gap.
        false
    }
}

/// Visual line style of a route.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub width: f32,
    pub color: Rgba,
    pub line_join: LineJoin,
    pub line_cap: LineCap,
    pub miter_limit: f32,
    pub dash: Option<DashPattern>,
}

impl StrokeStyle {
    pub fn new(width: f32, color: Rgba) -> Self {
        Self {
            width,
            color,
            ..Self::default()
        }
    }

    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    pub fn with_line_join(mut self, line_join: LineJoin) -> Self {
        self.line_join = line_join;
        self
    }

    pub fn with_line_cap(mut self, line_cap: LineCap) -> Self {
        self.line_cap = line_cap;
        self
    }

    pub fn with_dash(mut self, dash: DashPattern) -> Self {
        self.dash = Some(dash);
        self
    }

    /// Builds a tiny-skia stroke with the same geometry.
    pub fn to_skia_stroke(&self) -> tiny_skia::Stroke {
        tiny_skia::Stroke {
            width: self.width,
            miter_limit: self.miter_limit,
            line_cap: match self.line_cap {
                LineCap::Butt => tiny_skia::LineCap::Butt,
                LineCap::Square => tiny_skia::LineCap::Square,
                LineCap::Round => tiny_skia::LineCap::Round,
            },
            line_join: match self.line_join {
                LineJoin::Miter => tiny_skia::LineJoin::Miter,
                LineJoin::Bevel => tiny_skia::LineJoin::Bevel,
                LineJoin::Round => tiny_skia::LineJoin::Round,
            },
            dash: self
                .dash
                .as_ref()
                .and_then(|d| tiny_skia::StrokeDash::new(d.intervals.to_vec(), d.offset)),
        }
    }

    /// Builds an anti-aliased solid paint in the stroke colour.
    pub fn to_skia_paint(&self) -> tiny_skia::Paint<'static> {
        let mut paint = tiny_skia::Paint::default();
        paint.set_color_rgba8(self.color.r, self.color.g, self.color.b, self.color.a);
        paint.anti_alias = true;
        paint
    }
}

impl Default for StrokeStyle {
    /// Width 5, round joins, butt caps, translucent midnight blue.
    fn default() -> Self {
        Self {
            width: 5.0,
            color: Rgba::MIDNIGHT_BLUE.with_alpha(144),
            line_join: LineJoin::Round,
            line_cap: LineCap::Butt,
            miter_limit: 10.0,
            dash: None,
        }
    }
}

impl TryFrom<&StrokeSettings> for StrokeStyle {
    type Error = Error;

    fn try_from(settings: &StrokeSettings) -> Result<Self> {
        settings
            .validate()
            .map_err(|e| Error::invalid_stroke(e.to_string()))?;

        let dash = match &settings.dash {
            Some(intervals) => Some(
                DashPattern::new(intervals.iter().copied(), settings.dash_offset)
                    .ok_or_else(|| Error::invalid_stroke("unusable dash pattern"))?,
            ),
            None => None,
        };

        Ok(Self {
            width: settings.width,
            color: settings.color,
            line_join: settings.line_join,
            line_cap: settings.line_cap,
            miter_limit: settings.miter_limit,
            dash,
        })
    }
}

static DEFAULT_STROKE: OnceLock<Arc<StrokeStyle>> = OnceLock::new();

/// The shared default stroke, built on first use.
pub fn default_stroke() -> Arc<StrokeStyle> {
    DEFAULT_STROKE
        .get_or_init(|| Arc::new(StrokeStyle::default()))
        .clone()
}

/// Install a configured default stroke.
///
/// Must be called before any route is created or [`default_stroke`] is read.
/// Returns [`Error::DefaultStrokeInitialized`] if the default already exists.
pub fn init_default_stroke(settings: &RouteSettings) -> Result<()> {
    let style = StrokeStyle::try_from(&settings.stroke)?;
    DEFAULT_STROKE
        .set(Arc::new(style))
        .map_err(|_| Error::DefaultStrokeInitialized)?;
    tracing::info!("Default route stroke initialized from settings");
    Ok(())
}
