// File: crates/gauge-core/src/types.rs
// Summary: Shared per-redraw types and constants (render state, offsets, label placement, tick geometry).

/// Default surface width in pixels.
pub const WIDTH: i32 = 480;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 320;

/// Clearance between an extent label and the arc stroke, in pixels.
pub const LABEL_MARGIN: f64 = 4.0;
/// Vertical room reserved below a partial gauge for its extent labels.
pub const PARTIAL_LABEL_HEIGHT: f64 = 20.0;
/// Thickness of a multi-arc value tick, in pixels.
pub const TICK_THICKNESS: f64 = 2.0;

/// Geometry of the gauge for one redraw.
///
/// Angles are radians, measured clockwise from twelve o'clock. `inner_radius`
/// is signed: negative offsets the arc inward, zero is a filled pie and
/// positive is a ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderState {
    pub start_angle: f64,
    /// Only read for full-circle gauges.
    pub arc_length: f64,
    pub inner_radius: f64,
    pub expanded_radius: f64,
    pub radius: f64,
    /// Radial thickness shared by all series of a multi-arc gauge.
    pub arc_band_width: f64,
}

impl RenderState {
    /// State for a ring of `radius` whose band is `arc_band_width` thick, starting at `start_angle`.
    pub fn ring(start_angle: f64, radius: f64, arc_band_width: f64) -> Self {
        Self {
            start_angle,
            arc_length: -2.0 * start_angle,
            inner_radius: radius - arc_band_width,
            expanded_radius: radius,
            radius,
            arc_band_width,
        }
    }

    pub fn with_arc_length(mut self, arc_length: f64) -> Self {
        self.arc_length = arc_length;
        self
    }

    pub fn with_expanded_radius(mut self, expanded_radius: f64) -> Self {
        self.expanded_radius = expanded_radius;
        self
    }

    pub fn with_inner_radius(mut self, inner_radius: f64) -> Self {
        self.inner_radius = inner_radius;
        self
    }
}

/// Text offset relative to the gauge center, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

/// Where the min/max extent labels go, and whether the max label survives the overlap check.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelPlacement {
    pub min_offset: Offset,
    pub max_offset: Offset,
    pub max_visible: bool,
}

/// Angular slice of one series within the shared arc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesAngle {
    /// Position among the visible series.
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// A series id paired with its slice, as consumed by the tick computation.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesArc {
    pub id: String,
    pub angle: SeriesAngle,
}

/// A value tick for one series of a multi-arc gauge.
///
/// The rectangle is anchored at `(x, y)` (relative to the gauge center) and
/// rotated by `rotation_degrees` around that same point.
#[derive(Clone, Debug, PartialEq)]
pub struct TickLineGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation_degrees: f64,
    pub dash_pattern: String,
    pub visible: bool,
}

impl TickLineGeometry {
    /// Placeholder for a hidden series: keeps its slot but draws nothing.
    pub fn collapsed(visible: bool) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            rotation_degrees: 0.0,
            dash_pattern: "0, 0, 0".to_string(),
            visible,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}
