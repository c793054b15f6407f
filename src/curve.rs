/*
 * Hypotrochoid curves
 *
 * A circle of radius r rolls inside a fixed circle of radius R, the pen sits
 * at l × r from the center of the rolling circle. With k = r / R:
 *
 * x = R × ((1 - k) × cos(a) + l × k × cos((1 - k) × a / k))
 * y = R × ((1 - k) × sin(a) - l × k × sin((1 - k) × a / k))
 *
 * The curve closes once the outer angle reaches 360° × r / gcd(R, r).
 */
use super::error::SpiroError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    pub fn offset(&self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// RGB color, each channel in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Color {
    pub const BLACK: Color = Color { red: 0.0, green: 0.0, blue: 0.0 };

    pub fn new(red: f64, green: f64, blue: f64) -> Color {
        Color { red, green, blue }
    }

    /// Packs the color as `0x00RRGGBB`, channels are clamped.
    pub fn to_rgb24(&self) -> u32 {
        let channel = |c: f64| (c.max(0.0).min(1.0) * 255.0).round() as u32;
        channel(self.red) << 16 | channel(self.green) << 8 | channel(self.blue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveParams {
    pub center: Point,
    pub color: Color,
    pub outer_radius: u32,
    pub inner_radius: u32,
    pub hole_ratio: f64,
}

impl CurveParams {
    pub fn new(center: Point, color: Color, outer_radius: u32, inner_radius: u32, hole_ratio: f64) -> CurveParams {
        CurveParams {
            center,
            color,
            outer_radius,
            inner_radius,
            hole_ratio,
        }
    }

    /*
     * Build parameters from user input: radii are truncated to integers,
     * the curve is black and centered on the origin.
     */
    pub fn from_raw(outer_radius: f64, inner_radius: f64, hole_ratio: f64) -> Result<CurveParams, SpiroError> {
        let outer = truncate_radius("R", outer_radius)?;
        let inner = truncate_radius("r", inner_radius)?;
        if !hole_ratio.is_finite() {
            return Err(SpiroError::InvalidValue("l", hole_ratio));
        }
        let params = CurveParams::new(Point::new(0.0, 0.0), Color::BLACK, outer, inner, hole_ratio);
        params.validate()?;

        Ok(params)
    }

    /*
     * The hole ratio is not checked, values outside (0, 1] only make odd
     * looking curves.
     */
    pub fn validate(&self) -> Result<(), SpiroError> {
        if self.outer_radius == 0 {
            return Err(SpiroError::ZeroRadius("outer"));
        }
        if self.inner_radius == 0 {
            return Err(SpiroError::ZeroRadius("inner"));
        }
        if self.inner_radius >= self.outer_radius {
            return Err(SpiroError::InnerRadiusTooLarge(self.inner_radius, self.outer_radius));
        }

        Ok(())
    }

    pub fn ratio(&self) -> f64 {
        self.inner_radius as f64 / self.outer_radius as f64
    }

    pub fn rotations_needed(&self) -> u32 {
        rotations_needed(self.outer_radius, self.inner_radius)
    }

    /// Absolute position of the pen for the given outer angle.
    pub fn point_at_deg(&self, angle_deg: u64) -> Point {
        hypotrochoid(
            (angle_deg as f64).to_radians(),
            self.outer_radius as f64,
            self.ratio(),
            self.hole_ratio,
        )
        .offset(self.center)
    }
}

fn truncate_radius(name: &'static str, value: f64) -> Result<u32, SpiroError> {
    if !value.is_finite() || value < 0.0 || value > u32::MAX as f64 {
        return Err(SpiroError::InvalidValue(name, value));
    }

    Ok(value.trunc() as u32)
}

pub fn gcd(a: u32, b: u32) -> u32 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let rem = a % b;
        a = b;
        b = rem;
    }

    a
}

/// Number of full turns of the outer angle before the curve closes.
pub fn rotations_needed(outer_radius: u32, inner_radius: u32) -> u32 {
    inner_radius / gcd(inner_radius, outer_radius)
}

pub fn point_at(angle: f64, outer_radius: u32, inner_radius: u32, hole_ratio: f64) -> Point {
    let outer = outer_radius as f64;
    hypotrochoid(angle, outer, inner_radius as f64 / outer, hole_ratio)
}

/*
 * Same as point_at with the radius ratio already computed, this is what
 * instances call for every step.
 */
pub fn hypotrochoid(angle: f64, outer_radius: f64, ratio: f64, hole_ratio: f64) -> Point {
    let k = ratio;
    let inner_angle = (1.0 - k) * angle / k;

    Point::new(
        outer_radius * ((1.0 - k) * angle.cos() + hole_ratio * k * inner_angle.cos()),
        outer_radius * ((1.0 - k) * angle.sin() - hole_ratio * k * inner_angle.sin()),
    )
}
