/*
 * Curve instance
 *
 * One curve being drawn through its own sink. The angle moves by a fixed
 * step on each update until it reaches 360° × rotations_needed, then the
 * instance stays complete until it is restarted:
 *
 *      restart              update (angle ≥ closing angle)
 * Fresh ──────→ Drawing ──────────────────────────────→ Complete
 *                  ↑                                        │
 *                  └────────────────restart─────────────────┘
 */
use super::canvas::DrawingSink;
use super::curve::{hypotrochoid, CurveParams, Point};
use super::error::SpiroError;
use log::debug;

pub struct CurveInstance<S: DrawingSink> {
    params: CurveParams,
    sink: S,
    step_deg: u32,
    current_angle_deg: u64,
    rotations_needed: u32,
    ratio: f64,
    complete: bool,
    cursor_visible: bool,
}

impl<S: DrawingSink> CurveInstance<S> {
    pub const DEFAULT_STEP_DEG: u32 = 5;

    pub fn new(params: CurveParams, step_deg: u32, sink: S) -> Result<CurveInstance<S>, SpiroError> {
        params.validate()?;
        if step_deg == 0 {
            return Err(SpiroError::ZeroStep);
        }
        let mut instance = CurveInstance {
            params,
            sink,
            step_deg,
            current_angle_deg: 0,
            rotations_needed: params.rotations_needed(),
            ratio: params.ratio(),
            complete: false,
            cursor_visible: true,
        };
        instance.sink.set_color(params.color)?;
        instance.restart()?;

        Ok(instance)
    }

    /*
     * Angle and completion are left untouched, restart() has to be called
     * to draw the new curve from its start.
     */
    pub fn set_params(&mut self, params: CurveParams) -> Result<(), SpiroError> {
        params.validate()?;
        self.sink.set_color(params.color)?;
        self.params = params;
        self.rotations_needed = params.rotations_needed();
        self.ratio = params.ratio();

        Ok(())
    }

    pub fn restart(&mut self) -> Result<(), SpiroError> {
        self.complete = false;
        self.current_angle_deg = 0;
        let start = self.point_at(0);
        self.sink.pen_up()?;
        self.sink.move_to(start)?;
        self.sink.pen_down()?;
        self.set_cursor(true)
    }

    pub fn update(&mut self) -> Result<(), SpiroError> {
        if self.complete {
            return Ok(());
        }
        self.current_angle_deg += self.step_deg as u64;
        let point = self.point_at(self.current_angle_deg);
        self.sink.line_to(point)?;

        if self.current_angle_deg >= self.closing_angle() {
            debug!(
                "curve R={} r={} l={:.3} closed after {}°",
                self.params.outer_radius, self.params.inner_radius, self.params.hole_ratio, self.current_angle_deg
            );
            self.complete = true;
            self.set_cursor(false)?;
        }

        Ok(())
    }

    /// Draws the whole curve at once, no tick involved.
    pub fn draw_full(&mut self) -> Result<(), SpiroError> {
        let closing_angle = self.closing_angle();
        let mut angle = 0;
        while angle <= closing_angle {
            let point = self.point_at(angle);
            self.sink.line_to(point)?;
            self.current_angle_deg = angle;
            angle += self.step_deg as u64;
        }
        self.complete = true;
        self.set_cursor(false)
    }

    pub fn clear(&mut self) -> Result<(), SpiroError> {
        self.sink.pen_up()?;
        self.sink.clear()
    }

    pub fn toggle_cursor(&mut self) -> Result<(), SpiroError> {
        self.set_cursor(!self.cursor_visible)
    }

    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn current_angle_deg(&self) -> u64 {
        self.current_angle_deg
    }

    pub fn rotations_needed(&self) -> u32 {
        self.rotations_needed
    }

    pub fn step_deg(&self) -> u32 {
        self.step_deg
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn is_cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// 360° × rotations_needed, where the curve meets its start point again.
    pub fn closing_angle(&self) -> u64 {
        360 * self.rotations_needed as u64
    }

    /// Number of update() calls from a restart to completion.
    pub fn updates_to_close(&self) -> u64 {
        let step = self.step_deg as u64;
        (self.closing_angle() + step - 1) / step
    }

    fn point_at(&self, angle_deg: u64) -> Point {
        hypotrochoid(
            (angle_deg as f64).to_radians(),
            self.params.outer_radius as f64,
            self.ratio,
            self.params.hole_ratio,
        )
        .offset(self.params.center)
    }

    fn set_cursor(&mut self, visible: bool) -> Result<(), SpiroError> {
        if visible {
            self.sink.show_cursor()?;
        } else {
            self.sink.hide_cursor()?;
        }
        self.cursor_visible = visible;
        Ok(())
    }
}
