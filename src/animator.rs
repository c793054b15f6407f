/*
 * Animator
 *
 * Drives a fixed set of curve instances. Every tick moves each curve by one
 * step; once they are all complete, each one is cleared and restarted with
 * fresh random parameters. The animator then re-arms its timer, failing to
 * do so is fatal.
 */
use super::canvas::DrawingSink;
use super::config::{AnimatorConfig, ViewportConfig, MIN_INNER_RADIUS, MIN_OUTER_RADIUS};
use super::curve::{Color, CurveParams, Point};
use super::error::SpiroError;
use super::instance::CurveInstance;
use super::timer::Timer;
use log::{debug, info, warn};
use rand::Rng;
use std::time::Duration;

/*
 * R in [50, min(w, h) / 2], r in [10, 9R / 10], l in [0.1, 0.9), center
 * anywhere in the viewport. The viewport must have been validated.
 */
pub fn random_params<R: Rng>(rng: &mut R, viewport: &ViewportConfig) -> CurveParams {
    let (width, height) = (viewport.width as i64, viewport.height as i64);
    let max_outer = (width.min(height) / 2) as u32;
    let outer_radius = rng.gen_range(MIN_OUTER_RADIUS, max_outer + 1);
    let inner_radius = rng.gen_range(MIN_INNER_RADIUS, 9 * outer_radius / 10 + 1);
    let hole_ratio = rng.gen_range(0.1, 0.9);
    let center = Point::new(
        rng.gen_range(-width / 2, width / 2 + 1) as f64,
        rng.gen_range(-height / 2, height / 2 + 1) as f64,
    );
    let color = Color::new(rng.gen(), rng.gen(), rng.gen());

    CurveParams::new(center, color, outer_radius, inner_radius, hole_ratio)
}

pub struct Animator<S: DrawingSink, R: Rng> {
    instances: Vec<CurveInstance<S>>,
    rng: R,
    viewport: ViewportConfig,
    interval: Duration,
    restarting: bool,
}

impl<S: DrawingSink, R: Rng> Animator<S, R> {
    /*
     * make_sink is called once per curve with the curve index. The timer is
     * armed for the first tick before returning.
     */
    pub fn new<F>(config: &AnimatorConfig, mut rng: R, mut make_sink: F, timer: &mut dyn Timer) -> Result<Animator<S, R>, SpiroError>
    where
        F: FnMut(usize) -> S,
    {
        config.validate()?;
        let mut instances = Vec::with_capacity(config.count);
        for index in 0..config.count {
            let params = random_params(&mut rng, &config.viewport);
            instances.push(CurveInstance::new(params, config.step_deg, make_sink(index))?);
        }
        info!(
            "animating {} curves in a {}×{} viewport, tick every {:?}",
            config.count, config.viewport.width, config.viewport.height, config.interval
        );
        timer.schedule_once(config.interval)?;

        Ok(Animator {
            instances,
            rng,
            viewport: config.viewport,
            interval: config.interval,
            restarting: false,
        })
    }

    /// Returns true when this tick restarted the curves.
    pub fn tick(&mut self, timer: &mut dyn Timer) -> Result<bool, SpiroError> {
        let mut complete = 0;
        for instance in self.instances.iter_mut() {
            instance.update()?;
            if instance.is_complete() {
                complete += 1;
            }
        }

        let restarted = complete == self.instances.len();
        if restarted {
            debug!("all {} curves are complete", complete);
            self.restart()?;
        }
        timer.schedule_once(self.interval)?;

        Ok(restarted)
    }

    pub fn restart(&mut self) -> Result<(), SpiroError> {
        if self.restarting {
            warn!("restart requested while restarting, ignored");
            return Ok(());
        }
        self.restarting = true;
        let result = self.restart_all();
        self.restarting = false;

        result
    }

    fn restart_all(&mut self) -> Result<(), SpiroError> {
        for instance in self.instances.iter_mut() {
            instance.clear()?;
            let params = random_params(&mut self.rng, &self.viewport);
            instance.set_params(params)?;
            instance.restart()?;
            debug!(
                "new curve R={} r={} l={:.3} at ({}, {})",
                params.outer_radius, params.inner_radius, params.hole_ratio, params.center.x, params.center.y
            );
        }

        Ok(())
    }

    pub fn toggle_visibility(&mut self) -> Result<(), SpiroError> {
        for instance in self.instances.iter_mut() {
            instance.toggle_cursor()?;
        }

        Ok(())
    }

    pub fn instances(&self) -> &[CurveInstance<S>] {
        &self.instances
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn all_complete(&self) -> bool {
        self.instances.iter().all(|i| i.is_complete())
    }

    pub fn is_restarting(&self) -> bool {
        self.restarting
    }
}
