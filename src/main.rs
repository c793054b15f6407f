/*
 * This is the window frontend for the spirograph library.
 *
 * Without arguments, random spirographs are animated until the window is
 * closed. Keys:
 * Space    restart with new random curves
 * T        show or hide the cursors
 * S        save the drawing as a PNG file
 */
use ansi_term::Colour;
use anyhow::{anyhow, Context, Result};
use chrono::Local;
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use structopt::StructOpt;

use spirograph::canvas::{save_png, snapshot_file_name, Window};
use spirograph::input::{RESTART, SAVE, TOGGLE};
use spirograph::{
    Animator, AnimatorConfig, Canvas, CurveInstance, CurveParams, Deadline, KeyBindings, Pen, SharedCanvas,
    ViewportConfig,
};

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use std::thread;

const WINDOW_TITLE: &str = "Spirographs!";
const FRAME_PERIOD: Duration = Duration::from_micros(16_667);

/// Draws spirographs. When run without --sparams, random spirographs are
/// animated.
///
/// R: radius of the outer circle, r: radius of the inner circle, l: ratio of
/// the hole distance to r.
#[derive(StructOpt, Debug)]
#[structopt(name = "spirograph")]
struct CLOptions {
    /// Draw a single curve with the given R, r and l
    #[structopt(long, number_of_values = 3, value_names = &["R", "r", "l"])]
    sparams: Option<Vec<f64>>,

    /// Number of animated curves
    #[structopt(short = "n", long, default_value = "4")]
    count: usize,

    /// Milliseconds between two animation steps
    #[structopt(long, default_value = "10")]
    interval: u64,

    /// Degrees drawn at each step
    #[structopt(long, default_value = "5")]
    step: u32,

    #[structopt(long, default_value = "960")]
    width: usize,

    #[structopt(long, default_value = "720")]
    height: usize,

    /// With --sparams, write the curve to this PNG file instead of opening a window
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// Seed for the random curves
    #[structopt(long)]
    seed: Option<u64>,
}

impl CLOptions {
    fn get_animator_config(&self) -> AnimatorConfig {
        AnimatorConfig {
            count: self.count,
            interval: Duration::from_millis(self.interval),
            step_deg: self.step,
            viewport: self.get_viewport(),
        }
    }

    fn get_viewport(&self) -> ViewportConfig {
        ViewportConfig {
            width: self.width,
            height: self.height,
        }
    }

    fn get_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/*
 * What the key bindings act on. The animator is absent when a single
 * curve is drawn.
 */
struct Session {
    canvas: SharedCanvas,
    animator: Option<Animator<Pen, StdRng>>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let options = CLOptions::from_args();

    if let Err(e) = run(options) {
        print_err(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(options: CLOptions) -> Result<()> {
    info!("Generating Spirograph... (version {})", spirograph::VERSION);
    let interrupted = Arc::new(AtomicBool::new(false));
    let rmtint = interrupted.clone();
    ctrlc::set_handler(move || {
        rmtint.store(true, Ordering::SeqCst);
    })
    .context("could not install the CTRL-C handler")?;

    let viewport = options.get_viewport();
    let canvas = Canvas::shared(viewport.width, viewport.height);
    let mut deadline = Deadline::new();
    let mut bindings: KeyBindings<Session> = KeyBindings::new();
    bindings.bind(SAVE, |session| {
        save_snapshot(&session.canvas.borrow());
        Ok(())
    });

    let animator = match &options.sparams {
        Some(raw) => {
            let params = CurveParams::from_raw(raw[0], raw[1], raw[2])?;
            info!(
                "drawing a single curve R={} r={} l={}",
                params.outer_radius, params.inner_radius, params.hole_ratio
            );
            let mut curve = CurveInstance::new(params, options.step, Pen::new(&canvas))?;
            curve.draw_full()?;
            if let Some(path) = &options.output {
                save_png(&canvas.borrow(), path).with_context(|| format!("could not write {}", path.display()))?;
                info!("drawing written to {}", path.display());
                return Ok(());
            }
            None
        }
        None => {
            let pens = canvas.clone();
            let animator = Animator::new(
                &options.get_animator_config(),
                options.get_rng(),
                |_| Pen::new(&pens),
                &mut deadline,
            )?;
            bindings
                .bind(RESTART, |session| match session.animator.as_mut() {
                    Some(animator) => animator.restart(),
                    None => Ok(()),
                })
                .bind(TOGGLE, |session| match session.animator.as_mut() {
                    Some(animator) => animator.toggle_visibility(),
                    None => Ok(()),
                });
            Some(animator)
        }
    };

    let mut session = Session { canvas, animator };
    run_window(&mut session, &mut bindings, &mut deadline, &interrupted)
}

/*
 * Host loop: ticks the animator when the deadline expires, presents a frame
 * about 60 times per second and dispatches the keys pressed meanwhile.
 */
fn run_window(
    session: &mut Session,
    bindings: &mut KeyBindings<Session>,
    deadline: &mut Deadline,
    interrupted: &AtomicBool,
) -> Result<()> {
    let (width, height) = session.canvas.borrow().get_dimensions();
    let mut window =
        Window::open(WINDOW_TITLE, width, height).map_err(|e| anyhow!("could not open the window: {}", e))?;
    let mut next_frame = Instant::now();

    while window.is_open() {
        if interrupted.load(Ordering::Relaxed) {
            info!("interrupted by CTRL+C");
            break;
        }
        let now = Instant::now();
        if deadline.fire(now) {
            if let Some(animator) = session.animator.as_mut() {
                animator.tick(deadline)?;
            }
        }
        if now >= next_frame {
            window.present(&session.canvas.borrow())?;
            for trigger in window.pressed_triggers() {
                bindings.dispatch(trigger, session)?;
            }
            next_frame = now + FRAME_PERIOD;
        }

        let now = Instant::now();
        let until_frame = next_frame.saturating_duration_since(now);
        let wait = deadline.time_left(now).map_or(until_frame, |left| left.min(until_frame));
        thread::sleep(wait);
    }
    session.canvas.borrow_mut().close();

    Ok(())
}

fn save_snapshot(canvas: &Canvas) {
    let file_name = snapshot_file_name(&Local::now().naive_local());
    info!("Saving drawing to {}", file_name);
    if let Err(e) = save_png(canvas, Path::new(&file_name)) {
        error!("could not save {}: {}", file_name, e);
    }
}

fn print_err(msg: &str) {
    eprintln!("{}: {}", Colour::Red.paint("Error"), msg);
}
