//! Animation driver
//!
//! Owns everything one run needs: the settings, the renderer, the current
//! generation, the random source and the ticker. Front-ends feed it the
//! current time and user commands; it decides when a new generation is due.

use std::time::Instant;

use log::{debug, info};
use rand::rngs::StdRng;

use super::config::StartMode;
use super::preset::Preset;
use super::settings::{Settings, Speed, SurfaceSize};
use super::ticker::Ticker;
use crate::core::{next_generation, Generation, GenerationError, Rule};
use crate::raster::{GeometryError, ScrollRenderer, Submitted};

/// Errors raised while driving the animation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnimationError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// A running (or paused) automaton attached to a renderer
#[derive(Debug)]
pub struct Animation {
    settings: Settings,
    renderer: ScrollRenderer,
    current: Generation,
    ticker: Ticker,
    rng: StdRng,
    generations: u64,
}

impl Animation {
    /// Configure a renderer for `settings` and draw the first generation
    ///
    /// The animation starts stopped; call [`start`](Self::start) to run it.
    pub fn new(
        settings: Settings,
        surface: SurfaceSize,
        start: StartMode,
        mut rng: StdRng,
        ink: (u8, u8, u8),
    ) -> Result<Self, AnimationError> {
        let mut renderer = ScrollRenderer::new(surface.width, surface.height).with_ink(ink);
        renderer.configure(settings.cell_size)?;
        renderer.reset();

        let columns = renderer.columns();
        let current = match start {
            StartMode::Random => Generation::random(columns, &mut rng)?,
            StartMode::SingleCell => Generation::single_cell(columns)?,
        };
        renderer.submit(current.clone())?;

        info!(
            "Rule {} at {} gen/s, {} columns x {} rows",
            settings.rule,
            settings.speed,
            columns,
            renderer.capacity()
        );

        Ok(Self {
            settings,
            renderer,
            current,
            ticker: Ticker::new(settings.speed.interval()),
            rng,
            generations: 1,
        })
    }

    /// Advance one generation and paint it
    pub fn tick(&mut self) -> Result<Submitted, AnimationError> {
        let next = next_generation(&self.current, self.settings.rule);
        let outcome = self.renderer.submit(next.clone())?;
        self.current = next;
        self.generations += 1;
        Ok(outcome)
    }

    /// Run the pending tick if it is due at `now`
    ///
    /// Returns whether a generation was drawn. At most one tick runs per
    /// call, however late the caller is.
    pub fn poll(&mut self, now: Instant) -> Result<bool, AnimationError> {
        if self.ticker.fire(now) {
            self.tick()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn start(&mut self, now: Instant) {
        if !self.ticker.is_active() {
            debug!("Animation started");
            self.ticker.schedule(now);
        }
    }

    pub fn stop(&mut self) {
        if self.ticker.is_active() {
            debug!("Animation stopped");
            self.ticker.cancel();
        }
    }

    pub fn toggle(&mut self, now: Instant) {
        if self.is_running() {
            self.stop();
        } else {
            self.start(now);
        }
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_active()
    }

    /// Switch rules; the next tick uses the new rule on the current row
    pub fn set_rule(&mut self, rule: Rule) {
        debug!("Rule changed to {}", rule);
        self.settings.rule = rule;
    }

    pub fn set_speed(&mut self, speed: Speed, now: Instant) {
        debug!("Speed changed to {} gen/s", speed);
        self.settings.speed = speed;
        self.ticker.set_interval(speed.interval(), now);
    }

    /// Change the cell size and restart from a random row
    ///
    /// An invalid size leaves the animation untouched.
    pub fn set_cell_size(&mut self, cell_size: u32) -> Result<(), AnimationError> {
        self.renderer.configure(cell_size)?;
        self.settings.cell_size = cell_size;
        self.reset()
    }

    /// Clear the picture and restart from a random row
    pub fn reset(&mut self) -> Result<(), AnimationError> {
        let seed = Generation::random(self.renderer.columns(), &mut self.rng)?;
        self.restart(seed)
    }

    /// Clear the picture and restart from a single live cell
    pub fn single_cell(&mut self) -> Result<(), AnimationError> {
        let seed = Generation::single_cell(self.renderer.columns())?;
        self.restart(seed)
    }

    fn restart(&mut self, seed: Generation) -> Result<(), AnimationError> {
        self.renderer.reset();
        self.renderer.submit(seed.clone())?;
        self.current = seed;
        self.generations = 1;
        Ok(())
    }

    /// The current settings as a shareable preset
    pub fn preset(&self) -> Preset {
        Preset::from_settings(&self.settings)
    }

    /// When the event loop should wake up next, if running
    pub fn next_deadline(&self) -> Option<Instant> {
        self.ticker.deadline()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn renderer(&self) -> &ScrollRenderer {
        &self.renderer
    }

    pub fn current(&self) -> &Generation {
        &self.current
    }

    /// Generations drawn since the last restart, the seed included
    pub fn generations(&self) -> u64 {
        self.generations
    }
}
