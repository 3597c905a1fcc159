//! Fixed-timestep driver
//!
//! Accumulates elapsed wall time and steps the simulation in fixed `dt`
//! increments. Steps run synchronously inside `advance`, so ticks can never
//! overlap; the substep cap sheds backlog instead of spiraling when the
//! caller falls behind.

/// Maximum catch-up steps per `advance` call
const MAX_SUBSTEPS: u32 = 8;

#[derive(Debug, Clone)]
pub struct FixedTick {
    dt: f32,
    accumulator: f32,
    max_substeps: u32,
}

impl FixedTick {
    pub fn new(fps: f32) -> Self {
        Self {
            dt: 1.0 / fps,
            accumulator: 0.0,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    pub fn with_max_substeps(mut self, max_substeps: u32) -> Self {
        self.max_substeps = max_substeps;
        self
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Feed `elapsed` seconds of wall time; invokes `step(dt)` once per
    /// fixed interval crossed, up to the substep cap. Returns the number of
    /// steps taken.
    pub fn advance(&mut self, elapsed: f32, mut step: impl FnMut(f32)) -> u32 {
        self.accumulator += elapsed;
        let mut steps = 0;
        while self.accumulator >= self.dt && steps < self.max_substeps {
            step(self.dt);
            self.accumulator -= self.dt;
            steps += 1;
        }
        if steps == self.max_substeps && self.accumulator >= self.dt {
            log::warn!("tick backlog of {:.3}s dropped", self.accumulator);
            self.accumulator = 0.0;
        }
        steps
    }

    /// Discard pending backlog (e.g. after resuming from a hidden tab).
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
