/// Fixed-rate frame loop and its host-facing collaborator traits
use log::{debug, trace};
use std::time::{Duration, Instant};

use crate::config::RenderConfig;
use crate::frame::FrameBuilder;
use crate::raster::Grid;
use crate::state::{InputEvent, RenderState};

/// Non-blocking source of input events.
pub trait InputSource {
    /// Drain whatever is pending. An empty result is the common case and
    /// must be returned without waiting.
    fn poll(&mut self) -> anyhow::Result<Vec<InputEvent>>;
}

/// Receiver of finished frames.
pub trait FrameSink {
    /// Take ownership of one complete frame. `state` is the state the frame
    /// was built from.
    fn present(&mut self, grid: Grid, state: &RenderState) -> anyhow::Result<()>;
}

/// Collects every frame in memory.
impl FrameSink for Vec<Grid> {
    fn present(&mut self, grid: Grid, _state: &RenderState) -> anyhow::Result<()> {
        self.push(grid);
        Ok(())
    }
}

/// Monotonic time source used only for frame pacing.
pub trait Clock {
    /// Time since an arbitrary fixed origin.
    fn now(&self) -> Duration;
    fn sleep(&mut self, duration: Duration);
}

/// Wall clock backed by [`Instant`] and [`std::thread::sleep`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Frame budget bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacer {
    target: Duration,
}

impl Pacer {
    pub fn new(target: Duration) -> Self {
        Self { target }
    }

    /// Budget of `1000 / fps` whole milliseconds.
    pub fn from_fps(fps: u32) -> Self {
        Self::new(Duration::from_millis(1000 / u64::from(fps.max(1))))
    }

    pub fn target(&self) -> Duration {
        self.target
    }

    /// Time left to sleep after `elapsed` of work, or `None` when the budget
    /// is already spent. Late frames are never caught up.
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        self.target
            .checked_sub(elapsed)
            .filter(|rest| !rest.is_zero())
    }
}

/// Running counters for the frame loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub frames: u64,
    /// Frames whose work took at least the whole budget.
    pub overruns: u64,
    pub last_work: Duration,
}

impl FrameStats {
    fn record(&mut self, work: Duration, overran: bool) {
        self.frames += 1;
        self.last_work = work;
        if overran {
            self.overruns += 1;
        }
    }
}

/// Whether the loop should keep going after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Drives input, frame building, output and pacing, one frame at a time.
pub struct FrameLoop<I, S, C> {
    builder: FrameBuilder,
    pacer: Pacer,
    rotation_step: f64,
    state: RenderState,
    input: I,
    sink: S,
    clock: C,
    stats: FrameStats,
}

impl<I: InputSource, S: FrameSink, C: Clock> FrameLoop<I, S, C> {
    /// Validate `config` and set up the loop at its initial state.
    pub fn new(config: &RenderConfig, input: I, sink: S, clock: C) -> crate::Result<Self> {
        config.validate()?;
        Ok(Self {
            builder: config.frame_builder(),
            pacer: config.pacer(),
            rotation_step: config.rotation_step,
            state: config.initial_state(),
            input,
            sink,
            clock,
            stats: FrameStats::default(),
        })
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    pub fn pacer(&self) -> Pacer {
        self.pacer
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Run one frame: input, build, present, rotate, then sleep out the
    /// rest of the budget.
    ///
    /// A `Quit` event ends the loop before anything is drawn for the frame.
    pub fn step(&mut self) -> anyhow::Result<LoopControl> {
        let start = self.clock.now();

        for event in self.input.poll()? {
            match event {
                InputEvent::Quit => {
                    debug!("quit requested after {} frames", self.stats.frames);
                    return Ok(LoopControl::Quit);
                }
                zoom => {
                    self.state.apply(zoom);
                    trace!("{zoom:?} -> viewer distance {:.1}", self.state.viewer_distance());
                }
            }
        }

        let grid = self.builder.build(&self.state);
        self.sink.present(grid, &self.state)?;
        self.state.rotation.advance(self.rotation_step);

        let work = self.clock.now().saturating_sub(start);
        match self.pacer.remaining(work) {
            Some(rest) => {
                self.stats.record(work, false);
                self.clock.sleep(rest);
            }
            None => {
                self.stats.record(work, true);
                trace!(
                    "frame {} overran budget: {:?} >= {:?}",
                    self.stats.frames,
                    work,
                    self.pacer.target()
                );
            }
        }
        Ok(LoopControl::Continue)
    }

    /// Step until a `Quit` event or a collaborator error.
    pub fn run(&mut self) -> anyhow::Result<FrameStats> {
        while self.step()? == LoopControl::Continue {}
        debug!(
            "frame loop finished: {} frames, {} over budget",
            self.stats.frames, self.stats.overruns
        );
        Ok(self.stats)
    }
}
