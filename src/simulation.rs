use std::time::Duration;

use log::{debug, info};

use crate::{
    board::{Grid, Tool, ToolOutcome},
    config::SimulationConfig,
    error::{Error, Result},
    io::Snapshot,
};

/// Tick intervals offered by the editor, 500 ms down to 3 ms.
pub const SPEED_PRESETS: [Duration; 8] = [
    Duration::from_millis(1000 / 2),
    Duration::from_millis(1000 / 4),
    Duration::from_millis(1000 / 8),
    Duration::from_millis(1000 / 16),
    Duration::from_millis(1000 / 32),
    Duration::from_millis(1000 / 64),
    Duration::from_millis(1000 / 128),
    Duration::from_millis(1000 / 256),
];

/// Most ticks a single [`Simulation::advance`] call catches up on. Older backlog
/// is dropped.
pub const MAX_TICKS_PER_ADVANCE: u32 = 8;

/// Drives a [`Grid`] from an external clock and holds editor state that is not
/// part of the grid itself.
#[derive(Debug)]
pub struct Simulation {
    grid: Grid,
    interval: Duration,
    auto_update: bool,
    ticks: u64,
    pending: Duration,
    staged: Option<Snapshot>,
    dirty: bool,
}

impl Simulation {
    pub fn new(config: &SimulationConfig) -> Result<Self> {
        if config.interval_ms == 0 {
            return Err(Error::InvalidInterval);
        }

        Ok(Self {
            grid: Grid::new(config.width, config.height)?,
            interval: config.interval(),
            auto_update: config.auto_update,
            ticks: 0,
            pending: Duration::ZERO,
            staged: None,
            dirty: false,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) -> Result<()> {
        if interval.is_zero() {
            return Err(Error::InvalidInterval);
        }
        self.interval = interval;
        Ok(())
    }

    pub fn auto_update(&self) -> bool {
        self.auto_update
    }

    pub fn set_auto_update(&mut self, enabled: bool) {
        self.auto_update = enabled;
    }

    /// Runs one tick regardless of the auto-update flag.
    pub fn tick(&mut self) {
        self.grid.update();
        self.ticks += 1;
    }

    /// Feeds elapsed wall time into the clock and runs the ticks that became due,
    /// at most [`MAX_TICKS_PER_ADVANCE`].
    ///
    /// With auto-update disabled the time is consumed without ticking.
    pub fn advance(&mut self, elapsed: Duration) -> u64 {
        let backlog = self.interval.saturating_mul(MAX_TICKS_PER_ADVANCE);
        self.pending = self.pending.saturating_add(elapsed).min(backlog);
        let mut ran = 0;
        while self.pending >= self.interval {
            self.pending -= self.interval;
            if self.auto_update {
                self.tick();
                ran += 1;
            }
        }
        ran
    }

    pub fn apply_tool(&mut self, tool: &Tool, x: usize, y: usize) -> Result<ToolOutcome> {
        let outcome = self.grid.apply_tool(tool, x, y)?;
        if outcome != ToolOutcome::Nothing {
            self.dirty = true;
        }
        Ok(outcome)
    }

    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        self.grid = self.grid.resize(width, height)?;
        self.dirty = true;
        Ok(())
    }

    pub fn shrink(&mut self) {
        self.grid = self.grid.shrink();
        self.dirty = true;
    }

    /// Starts over with an empty grid of the same size.
    pub fn new_file(&mut self) {
        self.grid.clear();
        self.staged = None;
        self.dirty = false;
    }

    /// Keeps a loaded fragment until the user picks where to put it.
    pub fn stage_fragment(&mut self, snapshot: Snapshot) -> Result<()> {
        snapshot.validate()?;
        debug!("staged {}x{} fragment", snapshot.width(), snapshot.height());
        self.staged = Some(snapshot);
        Ok(())
    }

    pub fn staged_fragment(&self) -> Option<&Snapshot> {
        self.staged.as_ref()
    }

    pub fn cancel_fragment(&mut self) -> Option<Snapshot> {
        self.staged.take()
    }

    /// Places the staged fragment at `(x, y)`. Returns `false` if nothing was staged.
    pub fn place_staged(&mut self, x: usize, y: usize) -> Result<bool> {
        let Some(snapshot) = self.staged.take() else {
            return Ok(false);
        };

        self.grid.place_fragment(&snapshot, x, y)?;
        self.dirty = true;
        Ok(true)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.grid.to_snapshot()
    }

    /// Whether the grid changed since the last save.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_saved(&mut self) {
        info!("grid saved after {} ticks", self.ticks);
        self.dirty = false;
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self {
            grid: Grid::default(),
            interval: SimulationConfig::default().interval(),
            auto_update: true,
            ticks: 0,
            pending: Duration::ZERO,
            staged: None,
            dirty: false,
        }
    }
}
