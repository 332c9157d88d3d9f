/// Stopwatch cadence: one second every this many ticks.
pub const TICKS_PER_SECOND: u32 = 60;

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// The wall at this position of the teardown order came down.
    WallRemoved(usize),
    /// Construction is over; the tick went to the stopwatch.
    Stopwatch,
}

/// Tick counter, wall teardown cursor and stopwatch.
///
/// Each tick removes one wall while any remain. Once the maze is fully shown the
/// ticks feed a stopwatch that counts a second every [`TICKS_PER_SECOND`] ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clock {
    tick: u32,
    walls_removed: usize,
    walls_total: usize,
    stopwatch_ticks: u32,
    seconds: u32,
}

impl Clock {
    pub fn new(walls_total: usize) -> Self {
        Clock {
            tick: 0,
            walls_removed: 0,
            walls_total,
            stopwatch_ticks: 0,
            seconds: 0,
        }
    }

    pub fn advance(&mut self) -> TickEvent {
        self.tick = self.tick.saturating_add(1);
        if self.walls_removed < self.walls_total {
            let order = self.walls_removed;
            self.walls_removed += 1;
            return TickEvent::WallRemoved(order);
        }
        self.stopwatch_ticks = self.stopwatch_ticks.saturating_add(1);
        if self.stopwatch_ticks % TICKS_PER_SECOND == 0 {
            self.seconds += 1;
        }
        TickEvent::Stopwatch
    }

    /// Zeroes the tick counter and the stopwatch. The teardown cursor is kept.
    pub fn restart(&mut self) {
        self.tick = 0;
        self.stopwatch_ticks = 0;
        self.seconds = 0;
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Ticks into the current stopwatch second.
    pub fn frames(&self) -> u32 {
        self.stopwatch_ticks % TICKS_PER_SECOND
    }

    pub fn walls_removed(&self) -> usize {
        self.walls_removed
    }

    pub fn is_constructed(&self) -> bool {
        self.walls_removed == self.walls_total
    }

    pub fn stopwatch_running(&self) -> bool {
        self.stopwatch_ticks > 0
    }
}
