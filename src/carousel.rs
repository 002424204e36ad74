//! Auto-advancing, looping carousel state.
//!
//! Time is counted in application ticks, the same clock the render loop
//! uses. The controller owns its next-advance deadline as plain state, so
//! there is no timer task to cancel: dropping the controller ends it.

/// Whether the carousel advances on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselPhase {
    Playing,
    Paused,
}

/// Index and timer of a looping carousel over a fixed number of slides.
///
/// Manual navigation never pauses the carousel. It moves the index and
/// re-arms the timer, so the next automatic advance comes one full
/// interval after the user's move instead of racing it.
#[derive(Debug, Clone)]
pub struct CarouselController {
    index: usize,
    length: usize,
    phase: CarouselPhase,
    /// Ticks between automatic advances
    interval_ticks: u64,
    /// Tick the timer was last (re)armed at
    armed_at: u64,
}

impl CarouselController {
    /// Create a controller armed at tick 0.
    ///
    /// A zero interval is treated as one tick.
    pub fn new(length: usize, interval_ticks: u64) -> Self {
        Self {
            index: 0,
            length,
            phase: if length > 1 {
                CarouselPhase::Playing
            } else {
                CarouselPhase::Paused
            },
            interval_ticks: interval_ticks.max(1),
            armed_at: 0,
        }
    }

    /// Create a controller whose timer starts at `current_tick`.
    pub fn started_at(length: usize, interval_ticks: u64, current_tick: u64) -> Self {
        let mut carousel = Self::new(length, interval_ticks);
        carousel.armed_at = current_tick;
        carousel
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }

    pub fn interval_ticks(&self) -> u64 {
        self.interval_ticks
    }

    fn can_move(&self) -> bool {
        self.length > 1
    }

    /// Advance for every whole interval elapsed since the timer was armed.
    ///
    /// Returns `true` if the index changed.
    pub fn update(&mut self, current_tick: u64) -> bool {
        if self.phase != CarouselPhase::Playing || !self.can_move() {
            return false;
        }

        let steps = current_tick.saturating_sub(self.armed_at) / self.interval_ticks;
        if steps == 0 {
            return false;
        }

        self.armed_at += steps * self.interval_ticks;
        let before = self.index;
        self.index = ((self.index as u64 + steps) % self.length as u64) as usize;
        self.index != before
    }

    /// Jump to `target` and restart the timer from `current_tick`.
    ///
    /// Targets outside `[0, length)` wrap around, so `-1` is the last slide.
    pub fn navigate_to(&mut self, target: isize, current_tick: u64) {
        if !self.can_move() {
            return;
        }
        self.index = target.rem_euclid(self.length as isize) as usize;
        self.armed_at = current_tick;
    }

    pub fn next(&mut self, current_tick: u64) {
        self.navigate_to(self.index as isize + 1, current_tick);
    }

    pub fn previous(&mut self, current_tick: u64) {
        self.navigate_to(self.index as isize - 1, current_tick);
    }

    /// Stop advancing, e.g. while another screen covers the carousel.
    pub fn pause(&mut self) {
        self.phase = CarouselPhase::Paused;
    }

    /// Resume advancing with a fresh interval. Time spent paused never
    /// turns into catch-up advances.
    pub fn resume(&mut self, current_tick: u64) {
        if !self.can_move() {
            return;
        }
        self.phase = CarouselPhase::Playing;
        self.armed_at = current_tick;
    }

    /// Ticks left until the next automatic advance, if one is scheduled.
    pub fn ticks_until_advance(&self, current_tick: u64) -> Option<u64> {
        if self.phase != CarouselPhase::Playing || !self.can_move() {
            return None;
        }
        let elapsed = current_tick.saturating_sub(self.armed_at);
        Some(self.interval_ticks - elapsed.min(self.interval_ticks))
    }
}
