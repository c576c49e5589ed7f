//! Guided-breathing timer state machine.
//!
//! A cyclic three-phase countdown (Inhale 4s -> Hold 4s -> Exhale 6s) driven
//! by an external one-second tick source. The machine itself holds pure state;
//! the caller owns the clock and must stop ticking on pause or teardown.
//!
//! Invariant: while a phase is active, `remaining_seconds` stays within
//! `[1, phase.duration()]`. A tick that would reach zero switches to the next
//! phase and reloads that phase's duration instead.

/// One segment of the breathing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BreathingPhase {
    #[default]
    Inhale,
    Hold,
    Exhale,
}

impl BreathingPhase {
    /// Fixed length of this phase in whole seconds.
    pub const fn duration(self) -> u32 {
        match self {
            BreathingPhase::Inhale => 4,
            BreathingPhase::Hold => 4,
            BreathingPhase::Exhale => 6,
        }
    }

    /// Prompt shown while this phase is active.
    pub const fn label(self) -> &'static str {
        match self {
            BreathingPhase::Inhale => "Breathe in...",
            BreathingPhase::Hold => "Hold...",
            BreathingPhase::Exhale => "Breathe out...",
        }
    }

    /// The phase that follows this one in the cycle.
    pub const fn next(self) -> Self {
        match self {
            BreathingPhase::Inhale => BreathingPhase::Hold,
            BreathingPhase::Hold => BreathingPhase::Exhale,
            BreathingPhase::Exhale => BreathingPhase::Inhale,
        }
    }
}

impl std::fmt::Display for BreathingPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BreathingPhase::Inhale => write!(f, "inhale"),
            BreathingPhase::Hold => write!(f, "hold"),
            BreathingPhase::Exhale => write!(f, "exhale"),
        }
    }
}

/// Countdown state for the breathing exercise.
///
/// Owned exclusively by one view instance; never shared. Created in the
/// paused initial state and discarded on teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreathingTimer {
    running: bool,
    phase: BreathingPhase,
    remaining: u32,
    completed_cycles: u32,
}

impl Default for BreathingTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl BreathingTimer {
    /// Create a timer in the initial state: paused, Inhale, full countdown.
    pub fn new() -> Self {
        Self {
            running: false,
            phase: BreathingPhase::Inhale,
            remaining: BreathingPhase::Inhale.duration(),
            completed_cycles: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn phase(&self) -> BreathingPhase {
        self.phase
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining
    }

    pub fn completed_cycles(&self) -> u32 {
        self.completed_cycles
    }

    /// Resume counting from the current phase and count.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Freeze mid-phase; phase and count are untouched.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Start/pause flip for a single toggle control.
    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Return to the initial state unconditionally.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Advance one second. Ignored while paused.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        if self.remaining > 1 {
            self.remaining -= 1;
            return;
        }
        // Phase boundary: a full cycle completes on the Exhale -> Inhale wrap.
        if self.phase == BreathingPhase::Exhale {
            self.completed_cycles += 1;
        }
        self.phase = self.phase.next();
        self.remaining = self.phase.duration();
    }
}

/// Smallest and largest rendered circle diameter in pixels.
pub const CIRCLE_MIN: f64 = 60.0;
pub const CIRCLE_MAX: f64 = 100.0;

/// Display size of the breathing circle for a given machine state.
///
/// Pure derived presentation value: grows through Inhale, holds at max during
/// Hold, shrinks through Exhale. Not part of the machine state.
pub fn circle_scale(phase: BreathingPhase, remaining: u32) -> f64 {
    let duration = phase.duration() as f64;
    let elapsed = (duration - remaining as f64) / duration;
    let span = CIRCLE_MAX - CIRCLE_MIN;
    match phase {
        BreathingPhase::Inhale => CIRCLE_MIN + span * elapsed,
        BreathingPhase::Hold => CIRCLE_MAX,
        BreathingPhase::Exhale => CIRCLE_MAX - span * elapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_ticks(timer: &mut BreathingTimer, n: u32) {
        for _ in 0..n {
            timer.tick();
        }
    }

    #[test]
    fn initial_state() {
        let timer = BreathingTimer::new();
        assert!(!timer.is_running());
        assert_eq!(timer.phase(), BreathingPhase::Inhale);
        assert_eq!(timer.remaining_seconds(), 4);
        assert_eq!(timer.completed_cycles(), 0);
    }

    #[test]
    fn full_cycle_sequence() {
        // 4 ticks -> Hold(4), 4 more -> Exhale(6), 6 more -> Inhale(4) + 1 cycle
        let mut timer = BreathingTimer::new();
        timer.start();

        run_ticks(&mut timer, 4);
        assert_eq!(timer.phase(), BreathingPhase::Hold);
        assert_eq!(timer.remaining_seconds(), 4);
        assert_eq!(timer.completed_cycles(), 0);

        run_ticks(&mut timer, 4);
        assert_eq!(timer.phase(), BreathingPhase::Exhale);
        assert_eq!(timer.remaining_seconds(), 6);
        assert_eq!(timer.completed_cycles(), 0);

        run_ticks(&mut timer, 6);
        assert_eq!(timer.phase(), BreathingPhase::Inhale);
        assert_eq!(timer.remaining_seconds(), 4);
        assert_eq!(timer.completed_cycles(), 1);
    }

    #[test]
    fn remaining_stays_in_phase_bounds() {
        let mut timer = BreathingTimer::new();
        timer.start();
        for _ in 0..100 {
            timer.tick();
            let remaining = timer.remaining_seconds();
            assert!(remaining >= 1);
            assert!(remaining <= timer.phase().duration());
        }
    }

    #[test]
    fn tick_is_ignored_while_paused() {
        let mut timer = BreathingTimer::new();
        run_ticks(&mut timer, 10);
        assert_eq!(timer, BreathingTimer::new());
    }

    #[test]
    fn pause_resume_freezes_mid_phase() {
        let mut timer = BreathingTimer::new();
        timer.start();
        run_ticks(&mut timer, 2);
        let phase = timer.phase();
        let remaining = timer.remaining_seconds();

        timer.pause();
        timer.start();

        assert_eq!(timer.phase(), phase);
        assert_eq!(timer.remaining_seconds(), remaining);
    }

    #[test]
    fn reset_from_any_state() {
        let mut timer = BreathingTimer::new();
        timer.start();
        run_ticks(&mut timer, 11); // mid-Exhale
        assert_eq!(timer.phase(), BreathingPhase::Exhale);

        timer.reset();
        assert_eq!(timer, BreathingTimer::new());

        // Reset is total: also from a paused, partially-run state
        timer.start();
        run_ticks(&mut timer, 17);
        timer.pause();
        timer.reset();
        assert_eq!(timer, BreathingTimer::new());
    }

    #[test]
    fn cycles_only_increment_on_exhale_wrap() {
        let mut timer = BreathingTimer::new();
        timer.start();
        let mut last = timer.completed_cycles();
        for _ in 0..50 {
            let was_exhale_boundary =
                timer.phase() == BreathingPhase::Exhale && timer.remaining_seconds() == 1;
            timer.tick();
            if timer.completed_cycles() != last {
                assert!(was_exhale_boundary);
                assert_eq!(timer.completed_cycles(), last + 1);
                last = timer.completed_cycles();
            }
        }
        // 50 ticks over a 14-second cycle
        assert_eq!(timer.completed_cycles(), 3);
    }

    #[test]
    fn circle_scale_endpoints() {
        // Fresh inhale sits at the minimum, fully drawn breath at the maximum
        assert_eq!(circle_scale(BreathingPhase::Inhale, 4), CIRCLE_MIN);
        assert_eq!(circle_scale(BreathingPhase::Inhale, 1), 90.0);
        assert_eq!(circle_scale(BreathingPhase::Hold, 4), CIRCLE_MAX);
        assert_eq!(circle_scale(BreathingPhase::Hold, 1), CIRCLE_MAX);
        assert_eq!(circle_scale(BreathingPhase::Exhale, 6), CIRCLE_MAX);
        assert!(circle_scale(BreathingPhase::Exhale, 1) < circle_scale(BreathingPhase::Exhale, 5));
    }
}
