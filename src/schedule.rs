use crate::consts;
use enum_map::{Enum, EnumMap};
use log::debug;
use std::time::{Duration, Instant};

/// The timers driving the page
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum Timer {
    /// Advance the snake one cell
    Tick,

    /// Add [`consts::TIME_STEP`] to the play time
    TimeStep,

    /// Take down the current fun fact
    ClearMessage,

    /// Dismiss the unlock celebration
    EndCelebration,
}

impl Timer {
    fn periodic(self) -> bool {
        matches!(self, Timer::Tick | Timer::TimeStep)
    }
}

/// A set of deadlines, at most one per [`Timer`].  Nothing here sleeps; the
/// event loop waits until [`Scheduler::next_deadline()`] and then asks for
/// whatever has come due.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Scheduler {
    deadlines: EnumMap<Timer, Option<Instant>>,
}

impl Scheduler {
    pub(crate) fn new() -> Scheduler {
        Scheduler::default()
    }

    /// (Re)start the tick and time-step timers as of `now`, discarding any
    /// earlier deadlines for them
    pub(crate) fn start_periodic(&mut self, now: Instant, tick_interval: Duration) {
        debug!("Starting periodic timers; tick interval is {tick_interval:?}");
        self.deadlines[Timer::Tick] = Some(now + tick_interval);
        self.deadlines[Timer::TimeStep] = Some(now + consts::TIME_STEP);
    }

    pub(crate) fn stop_periodic(&mut self) {
        debug!("Stopping periodic timers");
        for (timer, deadline) in &mut self.deadlines {
            if timer.periodic() {
                *deadline = None;
            }
        }
    }

    /// Arrange for `timer` to fire at `at`, replacing any deadline it
    /// already had
    pub(crate) fn schedule(&mut self, timer: Timer, at: Instant) {
        self.deadlines[timer] = Some(at);
    }

    pub(crate) fn cancel(&mut self, timer: Timer) {
        self.deadlines[timer] = None;
    }

    /// The earliest pending deadline, if any
    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.values().flatten().min().copied()
    }

    /// Remove and return the timer with the earliest deadline that is at or
    /// before `now`, along with that deadline.  Timers with equal deadlines
    /// come out in declaration order.
    pub(crate) fn pop_due(&mut self, now: Instant) -> Option<(Timer, Instant)> {
        let (timer, deadline) = self
            .deadlines
            .iter()
            .filter_map(|(timer, &deadline)| Some((timer, deadline?)))
            .filter(|&(_, deadline)| deadline <= now)
            .min_by_key(|&(timer, deadline)| (deadline, timer.into_usize()))?;
        self.deadlines[timer] = None;
        Some((timer, deadline))
    }
}
