use crate::consts;
use enum_map::Enum;
use std::fmt;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, Enum, Eq, Hash, PartialEq)]
pub(crate) enum Difficulty {
    Easy,
    Medium,
    #[default]
    Hard,
}

impl Difficulty {
    /// The time between ticks at this difficulty before any speed-up
    pub(crate) fn base_interval(self) -> Duration {
        match self {
            Difficulty::Easy => consts::BASE_TICK_INTERVAL * 3 / 2,
            Difficulty::Medium => consts::BASE_TICK_INTERVAL,
            Difficulty::Hard => consts::BASE_TICK_INTERVAL * 7 / 10,
        }
    }

    /// The time between ticks after `elapsed` of play.
    ///
    /// On [`Difficulty::Hard`], the interval shrinks linearly by
    /// `elapsed / HARD_RAMP_PERIOD` of the base interval until it has shrunk
    /// by [`HARD_RAMP_MAX_PERCENT`] percent.  Other difficulties keep their
    /// base interval.
    ///
    /// [`HARD_RAMP_MAX_PERCENT`]: consts::HARD_RAMP_MAX_PERCENT
    pub(crate) fn tick_interval(self, elapsed: Duration) -> Duration {
        let base = self.base_interval();
        if self != Difficulty::Hard {
            return base;
        }
        let period = consts::HARD_RAMP_PERIOD.as_millis();
        let ramp = elapsed
            .as_millis()
            .min(period * consts::HARD_RAMP_MAX_PERCENT / 100);
        let reduction = base.as_nanos() * ramp / period;
        base.saturating_sub(Duration::from_nanos(
            u64::try_from(reduction).unwrap_or(u64::MAX),
        ))
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Difficulty::Easy, Duration::from_millis(225))]
    #[case(Difficulty::Medium, Duration::from_millis(150))]
    #[case(Difficulty::Hard, Duration::from_millis(105))]
    fn test_base_interval(#[case] difficulty: Difficulty, #[case] interval: Duration) {
        assert_eq!(difficulty.base_interval(), interval);
        assert_eq!(difficulty.tick_interval(Duration::ZERO), interval);
    }

    #[rstest]
    #[case(Difficulty::Easy)]
    #[case(Difficulty::Medium)]
    fn no_ramp_below_hard(#[case] difficulty: Difficulty) {
        assert_eq!(
            difficulty.tick_interval(Duration::from_secs(600)),
            difficulty.base_interval()
        );
    }

    #[rstest]
    #[case(Duration::from_millis(12_000), Duration::from_micros(94_500))]
    #[case(Duration::from_millis(24_000), Duration::from_millis(84))]
    #[case(Duration::from_millis(48_000), Duration::from_millis(63))]
    #[case(Duration::from_millis(120_000), Duration::from_millis(63))]
    #[case(Duration::from_secs(3600), Duration::from_millis(63))]
    fn test_hard_ramp(#[case] elapsed: Duration, #[case] interval: Duration) {
        assert_eq!(Difficulty::Hard.tick_interval(elapsed), interval);
    }

    #[test]
    fn hard_ramp_is_monotonic_and_bounded() {
        let floor = Difficulty::Hard.base_interval() * 6 / 10;
        let mut prev = Difficulty::Hard.tick_interval(Duration::ZERO);
        for step in 1..=1500 {
            let interval = Difficulty::Hard.tick_interval(Duration::from_millis(step * 100));
            assert!(interval <= prev, "interval grew at step {step}");
            assert!(
                interval >= floor,
                "interval fell below floor at step {step}"
            );
            prev = interval;
        }
        assert_eq!(prev, floor);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{:8}|", Difficulty::Medium), "Medium  |");
    }
}
