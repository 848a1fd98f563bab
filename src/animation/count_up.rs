//! Count-up interpolation for the hero statistics.

/// Milliseconds between two ticks.
pub const TICK_MS: u32 = 20;

/// Roughly how many ticks a count-up takes.
const STEPS: u64 = 100;

/// Steps an integer from 0 to `target` in `ceil(target / 100)` increments.
///
/// Finite and not restartable: once the target has been emitted, `tick`
/// returns `None` forever. Build a new animator to count again.
#[derive(Clone, Debug)]
pub struct CountUp {
    target: u64,
    current: u64,
    step: u64,
    suffix: String,
    finished: bool,
}

impl CountUp {
    pub fn new(target: u64, suffix: impl Into<String>) -> Self {
        Self {
            target,
            current: 0,
            step: target.div_ceil(STEPS),
            suffix: suffix.into(),
            finished: false,
        }
    }

    /// Advances one tick and returns the new value, clamped to the target.
    pub fn tick(&mut self) -> Option<u64> {
        if self.finished {
            return None;
        }
        let next = self.current.saturating_add(self.step);
        if next >= self.target {
            self.current = self.target;
            self.finished = true;
        } else {
            self.current = next;
        }
        Some(self.current)
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The current value as shown on the page, e.g. `12,000+`.
    pub fn display(&self) -> String {
        format!("{}{}", group_thousands(self.current), self.suffix)
    }
}

impl Iterator for CountUp {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.tick().map(|_| self.display())
    }
}

/// Formats with comma thousands separators (en-US).
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// A statistic as the hero renders it.
///
/// Only whole numbers are animated; a fractional value such as a 4.9 rating
/// is shown as-is.
#[derive(Clone, Debug, PartialEq)]
pub enum StatFigure {
    Counted { target: u64, suffix: String },
    Literal(String),
}

impl StatFigure {
    pub fn from_value(value: f64, suffix: &str) -> Self {
        if value >= 0.0 && value.fract() == 0.0 {
            StatFigure::Counted { target: value as u64, suffix: suffix.to_string() }
        } else {
            StatFigure::Literal(format!("{}{}", value, suffix))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(target: u64) -> Vec<u64> {
        let mut counter = CountUp::new(target, "");
        std::iter::from_fn(move || counter.tick()).collect()
    }

    #[test]
    fn sequence_is_monotonic_and_lands_on_target() {
        for target in [0, 1, 7, 99, 100, 101, 250, 999, 12_000, 1_000_003] {
            let seq = values(target);
            assert!(!seq.is_empty(), "target {target}");
            assert!(seq.windows(2).all(|w| w[0] <= w[1]), "target {target}");
            assert!(seq.iter().all(|v| *v <= target), "target {target}");
            assert_eq!(*seq.last().unwrap(), target);
        }
    }

    #[test]
    fn two_hundred_fifty_steps_by_three() {
        let seq = values(250);
        // ceil(250 / ceil(250 / 100)) ticks
        assert_eq!(seq.len(), 84);
        let (last, intermediate) = seq.split_last().unwrap();
        assert!(intermediate.iter().all(|v| v % 3 == 0));
        assert_eq!(intermediate.last(), Some(&249));
        assert_eq!(*last, 250);
    }

    #[test]
    fn zero_target_finishes_on_first_tick() {
        let mut counter = CountUp::new(0, "+");
        assert_eq!(counter.tick(), Some(0));
        assert!(counter.is_finished());
        assert_eq!(counter.tick(), None);
        assert_eq!(counter.display(), "0+");
    }

    #[test]
    fn finished_animator_does_not_restart() {
        let mut counter = CountUp::new(5, "");
        while counter.tick().is_some() {}
        assert_eq!(counter.current(), 5);
        assert_eq!(counter.tick(), None);
        assert_eq!(counter.next(), None);
    }

    #[test]
    fn keywords_stat_ends_with_grouped_suffix() {
        let last = CountUp::new(12_000, "+").last();
        assert_eq!(last.as_deref(), Some("12,000+"));
    }

    #[test]
    fn starts_at_zero_before_any_tick() {
        let counter = CountUp::new(250, "+");
        assert_eq!(counter.display(), "0+");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(12_000), "12,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn fractional_rating_bypasses_the_animator() {
        assert_eq!(StatFigure::from_value(4.9, "/5"), StatFigure::Literal("4.9/5".to_string()));
        assert_eq!(
            StatFigure::from_value(250.0, "+"),
            StatFigure::Counted { target: 250, suffix: "+".to_string() }
        );
    }
}
