//! Count-up animation values and the way each statistic is printed.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountUp {
    pub end: u32,
    pub duration_ms: f64,
}

impl CountUp {
    pub fn new(end: u32, duration_ms: f64) -> Self {
        Self { end, duration_ms }
    }

    /// Ease-out-expo from 0 to `end`; exactly `end` once the duration is up.
    pub fn value_at(&self, elapsed_ms: f64) -> u32 {
        if self.duration_ms <= 0.0 || elapsed_ms >= self.duration_ms {
            return self.end;
        }
        if elapsed_ms <= 0.0 {
            return 0;
        }
        let progress = elapsed_ms / self.duration_ms;
        let eased = (1.0 - 2f64.powf(-10.0 * progress)) * 1024.0 / 1023.0;
        let value = (self.end as f64 * eased).round();
        value.clamp(0.0, self.end as f64) as u32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatDisplay {
    Plain,
    /// Appends `suffix` when the statistic's target is at least `threshold`.
    SuffixFrom {
        threshold: u32,
        suffix: &'static str,
    },
    /// Prints `value/denominator`, as in "24/7".
    PerDenominator(u32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub target: u32,
    pub label: &'static str,
    pub display: StatDisplay,
}

impl Stat {
    pub fn render(&self, value: u32) -> String {
        match self.display {
            StatDisplay::Plain => value.to_string(),
            StatDisplay::SuffixFrom { threshold, suffix } if self.target >= threshold => {
                format!("{}{}", value, suffix)
            }
            StatDisplay::SuffixFrom { .. } => value.to_string(),
            StatDisplay::PerDenominator(denominator) => format!("{}/{}", value, denominator),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_lands_on_end() {
        let count = CountUp::new(1000, 3000.0);
        assert_eq!(count.value_at(0.0), 0);
        assert_eq!(count.value_at(-5.0), 0);
        assert_eq!(count.value_at(3000.0), 1000);
        assert_eq!(count.value_at(10_000.0), 1000);
    }

    #[test]
    fn never_counts_backwards_or_overshoots() {
        let count = CountUp::new(500, 3000.0);
        let mut last = 0;
        for step in 0..=200 {
            let value = count.value_at(step as f64 * 16.0);
            assert!(value >= last);
            assert!(value <= 500);
            last = value;
        }
    }

    #[test]
    fn eases_out() {
        let count = CountUp::new(1000, 3000.0);
        assert!(count.value_at(300.0) > 400);
        assert!(count.value_at(1500.0) > 950);
    }

    #[test]
    fn zero_duration_jumps_to_end() {
        assert_eq!(CountUp::new(24, 0.0).value_at(0.0), 24);
    }

    #[test]
    fn suffix_depends_on_target_not_current_value() {
        let clients = Stat {
            target: 500,
            label: "Happy Clients",
            display: StatDisplay::SuffixFrom { threshold: 500, suffix: "+" },
        };
        assert_eq!(clients.render(12), "12+");
        assert_eq!(clients.render(500), "500+");

        let years = Stat {
            target: 25,
            label: "Years Experience",
            display: StatDisplay::SuffixFrom { threshold: 500, suffix: "+" },
        };
        assert_eq!(years.render(25), "25");
    }

    #[test]
    fn availability_renders_as_ratio() {
        let support = Stat {
            target: 24,
            label: "Support Availability",
            display: StatDisplay::PerDenominator(7),
        };
        assert_eq!(support.render(24), "24/7");
        assert_eq!(support.render(3), "3/7");
        assert_eq!(
            Stat { target: 25, label: "x", display: StatDisplay::Plain }.render(25),
            "25"
        );
    }
}
