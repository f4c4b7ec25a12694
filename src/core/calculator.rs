//! Metrics calculator: hours variance and gain/loss against a billed price.
//!
//! Pure functions; the hourly rate is always passed in by the caller
//! (see [`crate::config::Config::hourly_rate`]).

/// Labor rate used to turn actual hours into a realized cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyRate(pub f64);

impl HourlyRate {
    pub const DEFAULT: HourlyRate = HourlyRate(25.0);

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for HourlyRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Actual hours against bid hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoursVariance {
    /// `actual - bid`
    pub hours_diff: f64,
    /// `hours_diff / bid * 100`, `0` when there is no bid.
    pub diff_percent: f64,
}

impl HoursVariance {
    /// Same ratio as `diff_percent`, as a fraction (0.10 for 10%).
    pub fn diff_fraction(&self) -> f64 {
        self.diff_percent / 100.0
    }
}

/// Billed price against realized labor cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceOutcome {
    pub actual_price: f64,
    /// Positive: billed above cost.
    pub gain_loss: f64,
}

pub fn hours_variance(bid_hours: f64, actual_hours: f64) -> HoursVariance {
    let hours_diff = actual_hours - bid_hours;
    let diff_percent = if bid_hours == 0.0 {
        0.0
    } else {
        (hours_diff / bid_hours) * 100.0
    };

    HoursVariance {
        hours_diff,
        diff_percent,
    }
}

/// Fractional variance `(actual - bid) / bid`, `0` when there is no bid.
pub fn diff_fraction(bid_hours: f64, actual_hours: f64) -> f64 {
    if bid_hours == 0.0 {
        0.0
    } else {
        (actual_hours - bid_hours) / bid_hours
    }
}

pub fn price_outcome(bid_price: f64, actual_hours: f64, rate: HourlyRate) -> PriceOutcome {
    let actual_price = actual_hours * rate.value();
    PriceOutcome {
        actual_price,
        gain_loss: bid_price - actual_price,
    }
}

// ---------------------------
// Presentation classification
// ---------------------------

/// How a figure should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Favorable,
    Unfavorable,
    Neutral,
}

/// Hours variance: over bid is unfavorable, under is favorable, exactly on
/// bid is neutral. Shared by ongoing and completed rows.
pub fn variance_tone(variance: f64) -> Tone {
    if variance > 0.0 {
        Tone::Unfavorable
    } else if variance < 0.0 {
        Tone::Favorable
    } else {
        Tone::Neutral
    }
}

/// Current-year gain/loss. Neutral when the job came in exactly on bid
/// hours; otherwise only a strict gain is favorable.
pub fn gain_loss_tone(hours_diff: f64, gain_loss: f64) -> Tone {
    if hours_diff == 0.0 {
        Tone::Neutral
    } else if gain_loss > 0.0 {
        Tone::Favorable
    } else {
        Tone::Unfavorable
    }
}

/// History gain/loss: break-even counts as favorable.
pub fn history_gain_loss_tone(gain_loss: f64) -> Tone {
    if gain_loss >= 0.0 {
        Tone::Favorable
    } else {
        Tone::Unfavorable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_bid_has_no_percent() {
        let v = hours_variance(0.0, 12.0);
        assert_eq!(v.hours_diff, 12.0);
        assert_eq!(v.diff_percent, 0.0);
        assert!(!v.diff_percent.is_nan());
        assert_eq!(diff_fraction(0.0, 5.0), 0.0);
    }

    #[test]
    fn variance_over_bid() {
        let v = hours_variance(10.0, 12.0);
        assert_eq!(v.hours_diff, 2.0);
        assert!((v.diff_percent - 20.0).abs() < 1e-9);
        assert!((v.diff_fraction() - 0.2).abs() < 1e-12);
        assert!((diff_fraction(10.0, 12.0) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn gain_loss_uses_injected_rate() {
        let at_25 = price_outcome(500.0, 12.0, HourlyRate::DEFAULT);
        assert_eq!(at_25.actual_price, 300.0);
        assert_eq!(at_25.gain_loss, 200.0);

        let at_50 = price_outcome(500.0, 12.0, HourlyRate(50.0));
        assert_eq!(at_50.actual_price, 600.0);
        assert_eq!(at_50.gain_loss, -100.0);
    }

    #[test]
    fn tones() {
        assert_eq!(variance_tone(3.0), Tone::Unfavorable);
        assert_eq!(variance_tone(-3.0), Tone::Favorable);
        assert_eq!(variance_tone(0.0), Tone::Neutral);

        assert_eq!(gain_loss_tone(0.0, 250.0), Tone::Neutral);
        assert_eq!(gain_loss_tone(0.0, -40.0), Tone::Neutral);
        assert_eq!(gain_loss_tone(2.0, 1.0), Tone::Favorable);
        assert_eq!(gain_loss_tone(2.0, 0.0), Tone::Unfavorable);
        assert_eq!(gain_loss_tone(-2.0, -1.0), Tone::Unfavorable);

        assert_eq!(history_gain_loss_tone(0.0), Tone::Favorable);
        assert_eq!(history_gain_loss_tone(-0.01), Tone::Unfavorable);
    }
}
