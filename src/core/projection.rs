//! Table projection: sorted, presentation-ready rows with derived metrics.
//! Records are only read here, never modified.

use crate::core::calculator::{
    HourlyRate, HoursVariance, PriceOutcome, Tone, gain_loss_tone, history_gain_loss_tone,
    hours_variance, price_outcome, variance_tone,
};
use crate::core::repository::Repository;
use crate::errors::AppResult;
use crate::models::{CompletedInspection, HistoryYearEntry, OngoingInspection};
use crate::store::RecordStore;
use crate::utils::date::{format_display, parse_local_date};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct OngoingRow {
    pub record: OngoingInspection,
    pub est_completion: Option<NaiveDate>,
    /// `hours_worked - bid_hours`
    pub hours_diff: f64,
    pub hours_tone: Tone,
}

impl OngoingRow {
    pub fn est_completion_display(&self) -> String {
        format_display(self.est_completion)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub entry: HistoryYearEntry,
    pub variance: HoursVariance,
    pub price: PriceOutcome,
    pub diff_tone: Tone,
    pub gain_loss_tone: Tone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletedRow {
    pub record: CompletedInspection,
    pub date_completed: Option<NaiveDate>,
    pub variance: HoursVariance,
    pub price: PriceOutcome,
    pub diff_tone: Tone,
    pub gain_loss_tone: Tone,
    pub history: Vec<HistoryRow>,
}

impl CompletedRow {
    pub fn date_completed_display(&self) -> String {
        format_display(self.date_completed)
    }
}

/// Soonest estimated completion first; missing dates lead. Stable.
pub fn project_ongoing(records: Vec<OngoingInspection>) -> Vec<OngoingRow> {
    let mut rows: Vec<OngoingRow> = records
        .into_iter()
        .map(|record| {
            let variance = hours_variance(record.bid_hours, record.hours_worked);
            OngoingRow {
                est_completion: parse_local_date(&record.est_completion),
                hours_diff: variance.hours_diff,
                hours_tone: variance_tone(variance.hours_diff),
                record,
            }
        })
        .collect();

    // Option<NaiveDate>: None orders before any date
    rows.sort_by_key(|r| r.est_completion);
    rows
}

/// Most recently completed first; missing dates trail. Stable.
pub fn project_completed(records: Vec<CompletedInspection>, rate: HourlyRate) -> Vec<CompletedRow> {
    let mut rows: Vec<CompletedRow> = records
        .into_iter()
        .map(|record| completed_row(record, rate))
        .collect();

    rows.sort_by(|a, b| b.date_completed.cmp(&a.date_completed));
    rows
}

pub fn completed_row(record: CompletedInspection, rate: HourlyRate) -> CompletedRow {
    let variance = hours_variance(record.bid_hours, record.actual_hours);
    let price = price_outcome(record.bid_price, record.actual_hours, rate);
    let history = record
        .hours_history
        .iter()
        .map(|h| history_row(h, rate))
        .collect();

    CompletedRow {
        date_completed: parse_local_date(&record.date_completed),
        diff_tone: variance_tone(variance.diff_percent),
        gain_loss_tone: gain_loss_tone(variance.hours_diff, price.gain_loss),
        variance,
        price,
        history,
        record,
    }
}

pub fn history_row(entry: &HistoryYearEntry, rate: HourlyRate) -> HistoryRow {
    let variance = hours_variance(entry.bid, entry.actual);
    let price = price_outcome(entry.bid_price, entry.actual, rate);

    HistoryRow {
        entry: entry.clone(),
        diff_tone: variance_tone(variance.diff_percent),
        gain_loss_tone: history_gain_loss_tone(price.gain_loss),
        variance,
        price,
    }
}

impl<S: RecordStore> Repository<S> {
    pub fn project_ongoing(&self) -> AppResult<Vec<OngoingRow>> {
        Ok(project_ongoing(self.list::<OngoingInspection>()?))
    }

    pub fn project_completed(&self, rate: HourlyRate) -> AppResult<Vec<CompletedRow>> {
        Ok(project_completed(self.list::<CompletedInspection>()?, rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ongoing(id: &str, est: &str, bid: f64, worked: f64) -> OngoingInspection {
        OngoingInspection {
            id: id.into(),
            site_name: format!("site {id}"),
            project_number: "P".into(),
            bid_hours: bid,
            hours_worked: worked,
            est_completion: est.into(),
            notes: String::new(),
        }
    }

    fn completed(id: &str, date: &str) -> CompletedInspection {
        CompletedInspection {
            id: id.into(),
            site_name: format!("site {id}"),
            project_number: "P".into(),
            date_completed: date.into(),
            bid_hours: 10.0,
            actual_hours: 12.0,
            bid_price: 500.0,
            discrepancies: String::new(),
            deficiencies: String::new(),
            notes: String::new(),
            report_sent: false,
            hours_history: Vec::new(),
        }
    }

    #[test]
    fn ongoing_sorts_ascending_with_bad_dates_first_and_ties_stable() {
        let rows = project_ongoing(vec![
            ongoing("a", "2024-07-01", 10.0, 5.0),
            ongoing("b", "garbage", 10.0, 5.0),
            ongoing("c", "2024-05-01", 10.0, 5.0),
            ongoing("d", "2024-07-01", 10.0, 5.0),
            ongoing("e", "", 10.0, 5.0),
        ]);
        let order: Vec<&str> = rows.iter().map(|r| r.record.id.as_str()).collect();
        assert_eq!(order, ["b", "e", "c", "a", "d"]);
        assert_eq!(rows[0].est_completion_display(), "");
        assert_eq!(rows[2].est_completion_display(), "05/01/2024");
    }

    #[test]
    fn ongoing_hours_diff_and_tone() {
        let rows = project_ongoing(vec![
            ongoing("over", "2024-01-01", 10.0, 12.0),
            ongoing("under", "2024-01-02", 10.0, 8.0),
            ongoing("even", "2024-01-03", 10.0, 10.0),
        ]);
        assert_eq!(rows[0].hours_diff, 2.0);
        assert_eq!(rows[0].hours_tone, Tone::Unfavorable);
        assert_eq!(rows[1].hours_tone, Tone::Favorable);
        assert_eq!(rows[2].hours_tone, Tone::Neutral);
    }

    #[test]
    fn completed_sorts_descending_with_bad_dates_last_and_ties_stable() {
        let rows = project_completed(
            vec![
                completed("a", ""),
                completed("b", "2024-03-01"),
                completed("c", "2024-05-01"),
                completed("d", "2024-03-01"),
                completed("e", "03/01/2024"),
            ],
            HourlyRate::DEFAULT,
        );
        let order: Vec<&str> = rows.iter().map(|r| r.record.id.as_str()).collect();
        assert_eq!(order, ["c", "b", "d", "a", "e"]);
    }

    #[test]
    fn completed_metrics_follow_the_rate() {
        let mut rec = completed("x", "2024-01-01");
        rec.hours_history = vec![
            HistoryYearEntry { year: 2022, bid: 10.0, actual: 20.0, bid_price: 500.0 },
            HistoryYearEntry { year: 2023, bid: 0.0, actual: 20.0, bid_price: 500.0 },
        ];

        let rows = project_completed(vec![rec], HourlyRate(25.0));
        let row = &rows[0];
        assert!((row.variance.diff_percent - 20.0).abs() < 1e-9);
        assert_eq!(row.price.actual_price, 300.0);
        assert_eq!(row.price.gain_loss, 200.0);
        assert_eq!(row.price.gain_loss, row.record.bid_price - row.record.actual_hours * 25.0);
        assert_eq!(row.diff_tone, Tone::Unfavorable);
        assert_eq!(row.gain_loss_tone, Tone::Favorable);

        // break-even history year is favorable, zero bid has no percent
        assert_eq!(row.history[0].price.gain_loss, 0.0);
        assert_eq!(row.history[0].gain_loss_tone, Tone::Favorable);
        assert_eq!(row.history[1].variance.diff_percent, 0.0);
    }

    #[test]
    fn current_year_gain_loss_is_neutral_only_when_on_bid_hours() {
        // on bid hours with a healthy margin
        let mut rec = completed("x", "2024-01-01");
        rec.bid_hours = 10.0;
        rec.actual_hours = 10.0;
        let row = completed_row(rec, HourlyRate::DEFAULT);
        assert_eq!(row.price.gain_loss, 250.0);
        assert_eq!(row.gain_loss_tone, Tone::Neutral);

        // over bid hours, breaking even on price
        let mut rec = completed("y", "2024-01-01");
        rec.bid_price = 300.0;
        let row = completed_row(rec, HourlyRate::DEFAULT);
        assert_eq!(row.price.gain_loss, 0.0);
        assert_eq!(row.gain_loss_tone, Tone::Unfavorable);
    }
}
