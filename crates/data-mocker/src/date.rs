//! Calendar date generation.
//!
//! Every operation reduces its request to an inclusive `[min, max]` pair of
//! days and draws a uniform day offset from `min`. "Today" comes from an
//! injected [`Clock`] so relative windows can be pinned in tests.

use std::fmt;
use std::sync::Arc;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use mockable::{Clock, DefaultClock};
use rand::Rng;

use crate::error::GenerationError;
use crate::random::Random;

/// Shared handle to the clock that defines "today".
pub type SharedClock = Arc<dyn Clock + Send + Sync>;

/// Rejection-sampling budget for weekday and weekend draws.
const MAX_DAY_ATTEMPTS: usize = 64;

/// A meteorological season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    /// December of the previous year through February.
    Winter,
    /// March through May.
    Spring,
    /// June through August.
    Summer,
    /// September through November.
    Fall,
}

impl TryFrom<u8> for Season {
    type Error = GenerationError;

    /// Maps `1..=4` to winter, spring, summer and fall.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Winter),
            2 => Ok(Self::Spring),
            3 => Ok(Self::Summer),
            4 => Ok(Self::Fall),
            other => Err(GenerationError::invalid_argument(format!(
                "season must be between 1 and 4, got {other}"
            ))),
        }
    }
}

/// Generates calendar dates.
#[derive(Clone)]
pub struct DateGenerator {
    random: Random,
    clock: SharedClock,
}

impl DateGenerator {
    /// Creates a generator drawing from `random` with "today" read from
    /// `clock`.
    #[must_use]
    pub fn new(random: Random, clock: SharedClock) -> Self {
        Self { random, clock }
    }

    /// The current local date according to the injected clock.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }

    /// Draws a date from the default window, 1900-01-01 to 2023-12-31.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature matches the other draws.
    pub fn random(&self) -> Result<NaiveDate, GenerationError> {
        let (min, max) = default_window()?;
        self.between(min, max)
    }

    /// Draws a date uniformly from `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidRange`] when `min > max`.
    pub fn between(&self, min: NaiveDate, max: NaiveDate) -> Result<NaiveDate, GenerationError> {
        if min > max {
            return Err(GenerationError::invalid_range(format!(
                "start date {min} is after end date {max}"
            )));
        }
        let span = u64::try_from(max.signed_duration_since(min).num_days())
            .map_err(|err| GenerationError::invalid_range(err.to_string()))?;
        let offset = self.random.rng().random_range(0..=span);
        min.checked_add_days(Days::new(offset))
            .ok_or_else(|| out_of_calendar("date offset"))
    }

    /// Draws a date strictly before today and no earlier than `max_years`
    /// years ago.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] when `max_years` is
    /// negative.
    pub fn past(&self, max_years: i32) -> Result<NaiveDate, GenerationError> {
        let today = self.today();
        let end = today.pred_opt().ok_or_else(|| out_of_calendar("yesterday"))?;
        let start = shift_years(today, -years_arg(max_years, "years")?)?.min(end);
        self.between(start, end)
    }

    /// Draws a date strictly after today and no later than `max_years`
    /// years ahead.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] when `max_years` is
    /// negative.
    pub fn future(&self, max_years: i32) -> Result<NaiveDate, GenerationError> {
        let today = self.today();
        let start = today.succ_opt().ok_or_else(|| out_of_calendar("tomorrow"))?;
        let end = shift_years(today, years_arg(max_years, "years")?)?.max(start);
        self.between(start, end)
    }

    /// Draws a birth date for someone exactly `age` years old today.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] when `age` is negative.
    pub fn birthday(&self, age: i32) -> Result<NaiveDate, GenerationError> {
        let years = years_arg(age, "age")?;
        let today = self.today();
        let end = shift_years(today, -years)?;
        let older = years
            .checked_add(1)
            .ok_or_else(|| out_of_calendar("birthday window"))?;
        let start = shift_years(today, -older)?
            .succ_opt()
            .ok_or_else(|| out_of_calendar("birthday window"))?;
        self.between(start, end)
    }

    /// Draws a date inside `month` (1 to 12) of `year`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] for a month outside
    /// `1..=12`.
    pub fn in_month(&self, month: u32, year: i32) -> Result<NaiveDate, GenerationError> {
        let (first, last) = month_bounds(month, year)?;
        self.between(first, last)
    }

    /// Draws a date inside `season` of `year`.
    ///
    /// Winter spans December of the previous year through the end of
    /// February, including the 29th in leap years.
    ///
    /// # Errors
    ///
    /// Fails only when the season falls outside the supported calendar.
    pub fn in_season(&self, season: Season, year: i32) -> Result<NaiveDate, GenerationError> {
        let (first, last) = match season {
            Season::Winter => {
                let previous = year
                    .checked_sub(1)
                    .ok_or_else(|| out_of_calendar("winter"))?;
                (month_bounds(12, previous)?.0, month_bounds(2, year)?.1)
            }
            Season::Spring => (month_bounds(3, year)?.0, month_bounds(5, year)?.1),
            Season::Summer => (month_bounds(6, year)?.0, month_bounds(8, year)?.1),
            Season::Fall => (month_bounds(9, year)?.0, month_bounds(11, year)?.1),
        };
        self.between(first, last)
    }

    /// Draws a Monday-to-Friday date from the default window.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature matches the other draws.
    pub fn weekday(&self) -> Result<NaiveDate, GenerationError> {
        let (min, max) = default_window()?;
        self.weekday_between(min, max)
    }

    /// Draws a Saturday or Sunday from the default window.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature matches the other draws.
    pub fn weekend(&self) -> Result<NaiveDate, GenerationError> {
        let (min, max) = default_window()?;
        self.weekend_between(min, max)
    }

    /// Draws a Monday-to-Friday date from `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidRange`] when the range is
    /// inverted or contains only weekend days.
    pub fn weekday_between(
        &self,
        min: NaiveDate,
        max: NaiveDate,
    ) -> Result<NaiveDate, GenerationError> {
        self.matching_day(min, max, "weekday", |day| !is_weekend(day))
    }

    /// Draws a Saturday or Sunday from `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidRange`] when the range is
    /// inverted or contains no weekend day.
    pub fn weekend_between(
        &self,
        min: NaiveDate,
        max: NaiveDate,
    ) -> Result<NaiveDate, GenerationError> {
        self.matching_day(min, max, "weekend day", is_weekend)
    }

    fn matching_day(
        &self,
        min: NaiveDate,
        max: NaiveDate,
        what: &str,
        accept: fn(Weekday) -> bool,
    ) -> Result<NaiveDate, GenerationError> {
        // Any seven consecutive days cover every weekday, so the first week
        // decides whether the range can satisfy the predicate at all.
        let fallback = min
            .iter_days()
            .take(7)
            .take_while(|day| *day <= max)
            .find(|day| accept(day.weekday()))
            .ok_or_else(|| {
                GenerationError::invalid_range(format!("no {what} between {min} and {max}"))
            })?;

        for _ in 0..MAX_DAY_ATTEMPTS {
            let candidate = self.between(min, max)?;
            if accept(candidate.weekday()) {
                return Ok(candidate);
            }
        }
        Ok(fallback)
    }
}

impl Default for DateGenerator {
    fn default() -> Self {
        Self::new(Random::default(), Arc::new(DefaultClock))
    }
}

impl fmt::Debug for DateGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateGenerator")
            .field("random", &self.random)
            .finish_non_exhaustive()
    }
}

const fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}

fn default_window() -> Result<(NaiveDate, NaiveDate), GenerationError> {
    let min = NaiveDate::from_ymd_opt(1900, 1, 1).ok_or_else(|| out_of_calendar("1900-01-01"))?;
    let max =
        NaiveDate::from_ymd_opt(2023, 12, 31).ok_or_else(|| out_of_calendar("2023-12-31"))?;
    Ok((min, max))
}

fn years_arg(value: i32, what: &str) -> Result<i32, GenerationError> {
    if value < 0 {
        return Err(GenerationError::invalid_argument(format!(
            "{what} must not be negative, got {value}"
        )));
    }
    Ok(value)
}

/// Moves `date` by whole years, clamping 29 February to the 28th.
fn shift_years(date: NaiveDate, years: i32) -> Result<NaiveDate, GenerationError> {
    let months = years
        .unsigned_abs()
        .checked_mul(12)
        .map(Months::new)
        .ok_or_else(|| out_of_calendar("year shift"))?;
    let shifted = if years < 0 {
        date.checked_sub_months(months)
    } else {
        date.checked_add_months(months)
    };
    shifted.ok_or_else(|| out_of_calendar("year shift"))
}

fn month_bounds(month: u32, year: i32) -> Result<(NaiveDate, NaiveDate), GenerationError> {
    if !(1..=12).contains(&month) {
        return Err(GenerationError::invalid_argument(format!(
            "month must be between 1 and 12, got {month}"
        )));
    }
    let first =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| out_of_calendar("month start"))?;
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or_else(|| out_of_calendar("month end"))?;
    Ok((first, last))
}

fn out_of_calendar(what: &str) -> GenerationError {
    GenerationError::invalid_range(format!("{what} is outside the supported calendar"))
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Local, TimeZone, Utc};
    use rstest::{fixture, rstest};

    use super::*;

    struct FixtureClock {
        utc_now: DateTime<Utc>,
    }

    impl Clock for FixtureClock {
        fn local(&self) -> DateTime<Local> {
            self.utc_now.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.utc_now
        }
    }

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
    }

    #[fixture]
    fn dates() -> DateGenerator {
        let utc_now = Utc
            .with_ymd_and_hms(2024, 6, 15, 12, 0, 0)
            .single()
            .expect("valid fixture timestamp");
        DateGenerator::new(Random::seeded(77), Arc::new(FixtureClock { utc_now }))
    }

    #[rstest]
    fn random_dates_fall_in_the_default_window(dates: DateGenerator) {
        for _ in 0..200 {
            let date = dates.random().expect("default window");
            assert!((ymd(1900, 1, 1)..=ymd(2023, 12, 31)).contains(&date));
        }
    }

    #[rstest]
    fn between_accepts_a_single_day(dates: DateGenerator) {
        let day = ymd(2020, 2, 29);
        assert_eq!(dates.between(day, day), Ok(day));
    }

    #[rstest]
    fn between_rejects_inverted_ranges(dates: DateGenerator) {
        assert!(matches!(
            dates.between(ymd(2020, 1, 2), ymd(2020, 1, 1)),
            Err(GenerationError::InvalidRange { .. })
        ));
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(5)]
    fn past_dates_precede_today(dates: DateGenerator, #[case] years: i32) {
        let today = dates.today();
        let earliest = shift_years(today, -years).expect("in calendar");
        for _ in 0..100 {
            let date = dates.past(years).expect("non-negative years");
            assert!(date < today);
            assert!(date >= earliest.min(today - Days::new(1)));
        }
    }

    #[rstest]
    #[case(0)]
    #[case(5)]
    fn future_dates_follow_today(dates: DateGenerator, #[case] years: i32) {
        let today = dates.today();
        let latest = shift_years(today, years).expect("in calendar");
        for _ in 0..100 {
            let date = dates.future(years).expect("non-negative years");
            assert!(date > today);
            assert!(date <= latest.max(today + Days::new(1)));
        }
    }

    #[rstest]
    fn negative_windows_are_rejected(dates: DateGenerator) {
        for result in [dates.past(-1), dates.future(-1), dates.birthday(-1)] {
            assert!(matches!(
                result,
                Err(GenerationError::InvalidArgument { .. })
            ));
        }
    }

    #[rstest]
    #[case(0)]
    #[case(30)]
    #[case(99)]
    fn birthdays_give_the_requested_age(dates: DateGenerator, #[case] age: i32) {
        let today = dates.today();
        for _ in 0..100 {
            let born = dates.birthday(age).expect("non-negative age");
            let had_birthday = (today.month(), today.day()) >= (born.month(), born.day());
            let computed = today.year() - born.year() - i32::from(!had_birthday);
            assert_eq!(computed, age, "born {born}");
        }
    }

    #[rstest]
    #[case(2, 2024, 29)]
    #[case(2, 2023, 28)]
    #[case(4, 2024, 30)]
    #[case(12, 2024, 31)]
    fn month_draws_stay_in_the_month(
        dates: DateGenerator,
        #[case] month: u32,
        #[case] year: i32,
        #[case] last_day: u32,
    ) {
        for _ in 0..100 {
            let date = dates.in_month(month, year).expect("valid month");
            assert_eq!((date.year(), date.month()), (year, month));
            assert!(date.day() <= last_day);
        }
    }

    #[rstest]
    #[case(0)]
    #[case(13)]
    fn invalid_months_are_rejected(dates: DateGenerator, #[case] month: u32) {
        assert!(matches!(
            dates.in_month(month, 2024),
            Err(GenerationError::InvalidArgument { .. })
        ));
    }

    #[rstest]
    fn winter_spans_the_year_boundary(dates: DateGenerator) {
        for _ in 0..200 {
            let date = dates.in_season(Season::Winter, 2024).expect("winter");
            assert!((ymd(2023, 12, 1)..=ymd(2024, 2, 29)).contains(&date));
        }
    }

    #[rstest]
    #[case(Season::Spring, 3, 5)]
    #[case(Season::Summer, 6, 8)]
    #[case(Season::Fall, 9, 11)]
    fn seasons_cover_their_months(
        dates: DateGenerator,
        #[case] season: Season,
        #[case] first_month: u32,
        #[case] last_month: u32,
    ) {
        for _ in 0..100 {
            let date = dates.in_season(season, 2023).expect("season");
            assert_eq!(date.year(), 2023);
            assert!((first_month..=last_month).contains(&date.month()));
        }
    }

    #[rstest]
    #[case(1, Some(Season::Winter))]
    #[case(4, Some(Season::Fall))]
    #[case(0, None)]
    #[case(5, None)]
    fn seasons_convert_from_numbers(#[case] value: u8, #[case] expected: Option<Season>) {
        assert_eq!(Season::try_from(value).ok(), expected);
    }

    #[rstest]
    fn weekdays_and_weekends_respect_the_calendar(dates: DateGenerator) {
        for _ in 0..100 {
            assert!(!is_weekend(dates.weekday().expect("weekday").weekday()));
            assert!(is_weekend(dates.weekend().expect("weekend").weekday()));
        }
    }

    #[rstest]
    fn weekend_only_ranges_have_no_weekday(dates: DateGenerator) {
        // 2024-06-15 is a Saturday.
        let saturday = ymd(2024, 6, 15);
        let sunday = ymd(2024, 6, 16);
        assert!(matches!(
            dates.weekday_between(saturday, sunday),
            Err(GenerationError::InvalidRange { .. })
        ));
        let day = dates.weekend_between(saturday, sunday).expect("weekend");
        assert!(day == saturday || day == sunday);
    }
}
