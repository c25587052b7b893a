//! Range-constrained numeric generation.
//!
//! Parity and divisibility constraints use a reduced-space draw: both ends
//! of the range are moved inwards to the nearest qualifying value, the
//! number of qualifying values is counted, and a uniform index into that
//! count is drawn. Arithmetic happens in `i128` so the full `i64` domain is
//! accepted without overflow.

use rand::Rng;

use crate::error::GenerationError;
use crate::random::{Random, pick};


/// Highest number of decimal places `decimal` will round to.
pub const MAX_PRECISION: u32 = 10;

/// Generates integers, decimals and booleans.
#[derive(Debug, Clone, Default)]
pub struct NumberGenerator {
    random: Random,
}

impl NumberGenerator {
    /// Creates a generator drawing from `random`.
    #[must_use]
    pub const fn new(random: Random) -> Self {
        Self { random }
    }

    /// Draws an integer uniformly from `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidRange`] when `min > max`.
    pub fn integer(&self, min: i64, max: i64) -> Result<i64, GenerationError> {
        self.random.int_between(min, max)
    }

    /// Draws an even integer uniformly from `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidRange`] when `min > max` or the
    /// range holds no even value.
    pub fn even(&self, min: i64, max: i64) -> Result<i64, GenerationError> {
        self.stepped(min, max, 2, 0, "even")
    }

    /// Draws an odd integer uniformly from `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidRange`] when `min > max` or the
    /// range holds no odd value.
    pub fn odd(&self, min: i64, max: i64) -> Result<i64, GenerationError> {
        self.stepped(min, max, 2, 1, "odd")
    }

    /// Draws a multiple of `divisor` uniformly from `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidRange`] when `divisor <= 0`,
    /// `min > max`, or no multiple lies in the range.
    pub fn divisible_by(&self, min: i64, max: i64, divisor: i64) -> Result<i64, GenerationError> {
        if divisor <= 0 {
            return Err(GenerationError::invalid_range(format!(
                "divisor must be positive, got {divisor}"
            )));
        }
        self.stepped(min, max, divisor, 0, "multiple")
    }

    /// Draws a prime uniformly from the primes in `[min, max]`.
    ///
    /// Every candidate from `max(min, 2)` to `max` is tested by trial
    /// division, so the cost grows with the width of that span.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidRange`] when `min > max` or the
    /// range holds no prime.
    pub fn prime(&self, min: i64, max: i64) -> Result<i64, GenerationError> {
        check_order(min, max)?;
        let primes: Vec<i64> = (min.max(2)..=max).filter(|&n| is_prime(n)).collect();
        if primes.is_empty() {
            return Err(GenerationError::invalid_range(format!(
                "no prime value in [{min}, {max}]"
            )));
        }
        pick(&mut self.random.rng(), &primes, "primes")
    }

    /// Draws a decimal from `[min, max]`, optionally rounded to
    /// `precision` decimal places.
    ///
    /// Rounded results are kept inside the range by rounding towards it
    /// when plain rounding would step outside.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidRange`] when either bound is not
    /// finite, when `min > max`, or when no value with the requested
    /// precision lies in the range. Returns
    /// [`GenerationError::InvalidArgument`] when `precision` exceeds
    /// [`MAX_PRECISION`].
    #[expect(
        clippy::float_arithmetic,
        reason = "linear interpolation between the bounds"
    )]
    pub fn decimal(
        &self,
        min: f64,
        max: f64,
        precision: Option<u32>,
    ) -> Result<f64, GenerationError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(GenerationError::invalid_range(
                "decimal bounds must be finite",
            ));
        }
        if min > max {
            return Err(GenerationError::invalid_range(format!(
                "min {min} is greater than max {max}"
            )));
        }
        if let Some(places) = precision
            && places > MAX_PRECISION
        {
            return Err(GenerationError::invalid_argument(format!(
                "precision must be between 0 and {MAX_PRECISION}, got {places}"
            )));
        }

        let u: f64 = self.random.rng().random();
        // Weighted form avoids overflow when `max - min` exceeds f64::MAX.
        let value = min.mul_add(1.0 - u, max * u).clamp(min, max);

        match precision {
            None => Ok(value),
            Some(places) => round_within(value, min, max, places),
        }
    }

    /// Draws a percentage from `[0, 100]`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] when `precision`
    /// exceeds [`MAX_PRECISION`].
    pub fn percentage(&self, precision: Option<u32>) -> Result<f64, GenerationError> {
        self.decimal(0.0, 100.0, precision)
    }

    /// Returns `true` with probability `true_probability`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] when the probability is
    /// outside `[0, 1]` or not a number.
    pub fn boolean(&self, true_probability: f64) -> Result<bool, GenerationError> {
        if !(0.0..=1.0).contains(&true_probability) {
            return Err(GenerationError::invalid_argument(format!(
                "probability must be between 0 and 1, got {true_probability}"
            )));
        }
        Ok(self.random.rng().random_bool(true_probability))
    }

    /// Draws uniformly from the values `v` in `[min, max]` with
    /// `v mod step == residue`.
    fn stepped(
        &self,
        min: i64,
        max: i64,
        step: i64,
        residue: i64,
        what: &str,
    ) -> Result<i64, GenerationError> {
        check_order(min, max)?;
        let (lo, hi, step_wide, residue_wide) = (
            i128::from(min),
            i128::from(max),
            i128::from(step),
            i128::from(residue),
        );

        let below = (lo - residue_wide).rem_euclid(step_wide);
        let first = if below == 0 { lo } else { lo + step_wide - below };
        let last = hi - (hi - residue_wide).rem_euclid(step_wide);
        if first > last {
            return Err(GenerationError::invalid_range(format!(
                "no {what} value in [{min}, {max}]"
            )));
        }

        let count = (last - first).div_euclid(step_wide) + 1;
        let index = self.random.rng().random_range(0..count);
        i64::try_from(first + step_wide * index)
            .map_err(|err| GenerationError::invalid_range(err.to_string()))
    }
}

fn check_order(min: i64, max: i64) -> Result<(), GenerationError> {
    if min > max {
        return Err(GenerationError::invalid_range(format!(
            "min {min} is greater than max {max}"
        )));
    }
    Ok(())
}

/// Trial division up to the square root.
fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n.rem_euclid(2) == 0 {
        return false;
    }
    let mut divisor: i64 = 3;
    while divisor.checked_mul(divisor).is_some_and(|square| square <= n) {
        if n.rem_euclid(divisor) == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

#[expect(clippy::float_arithmetic, reason = "decimal rounding")]
fn round_within(value: f64, min: f64, max: f64, places: u32) -> Result<f64, GenerationError> {
    let factor = (0..places).fold(1.0_f64, |acc, _| acc * 10.0);
    let scaled = value * factor;
    if !scaled.is_finite() || !(min * factor).is_finite() || !(max * factor).is_finite() {
        return Ok(value);
    }
    let lowest = (min * factor).ceil() / factor;
    let highest = (max * factor).floor() / factor;
    if lowest > highest {
        return Err(GenerationError::invalid_range(format!(
            "no value with {places} decimal places in [{min}, {max}]"
        )));
    }
    Ok((scaled.round() / factor).clamp(lowest, highest))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn numbers() -> NumberGenerator {
        NumberGenerator::new(Random::seeded(2024))
    }

    #[rstest]
    #[case(0, 0)]
    #[case(-10, 10)]
    #[case(1, 1_000)]
    fn integer_stays_in_range(numbers: NumberGenerator, #[case] min: i64, #[case] max: i64) {
        for _ in 0..100 {
            let value = numbers.integer(min, max).expect("valid range");
            assert!((min..=max).contains(&value));
        }
    }

    #[rstest]
    fn integer_draws_are_spread(numbers: NumberGenerator) {
        let seen: HashSet<i64> = (0..100)
            .map(|_| numbers.integer(1, 1_000).expect("valid range"))
            .collect();
        assert!(seen.len() > 50, "only {} distinct values", seen.len());
    }

    #[rstest]
    #[case(1, 100)]
    #[case(-7, -1)]
    #[case(3, 4)]
    #[case(i64::MIN, i64::MAX)]
    fn even_values_are_even_and_in_range(
        numbers: NumberGenerator,
        #[case] min: i64,
        #[case] max: i64,
    ) {
        for _ in 0..100 {
            let value = numbers.even(min, max).expect("range holds an even value");
            assert_eq!(value.rem_euclid(2), 0);
            assert!((min..=max).contains(&value));
        }
    }

    #[rstest]
    #[case(1, 100)]
    #[case(-7, -1)]
    #[case(i64::MAX - 1, i64::MAX)]
    #[case(i64::MIN, i64::MIN + 1)]
    fn odd_values_are_odd_and_in_range(
        numbers: NumberGenerator,
        #[case] min: i64,
        #[case] max: i64,
    ) {
        for _ in 0..100 {
            let value = numbers.odd(min, max).expect("range holds an odd value");
            assert_eq!(value.rem_euclid(2), 1);
            assert!((min..=max).contains(&value));
        }
    }

    #[rstest]
    fn single_value_ranges_of_the_wrong_parity_fail(numbers: NumberGenerator) {
        assert!(matches!(
            numbers.even(11, 11),
            Err(GenerationError::InvalidRange { .. })
        ));
        assert!(matches!(
            numbers.odd(10, 10),
            Err(GenerationError::InvalidRange { .. })
        ));
        assert_eq!(numbers.even(12, 12), Ok(12));
    }

    #[rstest]
    #[case(1, 100, 7)]
    #[case(-50, 50, 10)]
    #[case(14, 14, 7)]
    fn multiples_divide_evenly(
        numbers: NumberGenerator,
        #[case] min: i64,
        #[case] max: i64,
        #[case] divisor: i64,
    ) {
        for _ in 0..50 {
            let value = numbers
                .divisible_by(min, max, divisor)
                .expect("range holds a multiple");
            assert_eq!(value.rem_euclid(divisor), 0);
            assert!((min..=max).contains(&value));
        }
    }

    #[rstest]
    #[case(1, 10, 0)]
    #[case(1, 10, -3)]
    #[case(1, 6, 7)]
    #[case(10, 1, 2)]
    fn impossible_multiples_fail(
        numbers: NumberGenerator,
        #[case] min: i64,
        #[case] max: i64,
        #[case] divisor: i64,
    ) {
        assert!(matches!(
            numbers.divisible_by(min, max, divisor),
            Err(GenerationError::InvalidRange { .. })
        ));
    }

    #[rstest]
    fn primes_come_from_the_range(numbers: NumberGenerator) {
        let expected = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29];
        for _ in 0..50 {
            let value = numbers.prime(-5, 30).expect("range holds primes");
            assert!(expected.contains(&value), "{value} is not a small prime");
        }
    }

    #[rstest]
    #[case(14, 16)]
    #[case(-10, 1)]
    #[case(24, 28)]
    fn prime_free_ranges_fail(numbers: NumberGenerator, #[case] min: i64, #[case] max: i64) {
        assert!(matches!(
            numbers.prime(min, max),
            Err(GenerationError::InvalidRange { .. })
        ));
    }

    #[rstest]
    fn prime_searches_ignore_a_deep_negative_floor(numbers: NumberGenerator) {
        for _ in 0..50 {
            let value = numbers.prime(-2_000_000, 10).expect("range holds primes");
            assert!([2, 3, 5, 7].contains(&value), "{value}");
        }
    }

    #[rstest]
    #[case(97, true)]
    #[case(1, false)]
    #[case(91, false)]
    #[case(7919, true)]
    fn trial_division_classifies(#[case] n: i64, #[case] prime: bool) {
        assert_eq!(is_prime(n), prime);
    }

    #[rstest]
    fn decimals_stay_in_range(numbers: NumberGenerator) {
        for _ in 0..200 {
            let value = numbers.decimal(1.5, 5.5, None).expect("valid range");
            assert!((1.5..=5.5).contains(&value));
        }
    }

    #[rstest]
    #[expect(clippy::float_arithmetic, reason = "checks rounding")]
    fn decimals_honour_precision(numbers: NumberGenerator) {
        for _ in 0..100 {
            let value = numbers.decimal(0.0, 10.0, Some(2)).expect("valid range");
            let scaled = value * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-6, "{value}");
        }
    }

    #[rstest]
    fn rounding_never_leaves_the_range(numbers: NumberGenerator) {
        for _ in 0..100 {
            let value = numbers.decimal(1.21, 1.29, Some(1)).err();
            assert!(matches!(value, Some(GenerationError::InvalidRange { .. })));
            let kept = numbers.decimal(1.26, 1.34, Some(1)).expect("1.3 fits");
            assert!((1.26..=1.34).contains(&kept));
        }
    }

    #[rstest]
    #[case(f64::NAN, 1.0)]
    #[case(0.0, f64::INFINITY)]
    #[case(2.0, 1.0)]
    fn bad_decimal_bounds_fail(numbers: NumberGenerator, #[case] min: f64, #[case] max: f64) {
        assert!(matches!(
            numbers.decimal(min, max, None),
            Err(GenerationError::InvalidRange { .. })
        ));
    }

    #[rstest]
    fn excessive_precision_fails(numbers: NumberGenerator) {
        assert!(matches!(
            numbers.decimal(0.0, 1.0, Some(11)),
            Err(GenerationError::InvalidArgument { .. })
        ));
    }

    #[rstest]
    fn extreme_decimal_bounds_are_accepted(numbers: NumberGenerator) {
        let value = numbers
            .decimal(f64::MIN, f64::MAX, None)
            .expect("finite bounds");
        assert!(value.is_finite());
    }

    #[rstest]
    fn percentages_stay_between_zero_and_one_hundred(numbers: NumberGenerator) {
        for _ in 0..200 {
            let value = numbers.percentage(Some(1)).expect("valid precision");
            assert!((0.0..=100.0).contains(&value));
        }
    }

    #[rstest]
    fn certain_probabilities_are_deterministic(numbers: NumberGenerator) {
        for _ in 0..50 {
            assert_eq!(numbers.boolean(1.0), Ok(true));
            assert_eq!(numbers.boolean(0.0), Ok(false));
        }
    }

    #[rstest]
    #[case(-0.1)]
    #[case(1.5)]
    #[case(f64::NAN)]
    fn invalid_probabilities_fail(numbers: NumberGenerator, #[case] probability: f64) {
        assert!(matches!(
            numbers.boolean(probability),
            Err(GenerationError::InvalidArgument { .. })
        ));
    }
}
