use crate::casting::{wrap6, wrap8, ChangeLineStrategy};
use crate::model::{TimeSample, TrigramPair};

/// Time-mode casting, used for sector readings.
///
/// `upper = (y + m + d) mod 8`, `lower = (y + m + d + h) mod 8`, both with the
/// 0→8 wraparound. The change line follows the configured strategy; only
/// `UseLiveMinute` makes it drift within the hour.
pub fn cast_time_hexagram(sample: &TimeSample, strategy: ChangeLineStrategy) -> TrigramPair {
    let date_sum = sample.date_sum();
    let hour = sample.hour as i64;

    let upper = wrap8(date_sum);
    let lower = wrap8(date_sum + hour);

    let line_seed = match strategy {
        ChangeLineStrategy::UseHour | ChangeLineStrategy::UseFixedConstant => date_sum + hour,
        ChangeLineStrategy::UseLiveMinute => date_sum + hour + sample.minute as i64,
    };
    let change_line = wrap6(line_seed);

    TrigramPair {
        upper,
        lower,
        change_line: Some(change_line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> TimeSample {
        TimeSample { year, month, day, hour, minute }
    }

    #[test]
    fn casting_matches_hand_computation() {
        // 2025 + 3 + 1 = 2029; 2029 % 8 = 5; (2029 + 10) % 8 = 7; (2039) % 6 = 5.
        let pair = cast_time_hexagram(&at(2025, 3, 1, 10, 0), ChangeLineStrategy::UseHour);
        assert_eq!(pair.upper, 5);
        assert_eq!(pair.lower, 7);
        assert_eq!(pair.change_line, Some(5));
    }

    #[test]
    fn date_sum_multiple_of_eight_resolves_to_eight() {
        // date_sum = 8 + 4 + 4 = 16.
        let pair = cast_time_hexagram(&at(8, 4, 4, 8, 0), ChangeLineStrategy::UseHour);
        assert_eq!(pair.upper, 8);
        // 16 + 8 = 24, also a multiple of 8 and of 6.
        assert_eq!(pair.lower, 8);
        assert_eq!(pair.change_line, Some(6));
    }

    #[test]
    fn outputs_always_in_range() {
        for day in 1..=31 {
            for hour in 1..=24 {
                let pair =
                    cast_time_hexagram(&at(2026, 8, day, hour, 30), ChangeLineStrategy::UseLiveMinute);
                assert!((1..=8).contains(&pair.upper));
                assert!((1..=8).contains(&pair.lower));
                assert!((1..=6).contains(&pair.change_line.unwrap()));
            }
        }
    }

    #[test]
    fn minute_strategy_perturbs_only_the_change_line() {
        let a = cast_time_hexagram(&at(2025, 3, 1, 10, 7), ChangeLineStrategy::UseLiveMinute);
        let b = cast_time_hexagram(&at(2025, 3, 1, 10, 8), ChangeLineStrategy::UseLiveMinute);
        assert_eq!(a.upper, b.upper);
        assert_eq!(a.lower, b.lower);
        assert_ne!(a.change_line, b.change_line);
    }
}
