use crate::casting::{
    wrap6, wrap8, ChangeLineStrategy, CodeSeedStrategy, FIXED_TIME_FACTOR,
};
use crate::model::{CodeSample, TimeSample, TrigramPair};

/// Code-mode casting, used for instrument readings.
///
/// Upper comes from the head-triplet digit sum, lower from the tail triplet,
/// both wrapped into [1,8]. The seed strategy optionally mixes live time into
/// the sums before the modulo; the change line always combines both sums with
/// the configured time factor.
pub fn cast_code_hexagram(
    code: &CodeSample,
    sample: &TimeSample,
    seed: CodeSeedStrategy,
    line: ChangeLineStrategy,
) -> TrigramPair {
    let sum_head = code.head_sum() as i64;
    let sum_tail = code.tail_sum() as i64;

    let upper_seed = match seed {
        CodeSeedStrategy::LiveHour => sum_head + sample.hour as i64,
        CodeSeedStrategy::Static | CodeSeedStrategy::LiveMinute => sum_head,
    };
    let lower_seed = match seed {
        CodeSeedStrategy::LiveMinute => sum_tail + sample.minute as i64,
        CodeSeedStrategy::Static | CodeSeedStrategy::LiveHour => sum_tail,
    };

    let time_factor = match line {
        ChangeLineStrategy::UseHour => sample.hour as i64,
        ChangeLineStrategy::UseFixedConstant => FIXED_TIME_FACTOR as i64,
        ChangeLineStrategy::UseLiveMinute => sample.minute as i64,
    };

    TrigramPair {
        upper: wrap8(upper_seed),
        lower: wrap8(lower_seed),
        change_line: Some(wrap6(sum_head + sum_tail + time_factor)),
    }
}
