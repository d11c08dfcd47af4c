// Casting module: derives hexagram coordinates from time or a stock code.

pub mod code_casting;
pub mod time_casting;

pub use code_casting::cast_code_hexagram;
pub use time_casting::cast_time_hexagram;

use serde::Deserialize;

/// How the change line incorporates time of day. The original scripts
/// disagreed, so the choice is explicit configuration rather than a default
/// picked silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeLineStrategy {
    UseHour,
    UseFixedConstant,
    UseLiveMinute,
}

/// Constant substituted for the time factor under `UseFixedConstant`.
pub const FIXED_TIME_FACTOR: u32 = 6;

/// Whether code-mode trigram derivation mixes in live time. `Static` keeps a
/// stable per-instrument identity; the live variants deliberately reshuffle
/// the hexagram through the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeSeedStrategy {
    Static,
    LiveHour,
    LiveMinute,
}

/// Modulo with wraparound into [1,8]: a residue of 0 becomes 8.
pub(crate) fn wrap8(n: i64) -> u8 {
    let r = (n % 8) as u8;
    if r == 0 { 8 } else { r }
}

/// Modulo with wraparound into [1,6]: a residue of 0 becomes 6.
pub(crate) fn wrap6(n: i64) -> u8 {
    let r = (n % 6) as u8;
    if r == 0 { 6 } else { r }
}
