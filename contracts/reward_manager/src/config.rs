//! Fixed configuration of the reward manager.

/// Fixed-point scaling factor of the reward-per-token accumulator.
///
/// The accumulator is kept in 256 bits, so a tiny supply facing a large
/// funding cannot overflow it.
pub const SCALE: i128 = 1_000_000_000_000_000_000;

/// Fixed-point scaling factor of `reward_rate`.
///
/// Gives sub-unit emission per second for small fundings over long periods
/// while `amount * RATE_SCALE` stays within `i128` for fundings up to ~10^29.
pub const RATE_SCALE: i128 = 1_000_000_000;

/// Converts an emission in `RATE_SCALE` units to `SCALE` units.
pub const RATE_TO_SCALE: i128 = SCALE / RATE_SCALE;

/// Seconds in one day.
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Default length of a funding period (7 days).
pub const DEFAULT_REWARDS_DURATION: u64 = 7 * SECONDS_PER_DAY;
