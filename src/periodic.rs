//! # Periodic Callbacks
//!
//! Arcade boards derive interrupts from video timing: a scanline counter
//! raises IRQ every N CPU cycles, where N is usually fractional. A
//! [`PeriodicCallback`] keeps the countdown in 16.16 fixed point so the
//! cadence stays exact over long runs, independent of how [`crate::Cpu::run`]
//! is called.

use crate::memory::Bus;
use std::fmt;

const FRACTION_BITS: u32 = 16;
const ONE_CYCLE: i64 = 1 << FRACTION_BITS;

/// A callback invoked every `interval` CPU cycles during [`crate::Cpu::run`].
///
/// The callback receives the bus so it can assert or release interrupt lines
/// and poke hardware state.
///
/// # Examples
///
/// ```
/// use lib6809::{Bus, PeriodicCallback};
///
/// // 1.5MHz CPU, 256 scanlines at 60Hz
/// let scanline = PeriodicCallback::new(1_500_000.0 / (60.0 * 256.0), |bus: &mut Bus| {
///     bus.set_irq(true);
/// });
/// assert!((scanline.interval_cycles() - 97.65625).abs() < 1e-4);
/// ```
pub struct PeriodicCallback {
    /// Cycles between calls, 16.16 fixed point
    interval: i64,
    /// Cycles until the next call, 16.16 fixed point
    countdown: i64,
    callback: Box<dyn FnMut(&mut Bus)>,
}

impl PeriodicCallback {
    /// Creates a callback firing every `interval_cycles` cycles.
    ///
    /// Intervals below one cycle (including NaN and negative values) are
    /// clamped to one cycle.
    pub fn new<F>(interval_cycles: f64, callback: F) -> Self
    where
        F: FnMut(&mut Bus) + 'static,
    {
        let interval = if interval_cycles.is_finite() && interval_cycles >= 1.0 {
            (interval_cycles * ONE_CYCLE as f64).round() as i64
        } else {
            ONE_CYCLE
        };
        Self {
            interval,
            countdown: interval,
            callback: Box::new(callback),
        }
    }

    pub fn interval_cycles(&self) -> f64 {
        self.interval as f64 / ONE_CYCLE as f64
    }

    /// Restarts the countdown from a full interval.
    pub(crate) fn restart(&mut self) {
        self.countdown = self.interval;
    }

    /// Accounts for `elapsed` cycles, calling the callback once per interval
    /// boundary crossed.
    pub(crate) fn advance(&mut self, elapsed: u64, bus: &mut Bus) {
        let elapsed = elapsed.min(u32::MAX as u64) as i64;
        self.countdown -= elapsed << FRACTION_BITS;
        while self.countdown <= 0 {
            self.countdown += self.interval;
            (self.callback)(bus);
        }
    }
}

impl fmt::Debug for PeriodicCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PeriodicCallback")
            .field("interval_cycles", &self.interval_cycles())
            .finish_non_exhaustive()
    }
}
