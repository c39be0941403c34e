//! Tick task for scan pacing
//!
//! Provides the nominal scan cadence. A scan tick blocks on servo
//! settling and the echo window, so it routinely outlasts the interval;
//! the timestamp rides a Signal so missed ticks collapse into the
//! latest one instead of queueing a burst.

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Instant, Ticker};

/// Nominal interval between sweep steps, in milliseconds
pub const TICK_INTERVAL_MS: u32 = 16;

/// Latest tick, carrying microseconds since boot
pub static TICK_SIGNAL: Signal<CriticalSectionRawMutex, u64> = Signal::new();

/// Paces the sweep, stamping each tick with the current uptime
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS as u64));

    loop {
        ticker.next().await;

        // Signal the scan task with the current uptime
        TICK_SIGNAL.signal(Instant::now().as_micros());
    }
}
