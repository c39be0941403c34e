//! Scan task
//!
//! Owns the sweep engine and runs the scan cycle on each tick: advance
//! the sweep, point the servo, ping the ranger, update the tracker and
//! hand the finished frame to the TX task. Host run control arrives as
//! START/STOP commands; while stopped the hardware stays released.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::Delay;

use sonarc_core::engine::SweepEngine;
use sonarc_drivers::servo::Sg90;
use sonarc_drivers::sonar::Hcsr04;
use sonarc_hal_rp2040::{EchoPin, ServoPwm, TriggerPin, UptimeClock};
use sonarc_protocol::HostCommand;

use crate::channels::{FRAME_CHANNEL, SCAN_COMMAND};
use crate::tasks::tick::TICK_SIGNAL;

/// Sweep engine wired to this board's peripherals
pub type BoardEngine = SweepEngine<
    Sg90<ServoPwm<'static>, Delay>,
    Hcsr04<TriggerPin<'static>, EchoPin<'static>, UptimeClock, Delay>,
>;

/// Scan task - drives the sweep/ping/track cycle
#[embassy_executor::task]
pub async fn scan_task(mut engine: BoardEngine) {
    info!("Scan task started");

    // Scanning starts at boot without waiting for the host
    engine.start();
    let mut running = true;
    info!("Servo calibrated, sweep running");

    loop {
        match select(TICK_SIGNAL.wait(), SCAN_COMMAND.wait()).await {
            Either::First(now) => {
                if !running {
                    continue;
                }

                let frame = engine.tick(now);
                trace!(
                    "Tick: angle={} distance_x10={} blips={}",
                    frame.angle,
                    frame.distance_x10,
                    frame.blips.len()
                );

                if FRAME_CHANNEL.try_send(frame).is_err() {
                    warn!("Frame channel full, dropping frame");
                }
            }
            Either::Second(command) => match command {
                HostCommand::Start => {
                    if !running {
                        info!("Host requested start, recalibrating");
                        engine.start();
                        running = true;
                    }
                }
                HostCommand::Stop => {
                    if running {
                        info!("Host requested stop, releasing hardware");
                        engine.shutdown();
                        running = false;
                    }
                }
                // Heartbeats are answered by the RX task
                HostCommand::Ping => {}
            },
        }
    }
}
