//! Sonarc - Sweep Scanner Firmware
//!
//! Main firmware binary for RP2040-based ultrasonic sweep scanners.
//! A servo carries an HC-SR04 ranger across a half-circle arc while the
//! tracker turns echoes into fading blips streamed to a host display.
//!
//! Named for what it draws: an arc of sonar.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::UART0;
use embassy_rp::pwm::Pwm;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use sonarc_core::config::{SweepConfig, TrackerConfig};
use sonarc_core::engine::SweepEngine;
use sonarc_drivers::servo::{ServoConfig, Sg90};
use sonarc_drivers::sonar::{Hcsr04, SonarConfig};
use sonarc_hal_rp2040::{EchoPin, ServoPwm, TriggerPin, UptimeClock};

mod channels;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// UART ring buffers, lent to the driver for the life of the firmware
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Sonarc firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("RP2040 up");

    // Host link UART on GPIO0/GPIO1
    let uart_config = UartConfig::default(); // 115200-8-N-1

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("Host link UART ready");

    // Sweep servo signal on GPIO16 (PWM slice 0, channel A)
    let pwm = Pwm::new_output_a(p.PWM_SLICE0, p.PIN_16, embassy_rp::pwm::Config::default());
    let servo = Sg90::new(ServoPwm::new(pwm), Delay, ServoConfig::default());

    info!("Servo PWM ready");

    // Ranger trigger on GPIO14, echo on GPIO15
    let trigger = TriggerPin::new(p.PIN_14.into());
    let echo = EchoPin::new(p.PIN_15.into());
    let ranger = Hcsr04::new(trigger, echo, UptimeClock, Delay, SonarConfig::default());

    info!("Ranger pins ready");

    let engine = SweepEngine::new(servo, ranger, SweepConfig::default(), TrackerConfig::default());

    spawner.spawn(tasks::tick_task()).unwrap();
    spawner.spawn(tasks::link_rx_task(rx)).unwrap();
    spawner.spawn(tasks::link_tx_task(tx)).unwrap();
    spawner.spawn(tasks::scan_task(engine)).unwrap();

    info!("Tasks spawned, sweep running");

    // All the work happens in the spawned tasks; this just proves liveness
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("main alive");
    }
}
