//! Host UART transmit task
//!
//! Streams sweep frames and heartbeat responses to the host.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use sonarc_core::frame::SweepFrame;
use sonarc_protocol::frame::MAX_FRAME_SIZE;
use sonarc_protocol::ScannerMessage;

use crate::channels::{FRAME_CHANNEL, PING_RECEIVED};

/// Link TX task - sends frames to the host
#[embassy_executor::task]
pub async fn link_tx_task(mut tx: BufferedUartTx<'static>) {
    info!("Link TX task started");

    loop {
        match select(FRAME_CHANNEL.receive(), PING_RECEIVED.wait()).await {
            Either::First(frame) => send_frame(&mut tx, &frame).await,
            Either::Second(()) => send_pong(&mut tx).await,
        }
    }
}

/// Send a sweep frame to the host
async fn send_frame(tx: &mut BufferedUartTx<'static>, sweep: &SweepFrame) {
    match ScannerMessage::Frame(sweep).to_frame() {
        Ok(frame) => {
            let mut buf = [0u8; MAX_FRAME_SIZE];
            if let Ok(len) = frame.encode(&mut buf) {
                if let Err(e) = tx.write_all(&buf[..len]).await {
                    warn!("Failed to send frame: {:?}", e);
                }
            }
        }
        Err(e) => {
            warn!("Failed to encode frame: {:?}", e);
        }
    }
}

/// Answer a host heartbeat
async fn send_pong(tx: &mut BufferedUartTx<'static>) {
    if let Ok(frame) = ScannerMessage::Pong.to_frame() {
        let mut buf = [0u8; 8];
        if let Ok(len) = frame.encode(&mut buf) {
            if let Err(e) = tx.write_all(&buf[..len]).await {
                warn!("PONG write failed: {:?}", e);
            } else {
                trace!("PONG out");
            }
        }
    }
}
