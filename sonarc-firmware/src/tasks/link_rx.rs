//! Host link receive task
//!
//! Pulls bytes off the UART, reassembles frames and routes the decoded
//! commands to the tasks that act on them.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use sonarc_protocol::{FrameParser, HostCommand};

use crate::channels::{PING_RECEIVED, SCAN_COMMAND};

/// UART read chunk size
const RX_BUF_SIZE: usize = 64;

/// Reassembles host frames from the UART byte stream
#[embassy_executor::task]
pub async fn link_rx_task(mut rx: BufferedUartRx<'static>) {
    info!("Link RX task started");

    let mut parser = FrameParser::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        let n = match rx.read(&mut buf).await {
            Ok(0) => continue,
            Ok(n) => n,
            Err(e) => {
                warn!("Link RX UART error: {:?}", e);
                continue;
            }
        };
        trace!("Link RX: {} bytes", n);

        for &byte in &buf[..n] {
            match parser.feed(byte) {
                Ok(Some(frame)) => match HostCommand::from_frame(&frame) {
                    Ok(cmd) => handle_host_command(cmd),
                    Err(e) => warn!("Failed to decode host command: {:?}", e),
                },
                Ok(None) => {}
                Err(e) => warn!("Frame parse error: {:?}", e),
            }
        }
    }
}

/// Route one decoded host command
fn handle_host_command(cmd: HostCommand) {
    match cmd {
        HostCommand::Ping => {
            trace!("PING from host");
            PING_RECEIVED.signal(());
        }
        HostCommand::Start | HostCommand::Stop => {
            debug!("Run control: {:?}", cmd);
            SCAN_COMMAND.signal(cmd);
        }
    }
}
