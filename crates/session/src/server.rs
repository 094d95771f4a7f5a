//! Line server - runs one session over a JSON line stream
//!
//! Reads client messages from `reader` and writes one observation per
//! session update to `writer`, in `seq` order. Malformed lines are answered
//! with an error message and otherwise ignored. `quit` or end of input stops
//! the session; updates queued before that are still written.

use anyhow::Result;
use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};

use crate::core::{EngineConfig, RoundSnapshot};
use crate::protocol::{ClientMessage, ErrorMessage, ObservationMessage};
use crate::runtime::{SessionCommand, SessionHandle};

/// Serve a session until the client quits or closes its input.
///
/// Returns the session's last snapshot.
pub async fn serve<R, W>(config: EngineConfig, reader: R, mut writer: W) -> Result<RoundSnapshot>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let (session, mut updates) = SessionHandle::spawn_with_updates(config);
    let mut lines = reader.lines();
    let mut buf: Vec<u8> = Vec::with_capacity(1024);

    loop {
        tokio::select! {
            biased;

            update = updates.recv() => match update {
                Some(update) => {
                    write_message(&mut writer, &mut buf, &ObservationMessage::from_update(&update)).await?;
                }
                None => break,
            },
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match ClientMessage::parse_line(&line).and_then(ClientMessage::into_command) {
                    Ok(SessionCommand::Shutdown) => break,
                    Ok(cmd) => session.send(cmd).await?,
                    Err(e) => {
                        warn!(error = %e, "rejected input line");
                        write_message(&mut writer, &mut buf, &ErrorMessage::new(e.to_string())).await?;
                    }
                }
            }
        }
    }

    // Commands already queued run before the shutdown; flush their updates.
    let last = session.shutdown().await?;
    while let Some(update) = updates.recv().await {
        write_message(&mut writer, &mut buf, &ObservationMessage::from_update(&update)).await?;
    }
    writer.shutdown().await?;

    info!(level = last.level, round_id = last.round_id, "line session finished");
    Ok(last)
}

async fn write_message<W, T>(writer: &mut W, buf: &mut Vec<u8>, msg: &T) -> Result<()>
where
    W: AsyncWrite + Unpin,
    T: Serialize,
{
    buf.clear();
    serde_json::to_writer(&mut *buf, msg)?;
    buf.push(b'\n');
    writer.write_all(buf.as_slice()).await?;
    writer.flush().await?;
    Ok(())
}
