//! component-bridge harness entry point.
//!
//! Runs a bridge over stdio: host messages arrive as JSON lines on stdin,
//! component messages leave as JSON lines on stdout. Logs go to stderr.

use std::io::Stdout;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::error::TryRecvError;
use tracing_subscriber::EnvFilter;

use component_bridge::ComponentBridge;
use component_bridge::bridge::{LineChannel, MemoryDocument};
use component_bridge::config::BridgeConfig;
use component_bridge::domain::event_bus::RenderReceiver;

type StdioBridge = ComponentBridge<LineChannel<Stdout>, MemoryDocument>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = BridgeConfig::from_env()?;
    init_tracing(config.log_json);
    tracing::info!(?config, "starting component-bridge");

    let mut bridge = ComponentBridge::new(
        LineChannel::new(std::io::stdout()),
        MemoryDocument::new(config.body_height),
    );
    let mut renders = bridge.subscribe();

    if config.auto_ready {
        bridge.set_component_ready()?;
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                handle_line(&mut bridge, &line);
                drain_renders(&mut bridge, &mut renders)?;
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("interrupted");
                break;
            }
        }
    }

    tracing::info!(state = ?bridge.state(), "host channel closed");
    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Delivers one stdin line to the bridge. Blank and malformed lines are
/// skipped.
fn handle_line(bridge: &mut StdioBridge, line: &str) {
    let line = line.trim();
    if line.is_empty() {
        return;
    }
    match serde_json::from_str::<serde_json::Value>(line) {
        Ok(data) => {
            bridge.on_message_event(&data);
        }
        Err(e) => tracing::warn!(error = %e, "skipping malformed host message"),
    }
}

/// Consumes pending render events and reports the resulting height.
fn drain_renders(bridge: &mut StdioBridge, renders: &mut RenderReceiver) -> anyhow::Result<()> {
    loop {
        match renders.try_recv() {
            Ok(event) => {
                tracing::info!(
                    disabled = event.disabled,
                    args = %serde_json::Value::Object(event.args.clone()),
                    themed = event.theme.is_some(),
                    "render"
                );
                bridge.set_frame_height(None)?;
            }
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => {
                return Ok(());
            }
        }
    }
}
