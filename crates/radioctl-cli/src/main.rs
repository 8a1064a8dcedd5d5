mod cli;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use radioctl_core::{Device, Event, Rfkill, Target};

use cli::{Cli, Commands};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json = cli.json;

    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        });
    }

    let rfkill = Rfkill::new();

    match cli.command {
        Commands::List => {
            let devices = rfkill.list(&cancel)?;
            print_devices(&devices, json)?;
        }
        Commands::BlockId { id } => rfkill.block(Target::Id(id))?,
        Commands::UnblockId { id } => rfkill.unblock(Target::Id(id))?,
        Commands::BlockType { radio_type } => rfkill.block(Target::Type(radio_type))?,
        Commands::UnblockType { radio_type } => rfkill.unblock(Target::Type(radio_type))?,
        Commands::Events { poll_ms } => {
            let result = rfkill
                .events(&cancel, Duration::from_millis(poll_ms), |ev| {
                    print_event(ev, json);
                })
                .await;
            // Interrupting the foreground monitor is a clean exit.
            match result {
                Err(err) if err.is_cancelled() => {}
                other => other?,
            }
        }
    }

    Ok(())
}

fn print_devices(devices: &[Device], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(devices)?);
        return Ok(());
    }

    println!(
        "{:<4} {:<10} {:<24} {:<9} {:<9}",
        "ID", "TYPE", "NAME", "SOFT", "HARD"
    );
    for dev in devices {
        println!(
            "{:<4} {:<10} {:<24} {:<9} {:<9}",
            dev.id,
            dev.radio_type.to_string(),
            dev.name,
            block_state(dev.soft_blocked),
            block_state(dev.hard_blocked),
        );
    }
    Ok(())
}

fn print_event(ev: Event, json: bool) {
    if json {
        match serde_json::to_string(&ev) {
            Ok(line) => println!("{line}"),
            Err(err) => warn!("failed to encode event: {err}"),
        }
        return;
    }

    println!(
        "event: id={} op={} type={} soft={} hard={}",
        ev.id,
        ev.op,
        ev.radio_type,
        block_state(ev.soft_blocked),
        block_state(ev.hard_blocked),
    );
}

fn block_state(blocked: bool) -> &'static str {
    if blocked {
        "blocked"
    } else {
        "unblocked"
    }
}
