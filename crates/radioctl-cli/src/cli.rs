use clap::{Parser, Subcommand};

use radioctl_core::RadioType;

#[derive(Debug, Parser)]
#[command(name = "radioctl", version, about = "Control and monitor rfkill radio devices")]
pub struct Cli {
    /// Emit machine-readable JSON instead of plain text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List currently known radio devices.
    List,
    /// Soft-block a single device by id.
    BlockId {
        id: u32,
    },
    /// Clear the soft block on a single device by id.
    UnblockId {
        id: u32,
    },
    /// Soft-block every device of the given radio type.
    BlockType {
        /// One of: all, wlan, bluetooth, uwb, wimax, wwan, gps, fm, nfc.
        radio_type: RadioType,
    },
    /// Clear the soft block on every device of the given radio type.
    UnblockType {
        /// One of: all, wlan, bluetooth, uwb, wimax, wwan, gps, fm, nfc.
        radio_type: RadioType,
    },
    /// Print rfkill events as they arrive until interrupted.
    Events {
        /// Idle polling interval in milliseconds.
        #[arg(long, default_value_t = 1000)]
        poll_ms: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_block_type() {
        let cli = Cli::try_parse_from(["radioctl", "block-type", "wlan"]).unwrap();
        match cli.command {
            Commands::BlockType { radio_type } => assert_eq!(radio_type, RadioType::Wlan),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_unknown_type_fails() {
        assert!(Cli::try_parse_from(["radioctl", "block-type", "wifi"]).is_err());
    }

    #[test]
    fn test_parse_events_poll_interval() {
        let cli = Cli::try_parse_from(["radioctl", "events", "--poll-ms", "250"]).unwrap();
        match cli.command {
            Commands::Events { poll_ms } => assert_eq!(poll_ms, 250),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_command_fails() {
        assert!(Cli::try_parse_from(["radioctl", "frobnicate"]).is_err());
    }
}
