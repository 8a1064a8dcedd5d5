//! Device and event types shared across the crate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::wire::RawEvent;

/// Radio transceiver class as reported by the kernel.
///
/// `All` is a wildcard: it only appears in block/unblock-by-type requests
/// and change-all events, never as the type of a real device. Types the
/// kernel defines after this crate was written decode as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RadioType {
    All,
    Wlan,
    Bluetooth,
    Uwb,
    Wimax,
    Wwan,
    Gps,
    Fm,
    Nfc,
    Other(u8),
}

impl RadioType {
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => RadioType::All,
            1 => RadioType::Wlan,
            2 => RadioType::Bluetooth,
            3 => RadioType::Uwb,
            4 => RadioType::Wimax,
            5 => RadioType::Wwan,
            6 => RadioType::Gps,
            7 => RadioType::Fm,
            8 => RadioType::Nfc,
            other => RadioType::Other(other),
        }
    }

    pub fn as_raw(self) -> u8 {
        match self {
            RadioType::All => 0,
            RadioType::Wlan => 1,
            RadioType::Bluetooth => 2,
            RadioType::Uwb => 3,
            RadioType::Wimax => 4,
            RadioType::Wwan => 5,
            RadioType::Gps => 6,
            RadioType::Fm => 7,
            RadioType::Nfc => 8,
            RadioType::Other(raw) => raw,
        }
    }
}

impl fmt::Display for RadioType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RadioType::All => write!(f, "all"),
            RadioType::Wlan => write!(f, "wlan"),
            RadioType::Bluetooth => write!(f, "bluetooth"),
            RadioType::Uwb => write!(f, "uwb"),
            RadioType::Wimax => write!(f, "wimax"),
            RadioType::Wwan => write!(f, "wwan"),
            RadioType::Gps => write!(f, "gps"),
            RadioType::Fm => write!(f, "fm"),
            RadioType::Nfc => write!(f, "nfc"),
            RadioType::Other(raw) => write!(f, "type{raw}"),
        }
    }
}

/// Error returned when a radio type name does not match any known type.
#[derive(Error, Debug)]
#[error("unknown radio type {0:?}")]
pub struct ParseRadioTypeError(String);

impl FromStr for RadioType {
    type Err = ParseRadioTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(RadioType::All),
            "wlan" => Ok(RadioType::Wlan),
            "bluetooth" => Ok(RadioType::Bluetooth),
            "uwb" => Ok(RadioType::Uwb),
            "wimax" => Ok(RadioType::Wimax),
            "wwan" => Ok(RadioType::Wwan),
            "gps" => Ok(RadioType::Gps),
            "fm" => Ok(RadioType::Fm),
            "nfc" => Ok(RadioType::Nfc),
            other => Err(ParseRadioTypeError(other.to_string())),
        }
    }
}

/// Operation carried by an rfkill event record.
///
/// Op codes outside the known set decode as `Other`; the list builder
/// rejects those as fatal while the event subscription hands them to the
/// caller unfiltered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventOp {
    Add,
    Del,
    Change,
    ChangeAll,
    Other(u8),
}

impl EventOp {
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => EventOp::Add,
            1 => EventOp::Del,
            2 => EventOp::Change,
            3 => EventOp::ChangeAll,
            other => EventOp::Other(other),
        }
    }

    pub fn as_raw(self) -> u8 {
        match self {
            EventOp::Add => 0,
            EventOp::Del => 1,
            EventOp::Change => 2,
            EventOp::ChangeAll => 3,
            EventOp::Other(raw) => raw,
        }
    }
}

impl fmt::Display for EventOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventOp::Add => write!(f, "add"),
            EventOp::Del => write!(f, "del"),
            EventOp::Change => write!(f, "change"),
            EventOp::ChangeAll => write!(f, "change-all"),
            EventOp::Other(raw) => write!(f, "op{raw}"),
        }
    }
}

/// A currently known radio device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: u32,
    pub radio_type: RadioType,
    pub name: String,
    pub soft_blocked: bool,
    pub hard_blocked: bool,
}

/// One rfkill event as delivered to an [`events`](crate::Rfkill::events)
/// handler. No name lookup is performed for events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub op: EventOp,
    pub radio_type: RadioType,
    pub soft_blocked: bool,
    pub hard_blocked: bool,
}

impl From<RawEvent> for Event {
    fn from(raw: RawEvent) -> Self {
        Event {
            id: raw.id,
            op: EventOp::from_raw(raw.op),
            radio_type: RadioType::from_raw(raw.radio_type),
            soft_blocked: raw.soft > 0,
            hard_blocked: raw.hard > 0,
        }
    }
}
