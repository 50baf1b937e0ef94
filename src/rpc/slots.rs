//! Consuming service slots
//!
//! The allocation rule is positional: each consuming service occupies a
//! fixed slot index, and the slot list (including whether the optional
//! broker slot participates) decides the service count handed to the
//! distribution rule.

use std::fmt;

/// HTTP-consuming services, in slot order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpService {
    /// Main API service (slot 0, never left without an endpoint)
    Main,
    /// History service
    History,
    /// Referral service
    Referral,
    /// Broker server (optional deployment component)
    Broker,
}

impl HttpService {
    /// Slot index of this service
    pub fn index(self) -> usize {
        match self {
            HttpService::Main => 0,
            HttpService::History => 1,
            HttpService::Referral => 2,
            HttpService::Broker => 3,
        }
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            HttpService::Main => "main",
            HttpService::History => "history",
            HttpService::Referral => "referral",
            HttpService::Broker => "broker",
        }
    }

    /// The HTTP slot list, with or without the broker slot
    pub fn slots(include_broker: bool) -> &'static [HttpService] {
        const BASE: &[HttpService] = &[HttpService::Main, HttpService::History, HttpService::Referral];
        const WITH_BROKER: &[HttpService] = &[
            HttpService::Main,
            HttpService::History,
            HttpService::Referral,
            HttpService::Broker,
        ];

        if include_broker {
            WITH_BROKER
        } else {
            BASE
        }
    }
}

impl fmt::Display for HttpService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// WebSocket-consuming services, in slot order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WsService {
    /// Main API service
    Main,
    /// History service
    History,
}

impl WsService {
    /// The fixed WS slot list
    pub const SLOTS: &'static [WsService] = &[WsService::Main, WsService::History];

    /// Slot index of this service
    pub fn index(self) -> usize {
        match self {
            WsService::Main => 0,
            WsService::History => 1,
        }
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            WsService::Main => "main",
            WsService::History => "history",
        }
    }
}

impl fmt::Display for WsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
