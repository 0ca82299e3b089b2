//! Snapshot upload target and bookkeeping. The transport itself lives in the
//! web frontend; nothing here touches the network.

use crate::config::AppConfig;
use std::cell::Cell;

pub const PHOTO_FIELD: &str = "photo";
pub const CHAT_FIELD: &str = "chat_id";
pub const SNAPSHOT_FILENAME: &str = "snapshot.jpg";
pub const SNAPSHOT_MIME: &str = "image/jpeg";

/// Where snapshots go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnapshotTarget {
    pub api_base: String,
    pub bot_token: String,
    pub chat_id: String,
}

impl SnapshotTarget {
    /// `None` when the config lacks a token or chat id.
    pub fn from_config(config: &AppConfig) -> Option<Self> {
        if !config.upload_enabled() {
            return None;
        }
        Some(Self {
            api_base: config.api_base.trim_end_matches('/').to_string(),
            bot_token: config.bot_token.clone()?,
            chat_id: config.chat_id.clone()?,
        })
    }

    pub fn send_photo_url(&self) -> String {
        format!("{}/bot{}/sendPhoto", self.api_base, self.bot_token)
    }

    /// URL with the token masked, for logs.
    pub fn redacted_url(&self) -> String {
        format!("{}/bot***/sendPhoto", self.api_base)
    }
}

/// Counters for fire-and-forget uploads. Overlapping uploads are allowed, so
/// `in_flight` can exceed one.
#[derive(Debug, Default)]
pub struct UploadStats {
    started: Cell<u64>,
    succeeded: Cell<u64>,
    failed: Cell<u64>,
    in_flight: Cell<u32>,
}

impl UploadStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> u64 {
        let id = self.started.get() + 1;
        self.started.set(id);
        self.in_flight.set(self.in_flight.get() + 1);
        id
    }

    pub fn finish(&self, ok: bool) {
        self.in_flight.set(self.in_flight.get().saturating_sub(1));
        if ok {
            self.succeeded.set(self.succeeded.get() + 1);
        } else {
            self.failed.set(self.failed.get() + 1);
        }
    }

    pub fn started(&self) -> u64 {
        self.started.get()
    }

    pub fn succeeded(&self) -> u64 {
        self.succeeded.get()
    }

    pub fn failed(&self) -> u64 {
        self.failed.get()
    }

    pub fn in_flight(&self) -> u32 {
        self.in_flight.get()
    }
}
