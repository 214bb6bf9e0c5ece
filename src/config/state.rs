// Application state module
// Process-wide read-only state shared by all request handlers

use crate::roster::Roster;

use super::types::Config;

/// Application state
///
/// Built once at startup and shared via `Arc`. Nothing mutates after
/// initialization, so handlers read it without locks.
pub struct AppState {
    pub config: Config,
    pub roster: Roster,
}

impl AppState {
    pub const fn new(config: Config, roster: Roster) -> Self {
        Self { config, roster }
    }
}
