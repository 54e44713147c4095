//! # Command Handlers
//!
//! One function per leaf command. Every handler follows the same contract:
//!
//! 1. Take the client as `&C: CloudApi` plus typed arguments
//! 2. Make one API call, or two in sequence for composite flows
//! 3. Return the first error untouched: no retries, no partial output
//! 4. Hand the result to a display adapter, optionally with a fixed message
//!
//! Destructive handlers (deletes, shutdown, power changes, actions by tag) only
//! confirm and echo identifiers.
//!
//! List handlers take an optional `limit`; the list is truncated before it
//! reaches the adapter, so the limit applies to JSON output as well.

pub mod account;
pub mod domains;
pub mod droplets;
pub mod floating_ips;
pub mod images;
pub mod regions;
pub mod sizes;
pub mod snapshots;
pub mod ssh;
pub mod tags;
pub mod token;
pub mod volumes;

pub(crate) fn truncate<T>(mut items: Vec<T>, limit: Option<usize>) -> Vec<T> {
    if let Some(limit) = limit {
        items.truncate(limit);
    }
    items
}
