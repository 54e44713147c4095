//! # API Client Layer
//!
//! Handlers talk to the cloud through the [`CloudApi`] trait and never see HTTP.
//!
//! ## Implementations
//!
//! - [`http::HttpClient`]: the real thing, a blocking `reqwest` client
//!   - Bearer token auth
//!   - Follows `links.pages.next` for list endpoints
//!   - No retries: the first failure is returned as is
//!
//! - [`memory::FixtureClient`]: in-memory resources for tests
//!   - Records every call, so tests can assert what a handler did
//!   - Can be switched into a failing mode to exercise error paths
//!
//! Every method maps to exactly one API operation. Composite flows (create a
//! tag then tag droplets) are built by the handlers from two calls.

use crate::error::Result;
use crate::model::{
    Account, Action, Domain, DomainRecord, Droplet, FloatingIp, Image, Kernel, Region, Size,
    Snapshot, SshKey, Tag, Volume,
};
use serde::Serialize;

pub mod http;
#[cfg(any(test, feature = "test_utils"))]
pub mod memory;

/// Actions that can be posted to a droplet, or to every droplet with a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DropletAction {
    PowerCycle,
    PowerOn,
    PowerOff,
    Shutdown,
    Reboot,
    PasswordReset,
    #[serde(rename = "enable_ipv6")]
    EnableIpv6,
    EnablePrivateNetworking,
    EnableBackups,
    DisableBackups,
    Snapshot {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
}

impl DropletAction {
    /// The API's name for the action.
    pub fn kind(&self) -> &'static str {
        match self {
            DropletAction::PowerCycle => "power_cycle",
            DropletAction::PowerOn => "power_on",
            DropletAction::PowerOff => "power_off",
            DropletAction::Shutdown => "shutdown",
            DropletAction::Reboot => "reboot",
            DropletAction::PasswordReset => "password_reset",
            DropletAction::EnableIpv6 => "enable_ipv6",
            DropletAction::EnablePrivateNetworking => "enable_private_networking",
            DropletAction::EnableBackups => "enable_backups",
            DropletAction::DisableBackups => "disable_backups",
            DropletAction::Snapshot { .. } => "snapshot",
        }
    }
}

/// Filter for the image listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageQuery {
    #[default]
    All,
    Application,
    Distribution,
    Private,
}

impl ImageQuery {
    pub fn params(&self) -> Vec<(&'static str, &'static str)> {
        match self {
            ImageQuery::All => Vec::new(),
            ImageQuery::Application => vec![("type", "application")],
            ImageQuery::Distribution => vec![("type", "distribution")],
            ImageQuery::Private => vec![("private", "true")],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VolumeRequest {
    pub name: String,
    pub size_gigabytes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecordRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u64>,
}

/// The operations the commands need from the cloud API.
pub trait CloudApi {
    fn account(&self) -> Result<Account>;

    fn list_droplets(&self) -> Result<Vec<Droplet>>;
    fn get_droplet(&self, id: u64) -> Result<Droplet>;
    fn delete_droplet(&self, id: u64) -> Result<()>;
    fn delete_droplets_by_tag(&self, tag: &str) -> Result<()>;
    /// Posts an action to one droplet.
    fn droplet_action(&self, id: u64, action: &DropletAction) -> Result<Action>;
    /// Posts an action to every droplet carrying `tag`.
    fn droplet_action_by_tag(&self, tag: &str, action: &DropletAction) -> Result<Vec<Action>>;
    fn droplet_actions(&self, id: u64) -> Result<Vec<Action>>;
    fn droplet_action_get(&self, droplet_id: u64, action_id: u64) -> Result<Action>;
    fn droplet_snapshots(&self, id: u64) -> Result<Vec<Snapshot>>;
    fn droplet_kernels(&self, id: u64) -> Result<Vec<Kernel>>;

    fn list_domains(&self) -> Result<Vec<Domain>>;
    fn get_domain(&self, name: &str) -> Result<Domain>;
    fn create_domain(&self, name: &str, ip_address: &str) -> Result<Domain>;
    fn delete_domain(&self, name: &str) -> Result<()>;

    fn list_records(&self, domain: &str) -> Result<Vec<DomainRecord>>;
    fn get_record(&self, domain: &str, id: u64) -> Result<DomainRecord>;
    fn create_record(&self, domain: &str, record: &RecordRequest) -> Result<DomainRecord>;
    fn delete_record(&self, domain: &str, id: u64) -> Result<()>;

    fn list_images(&self, query: ImageQuery) -> Result<Vec<Image>>;
    /// Looks an image up by numeric ID or by slug.
    fn get_image(&self, id: &str) -> Result<Image>;
    fn delete_image(&self, id: &str) -> Result<()>;

    fn list_snapshots(&self) -> Result<Vec<Snapshot>>;
    fn delete_snapshot(&self, id: &str) -> Result<()>;

    fn list_sizes(&self) -> Result<Vec<Size>>;
    fn list_regions(&self) -> Result<Vec<Region>>;

    fn list_keys(&self) -> Result<Vec<SshKey>>;
    /// Looks a key up by numeric ID or by fingerprint.
    fn get_key(&self, id: &str) -> Result<SshKey>;
    fn create_key(&self, name: &str, public_key: &str) -> Result<SshKey>;
    fn delete_key(&self, id: &str) -> Result<()>;

    fn list_tags(&self) -> Result<Vec<Tag>>;
    fn get_tag(&self, name: &str) -> Result<Tag>;
    fn create_tag(&self, name: &str) -> Result<Tag>;
    fn tag_droplets(&self, name: &str, droplet_ids: &[u64]) -> Result<()>;
    fn rename_tag(&self, name: &str, new_name: &str) -> Result<Tag>;
    fn delete_tag(&self, name: &str) -> Result<()>;

    fn list_volumes(&self) -> Result<Vec<Volume>>;
    fn get_volume(&self, id: &str) -> Result<Volume>;
    fn create_volume(&self, volume: &VolumeRequest) -> Result<Volume>;
    fn delete_volume(&self, id: &str) -> Result<()>;

    fn list_floating_ips(&self) -> Result<Vec<FloatingIp>>;
    fn get_floating_ip(&self, ip: &str) -> Result<FloatingIp>;
    fn delete_floating_ip(&self, ip: &str) -> Result<()>;
    fn floating_ip_actions(&self, ip: &str) -> Result<Vec<Action>>;
}
