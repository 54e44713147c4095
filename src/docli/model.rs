//! API resources.
//!
//! Each struct models the fields the tables show. Resources decoded from a
//! response also keep the payload itself in `raw`, so JSON output reproduces
//! exactly what the API sent: no added defaults, integers stay integers.
//!
//! Typed fields accept `null` as their default; the API sends `null` for
//! numbers it does not know yet (image sizes while a snapshot is pending).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// A resource as the API sent it.
pub trait ApiResource: Serialize + DeserializeOwned {
    fn raw(&self) -> Option<&Value>;
    fn set_raw(&mut self, raw: Value);

    /// Decodes the typed fields and keeps `payload` alongside them.
    fn from_payload(payload: Value) -> serde_json::Result<Self> {
        let mut resource = Self::deserialize(&payload)?;
        resource.set_raw(payload);
        Ok(resource)
    }

    /// The original payload, or the typed fields for resources built locally.
    fn to_payload(&self) -> serde_json::Result<Value> {
        match self.raw() {
            Some(raw) => Ok(raw.clone()),
            None => serde_json::to_value(self),
        }
    }
}

macro_rules! api_resource {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ApiResource for $ty {
                fn raw(&self) -> Option<&Value> {
                    self.raw.as_ref()
                }

                fn set_raw(&mut self, raw: Value) {
                    self.raw = Some(raw);
                }
            }
        )*
    };
}

/// `null` reads as the field's default.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// An identifier the API sends either as a number or as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    Number(u64),
    Text(String),
}

impl Default for ResourceId {
    fn default() -> Self {
        ResourceId::Text(String::new())
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceId::Number(n) => write!(f, "{}", n),
            ResourceId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for ResourceId {
    fn from(n: u64) -> Self {
        ResourceId::Number(n)
    }
}

impl From<&str> for ResourceId {
    fn from(s: &str) -> Self {
        ResourceId::Text(s.to_string())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    #[serde(deserialize_with = "nullable")]
    pub uuid: String,
    #[serde(deserialize_with = "nullable")]
    pub status: String,
    pub status_message: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub email: String,
    #[serde(deserialize_with = "nullable")]
    pub email_verified: bool,
    #[serde(deserialize_with = "nullable")]
    pub droplet_limit: u64,
    #[serde(deserialize_with = "nullable")]
    pub floating_ip_limit: u64,
    #[serde(skip)]
    pub raw: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Action {
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    #[serde(deserialize_with = "nullable")]
    pub status: String,
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: String,
    pub started_at: Option<String>,
    pub completed_at: Option<String>,
    pub resource_type: Option<String>,
    pub resource_id: Option<ResourceId>,
    pub region_slug: Option<String>,
    #[serde(skip)]
    pub raw: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Network {
    #[serde(deserialize_with = "nullable")]
    pub ip_address: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Networks {
    #[serde(deserialize_with = "nullable")]
    pub v4: Vec<Network>,
    #[serde(deserialize_with = "nullable")]
    pub v6: Vec<Network>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Region {
    #[serde(deserialize_with = "nullable")]
    pub slug: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub sizes: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub features: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub available: bool,
    #[serde(skip)]
    pub raw: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Kernel {
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub version: String,
    #[serde(skip)]
    pub raw: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub distribution: String,
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: String,
    pub slug: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub public: bool,
    #[serde(deserialize_with = "nullable")]
    pub regions: Vec<String>,
    pub created_at: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub size_gigabytes: f64,
    #[serde(deserialize_with = "nullable")]
    pub min_disk_size: u64,
    #[serde(skip)]
    pub raw: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Droplet {
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub memory: u64,
    #[serde(deserialize_with = "nullable")]
    pub vcpus: u64,
    #[serde(deserialize_with = "nullable")]
    pub disk: u64,
    #[serde(deserialize_with = "nullable")]
    pub status: String,
    pub kernel: Option<Kernel>,
    #[serde(deserialize_with = "nullable")]
    pub image: Image,
    #[serde(deserialize_with = "nullable")]
    pub features: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub region: Region,
    #[serde(deserialize_with = "nullable")]
    pub networks: Networks,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<String>,
    pub created_at: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub backup_ids: Vec<u64>,
    #[serde(deserialize_with = "nullable")]
    pub snapshot_ids: Vec<u64>,
    #[serde(deserialize_with = "nullable")]
    pub volume_ids: Vec<String>,
    #[serde(skip)]
    pub raw: Option<Value>,
}

impl Droplet {
    pub fn ipv4(&self) -> impl Iterator<Item = &str> {
        self.networks.v4.iter().map(|n| n.ip_address.as_str())
    }

    pub fn ipv6(&self) -> impl Iterator<Item = &str> {
        self.networks.v6.iter().map(|n| n.ip_address.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Domain {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    pub ttl: Option<u64>,
    pub zone_file: Option<String>,
    #[serde(skip)]
    pub raw: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainRecord {
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: String,
    pub name: Option<String>,
    pub data: Option<String>,
    pub priority: Option<u64>,
    pub port: Option<u64>,
    pub weight: Option<u64>,
    #[serde(skip)]
    pub raw: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    #[serde(deserialize_with = "nullable")]
    pub id: ResourceId,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    pub resource_type: Option<String>,
    pub resource_id: Option<ResourceId>,
    #[serde(deserialize_with = "nullable")]
    pub regions: Vec<String>,
    pub created_at: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub size_gigabytes: f64,
    #[serde(deserialize_with = "nullable")]
    pub min_disk_size: u64,
    #[serde(skip)]
    pub raw: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SshKey {
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub fingerprint: String,
    #[serde(deserialize_with = "nullable")]
    pub public_key: String,
    #[serde(skip)]
    pub raw: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaggedDroplets {
    #[serde(deserialize_with = "nullable")]
    pub count: u64,
    pub last_tagged: Option<Droplet>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TagResources {
    #[serde(deserialize_with = "nullable")]
    pub droplets: TaggedDroplets,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub resources: TagResources,
    #[serde(skip)]
    pub raw: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Volume {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub size_gigabytes: u64,
    pub description: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub region: Region,
    #[serde(deserialize_with = "nullable")]
    pub droplet_ids: Vec<u64>,
    pub created_at: Option<String>,
    #[serde(skip)]
    pub raw: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatingIp {
    #[serde(deserialize_with = "nullable")]
    pub ip: String,
    #[serde(deserialize_with = "nullable")]
    pub region: Region,
    pub droplet: Option<Droplet>,
    #[serde(skip)]
    pub raw: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Size {
    #[serde(deserialize_with = "nullable")]
    pub slug: String,
    #[serde(deserialize_with = "nullable")]
    pub memory: u64,
    #[serde(deserialize_with = "nullable")]
    pub vcpus: u64,
    #[serde(deserialize_with = "nullable")]
    pub disk: u64,
    #[serde(deserialize_with = "nullable")]
    pub transfer: f64,
    #[serde(deserialize_with = "nullable")]
    pub price_monthly: f64,
    #[serde(skip)]
    pub raw: Option<Value>,
}

api_resource!(
    Account,
    Action,
    Region,
    Kernel,
    Image,
    Droplet,
    Domain,
    DomainRecord,
    Snapshot,
    SshKey,
    Tag,
    Volume,
    FloatingIp,
    Size,
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_is_kept_verbatim() {
        let payload = json!({
            "id": 3164444,
            "name": "example.com",
            "status": "active",
            "locked": false,
            "size_slug": "s-1vcpu-1gb",
            "networks": {"v4": [{"ip_address": "104.236.32.182", "type": "public"}], "v6": []}
        });
        let droplet = Droplet::from_payload(payload.clone()).unwrap();
        assert_eq!(droplet.name, "example.com");
        assert_eq!(droplet.ipv4().collect::<Vec<_>>(), ["104.236.32.182"]);
        assert_eq!(droplet.to_payload().unwrap(), payload);
    }

    #[test]
    fn integers_stay_integers() {
        let payload = json!({"slug": "s-1vcpu-1gb", "transfer": 1, "price_monthly": 5});
        let size = Size::from_payload(payload.clone()).unwrap();
        assert_eq!(size.price_monthly, 5.0);
        assert_eq!(size.to_payload().unwrap(), payload);
        assert_eq!(size.to_payload().unwrap().to_string(), payload.to_string());
    }

    #[test]
    fn null_numbers_read_as_defaults() {
        let payload = json!({
            "id": 7555620,
            "name": "nightly",
            "size_gigabytes": null,
            "min_disk_size": null,
            "regions": null
        });
        let image = Image::from_payload(payload.clone()).unwrap();
        assert_eq!(image.min_disk_size, 0);
        assert!(image.regions.is_empty());
        assert_eq!(image.to_payload().unwrap(), payload);
    }

    #[test]
    fn local_resources_serialize_their_fields() {
        let tag = Tag {
            name: "web".into(),
            ..Default::default()
        };
        assert!(tag.raw().is_none());
        assert_eq!(tag.to_payload().unwrap()["name"], "web");
    }

    #[test]
    fn missing_fields_default() {
        let tag: Tag = serde_json::from_value(json!({"name": "web"})).unwrap();
        assert_eq!(tag.resources.droplets.count, 0);
        assert!(tag.resources.droplets.last_tagged.is_none());
    }

    #[test]
    fn ids_accept_numbers_and_strings() {
        let snap: Snapshot = serde_json::from_value(json!({"id": "6372321", "resource_id": 42}))
            .unwrap();
        assert_eq!(snap.id, ResourceId::from("6372321"));
        assert_eq!(snap.resource_id, Some(ResourceId::Number(42)));
        assert_eq!(snap.resource_id.unwrap().to_string(), "42");
    }
}
