use super::{CloudApi, DropletAction, ImageQuery, RecordRequest, VolumeRequest};
use crate::error::{DocliError, Result};
use crate::model::{
    Account, Action, ApiResource, Domain, DomainRecord, Droplet, FloatingIp, Image, Kernel,
    Region, Size, Snapshot, SshKey, Tag, Volume,
};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::{Method, StatusCode, Url};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

const PER_PAGE: &str = "200";

/// Blocking client for the v2 REST API.
pub struct HttpClient {
    http: Client,
    base_url: Url,
    token: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorBody {
    id: String,
    message: String,
}

impl HttpClient {
    pub fn new(base_url: &str, token: impl Into<String>) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| DocliError::Config(format!("Invalid API URL {:?}: {}", base_url, e)))?;
        let http = Client::builder()
            .user_agent(concat!("docli/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url,
            token: token.into(),
        })
    }

    /// Joins path segments onto the base URL, escaping each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DocliError::Config(format!("Invalid API URL {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        log::debug!("{} {}", method, url);
        self.http.request(method, url).bearer_auth(&self.token)
    }

    fn send(&self, builder: RequestBuilder) -> Result<Option<Value>> {
        let response = builder.send()?;
        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(api_error(status, &body));
        }
        if status == StatusCode::NO_CONTENT || body.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&body)?))
    }

    fn get<T: ApiResource>(&self, segments: &[&str], key: &'static str) -> Result<T> {
        let url = self.endpoint(segments)?;
        let body = self.send(self.request(Method::GET, url))?;
        one(body, key)
    }

    /// Fetches every page of a list endpoint.
    fn list<T: ApiResource>(
        &self,
        segments: &[&str],
        key: &'static str,
        params: &[(&str, &str)],
    ) -> Result<Vec<T>> {
        let mut url = self.endpoint(segments)?;
        url.query_pairs_mut()
            .extend_pairs(params)
            .append_pair("per_page", PER_PAGE);

        let mut items = Vec::new();
        loop {
            let body = self.send(self.request(Method::GET, url))?;
            let next = body.as_ref().and_then(next_page);
            let mut page: Vec<T> = many(body, key)?;
            items.append(&mut page);
            match next {
                Some(next) => {
                    log::trace!("following {} page {}", key, next);
                    url = Url::parse(&next).map_err(|e| {
                        DocliError::Config(format!("Invalid next page link {:?}: {}", next, e))
                    })?;
                }
                None => break,
            }
        }
        Ok(items)
    }

    fn write<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: &B,
    ) -> Result<Option<Value>> {
        self.send(self.request(method, url).json(body))
    }

    fn post<T: ApiResource, B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
        key: &'static str,
    ) -> Result<T> {
        let url = self.endpoint(segments)?;
        one(self.write(Method::POST, url, body)?, key)
    }

    fn delete(&self, segments: &[&str]) -> Result<()> {
        let url = self.endpoint(segments)?;
        self.send(self.request(Method::DELETE, url))?;
        Ok(())
    }
}

fn api_error(status: StatusCode, body: &str) -> DocliError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = if parsed.message.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string()
    } else {
        parsed.message
    };
    DocliError::api(status.as_u16(), parsed.id, message)
}

fn next_page(body: &Value) -> Option<String> {
    body.pointer("/links/pages/next")
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Pulls `key` out of a `{"<key>": …}` response envelope.
fn envelope(body: Option<Value>, key: &'static str) -> Result<Value> {
    body.and_then(|mut body| body.get_mut(key).map(Value::take))
        .ok_or_else(|| <serde_json::Error as serde::de::Error>::missing_field(key).into())
}

fn one<T: ApiResource>(body: Option<Value>, key: &'static str) -> Result<T> {
    Ok(T::from_payload(envelope(body, key)?)?)
}

fn many<T: ApiResource>(body: Option<Value>, key: &'static str) -> Result<Vec<T>> {
    match envelope(body, key)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| T::from_payload(item).map_err(DocliError::from))
            .collect(),
        Value::Null => Ok(Vec::new()),
        _ => Err(<serde_json::Error as serde::de::Error>::custom(format!(
            "expected an array under {:?}",
            key
        ))
        .into()),
    }
}

impl CloudApi for HttpClient {
    fn account(&self) -> Result<Account> {
        self.get(&["account"], "account")
    }

    fn list_droplets(&self) -> Result<Vec<Droplet>> {
        self.list(&["droplets"], "droplets", &[])
    }

    fn get_droplet(&self, id: u64) -> Result<Droplet> {
        self.get(&["droplets", &id.to_string()], "droplet")
    }

    fn delete_droplet(&self, id: u64) -> Result<()> {
        self.delete(&["droplets", &id.to_string()])
    }

    fn delete_droplets_by_tag(&self, tag: &str) -> Result<()> {
        let mut url = self.endpoint(&["droplets"])?;
        url.query_pairs_mut().append_pair("tag_name", tag);
        self.send(self.request(Method::DELETE, url))?;
        Ok(())
    }

    fn droplet_action(&self, id: u64, action: &DropletAction) -> Result<Action> {
        self.post(&["droplets", &id.to_string(), "actions"], action, "action")
    }

    fn droplet_action_by_tag(&self, tag: &str, action: &DropletAction) -> Result<Vec<Action>> {
        let mut url = self.endpoint(&["droplets", "actions"])?;
        url.query_pairs_mut().append_pair("tag_name", tag);
        many(self.write(Method::POST, url, action)?, "actions")
    }

    fn droplet_actions(&self, id: u64) -> Result<Vec<Action>> {
        self.list(&["droplets", &id.to_string(), "actions"], "actions", &[])
    }

    fn droplet_action_get(&self, droplet_id: u64, action_id: u64) -> Result<Action> {
        self.get(
            &[
                "droplets",
                &droplet_id.to_string(),
                "actions",
                &action_id.to_string(),
            ],
            "action",
        )
    }

    fn droplet_snapshots(&self, id: u64) -> Result<Vec<Snapshot>> {
        self.list(&["droplets", &id.to_string(), "snapshots"], "snapshots", &[])
    }

    fn droplet_kernels(&self, id: u64) -> Result<Vec<Kernel>> {
        self.list(&["droplets", &id.to_string(), "kernels"], "kernels", &[])
    }

    fn list_domains(&self) -> Result<Vec<Domain>> {
        self.list(&["domains"], "domains", &[])
    }

    fn get_domain(&self, name: &str) -> Result<Domain> {
        self.get(&["domains", name], "domain")
    }

    fn create_domain(&self, name: &str, ip_address: &str) -> Result<Domain> {
        let body = json!({ "name": name, "ip_address": ip_address });
        self.post(&["domains"], &body, "domain")
    }

    fn delete_domain(&self, name: &str) -> Result<()> {
        self.delete(&["domains", name])
    }

    fn list_records(&self, domain: &str) -> Result<Vec<DomainRecord>> {
        self.list(&["domains", domain, "records"], "domain_records", &[])
    }

    fn get_record(&self, domain: &str, id: u64) -> Result<DomainRecord> {
        self.get(
            &["domains", domain, "records", &id.to_string()],
            "domain_record",
        )
    }

    fn create_record(&self, domain: &str, record: &RecordRequest) -> Result<DomainRecord> {
        self.post(&["domains", domain, "records"], record, "domain_record")
    }

    fn delete_record(&self, domain: &str, id: u64) -> Result<()> {
        self.delete(&["domains", domain, "records", &id.to_string()])
    }

    fn list_images(&self, query: ImageQuery) -> Result<Vec<Image>> {
        self.list(&["images"], "images", &query.params())
    }

    fn get_image(&self, id: &str) -> Result<Image> {
        self.get(&["images", id], "image")
    }

    fn delete_image(&self, id: &str) -> Result<()> {
        self.delete(&["images", id])
    }

    fn list_snapshots(&self) -> Result<Vec<Snapshot>> {
        self.list(&["snapshots"], "snapshots", &[])
    }

    fn delete_snapshot(&self, id: &str) -> Result<()> {
        self.delete(&["snapshots", id])
    }

    fn list_sizes(&self) -> Result<Vec<Size>> {
        self.list(&["sizes"], "sizes", &[])
    }

    fn list_regions(&self) -> Result<Vec<Region>> {
        self.list(&["regions"], "regions", &[])
    }

    fn list_keys(&self) -> Result<Vec<SshKey>> {
        self.list(&["account", "keys"], "ssh_keys", &[])
    }

    fn get_key(&self, id: &str) -> Result<SshKey> {
        self.get(&["account", "keys", id], "ssh_key")
    }

    fn create_key(&self, name: &str, public_key: &str) -> Result<SshKey> {
        let body = json!({ "name": name, "public_key": public_key });
        self.post(&["account", "keys"], &body, "ssh_key")
    }

    fn delete_key(&self, id: &str) -> Result<()> {
        self.delete(&["account", "keys", id])
    }

    fn list_tags(&self) -> Result<Vec<Tag>> {
        self.list(&["tags"], "tags", &[])
    }

    fn get_tag(&self, name: &str) -> Result<Tag> {
        self.get(&["tags", name], "tag")
    }

    fn create_tag(&self, name: &str) -> Result<Tag> {
        self.post(&["tags"], &json!({ "name": name }), "tag")
    }

    fn tag_droplets(&self, name: &str, droplet_ids: &[u64]) -> Result<()> {
        let resources: Vec<Value> = droplet_ids
            .iter()
            .map(|id| json!({ "resource_id": id.to_string(), "resource_type": "droplet" }))
            .collect();
        let url = self.endpoint(&["tags", name, "resources"])?;
        self.write(Method::POST, url, &json!({ "resources": resources }))?;
        Ok(())
    }

    fn rename_tag(&self, name: &str, new_name: &str) -> Result<Tag> {
        let url = self.endpoint(&["tags", name])?;
        one(
            self.write(Method::PUT, url, &json!({ "name": new_name }))?,
            "tag",
        )
    }

    fn delete_tag(&self, name: &str) -> Result<()> {
        self.delete(&["tags", name])
    }

    fn list_volumes(&self) -> Result<Vec<Volume>> {
        self.list(&["volumes"], "volumes", &[])
    }

    fn get_volume(&self, id: &str) -> Result<Volume> {
        self.get(&["volumes", id], "volume")
    }

    fn create_volume(&self, volume: &VolumeRequest) -> Result<Volume> {
        self.post(&["volumes"], volume, "volume")
    }

    fn delete_volume(&self, id: &str) -> Result<()> {
        self.delete(&["volumes", id])
    }

    fn list_floating_ips(&self) -> Result<Vec<FloatingIp>> {
        self.list(&["floating_ips"], "floating_ips", &[])
    }

    fn get_floating_ip(&self, ip: &str) -> Result<FloatingIp> {
        self.get(&["floating_ips", ip], "floating_ip")
    }

    fn delete_floating_ip(&self, ip: &str) -> Result<()> {
        self.delete(&["floating_ips", ip])
    }

    fn floating_ip_actions(&self, ip: &str) -> Result<Vec<Action>> {
        self.list(&["floating_ips", ip, "actions"], "actions", &[])
    }
}
