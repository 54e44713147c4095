use super::{CloudApi, DropletAction, ImageQuery, RecordRequest, VolumeRequest};
use crate::error::{DocliError, Result};
use crate::model::{
    Account, Action, Domain, DomainRecord, Droplet, FloatingIp, Image, Kernel, Region, ResourceId,
    Size, Snapshot, SshKey, Tag, Volume,
};
use std::cell::{Cell, RefCell};

/// Resources a [`FixtureClient`] serves.
#[derive(Debug, Clone, Default)]
pub struct Fixtures {
    pub account: Account,
    pub droplets: Vec<Droplet>,
    pub actions: Vec<Action>,
    pub kernels: Vec<Kernel>,
    pub snapshots: Vec<Snapshot>,
    pub domains: Vec<Domain>,
    pub records: Vec<(String, DomainRecord)>,
    pub images: Vec<Image>,
    pub sizes: Vec<Size>,
    pub regions: Vec<Region>,
    pub keys: Vec<SshKey>,
    pub tags: Vec<Tag>,
    pub volumes: Vec<Volume>,
    pub floating_ips: Vec<FloatingIp>,
}

/// In-memory [`CloudApi`] for tests.
///
/// Every call is recorded by name. When `failing` is set, every call is still
/// recorded but returns an API error instead of touching the fixtures.
#[derive(Default)]
pub struct FixtureClient {
    data: RefCell<Fixtures>,
    calls: RefCell<Vec<String>>,
    failing: Option<(u16, String)>,
    next_id: Cell<u64>,
}

fn not_found() -> DocliError {
    DocliError::api(
        404,
        "not_found",
        "The resource you were accessing could not be found.",
    )
}

impl FixtureClient {
    pub fn new(fixtures: Fixtures) -> Self {
        Self {
            data: RefCell::new(fixtures),
            next_id: Cell::new(1000),
            ..Default::default()
        }
    }

    /// A client whose every call fails with the given status.
    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            failing: Some((status, message.to_string())),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn fixtures(&self) -> Fixtures {
        self.data.borrow().clone()
    }

    fn call(&self, name: &str) -> Result<()> {
        self.calls.borrow_mut().push(name.to_string());
        match &self.failing {
            Some((status, message)) => Err(DocliError::api(*status, "fixture_error", message)),
            None => Ok(()),
        }
    }

    fn fresh_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    fn action(&self, kind: &str, resource_id: Option<ResourceId>) -> Action {
        Action {
            id: self.fresh_id(),
            status: "in-progress".into(),
            kind: kind.into(),
            resource_type: Some("droplet".into()),
            resource_id,
            ..Default::default()
        }
    }

    fn find<T: Clone>(items: &[T], pred: impl Fn(&T) -> bool) -> Result<T> {
        items.iter().find(|item| pred(item)).cloned().ok_or_else(not_found)
    }

    fn remove<T>(items: &mut Vec<T>, pred: impl Fn(&T) -> bool) -> Result<()> {
        let before = items.len();
        items.retain(|item| !pred(item));
        if items.len() == before {
            Err(not_found())
        } else {
            Ok(())
        }
    }
}

impl CloudApi for FixtureClient {
    fn account(&self) -> Result<Account> {
        self.call("account")?;
        Ok(self.data.borrow().account.clone())
    }

    fn list_droplets(&self) -> Result<Vec<Droplet>> {
        self.call("list_droplets")?;
        Ok(self.data.borrow().droplets.clone())
    }

    fn get_droplet(&self, id: u64) -> Result<Droplet> {
        self.call("get_droplet")?;
        Self::find(&self.data.borrow().droplets, |d| d.id == id)
    }

    fn delete_droplet(&self, id: u64) -> Result<()> {
        self.call("delete_droplet")?;
        Self::remove(&mut self.data.borrow_mut().droplets, |d| d.id == id)
    }

    fn delete_droplets_by_tag(&self, tag: &str) -> Result<()> {
        self.call("delete_droplets_by_tag")?;
        self.data
            .borrow_mut()
            .droplets
            .retain(|d| !d.tags.iter().any(|t| t == tag));
        Ok(())
    }

    fn droplet_action(&self, id: u64, action: &DropletAction) -> Result<Action> {
        self.call("droplet_action")?;
        Self::find(&self.data.borrow().droplets, |d| d.id == id)?;
        let action = self.action(action.kind(), Some(id.into()));
        self.data.borrow_mut().actions.push(action.clone());
        Ok(action)
    }

    fn droplet_action_by_tag(&self, tag: &str, action: &DropletAction) -> Result<Vec<Action>> {
        self.call("droplet_action_by_tag")?;
        let ids: Vec<u64> = self
            .data
            .borrow()
            .droplets
            .iter()
            .filter(|d| d.tags.iter().any(|t| t == tag))
            .map(|d| d.id)
            .collect();
        let actions: Vec<Action> = ids
            .into_iter()
            .map(|id| self.action(action.kind(), Some(id.into())))
            .collect();
        self.data.borrow_mut().actions.extend(actions.iter().cloned());
        Ok(actions)
    }

    fn droplet_actions(&self, id: u64) -> Result<Vec<Action>> {
        self.call("droplet_actions")?;
        let id = ResourceId::from(id);
        Ok(self
            .data
            .borrow()
            .actions
            .iter()
            .filter(|a| a.resource_id.as_ref() == Some(&id))
            .cloned()
            .collect())
    }

    fn droplet_action_get(&self, droplet_id: u64, action_id: u64) -> Result<Action> {
        self.call("droplet_action_get")?;
        let droplet = ResourceId::from(droplet_id);
        Self::find(&self.data.borrow().actions, |a| {
            a.id == action_id && a.resource_id.as_ref() == Some(&droplet)
        })
    }

    fn droplet_snapshots(&self, id: u64) -> Result<Vec<Snapshot>> {
        self.call("droplet_snapshots")?;
        let id = ResourceId::from(id);
        Ok(self
            .data
            .borrow()
            .snapshots
            .iter()
            .filter(|s| s.resource_id.as_ref() == Some(&id))
            .cloned()
            .collect())
    }

    fn droplet_kernels(&self, id: u64) -> Result<Vec<Kernel>> {
        self.call("droplet_kernels")?;
        Self::find(&self.data.borrow().droplets, |d| d.id == id)?;
        Ok(self.data.borrow().kernels.clone())
    }

    fn list_domains(&self) -> Result<Vec<Domain>> {
        self.call("list_domains")?;
        Ok(self.data.borrow().domains.clone())
    }

    fn get_domain(&self, name: &str) -> Result<Domain> {
        self.call("get_domain")?;
        Self::find(&self.data.borrow().domains, |d| d.name == name)
    }

    fn create_domain(&self, name: &str, ip_address: &str) -> Result<Domain> {
        self.call("create_domain")?;
        let domain = Domain {
            name: name.into(),
            ttl: Some(1800),
            zone_file: Some(format!("{}. 1800 IN A {}", name, ip_address)),
            ..Default::default()
        };
        self.data.borrow_mut().domains.push(domain.clone());
        Ok(domain)
    }

    fn delete_domain(&self, name: &str) -> Result<()> {
        self.call("delete_domain")?;
        Self::remove(&mut self.data.borrow_mut().domains, |d| d.name == name)
    }

    fn list_records(&self, domain: &str) -> Result<Vec<DomainRecord>> {
        self.call("list_records")?;
        Ok(self
            .data
            .borrow()
            .records
            .iter()
            .filter(|(d, _)| d == domain)
            .map(|(_, r)| r.clone())
            .collect())
    }

    fn get_record(&self, domain: &str, id: u64) -> Result<DomainRecord> {
        self.call("get_record")?;
        Self::find(&self.data.borrow().records, |(d, r)| d == domain && r.id == id)
            .map(|(_, record)| record)
    }

    fn create_record(&self, domain: &str, record: &RecordRequest) -> Result<DomainRecord> {
        self.call("create_record")?;
        let created = DomainRecord {
            id: self.fresh_id(),
            kind: record.kind.clone(),
            name: Some(record.name.clone()),
            data: Some(record.data.clone()),
            priority: record.priority,
            port: record.port,
            weight: record.weight,
            ..Default::default()
        };
        self.data
            .borrow_mut()
            .records
            .push((domain.to_string(), created.clone()));
        Ok(created)
    }

    fn delete_record(&self, domain: &str, id: u64) -> Result<()> {
        self.call("delete_record")?;
        Self::remove(&mut self.data.borrow_mut().records, |(d, r)| {
            d == domain && r.id == id
        })
    }

    fn list_images(&self, query: ImageQuery) -> Result<Vec<Image>> {
        self.call("list_images")?;
        let images = self.data.borrow().images.clone();
        Ok(images
            .into_iter()
            .filter(|image| match query {
                ImageQuery::All => true,
                ImageQuery::Application => image.kind == "application",
                ImageQuery::Distribution => image.kind == "distribution",
                ImageQuery::Private => !image.public,
            })
            .collect())
    }

    fn get_image(&self, id: &str) -> Result<Image> {
        self.call("get_image")?;
        Self::find(&self.data.borrow().images, |i| {
            i.id.to_string() == id || i.slug.as_deref() == Some(id)
        })
    }

    fn delete_image(&self, id: &str) -> Result<()> {
        self.call("delete_image")?;
        Self::remove(&mut self.data.borrow_mut().images, |i| i.id.to_string() == id)
    }

    fn list_snapshots(&self) -> Result<Vec<Snapshot>> {
        self.call("list_snapshots")?;
        Ok(self.data.borrow().snapshots.clone())
    }

    fn delete_snapshot(&self, id: &str) -> Result<()> {
        self.call("delete_snapshot")?;
        Self::remove(&mut self.data.borrow_mut().snapshots, |s| s.id.to_string() == id)
    }

    fn list_sizes(&self) -> Result<Vec<Size>> {
        self.call("list_sizes")?;
        Ok(self.data.borrow().sizes.clone())
    }

    fn list_regions(&self) -> Result<Vec<Region>> {
        self.call("list_regions")?;
        Ok(self.data.borrow().regions.clone())
    }

    fn list_keys(&self) -> Result<Vec<SshKey>> {
        self.call("list_keys")?;
        Ok(self.data.borrow().keys.clone())
    }

    fn get_key(&self, id: &str) -> Result<SshKey> {
        self.call("get_key")?;
        Self::find(&self.data.borrow().keys, |k| {
            k.id.to_string() == id || k.fingerprint == id
        })
    }

    fn create_key(&self, name: &str, public_key: &str) -> Result<SshKey> {
        self.call("create_key")?;
        let key = SshKey {
            id: self.fresh_id(),
            name: name.into(),
            public_key: public_key.into(),
            ..Default::default()
        };
        self.data.borrow_mut().keys.push(key.clone());
        Ok(key)
    }

    fn delete_key(&self, id: &str) -> Result<()> {
        self.call("delete_key")?;
        Self::remove(&mut self.data.borrow_mut().keys, |k| {
            k.id.to_string() == id || k.fingerprint == id
        })
    }

    fn list_tags(&self) -> Result<Vec<Tag>> {
        self.call("list_tags")?;
        Ok(self.data.borrow().tags.clone())
    }

    fn get_tag(&self, name: &str) -> Result<Tag> {
        self.call("get_tag")?;
        Self::find(&self.data.borrow().tags, |t| t.name == name)
    }

    fn create_tag(&self, name: &str) -> Result<Tag> {
        self.call("create_tag")?;
        let tag = Tag {
            name: name.into(),
            ..Default::default()
        };
        self.data.borrow_mut().tags.push(tag.clone());
        Ok(tag)
    }

    fn tag_droplets(&self, name: &str, droplet_ids: &[u64]) -> Result<()> {
        self.call("tag_droplets")?;
        let mut data = self.data.borrow_mut();
        let mut tagged = 0;
        for droplet in data.droplets.iter_mut() {
            if droplet_ids.contains(&droplet.id) && !droplet.tags.iter().any(|t| t == name) {
                droplet.tags.push(name.to_string());
                droplet.raw = None;
                tagged += 1;
            }
        }
        let tag = data
            .tags
            .iter_mut()
            .find(|t| t.name == name)
            .ok_or_else(not_found)?;
        tag.resources.droplets.count += tagged;
        tag.raw = None;
        Ok(())
    }

    fn rename_tag(&self, name: &str, new_name: &str) -> Result<Tag> {
        self.call("rename_tag")?;
        let mut data = self.data.borrow_mut();
        let tag = data
            .tags
            .iter_mut()
            .find(|t| t.name == name)
            .ok_or_else(not_found)?;
        tag.name = new_name.to_string();
        tag.raw = None;
        Ok(tag.clone())
    }

    fn delete_tag(&self, name: &str) -> Result<()> {
        self.call("delete_tag")?;
        Self::remove(&mut self.data.borrow_mut().tags, |t| t.name == name)
    }

    fn list_volumes(&self) -> Result<Vec<Volume>> {
        self.call("list_volumes")?;
        Ok(self.data.borrow().volumes.clone())
    }

    fn get_volume(&self, id: &str) -> Result<Volume> {
        self.call("get_volume")?;
        Self::find(&self.data.borrow().volumes, |v| v.id == id)
    }

    fn create_volume(&self, volume: &VolumeRequest) -> Result<Volume> {
        self.call("create_volume")?;
        let created = Volume {
            id: format!("vol-{}", self.fresh_id()),
            name: volume.name.clone(),
            size_gigabytes: volume.size_gigabytes,
            description: volume.description.clone(),
            region: Region {
                slug: volume.region.clone().unwrap_or_default(),
                ..Default::default()
            },
            ..Default::default()
        };
        self.data.borrow_mut().volumes.push(created.clone());
        Ok(created)
    }

    fn delete_volume(&self, id: &str) -> Result<()> {
        self.call("delete_volume")?;
        Self::remove(&mut self.data.borrow_mut().volumes, |v| v.id == id)
    }

    fn list_floating_ips(&self) -> Result<Vec<FloatingIp>> {
        self.call("list_floating_ips")?;
        Ok(self.data.borrow().floating_ips.clone())
    }

    fn get_floating_ip(&self, ip: &str) -> Result<FloatingIp> {
        self.call("get_floating_ip")?;
        Self::find(&self.data.borrow().floating_ips, |f| f.ip == ip)
    }

    fn delete_floating_ip(&self, ip: &str) -> Result<()> {
        self.call("delete_floating_ip")?;
        Self::remove(&mut self.data.borrow_mut().floating_ips, |f| f.ip == ip)
    }

    fn floating_ip_actions(&self, ip: &str) -> Result<Vec<Action>> {
        self.call("floating_ip_actions")?;
        Self::find(&self.data.borrow().floating_ips, |f| f.ip == ip)?;
        let ip = ResourceId::from(ip);
        Ok(self
            .data
            .borrow()
            .actions
            .iter()
            .filter(|a| a.resource_id.as_ref() == Some(&ip))
            .cloned()
            .collect())
    }
}
