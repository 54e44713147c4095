//! # Display Adapters
//!
//! One module per resource kind. Each exposes `one` for a single resource and
//! `many` for a collection (some add a policy variant, such as printing only a
//! zone file). Adapters return a [`Document`]:
//!
//! - In JSON mode the document is the payload the API sent, unchanged.
//! - In table mode `one` builds a headerless key/value table with labels in
//!   the `label` style, preceded by the optional confirmation message. `many`
//!   builds a headed summary table; an empty collection gets the `none` row.

use crate::output::{Block, Document, Output};
use tabula::{Cell, Table};

pub mod account;
pub mod action;
pub mod domain;
pub mod droplet;
pub mod floating_ip;
pub mod image;
pub mod kernel;
pub mod message;
pub mod region;
pub mod size;
pub mod ssh_key;
pub mod tag;
pub mod volume;

/// Appends `label | value` rows to a key/value table.
pub(crate) fn push_details<'r, I>(out: &Output, table: &mut Table, rows: I)
where
    I: IntoIterator<Item = (&'r str, String)>,
{
    for (label, value) in rows {
        table.push([out.label(label), value]);
    }
}

pub(crate) fn details<'r, I>(out: &Output, rows: I) -> Table
where
    I: IntoIterator<Item = (&'r str, String)>,
{
    let mut table = Table::new();
    push_details(out, &mut table, rows);
    table
}

/// A row spanning both columns of a key/value table, label then value.
pub(crate) fn banner(out: &Output, label: &str, value: String) -> Cell {
    Cell::new(format!("{}{}", out.label(label), value)).span(2)
}

/// A headed table with one row per item, or the `none` row when empty.
pub(crate) fn listing<T, F>(head: &[&str], items: &[T], row: F) -> Table
where
    F: Fn(&T) -> Vec<String>,
{
    let mut table = Table::with_head(head.iter().copied());
    if items.is_empty() {
        table.push_none();
    }
    for item in items {
        table.push(row(item));
    }
    table
}

/// Optional message line, then the table.
pub(crate) fn single(out: &Output, message: Option<&str>, table: Table) -> Document {
    let mut document = Document::new();
    if let Some(message) = message {
        document.push(out.message(message));
    }
    document.with(Block::Table(table))
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::format::Zone;
    use crate::output::{Document, Output, OutputMode};
    use crate::styles::DOCLI_THEME;
    use tabula::Painter;

    pub fn table_out() -> Output<'static> {
        Output::new(
            OutputMode::Table,
            Painter::new(&DOCLI_THEME, false),
            Zone::utc(),
        )
    }

    pub fn json_out() -> Output<'static> {
        Output::new(
            OutputMode::Json,
            Painter::new(&DOCLI_THEME, false),
            Zone::utc(),
        )
    }

    pub fn render(out: &Output, document: &Document) -> String {
        out.render(document)
    }

    /// Content lines of a rendered table, border characters removed.
    pub fn cells(rendered: &str) -> Vec<Vec<String>> {
        rendered
            .lines()
            .filter(|line| line.starts_with('│'))
            .map(|line| {
                line.trim_matches('│')
                    .split('│')
                    .map(|cell| cell.trim().to_string())
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use crate::error::Result;
    use crate::model::*;
    use serde_json::{json, Value};

    /// JSON mode prints a collection exactly as the API sent it.
    fn assert_list_verbatim<T, F>(payload: Value, adapter: F)
    where
        T: ApiResource,
        F: Fn(&[T], &Output) -> Result<Document>,
    {
        let out = json_out();
        let items = vec![T::from_payload(payload.clone()).unwrap()];
        let rendered = render(&out, &adapter(&items, &out).unwrap());
        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value, Value::Array(vec![payload]));
    }

    fn assert_one_verbatim<T, F>(payload: Value, adapter: F)
    where
        T: ApiResource,
        F: Fn(&T, &Output) -> Result<Document>,
    {
        let out = json_out();
        let item = T::from_payload(payload.clone()).unwrap();
        let rendered = render(&out, &adapter(&item, &out).unwrap());
        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value, payload);
    }

    fn region_payload() -> Value {
        json!({
            "slug": "nyc3",
            "name": "New York 3",
            "sizes": ["s-1vcpu-1gb"],
            "features": ["private_networking", "backups"],
            "available": null
        })
    }

    fn droplet_payload() -> Value {
        json!({
            "id": 3164444,
            "name": "example.com",
            "memory": 1024,
            "vcpus": 1,
            "disk": 25,
            "locked": false,
            "status": "active",
            "kernel": null,
            "created_at": "2020-07-21T18:37:44Z",
            "features": ["backups", "ipv6"],
            "backup_ids": [53893572],
            "next_backup_window": null,
            "snapshot_ids": [],
            "image": {
                "id": 63663980,
                "name": "20.04 (LTS) x64",
                "distribution": "Ubuntu",
                "slug": "ubuntu-20-04-x64",
                "public": true,
                "regions": ["nyc3"],
                "size_gigabytes": 2.36,
                "min_disk_size": 20
            },
            "size_slug": "s-1vcpu-1gb",
            "networks": {
                "v4": [{
                    "ip_address": "104.236.32.182",
                    "netmask": "255.255.192.0",
                    "type": "public"
                }],
                "v6": []
            },
            "region": region_payload(),
            "tags": ["web", "env:prod"],
            "volume_ids": []
        })
    }

    #[test]
    fn json_mode_prints_api_payloads() {
        assert_one_verbatim::<Account, _>(
            json!({
                "droplet_limit": 25,
                "floating_ip_limit": 5,
                "volume_limit": 100,
                "email": "sammy@example.com",
                "uuid": "b6fr89dbf6d9156cace5f3c78dc9851d957381ef",
                "email_verified": true,
                "status": "active",
                "status_message": "",
                "team": {"uuid": "5df3e3004a17e242b7c20ca6c9fc25b701a47ece", "name": "My Team"}
            }),
            account::one,
        );
        assert_list_verbatim::<Action, _>(
            json!({
                "id": 36804636,
                "status": "in-progress",
                "type": "create",
                "started_at": "2020-11-14T16:29:21Z",
                "completed_at": null,
                "resource_id": 3164444,
                "resource_type": "droplet",
                "region": null,
                "region_slug": "nyc3"
            }),
            action::many,
        );
        assert_list_verbatim::<Droplet, _>(droplet_payload(), droplet::many);
        assert_one_verbatim::<Droplet, _>(droplet_payload(), |d, out| {
            droplet::one(d, None, out)
        });
        assert_list_verbatim::<Domain, _>(
            json!({"name": "example.com", "ttl": 1800, "zone_file": null}),
            domain::many,
        );
        assert_one_verbatim::<Domain, _>(
            json!({"name": "example.com", "ttl": 1800, "zone_file": "$ORIGIN example.com.\n"}),
            |d, out| domain::one(d, domain::DomainView::Summary, None, out),
        );
        assert_list_verbatim::<DomainRecord, _>(
            json!({
                "id": 28448433,
                "type": "MX",
                "name": "@",
                "data": "mail.example.com",
                "priority": 10,
                "port": null,
                "ttl": 1800,
                "weight": null,
                "flags": null,
                "tag": null
            }),
            domain::records,
        );
        assert_list_verbatim::<Image, _>(
            json!({
                "id": 7555620,
                "name": "Nifty New Snapshot",
                "distribution": "Ubuntu",
                "slug": null,
                "public": false,
                "regions": ["nyc2", "nyc3"],
                "created_at": "2014-11-04T22:23:02Z",
                "type": "snapshot",
                "min_disk_size": null,
                "size_gigabytes": null,
                "status": "NEW"
            }),
            image::many,
        );
        assert_list_verbatim::<Snapshot, _>(
            json!({
                "id": "6372321",
                "name": "web-01-1595954862243",
                "created_at": "2020-07-28T16:47:44Z",
                "regions": ["nyc3", "sfo3"],
                "resource_id": "200776916",
                "resource_type": "droplet",
                "min_disk_size": 25,
                "size_gigabytes": 2.34,
                "tags": []
            }),
            image::snapshots,
        );
        assert_list_verbatim::<Kernel, _>(
            json!({
                "id": 7515,
                "name": "DigitalOcean GrubLoader v0.2 (20160714)",
                "version": "2016.07.13"
            }),
            kernel::many,
        );
        assert_list_verbatim::<Region, _>(region_payload(), region::many);
        assert_list_verbatim::<Size, _>(
            json!({
                "slug": "s-1vcpu-1gb",
                "memory": 1024,
                "vcpus": 1,
                "disk": 25,
                "transfer": 1.0,
                "price_monthly": 5,
                "price_hourly": 0.00743999984115362,
                "regions": ["nyc3"],
                "available": true,
                "description": "Basic"
            }),
            size::many,
        );
        assert_list_verbatim::<SshKey, _>(
            json!({
                "id": 512189,
                "fingerprint": "3b:16:bf:e4:8b:00:8b:b8:59:8c:a9:d3:f0:19:45:fa",
                "public_key": "ssh-rsa AAAAB3NzaC1yc2E example",
                "name": "My SSH Public Key"
            }),
            ssh_key::many,
        );
        assert_list_verbatim::<Tag, _>(
            json!({
                "name": "web",
                "resources": {
                    "count": 1,
                    "droplets": {
                        "count": 1,
                        "last_tagged_uri": "https://api.digitalocean.com/v2/droplets/3164444"
                    }
                }
            }),
            tag::many,
        );
        assert_list_verbatim::<Volume, _>(
            json!({
                "id": "506f78a4-e098-11e5-ad9f-000f53306ae1",
                "name": "example",
                "size_gigabytes": 10,
                "description": null,
                "region": region_payload(),
                "droplet_ids": [],
                "filesystem_type": "ext4",
                "created_at": "2020-03-02T17:00:49Z"
            }),
            volume::many,
        );
        assert_list_verbatim::<FloatingIp, _>(
            json!({
                "ip": "45.55.96.47",
                "region": region_payload(),
                "droplet": null,
                "locked": false
            }),
            floating_ip::many,
        );
    }

    #[test]
    fn empty_listing_has_single_placeholder_row() {
        let out = table_out();
        let table = listing(&["ID", "Name", "Fingerprint"], &Vec::<u8>::new(), |_| {
            vec![]
        });
        let rendered = table.render(&out.painter);
        let rows = cells(&rendered);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], ["ID", "Name", "Fingerprint"]);
        assert_eq!(rows[1], ["none"]);
    }

    #[test]
    fn single_puts_message_first() {
        let out = table_out();
        let table = details(&out, [("Name", "web".to_string())]);
        let doc = single(&out, Some("Volume created."), table);
        let rendered = render(&out, &doc);
        assert!(rendered.starts_with("Volume created.\n┌"));
    }
}
