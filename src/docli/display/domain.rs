use super::{details, listing, single};
use crate::error::Result;
use crate::format::{domain_type, format_id, format_name};
use crate::model::{Domain, DomainRecord};
use crate::output::{Block, Document, Output};
use crate::styles::RED;
use tabula::NONE;

/// Whether `domains get` shows the summary table or only the zone file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DomainView {
    #[default]
    Summary,
    ZoneFile,
}

fn or_none<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| NONE.to_string())
}

pub fn one(
    domain: &Domain,
    view: DomainView,
    message: Option<&str>,
    out: &Output,
) -> Result<Document> {
    if out.is_json() {
        return Document::payload(domain);
    }
    if view == DomainView::ZoneFile {
        let zone_file = domain.zone_file.clone().unwrap_or_default();
        return Ok(Document::new().with(Block::Text(zone_file)));
    }
    let p = &out.painter;
    let table = details(
        out,
        [
            ("Domain Name", format_name(p, &domain.name)),
            ("TTL", or_none(domain.ttl)),
            (
                "Zone File",
                p.paint(RED, "Use the --zone-file flag to get the full zone file"),
            ),
        ],
    );
    Ok(single(out, message, table))
}

pub fn many(domains: &[Domain], out: &Output) -> Result<Document> {
    if out.is_json() {
        return Document::payloads(domains);
    }
    let p = &out.painter;
    let table = listing(&["Domain Name", "TTL"], domains, |domain| {
        vec![format_name(p, &domain.name), or_none(domain.ttl)]
    });
    Ok(Document::new().with(Block::Table(table)))
}

pub fn record(record: &DomainRecord, message: Option<&str>, out: &Output) -> Result<Document> {
    if out.is_json() {
        return Document::payload(record);
    }
    let p = &out.painter;
    let table = details(
        out,
        [
            ("ID", format_id(p, record.id)),
            ("Type", domain_type(p, &record.kind)),
            ("Name", or_none(record.name.as_deref())),
            ("Data", or_none(record.data.as_deref())),
            ("Priority", or_none(record.priority)),
            ("Port", or_none(record.port)),
            ("Weight", or_none(record.weight)),
        ],
    );
    Ok(single(out, message, table))
}

pub fn records(records: &[DomainRecord], out: &Output) -> Result<Document> {
    if out.is_json() {
        return Document::payloads(records);
    }
    let p = &out.painter;
    let table = listing(&["ID", "Type", "Name", "Data"], records, |record| {
        vec![
            format_id(p, record.id),
            domain_type(p, &record.kind),
            or_none(record.name.as_deref()),
            or_none(record.data.as_deref()),
        ]
    });
    Ok(Document::new().with(Block::Table(table)))
}
