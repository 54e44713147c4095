use super::truncate;
use crate::client::{CloudApi, RecordRequest};
use crate::display;
use crate::display::domain::DomainView;
use crate::error::Result;
use crate::output::{Document, Output};

pub fn list<C: CloudApi>(client: &C, limit: Option<usize>, out: &Output) -> Result<Document> {
    let domains = truncate(client.list_domains()?, limit);
    display::domain::many(&domains, out)
}

pub fn get<C: CloudApi>(
    client: &C,
    name: &str,
    view: DomainView,
    out: &Output,
) -> Result<Document> {
    let domain = client.get_domain(name)?;
    display::domain::one(&domain, view, None, out)
}

pub fn add<C: CloudApi>(client: &C, name: &str, ip: &str, out: &Output) -> Result<Document> {
    let domain = client.create_domain(name, ip)?;
    display::domain::one(&domain, DomainView::Summary, Some("Domain created."), out)
}

pub fn delete<C: CloudApi>(client: &C, name: &str, out: &Output) -> Result<Document> {
    client.delete_domain(name)?;
    Ok(display::message::show(
        &format!("Domain {} deleted.", name),
        out,
    ))
}

pub fn list_records<C: CloudApi>(
    client: &C,
    domain: &str,
    limit: Option<usize>,
    out: &Output,
) -> Result<Document> {
    let records = truncate(client.list_records(domain)?, limit);
    display::domain::records(&records, out)
}

pub fn get_record<C: CloudApi>(
    client: &C,
    domain: &str,
    id: u64,
    out: &Output,
) -> Result<Document> {
    let record = client.get_record(domain, id)?;
    display::domain::record(&record, None, out)
}

pub fn add_record<C: CloudApi>(
    client: &C,
    domain: &str,
    record: &RecordRequest,
    out: &Output,
) -> Result<Document> {
    let record = client.create_record(domain, record)?;
    display::domain::record(&record, Some("Domain record created."), out)
}

pub fn delete_record<C: CloudApi>(
    client: &C,
    domain: &str,
    id: u64,
    out: &Output,
) -> Result<Document> {
    client.delete_record(domain, id)?;
    Ok(display::message::show("Domain record deleted.", out))
}
