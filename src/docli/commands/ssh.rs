use super::truncate;
use crate::client::CloudApi;
use crate::display;
use crate::display::ssh_key::KeyView;
use crate::error::Result;
use crate::output::{Document, Output};

pub fn list<C: CloudApi>(client: &C, limit: Option<usize>, out: &Output) -> Result<Document> {
    let keys = truncate(client.list_keys()?, limit);
    display::ssh_key::many(&keys, out)
}

pub fn get<C: CloudApi>(client: &C, id: &str, view: KeyView, out: &Output) -> Result<Document> {
    let key = client.get_key(id)?;
    display::ssh_key::one(&key, view, None, out)
}

pub fn add<C: CloudApi>(
    client: &C,
    name: &str,
    public_key: &str,
    out: &Output,
) -> Result<Document> {
    let key = client.create_key(name, public_key)?;
    display::ssh_key::one(&key, KeyView::Summary, Some("SSH Key added."), out)
}

pub fn delete<C: CloudApi>(client: &C, id: &str, out: &Output) -> Result<Document> {
    client.delete_key(id)?;
    Ok(display::message::show(
        &format!("SSH Key {} deleted.", id),
        out,
    ))
}
