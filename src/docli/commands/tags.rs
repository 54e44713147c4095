use super::truncate;
use crate::client::CloudApi;
use crate::display;
use crate::error::Result;
use crate::output::{Document, Output};

pub fn list<C: CloudApi>(client: &C, limit: Option<usize>, out: &Output) -> Result<Document> {
    let tags = truncate(client.list_tags()?, limit);
    display::tag::many(&tags, out)
}

pub fn get<C: CloudApi>(client: &C, name: &str, out: &Output) -> Result<Document> {
    let tag = client.get_tag(name)?;
    display::tag::one(&tag, None, out)
}

/// Creates the tag, then applies it to the given droplets when there are any.
pub fn add<C: CloudApi>(
    client: &C,
    name: &str,
    droplet_ids: &[u64],
    out: &Output,
) -> Result<Document> {
    let tag = client.create_tag(name)?;
    if droplet_ids.is_empty() {
        return display::tag::one(&tag, Some("Tag created."), out);
    }
    client.tag_droplets(&tag.name, droplet_ids)?;
    let message = match droplet_ids.len() {
        1 => "Tag created and applied to 1 droplet.".to_string(),
        n => format!("Tag created and applied to {} droplets.", n),
    };
    display::tag::one(&tag, Some(&message), out)
}

pub fn rename<C: CloudApi>(
    client: &C,
    name: &str,
    new_name: &str,
    out: &Output,
) -> Result<Document> {
    let tag = client.rename_tag(name, new_name)?;
    display::tag::one(&tag, Some("Tag renamed."), out)
}

pub fn delete<C: CloudApi>(client: &C, name: &str, out: &Output) -> Result<Document> {
    client.delete_tag(name)?;
    Ok(display::message::show(&format!("Tag {} deleted.", name), out))
}
