use super::{details, listing, single};
use crate::error::Result;
use crate::format::{format_name, format_opt_id};
use crate::model::Tag;
use crate::output::{Block, Document, Output};

pub fn one(tag: &Tag, message: Option<&str>, out: &Output) -> Result<Document> {
    if out.is_json() {
        return Document::payload(tag);
    }
    let p = &out.painter;
    let droplets = &tag.resources.droplets;
    let last = droplets.last_tagged.as_ref().map(|droplet| droplet.id);
    let table = details(
        out,
        [
            ("Tag", format_name(p, &tag.name)),
            ("Droplets Tagged", droplets.count.to_string()),
            ("Last Droplet Tagged", format_opt_id(p, last)),
        ],
    );
    Ok(single(out, message, table))
}

pub fn many(tags: &[Tag], out: &Output) -> Result<Document> {
    if out.is_json() {
        return Document::payloads(tags);
    }
    let p = &out.painter;
    let table = listing(&["Tag", "Droplets Tagged"], tags, |tag| {
        vec![
            format_name(p, &tag.name),
            tag.resources.droplets.count.to_string(),
        ]
    });
    Ok(Document::new().with(Block::Table(table)))
}
