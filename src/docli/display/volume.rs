use super::{banner, push_details, single};
use crate::error::Result;
use crate::format::{format_id, format_id_list, format_name, format_size, format_text_wrap};
use crate::model::Volume;
use crate::output::{Block, Document, Output};
use tabula::Table;

const DESCRIPTION_WIDTH: usize = 25;

pub fn one(volume: &Volume, message: Option<&str>, out: &Output) -> Result<Document> {
    if out.is_json() {
        return Document::payload(volume);
    }
    let p = &out.painter;
    let mut table = Table::new();
    table.push([banner(out, "ID: ", format_id(p, &volume.id))]);
    push_details(
        out,
        &mut table,
        [
            ("Name", format_name(p, &volume.name)),
            ("Size", format_size(volume.size_gigabytes)),
            ("Region", volume.region.slug.clone()),
            (
                "Description",
                format_text_wrap(
                    volume.description.as_deref().unwrap_or_default(),
                    DESCRIPTION_WIDTH,
                ),
            ),
            ("Attached To", format_id_list(p, &volume.droplet_ids)),
            ("Created At", out.date(volume.created_at.as_deref())),
        ],
    );
    Ok(single(out, message, table))
}

/// Stacked key/value blocks, one per volume, in a single table.
pub fn many(volumes: &[Volume], out: &Output) -> Result<Document> {
    if out.is_json() {
        return Document::payloads(volumes);
    }
    let p = &out.painter;
    let mut table = Table::new();
    if volumes.is_empty() {
        table.push_none();
    }
    for volume in volumes {
        table.push([banner(out, "ID: ", format_id(p, &volume.id))]);
        push_details(
            out,
            &mut table,
            [
                ("Name", format_name(p, &volume.name)),
                ("Size", format_size(volume.size_gigabytes)),
                ("Region", volume.region.slug.clone()),
                ("Attached to", format_id_list(p, &volume.droplet_ids)),
            ],
        );
    }
    Ok(Document::new().with(Block::Table(table)))
}
