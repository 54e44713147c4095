use super::{details, listing};
use crate::error::Result;
use crate::format::{
    default_join, format_id, format_image_name, format_name, format_size, format_status,
};
use crate::model::{Image, Snapshot};
use crate::output::{Block, Document, Output};
use crate::styles::{BLUE, GREEN};
use tabula::NONE;

const NAME_CUTOFF: usize = 50;

pub fn one(image: &Image, out: &Output) -> Result<Document> {
    if out.is_json() {
        return Document::payload(image);
    }
    let p = &out.painter;
    let table = details(
        out,
        [
            ("ID", format_id(p, image.id)),
            ("Name", format_name(p, &image.name)),
            ("Distribution", image.distribution.clone()),
            ("Type", image.kind.clone()),
            (
                "Slug",
                image
                    .slug
                    .clone()
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(|| NONE.to_string()),
            ),
            ("Public", format_status(p, image.public)),
            ("Regions", default_join(&image.regions)),
            ("Created At", out.date(image.created_at.as_deref())),
            ("Size", format_size(image.size_gigabytes)),
            ("Minimum Disk Size", format_size(image.min_disk_size)),
        ],
    );
    Ok(Document::new().with(Block::Table(table)))
}

fn sort_key(image: &Image) -> (String, String) {
    let key = format!("{}{}", image.distribution, image.name);
    (key.to_lowercase(), key)
}

/// Table rows are sorted by distribution then name. Public images are green,
/// private ones blue. JSON keeps the API order.
pub fn many(images: &[Image], out: &Output) -> Result<Document> {
    if out.is_json() {
        return Document::payloads(images);
    }
    let mut sorted = images.to_vec();
    sorted.sort_by_cached_key(sort_key);
    let p = &out.painter;
    let head = format!(
        "Distribution ({}) ({})",
        p.paint(GREEN, "PUBLIC"),
        p.paint(BLUE, "PRIVATE")
    );
    let table = listing(&["ID", head.as_str(), "Minimum Size"], &sorted, |image| {
        let name = format!("{} {}", image.distribution, image.name);
        vec![
            format_id(p, image.id),
            format_image_name(p, &name, image.public, NAME_CUTOFF),
            format_size(image.min_disk_size),
        ]
    });
    Ok(Document::new().with(Block::Table(table)))
}

pub fn snapshots(snapshots: &[Snapshot], out: &Output) -> Result<Document> {
    if out.is_json() {
        return Document::payloads(snapshots);
    }
    let p = &out.painter;
    let table = listing(&["ID", "Name", "Created At"], snapshots, |snapshot| {
        vec![
            format_id(p, &snapshot.id),
            format_name(p, &snapshot.name),
            out.date(snapshot.created_at.as_deref()),
        ]
    });
    Ok(Document::new().with(Block::Table(table)))
}
