use super::{banner, listing, push_details, single};
use crate::error::Result;
use crate::format::{
    default_join, droplet_status, format_id, format_memory, format_name, format_size,
};
use crate::model::Droplet;
use crate::output::{Block, Document, Output};
use tabula::{Table, NONE};

pub fn one(droplet: &Droplet, message: Option<&str>, out: &Output) -> Result<Document> {
    if out.is_json() {
        return Document::payload(droplet);
    }
    let p = &out.painter;
    let kernel = match &droplet.kernel {
        Some(kernel) => format_name(p, &kernel.name),
        None => NONE.to_string(),
    };
    let mut table = Table::new();
    push_details(
        out,
        &mut table,
        [
            ("ID", format_id(p, droplet.id)),
            ("Name", format_name(p, &droplet.name)),
            ("Status", droplet_status(p, &droplet.status)),
            ("Memory", format_memory(droplet.memory)),
            ("Disk Size", format_size(droplet.disk)),
            ("VCPUs", droplet.vcpus.to_string()),
            ("Kernel", kernel),
            (
                "Image",
                format!("{} {}", droplet.image.distribution, droplet.image.name),
            ),
            ("Features", default_join(&droplet.features)),
            ("Region", droplet.region.name.clone()),
            ("IPv4", default_join(droplet.ipv4())),
            ("IPv6", default_join(droplet.ipv6())),
            ("Tags", default_join(&droplet.tags)),
            ("Created At", out.date(droplet.created_at.as_deref())),
        ],
    );
    table.push([banner(
        out,
        "Backups",
        format!("\n{}", default_join(&droplet.backup_ids)),
    )]);
    table.push([banner(
        out,
        "Snapshots",
        format!("\n{}", default_join(&droplet.snapshot_ids)),
    )]);
    table.push([banner(
        out,
        "Volumes",
        format!("\n{}", default_join(&droplet.volume_ids)),
    )]);
    Ok(single(out, message, table))
}

pub fn many(droplets: &[Droplet], out: &Output) -> Result<Document> {
    if out.is_json() {
        return Document::payloads(droplets);
    }
    let p = &out.painter;
    let table = listing(&["ID", "Name", "IPv4", "Status"], droplets, |droplet| {
        vec![
            format_id(p, droplet.id),
            format_name(p, &droplet.name),
            default_join(droplet.ipv4()),
            droplet_status(p, &droplet.status),
        ]
    });
    Ok(Document::new().with(Block::Table(table)))
}
