use super::listing;
use crate::error::Result;
use crate::format::{format_id, format_name};
use crate::model::Kernel;
use crate::output::{Block, Document, Output};

pub fn many(kernels: &[Kernel], out: &Output) -> Result<Document> {
    if out.is_json() {
        return Document::payloads(kernels);
    }
    let p = &out.painter;
    let table = listing(&["ID", "Name and Version"], kernels, |kernel| {
        vec![
            format_id(p, kernel.id),
            format!("{}\nVersion: {}", format_name(p, &kernel.name), kernel.version),
        ]
    });
    Ok(Document::new().with(Block::Table(table)))
}
