use super::truncate;
use crate::client::CloudApi;
use crate::display;
use crate::error::Result;
use crate::output::{Document, Output};

pub fn list<C: CloudApi>(client: &C, limit: Option<usize>, out: &Output) -> Result<Document> {
    let snapshots = truncate(client.list_snapshots()?, limit);
    display::image::snapshots(&snapshots, out)
}

/// Reads through the images endpoint, which also reports distribution and type.
pub fn get<C: CloudApi>(client: &C, id: &str, out: &Output) -> Result<Document> {
    let image = client.get_image(id)?;
    display::image::one(&image, out)
}

pub fn delete<C: CloudApi>(client: &C, id: &str, out: &Output) -> Result<Document> {
    client.delete_snapshot(id)?;
    Ok(display::message::show(
        &format!("Snapshot {} deleted.", id),
        out,
    ))
}
