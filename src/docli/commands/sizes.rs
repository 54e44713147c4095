use super::truncate;
use crate::client::CloudApi;
use crate::display;
use crate::error::Result;
use crate::output::{Document, Output};

pub fn list<C: CloudApi>(client: &C, limit: Option<usize>, out: &Output) -> Result<Document> {
    let sizes = truncate(client.list_sizes()?, limit);
    display::size::many(&sizes, out)
}
