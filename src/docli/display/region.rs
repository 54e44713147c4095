use super::listing;
use crate::error::Result;
use crate::format::{default_join, format_id, format_name, format_status};
use crate::model::Region;
use crate::output::{Block, Document, Output};

/// Regions sorted by slug.
pub fn many(regions: &[Region], out: &Output) -> Result<Document> {
    if out.is_json() {
        return Document::payloads(regions);
    }
    let mut sorted = regions.to_vec();
    sorted.sort_by(|a, b| a.slug.cmp(&b.slug));
    let p = &out.painter;
    let table = listing(
        &["ID", "Name", "Sizes", "Features", "Available"],
        &sorted,
        |region| {
            vec![
                format_id(p, &region.slug),
                format_name(p, &region.name),
                default_join(&region.sizes),
                default_join(&region.features),
                format_status(p, region.available),
            ]
        },
    );
    Ok(Document::new().with(Block::Table(table)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::testing::*;

    fn region(slug: &str) -> Region {
        Region {
            slug: slug.into(),
            name: slug.to_uppercase(),
            available: true,
            ..Default::default()
        }
    }

    #[test]
    fn sorted_by_slug() {
        let out = table_out();
        let regions = vec![region("sfo2"), region("ams3"), region("nyc1")];
        let rows = cells(&render(&out, &many(&regions, &out).unwrap()));
        let slugs: Vec<&str> = rows[1..].iter().map(|r| r[0].as_str()).collect();
        assert_eq!(slugs, ["ams3", "nyc1", "sfo2"]);
        assert_eq!(rows[1], ["ams3", "AMS3", "none", "none", "yes"]);
    }
}
