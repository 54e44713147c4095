use super::listing;
use crate::error::Result;
use crate::format::{format_id, format_memory, format_size};
use crate::model::Size;
use crate::output::{Block, Document, Output};

pub const HEAD: [&str; 6] = [
    "ID",
    "Memory",
    "VCPUs",
    "Disk Space",
    "Transfer\nBandwidth",
    "Price/Month",
];

/// Sizes in the order the API returned them.
pub fn many(sizes: &[Size], out: &Output) -> Result<Document> {
    if out.is_json() {
        return Document::payloads(sizes);
    }
    let p = &out.painter;
    let table = listing(&HEAD, sizes, |size| {
        vec![
            format_id(p, &size.slug),
            format_memory(size.memory),
            size.vcpus.to_string(),
            format_size(size.disk),
            format!("{} TB", size.transfer),
            format!("${}", size.price_monthly),
        ]
    });
    Ok(Document::new().with(Block::Table(table)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::testing::*;
    use crate::model::ApiResource;
    use serde_json::json;

    fn size() -> Size {
        Size::from_payload(json!({
            "slug": "s-1vcpu-512mb-10gb",
            "memory": 512,
            "vcpus": 1,
            "disk": 10,
            "transfer": 0.5,
            "price_monthly": 4,
            "price_hourly": 0.00595
        }))
        .unwrap()
    }

    #[test]
    fn columns_carry_units() {
        let out = table_out();
        let rows = cells(&render(&out, &many(&[size()], &out).unwrap()));
        assert_eq!(
            rows[0],
            ["ID", "Memory", "VCPUs", "Disk Space", "Transfer", "Price/Month"]
        );
        assert_eq!(rows[1], ["", "", "", "", "Bandwidth", ""]);
        assert_eq!(
            rows[2],
            ["s-1vcpu-512mb-10gb", "512 MB", "1", "10 GB", "0.5 TB", "$4"]
        );
    }

    #[test]
    fn fractional_prices_keep_their_cents() {
        let out = table_out();
        let mut premium = size();
        premium.price_monthly = 7.5;
        let rows = cells(&render(&out, &many(&[premium], &out).unwrap()));
        assert_eq!(rows[2][5], "$7.5");
    }

    #[test]
    fn no_sizes() {
        let out = table_out();
        let rows = cells(&render(&out, &many(&[], &out).unwrap()));
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], ["none"]);
    }
}
