use super::{details, listing};
use crate::error::Result;
use crate::format::{format_id, format_name, format_opt_id};
use crate::model::FloatingIp;
use crate::output::{Block, Document, Output};

fn droplet_id(ip: &FloatingIp) -> Option<u64> {
    ip.droplet.as_ref().map(|droplet| droplet.id)
}

pub fn one(ip: &FloatingIp, out: &Output) -> Result<Document> {
    if out.is_json() {
        return Document::payload(ip);
    }
    let p = &out.painter;
    let table = details(
        out,
        [
            ("IP", format_id(p, &ip.ip)),
            ("Region", format_name(p, &ip.region.slug)),
            ("Droplet", format_opt_id(p, droplet_id(ip))),
        ],
    );
    Ok(Document::new().with(Block::Table(table)))
}

pub fn many(ips: &[FloatingIp], out: &Output) -> Result<Document> {
    if out.is_json() {
        return Document::payloads(ips);
    }
    let p = &out.painter;
    let table = listing(&["IP", "Region", "Droplet"], ips, |ip| {
        vec![
            format_id(p, &ip.ip),
            format_name(p, &ip.region.slug),
            format_opt_id(p, droplet_id(ip)),
        ]
    });
    Ok(Document::new().with(Block::Table(table)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::testing::*;
    use crate::model::{Droplet, Region};

    #[test]
    fn unassigned_ips_show_none() {
        let out = table_out();
        let ips = vec![
            FloatingIp {
                ip: "45.55.96.47".into(),
                region: Region {
                    slug: "nyc3".into(),
                    ..Default::default()
                },
                droplet: Some(Droplet {
                    id: 42,
                    ..Default::default()
                }),
                ..Default::default()
            },
            FloatingIp {
                ip: "45.55.96.48".into(),
                ..Default::default()
            },
        ];
        let rows = cells(&render(&out, &many(&ips, &out).unwrap()));
        assert_eq!(rows[1], ["45.55.96.47", "nyc3", "42"]);
        assert_eq!(rows[2], ["45.55.96.48", "", "none"]);

        let rows = cells(&render(&out, &one(&ips[0], &out).unwrap()));
        assert_eq!(rows[2], ["Droplet", "42"]);
    }
}
