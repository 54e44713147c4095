use super::{details, listing, single};
use crate::error::Result;
use crate::format::{format_id, format_name};
use crate::model::SshKey;
use crate::output::{Block, Document, Output};
use crate::styles::RED;

/// Whether `ssh get` shows the summary table or only the public key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyView {
    #[default]
    Summary,
    PublicKey,
}

pub fn one(key: &SshKey, view: KeyView, message: Option<&str>, out: &Output) -> Result<Document> {
    if out.is_json() {
        return Document::payload(key);
    }
    if view == KeyView::PublicKey {
        return Ok(Document::new().with(Block::Text(key.public_key.clone())));
    }
    let p = &out.painter;
    let table = details(
        out,
        [
            ("ID", format_id(p, key.id)),
            ("Name", format_name(p, &key.name)),
            ("Fingerprint", key.fingerprint.clone()),
            (
                "Public Key",
                p.paint(RED, "Use the --key flag to get the full public key"),
            ),
        ],
    );
    Ok(single(out, message, table))
}

pub fn many(keys: &[SshKey], out: &Output) -> Result<Document> {
    if out.is_json() {
        return Document::payloads(keys);
    }
    let p = &out.painter;
    let table = listing(&["ID", "Name", "Fingerprint"], keys, |key| {
        vec![
            format_id(p, key.id),
            format_name(p, &key.name),
            key.fingerprint.clone(),
        ]
    });
    Ok(Document::new().with(Block::Table(table)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::testing::*;

    fn key() -> SshKey {
        SshKey {
            id: 512189,
            name: "My SSH Public Key".into(),
            fingerprint: "3b:16:bf:e4:8b:00:8b:b8:59:8c:a9:d3:f0:19:45:fa".into(),
            public_key: "ssh-rsa AEXAMPLEaC1yc2EAAAADAQABAAAAQQDDHr example".into(),
            ..Default::default()
        }
    }

    #[test]
    fn public_key_is_elided_by_default() {
        let out = table_out();
        let rendered = render(&out, &one(&key(), KeyView::Summary, None, &out).unwrap());
        assert!(rendered.contains("Use the --key flag to get the full public key"));
        assert!(!rendered.contains("ssh-rsa"));
    }

    #[test]
    fn key_view_prints_the_key_alone() {
        let out = table_out();
        let doc = one(&key(), KeyView::PublicKey, None, &out).unwrap();
        assert_eq!(
            render(&out, &doc),
            "ssh-rsa AEXAMPLEaC1yc2EAAAADAQABAAAAQQDDHr example"
        );
    }

    #[test]
    fn json_ignores_the_view() {
        let out = json_out();
        let doc = one(&key(), KeyView::PublicKey, None, &out).unwrap();
        let value: serde_json::Value = serde_json::from_str(&render(&out, &doc)).unwrap();
        assert_eq!(value["id"], 512189);
    }
}
