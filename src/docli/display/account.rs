use super::{banner, push_details};
use crate::error::Result;
use crate::format::{account_status, format_id, format_status};
use crate::model::Account;
use crate::output::{Block, Document, Output};
use tabula::{Table, NONE};

pub fn one(account: &Account, out: &Output) -> Result<Document> {
    if out.is_json() {
        return Document::payload(account);
    }
    let p = &out.painter;
    let mut table = Table::new();
    table.push([banner(out, "UUID: ", format_id(p, &account.uuid))]);
    push_details(
        out,
        &mut table,
        [
            ("Status", account_status(p, &account.status)),
            (
                "Status message",
                account
                    .status_message
                    .clone()
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| NONE.to_string()),
            ),
            ("Email", account.email.clone()),
            ("Email verified", format_status(p, account.email_verified)),
            ("Droplet Limit", account.droplet_limit.to_string()),
            ("Floating IP Limit", account.floating_ip_limit.to_string()),
        ],
    );
    Ok(Document::new().with(Block::Table(table)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::testing::*;
    use serde_json::json;

    fn account() -> Account {
        serde_json::from_value(json!({
            "uuid": "b6fr89dbf6d9156cace5f3c78dc9851d957381ef",
            "status": "active",
            "status_message": "",
            "email": "sammy@example.com",
            "email_verified": true,
            "droplet_limit": 25,
            "floating_ip_limit": 5,
            "team": {"name": "My Team"}
        }))
        .unwrap()
    }

    #[test]
    fn table_layout() {
        let out = table_out();
        let rendered = render(&out, &one(&account(), &out).unwrap());
        let rows = cells(&rendered);
        assert_eq!(rows[0], ["UUID: b6fr89dbf6d9156cace5f3c78dc9851d957381ef"]);
        assert_eq!(rows[1], ["Status", "active"]);
        assert_eq!(rows[2], ["Status message", "none"]);
        assert_eq!(rows[3], ["Email", "sammy@example.com"]);
        assert_eq!(rows[4], ["Email verified", "yes"]);
        assert_eq!(rows[5], ["Droplet Limit", "25"]);
        assert_eq!(rows[6], ["Floating IP Limit", "5"]);
    }

    #[test]
    fn json_keeps_api_fields() {
        let out = json_out();
        let rendered = render(&out, &one(&account(), &out).unwrap());
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["team"]["name"], "My Team");
        assert_eq!(value["droplet_limit"], 25);
    }
}
