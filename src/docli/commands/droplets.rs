use super::truncate;
use crate::client::{CloudApi, DropletAction};
use crate::display;
use crate::error::Result;
use crate::output::{Document, Output};

/// Power state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Power {
    Cycle,
    On,
    Off,
    Reboot,
}

/// What `droplets action-by-tag` does to every droplet carrying the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagAction {
    Delete,
    PowerCycle,
    PowerOn,
    Shutdown,
    EnablePrivateNetworking,
    EnableIpv6,
    EnableBackups,
    DisableBackups,
    Snapshot,
}

pub fn list<C: CloudApi>(client: &C, limit: Option<usize>, out: &Output) -> Result<Document> {
    let droplets = truncate(client.list_droplets()?, limit);
    display::droplet::many(&droplets, out)
}

pub fn get<C: CloudApi>(client: &C, id: u64, out: &Output) -> Result<Document> {
    let droplet = client.get_droplet(id)?;
    display::droplet::one(&droplet, None, out)
}

pub fn delete<C: CloudApi>(client: &C, id: u64, out: &Output) -> Result<Document> {
    client.delete_droplet(id)?;
    Ok(display::message::show(&format!("Droplet {} deleted.", id), out))
}

fn act<C: CloudApi>(
    client: &C,
    id: u64,
    action: DropletAction,
    message: &str,
    out: &Output,
) -> Result<Document> {
    let action = client.droplet_action(id, &action)?;
    display::action::id_only(&action, Some(message), out)
}

pub fn shutdown<C: CloudApi>(client: &C, id: u64, out: &Output) -> Result<Document> {
    act(client, id, DropletAction::Shutdown, "Shutting down droplet.", out)
}

pub fn power<C: CloudApi>(client: &C, id: u64, power: Power, out: &Output) -> Result<Document> {
    let (action, message) = match power {
        Power::Cycle => (DropletAction::PowerCycle, "Power cycling droplet..."),
        Power::On => (DropletAction::PowerOn, "Powering on droplet..."),
        Power::Off => (DropletAction::PowerOff, "Powering off droplet..."),
        Power::Reboot => (DropletAction::Reboot, "Rebooting droplet..."),
    };
    act(client, id, action, message, out)
}

pub fn password_reset<C: CloudApi>(client: &C, id: u64, out: &Output) -> Result<Document> {
    act(
        client,
        id,
        DropletAction::PasswordReset,
        "Droplet password reset.",
        out,
    )
}

pub fn enable_ipv6<C: CloudApi>(client: &C, id: u64, out: &Output) -> Result<Document> {
    act(client, id, DropletAction::EnableIpv6, "IPv6 enabled.", out)
}

pub fn enable_private_networking<C: CloudApi>(
    client: &C,
    id: u64,
    out: &Output,
) -> Result<Document> {
    act(
        client,
        id,
        DropletAction::EnablePrivateNetworking,
        "Private networking enabled.",
        out,
    )
}

pub fn backups<C: CloudApi>(client: &C, id: u64, enable: bool, out: &Output) -> Result<Document> {
    if enable {
        act(
            client,
            id,
            DropletAction::EnableBackups,
            "Automatic backups enabled.",
            out,
        )
    } else {
        act(
            client,
            id,
            DropletAction::DisableBackups,
            "Automatic backups disabled.",
            out,
        )
    }
}

pub fn take_snapshot<C: CloudApi>(
    client: &C,
    id: u64,
    name: &str,
    out: &Output,
) -> Result<Document> {
    let action = client.droplet_action(
        id,
        &DropletAction::Snapshot {
            name: Some(name.to_string()),
        },
    )?;
    display::action::one(&action, Some("Taking a snapshot..."), out)
}

pub fn snapshots<C: CloudApi>(
    client: &C,
    id: u64,
    limit: Option<usize>,
    out: &Output,
) -> Result<Document> {
    let snapshots = truncate(client.droplet_snapshots(id)?, limit);
    display::image::snapshots(&snapshots, out)
}

pub fn actions<C: CloudApi>(
    client: &C,
    id: u64,
    limit: Option<usize>,
    out: &Output,
) -> Result<Document> {
    let actions = truncate(client.droplet_actions(id)?, limit);
    display::action::many(&actions, out)
}

pub fn action<C: CloudApi>(
    client: &C,
    droplet_id: u64,
    action_id: u64,
    out: &Output,
) -> Result<Document> {
    let action = client.droplet_action_get(droplet_id, action_id)?;
    display::action::one(&action, None, out)
}

pub fn kernels<C: CloudApi>(
    client: &C,
    id: u64,
    limit: Option<usize>,
    out: &Output,
) -> Result<Document> {
    let kernels = truncate(client.droplet_kernels(id)?, limit);
    display::kernel::many(&kernels, out)
}

pub fn by_tag<C: CloudApi>(
    client: &C,
    tag: &str,
    action: TagAction,
    out: &Output,
) -> Result<Document> {
    let action = match action {
        TagAction::Delete => {
            client.delete_droplets_by_tag(tag)?;
            return Ok(display::message::show("Droplets deleted.", out));
        }
        TagAction::PowerCycle => DropletAction::PowerCycle,
        TagAction::PowerOn => DropletAction::PowerOn,
        TagAction::Shutdown => DropletAction::Shutdown,
        TagAction::EnablePrivateNetworking => DropletAction::EnablePrivateNetworking,
        TagAction::EnableIpv6 => DropletAction::EnableIpv6,
        TagAction::EnableBackups => DropletAction::EnableBackups,
        TagAction::DisableBackups => DropletAction::DisableBackups,
        TagAction::Snapshot => DropletAction::Snapshot { name: None },
    };
    let actions = client.droplet_action_by_tag(tag, &action)?;
    display::action::ids(&actions, Some("Executing action..."), out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::*;
    use crate::model::Droplet;

    fn droplet(id: u64, tags: &[&str]) -> Droplet {
        Droplet {
            id,
            name: format!("web-{}", id),
            status: "active".into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    fn client() -> FixtureClient {
        FixtureClient::new(Fixtures {
            droplets: vec![droplet(1, &["web"]), droplet(2, &["web"]), droplet(3, &[])],
            ..Default::default()
        })
    }

    #[test]
    fn list_respects_limit() {
        let out = table_out();
        let rows = cells(&render(&out, &list(&client(), Some(2), &out).unwrap()));
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2][0], "2");
    }

    #[test]
    fn delete_confirms_only() {
        let out = table_out();
        let client = client();
        let doc = delete(&client, 3, &out).unwrap();
        assert_eq!(render(&out, &doc), "Droplet 3 deleted.");
        assert_eq!(client.calls(), ["delete_droplet"]);
    }

    #[test]
    fn delete_failure_produces_no_document() {
        let client =
            FixtureClient::failing(404, "The resource you were accessing could not be found.");
        let result = delete(&client, 3, &table_out());
        assert!(result.is_err());
        assert_eq!(client.calls(), ["delete_droplet"]);
    }

    #[test]
    fn power_actions_print_message_and_id() {
        let out = table_out();
        let client = client();
        let rendered = render(&out, &power(&client, 1, Power::Cycle, &out).unwrap());
        assert_eq!(rendered, "Power cycling droplet...\nAction ID: 1000");
        assert_eq!(client.fixtures().actions[0].kind, "power_cycle");
    }

    #[test]
    fn shutdown_on_missing_droplet_fails() {
        assert!(shutdown(&client(), 99, &table_out()).is_err());
    }

    #[test]
    fn snapshot_shows_the_action() {
        let out = table_out();
        let rendered = render(&out, &take_snapshot(&client(), 1, "nightly", &out).unwrap());
        assert!(rendered.starts_with("Taking a snapshot...\n"));
        assert!(rendered.contains("│ Action Type     │ snapshot"));
    }

    #[test]
    fn actions_are_listed_per_droplet() {
        let out = table_out();
        let client = client();
        enable_ipv6(&client, 1, &out).unwrap();
        backups(&client, 2, true, &out).unwrap();
        let rows = cells(&render(&out, &actions(&client, 1, None, &out).unwrap()));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][2], "enable_ipv6");
    }

    #[test]
    fn delete_by_tag() {
        let out = table_out();
        let client = client();
        let doc = by_tag(&client, "web", TagAction::Delete, &out).unwrap();
        assert_eq!(render(&out, &doc), "Droplets deleted.");
        assert_eq!(client.fixtures().droplets.len(), 1);
        assert_eq!(client.calls(), ["delete_droplets_by_tag"]);
    }

    #[test]
    fn actions_by_tag_list_ids() {
        let out = table_out();
        let client = client();
        let doc = by_tag(&client, "web", TagAction::PowerOn, &out).unwrap();
        assert_eq!(
            render(&out, &doc),
            "Executing action...\nAction ID: 1000\nAction ID: 1001"
        );
    }
}
