//! # CLI Layer
//!
//! Turns parsed arguments into one handler call and prints the result. This is
//! the only place that touches stdout, reads the environment and picks the
//! production client; handlers themselves never print.
//!
//! - `run()`: parse, set up logging and output, resolve the client, dispatch
//! - `dispatch()`: maps every leaf of the command tree to a handler

use super::setup::{
    ApiCommands, BackupCommands, Cli, Commands, DomainCommands, DropletActionCommands,
    DropletCommands, DropletSnapshotCommands, FloatingIpActionCommands, FloatingIpCommands,
    ImageCommands, PowerCommands, RecordCommands, SnapshotCommands, SshCommands, TagCommands,
    VolumeCommands,
};
use clap::Parser;
use docli::auth;
use docli::client::{CloudApi, RecordRequest};
use docli::commands::{
    account, domains, droplets, floating_ips, images, regions, sizes, snapshots, ssh, tags,
    token, volumes,
};
use docli::config::{self, DocliConfig};
use docli::display::domain::DomainView;
use docli::display::ssh_key::KeyView;
use docli::error::Result;
use docli::format::Zone;
use docli::output::{Document, Output, OutputMode};
use docli::prompt::{Prompt, TermPrompt};
use docli::styles::DOCLI_THEME;
use env_logger::Env;
use tabula::Painter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Table
    };
    let out = Output::new(mode, Painter::detect(&DOCLI_THEME), Zone::Local);
    let config_dir = config::config_dir(cli.config_dir.clone())?;

    let document = match cli.command {
        Commands::Token { token } => {
            let env_token_set = cli.env_token.as_deref().is_some_and(|t| !t.trim().is_empty());
            token::set(&config_dir, &token, env_token_set, &out)?
        }
        Commands::Api(command) => {
            let config = DocliConfig::load(&config_dir)?;
            let client = auth::connect(&config, cli.env_token.as_deref(), cli.api_url.as_deref())?;
            let mut prompt = TermPrompt::new(out.painter.color());
            dispatch(&client, command, &mut prompt, &out)?
        }
    };

    if !document.is_empty() {
        println!("{}", out.render(&document));
    }
    Ok(())
}

/// `warn` by default, `debug` with `-v`; `RUST_LOG` overrides both.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

pub fn dispatch<C: CloudApi, P: Prompt>(
    client: &C,
    command: ApiCommands,
    prompt: &mut P,
    out: &Output,
) -> Result<Document> {
    match command {
        ApiCommands::Account => account::show(client, out),
        ApiCommands::Droplets(cmd) => droplet_command(client, cmd, out),
        ApiCommands::Domains(cmd) => domain_command(client, cmd, out),
        ApiCommands::Images(cmd) => match cmd {
            ImageCommands::List { filter, list } => {
                images::list(client, filter.query(), list.limit, out)
            }
            ImageCommands::Get { id } => images::get(client, &id, out),
            ImageCommands::Delete { id } => images::delete(client, &id, out),
        },
        ApiCommands::Snapshots(cmd) => match cmd {
            SnapshotCommands::List { list } => snapshots::list(client, list.limit, out),
            SnapshotCommands::Get { id } => snapshots::get(client, &id, out),
            SnapshotCommands::Delete { id } => snapshots::delete(client, &id, out),
        },
        ApiCommands::Sizes { list } => sizes::list(client, list.limit, out),
        ApiCommands::Regions { list } => regions::list(client, list.limit, out),
        ApiCommands::Ssh(cmd) => match cmd {
            SshCommands::List { list } => ssh::list(client, list.limit, out),
            SshCommands::Get { id, key } => {
                let view = if key {
                    KeyView::PublicKey
                } else {
                    KeyView::Summary
                };
                ssh::get(client, &id, view, out)
            }
            SshCommands::Add { name, public_key } => ssh::add(client, &name, &public_key, out),
            SshCommands::Delete { id } => ssh::delete(client, &id, out),
        },
        ApiCommands::Tags(cmd) => match cmd {
            TagCommands::List { list } => tags::list(client, list.limit, out),
            TagCommands::Get { tag } => tags::get(client, &tag, out),
            TagCommands::Add { tag, droplet_ids } => tags::add(client, &tag, &droplet_ids, out),
            TagCommands::Rename { tag, new_tag } => tags::rename(client, &tag, &new_tag, out),
            TagCommands::Delete { tag } => tags::delete(client, &tag, out),
        },
        ApiCommands::Volumes(cmd) => match cmd {
            VolumeCommands::List { list } => volumes::list(client, list.limit, out),
            VolumeCommands::Get { id } => volumes::get(client, &id, out),
            VolumeCommands::Add { volume } => volumes::add(client, volume.into(), prompt, out),
            VolumeCommands::Delete { id } => volumes::delete(client, &id, out),
        },
        ApiCommands::FloatingIps(cmd) => match cmd {
            FloatingIpCommands::List { list } => floating_ips::list(client, list.limit, out),
            FloatingIpCommands::Get { ip } => floating_ips::get(client, &ip, out),
            FloatingIpCommands::Delete { ip } => floating_ips::delete(client, &ip, out),
            FloatingIpCommands::Actions(FloatingIpActionCommands::List { ip, list }) => {
                floating_ips::actions(client, &ip, list.limit, out)
            }
        },
    }
}

fn droplet_command<C: CloudApi>(
    client: &C,
    cmd: DropletCommands,
    out: &Output,
) -> Result<Document> {
    match cmd {
        DropletCommands::List { list } => droplets::list(client, list.limit, out),
        DropletCommands::Get { id } => droplets::get(client, id, out),
        DropletCommands::Delete { id } => droplets::delete(client, id, out),
        DropletCommands::Shutdown { id } => droplets::shutdown(client, id, out),
        DropletCommands::Power(power) => {
            let (id, power) = match power {
                PowerCommands::Cycle { id } => (id, droplets::Power::Cycle),
                PowerCommands::On { id } => (id, droplets::Power::On),
                PowerCommands::Off { id } => (id, droplets::Power::Off),
                PowerCommands::Reboot { id } => (id, droplets::Power::Reboot),
            };
            droplets::power(client, id, power, out)
        }
        DropletCommands::PasswordReset { id } => droplets::password_reset(client, id, out),
        DropletCommands::EnableIpv6 { id } => droplets::enable_ipv6(client, id, out),
        DropletCommands::EnablePrivateNetworking { id } => {
            droplets::enable_private_networking(client, id, out)
        }
        DropletCommands::Backups(BackupCommands::Enable { id }) => {
            droplets::backups(client, id, true, out)
        }
        DropletCommands::Backups(BackupCommands::Disable { id }) => {
            droplets::backups(client, id, false, out)
        }
        DropletCommands::Snapshots(DropletSnapshotCommands::Take { id, name }) => {
            droplets::take_snapshot(client, id, &name, out)
        }
        DropletCommands::Snapshots(DropletSnapshotCommands::List { id, list }) => {
            droplets::snapshots(client, id, list.limit, out)
        }
        DropletCommands::Actions(DropletActionCommands::List { id, list }) => {
            droplets::actions(client, id, list.limit, out)
        }
        DropletCommands::Actions(DropletActionCommands::Get {
            droplet_id,
            action_id,
        }) => droplets::action(client, droplet_id, action_id, out),
        DropletCommands::Kernels { id, list } => droplets::kernels(client, id, list.limit, out),
        DropletCommands::ActionByTag { tag, action } => {
            droplets::by_tag(client, &tag, action.into(), out)
        }
    }
}

fn domain_command<C: CloudApi>(
    client: &C,
    cmd: DomainCommands,
    out: &Output,
) -> Result<Document> {
    match cmd {
        DomainCommands::List { list } => domains::list(client, list.limit, out),
        DomainCommands::Get { name, zone_file } => {
            let view = if zone_file {
                DomainView::ZoneFile
            } else {
                DomainView::Summary
            };
            domains::get(client, &name, view, out)
        }
        DomainCommands::Add { name, ip } => domains::add(client, &name, &ip, out),
        DomainCommands::Delete { name } => domains::delete(client, &name, out),
        DomainCommands::Records(cmd) => match cmd {
            RecordCommands::List { domain, list } => {
                domains::list_records(client, &domain, list.limit, out)
            }
            RecordCommands::Get { domain, id } => domains::get_record(client, &domain, id, out),
            RecordCommands::Add { domain, record } => {
                domains::add_record(client, &domain, &RecordRequest::from(record), out)
            }
            RecordCommands::Delete { domain, id } => {
                domains::delete_record(client, &domain, id, out)
            }
        },
    }
}
