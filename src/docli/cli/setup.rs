use clap::{Args, Parser, Subcommand, ValueEnum};
use docli::auth::{API_URL_ENV, TOKEN_ENV};
use docli::client::{ImageQuery, RecordRequest};
use docli::commands::droplets::TagAction;
use docli::commands::volumes::VolumeArgs;
use docli::config::CONFIG_DIR_ENV;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.4.0" for releases, "0.4.0@abc1234 2024-01-15" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("DOCLI_GIT_HASH");
    const GIT_DATE: &str = env!("DOCLI_GIT_DATE");
    const IS_RELEASE: &str = env!("DOCLI_IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "docli", bin_name = "docli", version = get_version())]
#[command(about = "Command-line client for the DigitalOcean API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print raw JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long = "access-token", env = TOKEN_ENV, global = true, hide = true)]
    pub env_token: Option<String>,

    #[arg(long, env = API_URL_ENV, global = true, hide = true)]
    pub api_url: Option<String>,

    #[arg(long, env = CONFIG_DIR_ENV, global = true, hide = true)]
    pub config_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListArgs {
    /// Show at most this many entries
    #[arg(long, visible_alias = "number", value_name = "N")]
    pub limit: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Api(ApiCommands),

    /// Store the API token used by every other command
    #[command(aliases = ["auth", "authenticate"])]
    Token { token: String },
}

/// Commands that call the API and therefore need a token.
#[derive(Subcommand, Debug)]
pub enum ApiCommands {
    /// Show account information
    #[command(alias = "acc")]
    Account,

    /// Manage droplets
    #[command(subcommand, alias = "droplet")]
    Droplets(DropletCommands),

    /// Manage domains and their records
    #[command(subcommand, alias = "domain")]
    Domains(DomainCommands),

    /// Manage images
    #[command(subcommand, alias = "image")]
    Images(ImageCommands),

    /// Manage snapshots
    #[command(subcommand, alias = "snapshot")]
    Snapshots(SnapshotCommands),

    /// List droplet sizes
    #[command(alias = "size")]
    Sizes {
        #[command(flatten)]
        list: ListArgs,
    },

    /// List regions
    #[command(alias = "region")]
    Regions {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Manage SSH keys
    #[command(subcommand)]
    Ssh(SshCommands),

    /// Manage tags
    #[command(subcommand, alias = "tag")]
    Tags(TagCommands),

    /// Manage block storage volumes
    #[command(subcommand, alias = "volume")]
    Volumes(VolumeCommands),

    /// Manage floating IPs
    #[command(subcommand, alias = "floating-ip")]
    FloatingIps(FloatingIpCommands),
}

#[derive(Subcommand, Debug)]
pub enum DropletCommands {
    /// List droplets
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Show a droplet
    #[command(aliases = ["i", "info"])]
    Get { id: u64 },

    /// Delete a droplet
    #[command(aliases = ["rm", "del", "remove"])]
    Delete { id: u64 },

    /// Shut a droplet down
    Shutdown { id: u64 },

    /// Change a droplet's power state
    #[command(subcommand)]
    Power(PowerCommands),

    /// Reset the root password
    #[command(alias = "password_reset")]
    PasswordReset { id: u64 },

    /// Enable IPv6 networking
    #[command(alias = "enable_ipv6")]
    EnableIpv6 { id: u64 },

    /// Enable private networking
    #[command(name = "enable-pn", alias = "enable_pn")]
    EnablePrivateNetworking { id: u64 },

    /// Turn automatic backups on or off
    #[command(subcommand)]
    Backups(BackupCommands),

    /// Take or list droplet snapshots
    #[command(subcommand, alias = "snapshot")]
    Snapshots(DropletSnapshotCommands),

    /// Inspect actions run on a droplet
    #[command(subcommand, alias = "action")]
    Actions(DropletActionCommands),

    /// List kernels available to a droplet
    Kernels {
        id: u64,
        #[command(flatten)]
        list: ListArgs,
    },

    /// Run an action on every droplet carrying a tag
    #[command(alias = "actionByTag")]
    ActionByTag {
        tag: String,
        #[arg(long, value_enum)]
        action: TagActionArg,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerCommands {
    /// Power cycle a droplet
    Cycle { id: u64 },
    /// Power a droplet on
    On { id: u64 },
    /// Power a droplet off
    Off { id: u64 },
    /// Reboot a droplet
    Reboot { id: u64 },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupCommands {
    /// Enable backups
    Enable { id: u64 },
    /// Disable backups
    Disable { id: u64 },
}

#[derive(Subcommand, Debug)]
pub enum DropletSnapshotCommands {
    /// Snapshot a droplet
    Take { id: u64, name: String },

    /// List a droplet's snapshots
    #[command(alias = "ls")]
    List {
        id: u64,
        #[command(flatten)]
        list: ListArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum DropletActionCommands {
    /// List a droplet's actions
    #[command(alias = "ls")]
    List {
        id: u64,
        #[command(flatten)]
        list: ListArgs,
    },

    /// Show one action of a droplet
    #[command(aliases = ["i", "info"])]
    Get { droplet_id: u64, action_id: u64 },
}

/// Actions accepted by `droplets action-by-tag`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum TagActionArg {
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

impl From<TagActionArg> for TagAction {
    fn from(arg: TagActionArg) -> Self {
        match arg {
            TagActionArg::Delete => TagAction::Delete,
            TagActionArg::PowerCycle => TagAction::PowerCycle,
            TagActionArg::PowerOn => TagAction::PowerOn,
            TagActionArg::Shutdown => TagAction::Shutdown,
            TagActionArg::EnablePrivateNetworking => TagAction::EnablePrivateNetworking,
            TagActionArg::EnableIpv6 => TagAction::EnableIpv6,
            TagActionArg::EnableBackups => TagAction::EnableBackups,
            TagActionArg::DisableBackups => TagAction::DisableBackups,
            TagActionArg::Snapshot => TagAction::Snapshot,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum DomainCommands {
    /// List domains
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Show a domain
    #[command(aliases = ["i", "info"])]
    Get {
        name: String,
        /// Print only the zone file
        #[arg(long)]
        zone_file: bool,
    },

    /// Create a domain pointing at an IP address
    Add { name: String, ip: String },

    /// Delete a domain
    #[command(aliases = ["rm", "del", "remove"])]
    Delete { name: String },

    /// Manage a domain's DNS records
    #[command(subcommand, alias = "record")]
    Records(RecordCommands),
}

#[derive(Subcommand, Debug)]
pub enum RecordCommands {
    /// List a domain's records
    #[command(alias = "ls")]
    List {
        domain: String,
        #[command(flatten)]
        list: ListArgs,
    },

    /// Show a record
    #[command(aliases = ["i", "info"])]
    Get { domain: String, id: u64 },

    /// Create a record
    Add {
        domain: String,
        #[command(flatten)]
        record: RecordArgs,
    },

    /// Delete a record
    #[command(aliases = ["rm", "del", "remove"])]
    Delete { domain: String, id: u64 },
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct RecordArgs {
    /// Record type (A, AAAA, CNAME, MX, TXT, SRV, NS)
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: String,
    /// Host name, or @ for the domain itself
    #[arg(long)]
    pub name: String,
    /// Record value
    #[arg(long)]
    pub data: String,
    /// Priority (MX and SRV)
    #[arg(long)]
    pub priority: Option<u64>,
    /// Port (SRV)
    #[arg(long)]
    pub port: Option<u64>,
    /// Weight (SRV)
    #[arg(long)]
    pub weight: Option<u64>,
    /// Time to live in seconds
    #[arg(long)]
    pub ttl: Option<u64>,
}

impl From<RecordArgs> for RecordRequest {
    fn from(args: RecordArgs) -> Self {
        RecordRequest {
            kind: args.kind,
            name: args.name,
            data: args.data,
            priority: args.priority,
            port: args.port,
            weight: args.weight,
            ttl: args.ttl,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ImageCommands {
    /// List images
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        filter: ImageFilter,
        #[command(flatten)]
        list: ListArgs,
    },

    /// Show an image by ID or slug
    #[command(aliases = ["i", "info"])]
    Get { id: String },

    /// Delete an image
    #[command(aliases = ["rm", "del", "remove"])]
    Delete { id: String },
}

/// Use at most one of these; when several are given, private wins over
/// application, which wins over distribution.
#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageFilter {
    /// Only application images
    #[arg(long)]
    pub application: bool,
    /// Only distribution images
    #[arg(long)]
    pub distribution: bool,
    /// Only private images
    #[arg(long)]
    pub private: bool,
}

impl ImageFilter {
    pub fn query(self) -> ImageQuery {
        if self.private {
            ImageQuery::Private
        } else if self.application {
            ImageQuery::Application
        } else if self.distribution {
            ImageQuery::Distribution
        } else {
            ImageQuery::All
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum SnapshotCommands {
    /// List snapshots
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Show a snapshot
    #[command(aliases = ["i", "info"])]
    Get { id: String },

    /// Delete a snapshot
    #[command(aliases = ["rm", "del", "remove"])]
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum SshCommands {
    /// List SSH keys
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Show an SSH key by ID or fingerprint
    #[command(aliases = ["i", "info"])]
    Get {
        id: String,
        /// Print only the public key
        #[arg(long)]
        key: bool,
    },

    /// Upload a public key
    Add { name: String, public_key: String },

    /// Delete an SSH key
    #[command(aliases = ["rm", "del", "remove"])]
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum TagCommands {
    /// List tags
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Show a tag
    #[command(aliases = ["i", "info"])]
    Get { tag: String },

    /// Create a tag, optionally applying it to droplets
    Add { tag: String, droplet_ids: Vec<u64> },

    /// Rename a tag
    Rename { tag: String, new_tag: String },

    /// Delete a tag
    #[command(aliases = ["rm", "del", "remove"])]
    Delete { tag: String },
}

#[derive(Subcommand, Debug)]
pub enum VolumeCommands {
    /// List volumes
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Show a volume
    #[command(aliases = ["i", "info"])]
    Get { id: String },

    /// Create a volume; missing values are asked for
    Add {
        #[command(flatten)]
        volume: VolumeFlags,
    },

    /// Delete a volume
    #[command(aliases = ["rm", "del", "remove"])]
    Delete { id: String },
}

/// Give either a region or a snapshot, not both.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct VolumeFlags {
    /// Volume name
    #[arg(long)]
    pub name: Option<String>,
    /// Size in gigabytes
    #[arg(long)]
    pub size: Option<u64>,
    /// Free-form description
    #[arg(long)]
    pub description: Option<String>,
    /// Region slug
    #[arg(long)]
    pub region: Option<String>,
    /// Snapshot to create the volume from
    #[arg(long)]
    pub snapshot: Option<String>,
}

impl From<VolumeFlags> for VolumeArgs {
    fn from(flags: VolumeFlags) -> Self {
        VolumeArgs {
            name: flags.name,
            size: flags.size,
            description: flags.description,
            region: flags.region,
            snapshot: flags.snapshot,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum FloatingIpCommands {
    /// List floating IPs
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Show a floating IP
    #[command(aliases = ["i", "info"])]
    Get { ip: String },

    /// Release a floating IP
    #[command(aliases = ["rm", "del", "remove"])]
    Delete { ip: String },

    /// Inspect actions run on a floating IP
    #[command(subcommand, alias = "action")]
    Actions(FloatingIpActionCommands),
}

#[derive(Subcommand, Debug)]
pub enum FloatingIpActionCommands {
    /// List a floating IP's actions
    #[command(alias = "ls")]
    List {
        ip: String,
        #[command(flatten)]
        list: ListArgs,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("docli").chain(args.iter().copied())).unwrap()
    }

    fn api(args: &[&str]) -> ApiCommands {
        match parse(args).command {
            Commands::Api(command) => command,
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn command_tree_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn aliases_reach_the_same_command() {
        for alias in ["rm", "del", "remove", "delete"] {
            assert!(matches!(
                api(&["droplet", alias, "42"]),
                ApiCommands::Droplets(DropletCommands::Delete { id: 42 })
            ));
        }
        for alias in ["i", "info", "get"] {
            assert!(matches!(
                api(&["domain", alias, "example.com"]),
                ApiCommands::Domains(DomainCommands::Get { zone_file: false, .. })
            ));
        }
        assert!(matches!(api(&["acc"]), ApiCommands::Account));
        assert!(matches!(
            parse(&["auth", "abc"]).command,
            Commands::Token { .. }
        ));
    }

    #[test]
    fn token_is_the_only_command_outside_the_api() {
        assert!(matches!(
            parse(&["token", "abc"]).command,
            Commands::Token { token } if token == "abc"
        ));
        assert!(matches!(
            parse(&["account"]).command,
            Commands::Api(ApiCommands::Account)
        ));
        assert!(matches!(
            parse(&["regions"]).command,
            Commands::Api(ApiCommands::Regions { .. })
        ));
    }

    #[test]
    fn global_flags_work_at_any_depth() {
        let cli = parse(&["droplets", "list", "--json", "-v"]);
        assert!(cli.json);
        assert!(cli.verbose);
        let cli = parse(&["--json", "sizes"]);
        assert!(cli.json);
    }

    #[test]
    fn limit_accepts_number_alias() {
        assert!(matches!(
            api(&["sizes", "--number", "3"]),
            ApiCommands::Sizes {
                list: ListArgs { limit: Some(3) }
            }
        ));
    }

    #[test]
    fn droplet_commands_accept_both_spellings() {
        for name in ["password-reset", "password_reset"] {
            assert!(matches!(
                api(&["droplets", name, "1"]),
                ApiCommands::Droplets(DropletCommands::PasswordReset { id: 1 })
            ));
        }
        for name in ["enable-ipv6", "enable_ipv6"] {
            assert!(matches!(
                api(&["droplets", name, "1"]),
                ApiCommands::Droplets(DropletCommands::EnableIpv6 { id: 1 })
            ));
        }
        for name in ["enable-pn", "enable_pn"] {
            assert!(matches!(
                api(&["droplets", name, "1"]),
                ApiCommands::Droplets(DropletCommands::EnablePrivateNetworking { id: 1 })
            ));
        }
        for name in ["action-by-tag", "actionByTag"] {
            assert!(matches!(
                api(&["droplets", name, "web", "--action", "reboot"]),
                ApiCommands::Droplets(DropletCommands::ActionByTag { .. })
            ));
        }
        assert!(matches!(
            api(&["droplets", "power", "reboot", "7"]),
            ApiCommands::Droplets(DropletCommands::Power(PowerCommands::Reboot { id: 7 }))
        ));
    }

    #[test]
    fn tag_actions_use_snake_case() {
        match api(&["droplets", "action-by-tag", "web", "--action", "power_cycle"]) {
            ApiCommands::Droplets(DropletCommands::ActionByTag { tag, action }) => {
                assert_eq!(tag, "web");
                assert_eq!(TagAction::from(action), TagAction::PowerCycle);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(Cli::try_parse_from([
            "docli",
            "droplets",
            "action-by-tag",
            "web",
            "--action",
            "explode"
        ])
        .is_err());
    }

    #[test]
    fn private_filter_wins() {
        let filter = ImageFilter {
            application: true,
            distribution: true,
            private: true,
        };
        assert_eq!(filter.query(), ImageQuery::Private);
        let filter = ImageFilter {
            application: true,
            distribution: true,
            private: false,
        };
        assert_eq!(filter.query(), ImageQuery::Application);
        assert_eq!(ImageFilter::default().query(), ImageQuery::All);
    }

    #[test]
    fn record_flags_build_request() {
        let command = api(&[
            "domains", "records", "add", "example.com", "--type", "MX", "--name", "@", "--data",
            "mail.example.com.", "--priority", "10",
        ]);
        match command {
            ApiCommands::Domains(DomainCommands::Records(RecordCommands::Add {
                domain,
                record,
            })) => {
                assert_eq!(domain, "example.com");
                let request = RecordRequest::from(record);
                assert_eq!(request.kind, "MX");
                assert_eq!(request.priority, Some(10));
                assert_eq!(request.ttl, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn tags_add_takes_optional_droplets() {
        match api(&["tags", "add", "web", "1", "2"]) {
            ApiCommands::Tags(TagCommands::Add { tag, droplet_ids }) => {
                assert_eq!(tag, "web");
                assert_eq!(droplet_ids, [1, 2]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn missing_positional_is_a_usage_error() {
        let err = Cli::try_parse_from(["docli", "droplets", "get"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
