//! CLI argument parsing

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "lxcm")]
#[command(author, version, about = "Manage LXC containers under systemd-run supervision", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: SubCommand,

    /// Probe and decide, but do not run any container command
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum SubCommand {
    /// List all containers
    List {
        /// Output the containers and their info as JSON
        #[arg(long)]
        json: bool,

        /// Show state, IP addresses and pid for each container
        #[arg(long)]
        details: bool,
    },

    /// Operate on a single container
    Container {
        /// Container name
        #[arg(long)]
        name: String,

        #[command(subcommand)]
        operation: ContainerOp,
    },
}

#[derive(Subcommand)]
pub enum ContainerOp {
    /// Run a command inside the container (a shell when omitted)
    #[command(visible_alias = "exec")]
    Attach {
        /// Command and arguments to run inside the container
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,

        /// Do not connect the terminal; capture output instead
        #[arg(long)]
        no_bind: bool,

        /// Start the container first if it is not running
        #[arg(long)]
        force_run: bool,

        /// Also create the container first if it does not exist
        #[arg(long)]
        force: bool,
    },

    /// Start the container
    Start,

    /// Stop the container
    Stop,

    /// Stop then start the container
    Restart,

    /// Destroy the container
    Destroy {
        /// Stop a running container before destroying it
        #[arg(long)]
        force: bool,
    },

    /// Create the container from the download template
    Create {
        /// Template distribution, e.g. debian
        #[arg(long)]
        distribution: String,

        /// Template release, e.g. bookworm
        #[arg(long)]
        release: String,

        /// Template architecture, e.g. amd64
        #[arg(long)]
        architecture: String,
    },

    /// Show the container's probed state and attributes
    Info {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// View or edit the container's config file
    Config {
        /// Open the config file in $PAGER
        #[arg(long)]
        show: bool,

        /// Open the config file in $EDITOR
        #[arg(long)]
        edit: bool,
    },
}
