//! lxcm CLI - manage LXC containers under systemd-run supervision

use std::io;

use clap::Parser;
use tracing::{error, info};

use lxcm::cli::{pager, Args, ContainerOp, SubCommand};
use lxcm::container::{catalog, probe};
use lxcm::{
    BindMode, Container, Lifecycle, LxcmError, OutputFormat, SystemRunner, Transition,
};

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                if args.verbose {
                    "debug".into()
                } else {
                    "info".into()
                }
            }),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(args) {
        match &err {
            LxcmError::DelegationFailed { output, .. } => {
                error!(
                    "command {} failed",
                    err.pretty_command().unwrap_or_default()
                );
                if !output.is_empty() {
                    error!("{output}");
                }
            }
            other => error!("{other}"),
        }
        std::process::exit(1);
    }
}

fn run(args: Args) -> lxcm::Result<()> {
    let runner = SystemRunner::new();

    match args.command {
        SubCommand::List { json, details } => {
            if json {
                let infos = catalog::list_info(&runner)?;
                println!("{}", lxcm::format_catalog(&infos, &OutputFormat::Json));
            } else if details {
                let infos = catalog::list_info(&runner)?;
                println!("{}", lxcm::format_catalog(&infos, &OutputFormat::Human));
            } else {
                for container in catalog::list_all(&runner)? {
                    println!("{container}");
                }
            }
            Ok(())
        }

        SubCommand::Container { name, operation } => {
            let lifecycle = Lifecycle::new(&runner).with_dry_run(args.dry_run);

            match operation {
                ContainerOp::Attach {
                    command,
                    no_bind,
                    force_run,
                    force,
                } => {
                    let mode = if no_bind {
                        BindMode::Batch
                    } else {
                        BindMode::Interactive
                    };
                    lifecycle.attach(&Container::new(name.as_str()), &command, mode, force_run, force)?;
                    Ok(())
                }

                ContainerOp::Start => {
                    report(&name, lifecycle.start(&Container::new(name.as_str()), false)?);
                    Ok(())
                }

                ContainerOp::Stop => {
                    report(&name, lifecycle.stop(&Container::new(name.as_str()))?);
                    Ok(())
                }

                ContainerOp::Restart => {
                    report(&name, lifecycle.restart(&Container::new(name.as_str()), false)?);
                    Ok(())
                }

                ContainerOp::Destroy { force } => {
                    report(&name, lifecycle.destroy(&Container::new(name.as_str()), force)?);
                    Ok(())
                }

                ContainerOp::Create {
                    distribution,
                    release,
                    architecture,
                } => {
                    let container =
                        Container::with_template(name.as_str(), distribution, release, architecture);
                    match lifecycle.create(&container)? {
                        Transition::Performed => info!("{name}: created"),
                        Transition::Unchanged => info!("{name}: already exists"),
                    }
                    Ok(())
                }

                ContainerOp::Info { json } => {
                    let format = if json {
                        OutputFormat::Json
                    } else {
                        OutputFormat::Human
                    };
                    let info = probe::info(&runner, &name)?;
                    println!("{}", lxcm::format_info(&info, &format));
                    Ok(())
                }

                ContainerOp::Config { show: _, edit } => {
                    let container = Container::new(name.as_str());
                    let config = container.config_file().ok_or_else(|| {
                        LxcmError::Io(io::Error::new(
                            io::ErrorKind::NotFound,
                            "cannot determine home directory",
                        ))
                    })?;
                    if edit {
                        pager::open_in_editor(&runner, &config)
                    } else {
                        pager::open_in_pager(&runner, &config)
                    }
                }
            }
        }
    }
}

fn report(name: &str, transition: Transition) {
    match transition {
        Transition::Performed => info!("{name}: done"),
        Transition::Unchanged => info!("{name}: already in the requested state"),
    }
}
