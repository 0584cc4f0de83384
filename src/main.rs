use anyhow::Context;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use minus::Pager;
use sprig::areas::repository::Repository;
use sprig::artifacts::core::PagerWriter;
use sprig::artifacts::core::confirm::{AssumeYes, Confirm, StdinConfirm};
use sprig::artifacts::objects::commit_id::CommitId;
use sprig::commands::porcelain::checkout::CheckoutTarget;
use sprig::errors::RepositoryError;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sprig",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A tiny local version control system",
    long_about = "sprig keeps full snapshots of your files in a .sprig directory. \
    It supports branches, resets and a simple three-way merge, all on a single machine.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short = 'C',
        global = true,
        value_name = "DIR",
        help = "Run as if sprig was started in DIR"
    )]
    directory: Option<String>,
    #[arg(short, long, global = true, help = "Answer yes to every confirmation prompt")]
    yes: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates the .sprig directory and the initial commit on branch master."
    )]
    Init,
    #[command(
        name = "add",
        about = "Stage files for the next commit",
        long_about = "This command stages each file for the next commit. \
        A file already marked for removal is unmarked instead."
    )]
    Add {
        #[arg(required = true, help = "The files to stage")]
        paths: Vec<PathBuf>,
    },
    #[command(
        name = "rm",
        about = "Unstage files or mark them for removal",
        long_about = "This command unstages a staged file, or marks a file tracked by the head commit \
        so that the next commit no longer carries it."
    )]
    Rm {
        #[arg(required = true, help = "The files to remove")]
        paths: Vec<PathBuf>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command snapshots the staged files, together with every unchanged file \
        of the head commit, into a new commit on the current branch."
    )]
    Commit {
        #[arg(index = 1, help = "The commit message")]
        message: String,
    },
    #[command(name = "rm-branch", about = "Delete a branch")]
    RmBranch {
        #[arg(index = 1)]
        branch: String,
    },
    #[command(name = "log", about = "Show the history of the current branch")]
    Log,
    #[command(name = "global-log", about = "Show every commit ever made")]
    GlobalLog,
    #[command(name = "find", about = "Print the ids of the commits with the given message")]
    Find {
        #[arg(index = 1)]
        message: String,
    },
    #[command(name = "status", about = "Show branches and staged changes")]
    Status,
    #[command(
        name = "checkout",
        about = "Switch branches or restore files",
        long_about = "With no argument, switches to master. With one argument, switches to the branch \
        of that name, or restores the file of that name from the head commit. \
        With a commit id and a file, restores the file as of that commit."
    )]
    Checkout {
        #[arg(num_args = 0..=2, value_name = "BRANCH | FILE | COMMIT FILE")]
        args: Vec<String>,
    },
    #[command(name = "branch", about = "Create a branch at the head commit")]
    Branch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(
        name = "reset",
        about = "Move the head back to an earlier commit of the current branch"
    )]
    Reset {
        #[arg(index = 1)]
        commit: String,
    },
    #[command(name = "merge", about = "Merge a branch into the current branch")]
    Merge {
        #[arg(index = 1)]
        branch: String,
    },
    #[command(external_subcommand)]
    Unrecognized(Vec<String>),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let Some(command) = cli.command else {
        println!("No command detected.");
        return ExitCode::from(1);
    };
    if let Commands::Unrecognized(args) = &command {
        tracing::debug!(?args, "unrecognized command");
        println!("Unrecognized command.");
        return ExitCode::from(1);
    }

    match run(cli.directory, cli.yes, command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(RepositoryError::Internal(err)) => {
            eprintln!("error: {:?}", err);
            ExitCode::from(2)
        }
        Err(err) => {
            println!("{}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(directory: Option<String>, yes: bool, command: Commands) -> Result<(), RepositoryError> {
    let directory = match directory {
        Some(directory) => directory,
        None => std::env::current_dir()
            .context("Cannot determine the current directory")?
            .to_string_lossy()
            .into_owned(),
    };

    let pager = match &command {
        Commands::Log | Commands::GlobalLog if should_page() => Some(Pager::new()),
        _ => None,
    };
    let writer: Box<dyn Write> = match &pager {
        Some(pager) => Box::new(PagerWriter::new(pager.clone())),
        None => Box::new(std::io::stdout()),
    };

    let mut repository = Repository::new(&directory, writer)?;
    let mut confirm: Box<dyn Confirm> = if yes {
        Box::new(AssumeYes)
    } else {
        Box::new(StdinConfirm::from_stdio())
    };

    let result = dispatch(&mut repository, confirm.as_mut(), command);

    repository.writer().flush()?;
    repository
        .save()
        .context("Cannot save the repository state")?;

    if let Some(pager) = pager {
        minus::page_all(pager).context("Cannot display the pager")?;
    }

    result
}

fn dispatch(
    repository: &mut Repository,
    confirm: &mut dyn Confirm,
    command: Commands,
) -> Result<(), RepositoryError> {
    match command {
        Commands::Init => repository.init()?,
        Commands::Add { paths } => for_each_path(repository, &paths, |repository, path| {
            repository.add(path).map(|_| ())
        })?,
        Commands::Rm { paths } => for_each_path(repository, &paths, |repository, path| {
            repository.remove(path).map(|_| ())
        })?,
        Commands::Commit { message } => {
            repository.commit(&message)?;
        }
        Commands::RmBranch { branch } => repository.rm_branch(&branch)?,
        Commands::Log => {
            repository.log()?;
        }
        Commands::GlobalLog => {
            repository.global_log()?;
        }
        Commands::Find { message } => {
            repository.find(&message)?;
        }
        Commands::Status => {
            repository.status()?;
        }
        Commands::Checkout { args } => {
            repository.checkout(checkout_target(args)?)?;
        }
        Commands::Branch { name } => repository.branch(&name)?,
        Commands::Reset { commit } => {
            repository.reset(parse_commit_id(&commit)?, confirm)?;
        }
        Commands::Merge { branch } => {
            repository.merge(&branch, confirm)?;
        }
        Commands::Unrecognized(_) => {}
    }

    Ok(())
}

/// Run `op` on every path, printing usage errors as they come
///
/// The last usage error is handed back so the exit code reflects it.
fn for_each_path(
    repository: &mut Repository,
    paths: &[PathBuf],
    mut op: impl FnMut(&mut Repository, &Path) -> Result<(), RepositoryError>,
) -> Result<(), RepositoryError> {
    let mut pending: Option<RepositoryError> = None;

    for path in paths {
        match op(repository, path) {
            Ok(()) => {}
            Err(err) if err.is_usage() => {
                if let Some(previous) = pending.replace(err) {
                    println!("{}", previous);
                }
            }
            Err(err) => return Err(err),
        }
    }

    pending.map_or(Ok(()), Err)
}

fn checkout_target(mut args: Vec<String>) -> Result<CheckoutTarget, RepositoryError> {
    let target = match args.len() {
        0 => CheckoutTarget::DefaultBranch,
        1 => CheckoutTarget::BranchOrFile(args.remove(0)),
        _ => {
            let path = PathBuf::from(args.remove(1));
            CheckoutTarget::FileAt {
                commit: parse_commit_id(&args[0])?,
                path,
            }
        }
    };

    Ok(target)
}

fn parse_commit_id(id: &str) -> Result<CommitId, RepositoryError> {
    id.parse()
        .map_err(|_| RepositoryError::InvalidCommitId(id.to_string()))
}

fn should_page() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_PAGER").is_none()
}
