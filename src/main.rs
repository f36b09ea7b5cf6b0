// Command-line front end for the enrollment workflow.
//
// Configuration is layered: defaults, optional TOML file, environment, then flags.
// Failures print the participant-facing message and exit non-zero.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use github_enroll::{EnrollmentConfig, EnrollmentError, EnrollmentWorkflow, Session};
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::io::AsyncReadExt;

#[derive(Debug, Parser)]
#[command(name = "github-enroll", version, about = "Enroll in a GitHub-hosted coding task")]
struct Cli {
    /// TOML config file
    #[arg(long, global = true, env = "ENROLL_CONFIG")]
    config: Option<PathBuf>,

    /// Owner of the task repository
    #[arg(long, global = true)]
    owner: Option<String>,

    /// Name of the task repository
    #[arg(long, global = true)]
    repo: Option<String>,

    /// REST API base URL
    #[arg(long, global = true)]
    api_base: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the branch name derived from a GitHub ID
    BranchName { id: String },
    /// Create the branch for a GitHub ID
    Enroll { id: String },
    /// Submit a file to an existing enrollment branch
    Submit(SubmitArgs),
    /// Enroll, then submit
    Run(SubmitArgs),
}

#[derive(Debug, Args)]
struct SubmitArgs {
    id: String,

    /// File with the submission; read from stdin when omitted
    #[arg(long, short)]
    file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<EnrollmentError>() {
                Some(enrollment) => {
                    error!("{e:#}");
                    eprintln!("{}", enrollment.user_message());
                }
                None => eprintln!("error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    match cli.command {
        Command::BranchName { id } => {
            println!(
                "{}",
                github_enroll::derive_branch_name(&id, &config.branch_suffix)
            );
        }
        Command::Enroll { id } => {
            let workflow = EnrollmentWorkflow::new(config)?;
            let (_, branch) = workflow.enroll(id).await?;
            println!("Created branch {} at {}", branch.name, branch.base_sha);
        }
        Command::Submit(args) => {
            let draft = read_draft(args.file.as_ref()).await?;
            let workflow = EnrollmentWorkflow::new(config)?;
            let mut session = workflow.resume_session(args.id);
            submit(&workflow, &mut session, draft).await?;
        }
        Command::Run(args) => {
            let draft = read_draft(args.file.as_ref()).await?;
            let workflow = EnrollmentWorkflow::new(config)?;
            let (mut session, branch) = workflow.enroll(args.id).await?;
            println!("Created branch {} at {}", branch.name, branch.base_sha);
            submit(&workflow, &mut session, draft).await?;
        }
    }

    Ok(())
}

async fn submit(workflow: &EnrollmentWorkflow, session: &mut Session, draft: String) -> Result<()> {
    session.edit_draft(draft).map_err(EnrollmentError::from)?;
    let receipt = workflow.submit(session).await?;
    info!(
        "{} {} at {}",
        if receipt.created() { "Created" } else { "Updated" },
        receipt.path,
        receipt.submitted_at.to_rfc3339()
    );
    println!("Task completed successfully! Commit {}", receipt.commit_sha);
    Ok(())
}

fn load_config(cli: &Cli) -> Result<EnrollmentConfig> {
    let base = match &cli.config {
        Some(path) => EnrollmentConfig::from_file(path)?,
        None => EnrollmentConfig::default(),
    };
    let mut config = base.with_env();

    if let Some(owner) = &cli.owner {
        config.owner = owner.clone();
    }
    if let Some(repo) = &cli.repo {
        config.repo = repo.clone();
    }
    if let Some(api_base) = &cli.api_base {
        config.api_base = api_base.clone();
    }
    Ok(config)
}

async fn read_draft(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut draft = String::new();
            tokio::io::stdin()
                .read_to_string(&mut draft)
                .await
                .context("Failed to read submission from stdin")?;
            Ok(draft)
        }
    }
}
