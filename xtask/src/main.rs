use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::Command;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation for the trinket viewer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all checks: fmt, clippy, tests, doc
    Check,
    /// Run cargo fmt --check on all crates
    Fmt,
    /// Run clippy on all crates
    Clippy,
    /// Run all tests
    Test,
    /// Build rustdoc for the workspace
    Doc,
    /// Build the entire workspace
    Build,
    /// Run the tween convergence bench
    Bench,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check => {
            run("fmt", &["--all", "--", "--check"])?;
            run(
                "clippy",
                &["--workspace", "--all-targets", "--", "-D", "warnings"],
            )?;
            run("test", &["--workspace"])?;
            run("doc", &["--workspace", "--no-deps"])?;
        }
        Commands::Fmt => run("fmt", &["--all", "--", "--check"])?,
        Commands::Clippy => run(
            "clippy",
            &["--workspace", "--all-targets", "--", "-D", "warnings"],
        )?,
        Commands::Test => run("test", &["--workspace"])?,
        Commands::Doc => run("doc", &["--workspace", "--no-deps"])?,
        Commands::Build => run("build", &["--workspace"])?,
        Commands::Bench => run(
            "bench",
            &[
                "-p",
                "trinket-orientation",
                "--bench",
                "bench_tween_convergence",
            ],
        )?,
    }

    Ok(())
}

fn run(subcommand: &str, args: &[&str]) -> Result<()> {
    println!("==> Running cargo {subcommand}");
    let status = Command::new("cargo").arg(subcommand).args(args).status()?;
    if !status.success() {
        anyhow::bail!("cargo {subcommand} failed");
    }
    Ok(())
}
