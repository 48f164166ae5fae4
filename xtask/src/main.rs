//! Development tasks for rallly-kube
//!
//! Usage: cargo xtask <command>
//!
//! Available commands:
//! - render: Generate manifests for every environment under target/manifests
//! - test: Run tests
//! - ci: Run format, clippy and test checks

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use xshell::{cmd, Shell};

const ENVIRONMENTS: &[&str] = &["dev", "production"];

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tasks for rallly-kube")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render manifests for every environment into target/manifests/<env>
    Render {
        /// Render a single environment only
        #[arg(long)]
        env: Option<String>,
    },
    /// Run tests
    Test,
    /// Run CI checks (format, clippy, test)
    Ci,
    /// Format code
    Format {
        /// Check formatting without modifying files
        #[arg(long)]
        check: bool,
    },
    /// Run clippy
    Clippy,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let sh = Shell::new()?;

    sh.change_dir(project_root()?);

    match cli.command {
        Commands::Render { env } => render(&sh, env),
        Commands::Test => test(&sh),
        Commands::Ci => ci(&sh),
        Commands::Format { check } => format(&sh, check),
        Commands::Clippy => clippy(&sh),
    }
}

fn render(sh: &Shell, env: Option<String>) -> Result<()> {
    let environments: Vec<String> = match env {
        Some(env) => vec![env],
        None => ENVIRONMENTS.iter().map(|e| e.to_string()).collect(),
    };

    for env in environments {
        let out_dir = project_root()?.join("target/manifests").join(&env);
        sh.create_dir(&out_dir)?;

        println!("📄 Rendering {} manifests into {}", env, out_dir.display());
        cmd!(
            sh,
            "cargo run --quiet -- generate --strict --env {env} --output-dir {out_dir}"
        )
        .run()
        .with_context(|| format!("Failed to render manifests for {}", env))?;
    }

    println!("✅ Manifests rendered");
    Ok(())
}

fn test(sh: &Shell) -> Result<()> {
    println!("🧪 Running tests...");
    cmd!(sh, "cargo test --all").run()?;
    println!("✅ All tests passed");
    Ok(())
}

fn ci(sh: &Shell) -> Result<()> {
    println!("🔍 Running CI checks...");

    println!("\n📝 Checking formatting...");
    format(sh, true)?;

    println!("\n🔧 Running clippy...");
    clippy(sh)?;

    println!("\n🧪 Running tests...");
    test(sh)?;

    println!("\n✅ All CI checks passed!");
    Ok(())
}

fn format(sh: &Shell, check: bool) -> Result<()> {
    if check {
        cmd!(sh, "cargo fmt --all -- --check").run()?;
    } else {
        cmd!(sh, "cargo fmt --all").run()?;
    }
    Ok(())
}

fn clippy(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo clippy --all-targets -- -D warnings").run()?;
    Ok(())
}

fn project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask must live inside the workspace")
}
