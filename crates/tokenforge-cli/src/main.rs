use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tokenforge_core::size::{artifact_digest, format_file_size, size_bytes};
use tokenforge_core::{compile, Finding, Severity, TokenDocument};

/// tokenforge — design token compiler and validator
///
/// Compile a token document into CSS custom properties and a framework
/// config module, and validate it for contrast, completeness, and size
/// problems before export.
#[derive(Parser)]
#[command(name = "tokenforge", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default token document as JSON
    Init {
        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Compile a token document into build artifacts
    Build {
        /// Path to token document JSON
        file: PathBuf,
        /// Directory for the generated artifacts
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
        /// Only write the CSS artifact
        #[arg(long, conflicts_with = "config_only")]
        css_only: bool,
        /// Only write the config artifact
        #[arg(long)]
        config_only: bool,
    },

    /// Validate a token document
    Check {
        /// Path to token document JSON
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report generated artifact sizes and digests
    Size {
        /// Path to token document JSON
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Init { out } => cmd_init(out.as_deref()),
        Commands::Build {
            file,
            out_dir,
            css_only,
            config_only,
        } => cmd_build(&file, &out_dir, css_only, config_only),
        Commands::Check { file, json } => cmd_check(&file, json),
        Commands::Size { file, json } => cmd_size(&file, json),
        Commands::Version => {
            println!(
                "tokenforge {} (tokenforge-core {})",
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_VERSION")
            );
            0
        }
    };

    process::exit(exit_code);
}

// ── Commands ──────────────────────────────────────────────

fn cmd_init(out: Option<&Path>) -> i32 {
    let doc = TokenDocument::default();
    let json = match doc.to_json() {
        Ok(json) => json,
        Err(err) => {
            eprintln!("{}: {}", "error".red().bold(), err);
            return 2;
        }
    };
    match out {
        Some(path) => {
            if let Err(err) = fs::write(path, json) {
                eprintln!("{}: cannot write {}: {}", "error".red().bold(), path.display(), err);
                return 2;
            }
            println!("wrote {}", path.display());
        }
        None => println!("{}", json),
    }
    0
}

fn cmd_build(file: &Path, out_dir: &Path, css_only: bool, config_only: bool) -> i32 {
    let doc = match load_document(file) {
        Ok(doc) => doc,
        Err(code) => return code,
    };

    let out = compile(&doc);
    report_findings(&out.validation.findings);

    if let Err(err) = fs::create_dir_all(out_dir) {
        eprintln!(
            "{}: cannot create {}: {}",
            "error".red().bold(),
            out_dir.display(),
            err
        );
        return 2;
    }

    let mut artifacts: Vec<(&str, &str)> = Vec::new();
    if !config_only {
        artifacts.push(("tokens.css", out.css.as_str()));
    }
    if !css_only {
        artifacts.push(("tokens.config.js", out.config.as_str()));
    }

    for (name, text) in artifacts {
        let path = out_dir.join(name);
        if let Err(err) = fs::write(&path, text) {
            eprintln!("{}: cannot write {}: {}", "error".red().bold(), path.display(), err);
            return 2;
        }
        println!("wrote {} ({})", path.display(), format_file_size(size_bytes(text)));
    }

    // Export is never blocked: errors are reported above, not fatal.
    0
}

fn cmd_check(file: &Path, json: bool) -> i32 {
    let doc = match load_document(file) {
        Ok(doc) => doc,
        Err(code) => return code,
    };

    let out = compile(&doc);
    let result = &out.validation;

    if json {
        let payload = serde_json::json!({
            "valid": result.is_valid(),
            "errors": result.errors().len(),
            "warnings": result.warnings().len(),
            "info": result.infos().len(),
            "findings": result.findings,
        });
        println!("{}", payload);
    } else {
        report_findings(&result.findings);
        if result.is_valid() {
            println!("{}: document is valid", "ok".green().bold());
        } else {
            eprintln!(
                "{}: {} error(s) found",
                "invalid".red().bold(),
                result.errors().len()
            );
        }
    }

    if result.is_valid() {
        0
    } else {
        1
    }
}

fn cmd_size(file: &Path, json: bool) -> i32 {
    let doc = match load_document(file) {
        Ok(doc) => doc,
        Err(code) => return code,
    };

    let out = compile(&doc);
    let artifacts = [("css", out.css.as_str()), ("config", out.config.as_str())];

    if json {
        let mut payload = serde_json::Map::new();
        for (name, text) in artifacts {
            payload.insert(
                name.to_string(),
                serde_json::json!({
                    "bytes": size_bytes(text),
                    "size": format_file_size(size_bytes(text)),
                    "sha256": artifact_digest(text),
                }),
            );
        }
        println!("{}", serde_json::Value::Object(payload));
    } else {
        for (name, text) in artifacts {
            println!(
                "{:<8} {:>10}  {}",
                name,
                format_file_size(size_bytes(text)),
                artifact_digest(text)
            );
        }
    }
    0
}

// ── Helpers ───────────────────────────────────────────────

fn load_document(path: &Path) -> Result<TokenDocument, i32> {
    let text = fs::read_to_string(path).map_err(|err| {
        eprintln!("{}: cannot read {}: {}", "error".red().bold(), path.display(), err);
        2
    })?;
    TokenDocument::from_json(&text).map_err(|err| {
        eprintln!("{}: {}: {}", "error".red().bold(), path.display(), err);
        2
    })
}

fn report_findings(findings: &[Finding]) {
    for finding in findings {
        let label = match finding.severity {
            Severity::Error => "error".red().bold(),
            Severity::Warning => "warning".yellow().bold(),
            Severity::Info => "info".blue().bold(),
        };
        match &finding.token_path {
            Some(path) => eprintln!("{} [{}] {}: {}", label, finding.category, path, finding.message),
            None => eprintln!("{} [{}]: {}", label, finding.category, finding.message),
        }
        if let Some(suggestion) = &finding.suggestion {
            eprintln!("  hint: {}", suggestion);
        }
    }
}
