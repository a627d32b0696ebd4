use clap::{Parser, Subcommand};
use rfcid_uuid::{resolve_namespace, v3, v4, v5, validate, Namespace};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "rfcid")]
#[command(about = "Generate and validate RFC 4122 UUIDs")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Name-based UUID using MD5
    V3 {
        /// Name to hash
        name: String,
        /// Namespace alias (dns, url, oid, x500) or UUID
        #[arg(long, short)]
        namespace: Option<String>,
    },
    /// Random UUID
    V4 {
        /// Number of UUIDs to print
        #[arg(long, short, default_value_t = 1)]
        count: usize,
    },
    /// Name-based UUID using SHA-1
    V5 {
        /// Name to hash
        name: String,
        /// Namespace alias (dns, url, oid, x500) or UUID
        #[arg(long, short)]
        namespace: Option<String>,
    },
    /// Check that each candidate is a well-formed UUID
    Validate {
        /// Strings to check
        #[arg(required = true)]
        candidates: Vec<String>,
    },
    /// List the predefined namespaces
    Namespaces,
}

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let config = CliConfig::from_env()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(config.log_directive()))?,
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let mut out = io::stdout().lock();

    let Some(command) = cli.command else {
        writeln!(out, "Use 'rfcid --help' for commands")?;
        return Ok(ExitCode::SUCCESS);
    };

    if run(command, &config, &mut out)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Executes `command`, returning `false` if any validated candidate was rejected.
fn run(command: Commands, config: &CliConfig, out: &mut impl Write) -> anyhow::Result<bool> {
    match command {
        Commands::V3 { name, namespace } => {
            let ns = namespace_or_default(namespace.as_deref(), config)?;
            writeln!(out, "{}", v3(&ns, &name)?)?;
        }
        Commands::V4 { count } => {
            if count == 0 || count > config.max_count() {
                anyhow::bail!("--count must be between 1 and {}", config.max_count());
            }
            for _ in 0..count {
                writeln!(out, "{}", v4()?)?;
            }
        }
        Commands::V5 { name, namespace } => {
            let ns = namespace_or_default(namespace.as_deref(), config)?;
            writeln!(out, "{}", v5(&ns, &name)?)?;
        }
        Commands::Validate { candidates } => {
            let mut all_valid = true;
            for candidate in &candidates {
                let valid = validate(candidate);
                all_valid &= valid;
                let verdict = if valid { "valid" } else { "invalid" };
                writeln!(out, "{}\t{}", verdict, candidate)?;
            }
            if !all_valid {
                tracing::info!("rejected at least one of {} candidates", candidates.len());
                return Ok(false);
            }
        }
        Commands::Namespaces => {
            for ns in Namespace::ALL {
                writeln!(out, "{}\t{}", ns.alias(), ns)?;
            }
        }
    }

    Ok(true)
}

fn namespace_or_default(namespace: Option<&str>, config: &CliConfig) -> anyhow::Result<String> {
    match namespace {
        Some(ns) => Ok(resolve_namespace(ns)?),
        None => Ok(config.default_namespace().to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rfcid_uuid::{DNS, URL};

    fn run_to_string(command: Commands, config: &CliConfig) -> (bool, String) {
        let mut out = Vec::new();
        let ok = run(command, config, &mut out).unwrap();
        (ok, String::from_utf8(out).unwrap())
    }

    fn default_config() -> CliConfig {
        CliConfig::from_values(None, None, None).unwrap()
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["rfcid", "v5", "--namespace", "url", "hello"]).unwrap();

        match cli.command {
            Some(Commands::V5 { name, namespace }) => {
                assert_eq!(name, "hello");
                assert_eq!(namespace.as_deref(), Some("url"));
            }
            _ => panic!("Expected V5 command"),
        }

        assert!(Cli::try_parse_from(["rfcid", "validate"]).is_err());
    }

    #[test]
    fn test_v3_uses_default_namespace() {
        let (ok, out) = run_to_string(
            Commands::V3 {
                name: "hello".into(),
                namespace: None,
            },
            &default_config(),
        );

        assert!(ok);
        assert_eq!(out.trim(), v3(DNS, "hello").unwrap());
    }

    #[test]
    fn test_v5_with_namespace_alias() {
        let (_, out) = run_to_string(
            Commands::V5 {
                name: "hello".into(),
                namespace: Some("url".into()),
            },
            &default_config(),
        );

        assert_eq!(out.trim(), v5(URL, "hello").unwrap());
    }

    #[test]
    fn test_v5_rejects_bad_namespace() {
        let mut out = Vec::new();
        let result = run(
            Commands::V5 {
                name: "hello".into(),
                namespace: Some("ldap".into()),
            },
            &default_config(),
            &mut out,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_v4_count() {
        let (_, out) = run_to_string(Commands::V4 { count: 5 }, &default_config());

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| validate(l)));
    }

    #[test]
    fn test_v4_count_bounds() {
        let config = CliConfig::from_values(None, None, Some("3".into())).unwrap();
        let mut out = Vec::new();

        assert!(run(Commands::V4 { count: 0 }, &config, &mut out).is_err());
        assert!(run(Commands::V4 { count: 4 }, &config, &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_validate_reports_each_candidate() {
        let (ok, out) = run_to_string(
            Commands::Validate {
                candidates: vec![DNS.into(), "6ba7b814-9dad-11d1-80b4-00c04fd430cx".into()],
            },
            &default_config(),
        );

        assert!(!ok);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], format!("valid\t{}", DNS));
        assert!(lines[1].starts_with("invalid\t"));
    }

    #[test]
    fn test_validate_all_valid_succeeds() {
        let (ok, _) = run_to_string(
            Commands::Validate {
                candidates: vec![DNS.into(), URL.into()],
            },
            &default_config(),
        );

        assert!(ok);
    }

    #[test]
    fn test_namespaces_lists_all_four() {
        let (_, out) = run_to_string(Commands::Namespaces, &default_config());

        assert_eq!(out.lines().count(), 4);
        assert!(out.contains(&format!("dns\t{}", DNS)));
        assert!(out.contains("x500\t6ba7b814-9dad-11d1-80b4-00c04fd430c8"));
    }
}
