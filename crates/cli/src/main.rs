use caa_guard_application::{CheckIssuanceUseCase, WalkOutcome};
use caa_guard_domain::{IssuanceRequest, ResolverSettings};
use caa_guard_infrastructure::dns::ForwardingCaaResolver;
use caa_guard_infrastructure::system::SystemResolvConf;
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod output;

#[derive(Parser)]
#[command(name = "caa-guard")]
#[command(version)]
#[command(about = "Check which certificate authorities may issue for a domain via CAA records")]
struct Cli {
    /// Domain name to check
    domain: String,

    /// Issuer to test against (omit to display the full CAA chain)
    #[arg(short, long)]
    issuer: Option<String>,

    /// DNS server and port to send questions to (defaults to the
    /// nameservers in /etc/resolv.conf)
    #[arg(short, long, value_name = "HOST:PORT")]
    resolver: Option<String>,

    /// Query timeout in milliseconds
    #[arg(long, default_value_t = 5000)]
    timeout_ms: u64,

    /// Maximum number of CNAME/DNAME redirects to follow per query
    #[arg(long, default_value_t = 10)]
    max_redirects: u32,

    /// Print the CAA sets returned at every level
    #[arg(short, long)]
    verbose: bool,

    /// Print the walk report as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    if cli.domain.trim_end_matches('.').is_empty() {
        anyhow::bail!("No domain name provided");
    }

    let upstream = match cli.resolver {
        Some(resolver) => resolver,
        None => SystemResolvConf::new().upstream_address()?,
    };

    let mut settings = ResolverSettings::new(upstream);
    settings.query_timeout_ms = cli.timeout_ms;
    settings.max_alias_redirects = cli.max_redirects;

    debug!(upstream = %settings.upstream, "Selected upstream DNS server");

    let resolver = Arc::new(ForwardingCaaResolver::new(settings));
    let use_case = CheckIssuanceUseCase::new(resolver);
    let request = IssuanceRequest::new(cli.domain, cli.issuer);

    let report = match use_case.execute(&request).await {
        Ok(report) => report,
        Err(walk_error) => {
            eprintln!(
                "[{}] Failed to complete CAA query: {}",
                walk_error.domain, walk_error.source
            );
            return Ok(ExitCode::FAILURE);
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output::render(&report, cli.verbose);
    }

    Ok(exit_code_for(&report.outcome))
}

fn exit_code_for(outcome: &WalkOutcome) -> ExitCode {
    if outcome.is_denial() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
