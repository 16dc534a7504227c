use clap::Parser;
use clap::error::ErrorKind;
use relbot::runtime::RealRuntime;

/// latest-release - show the latest GitHub release of a repository
///
/// Prints the release tag and either every asset or the first asset whose
/// name contains one of the given patterns.
///
/// If the GITHUB_TOKEN environment variable is set, it will be used for authentication.
///
/// Examples:
///   latest-release MaaAssistantArknights maa-cli            # list all assets
///   latest-release MaaAssistantArknights maa-cli aarch64    # pick one asset
#[derive(Parser, Debug)]
#[command(name = "latest-release", author, version = env!("RELBOT_VERSION"), about)]
struct Cli {
    /// Repository owner
    owner: String,

    /// Repository name
    repo: String,

    /// Substring of the wanted asset name; several are tried as alternatives
    #[arg(value_name = "PATTERN", allow_hyphen_values = true)]
    patterns: Vec<String>,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", value_name = "URL")]
    api_url: Option<String>,
}

fn print_usage() {
    println!("Usage: latest-release <owner> <repo> [pattern]");
    println!("Example: latest-release MaaAssistantArknights maa-cli aarch64");
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            print_usage();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    let runtime = RealRuntime;
    let code = match relbot::commands::latest_release(
        &runtime,
        &cli.owner,
        &cli.repo,
        cli.patterns,
        cli.api_url,
    )
    .await
    {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(code);
}
