use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tweetvault_api::Client;
use tweetvault_shared::oauth::{AuthSession, OAuthConfig};

mod callback;
mod collector;
mod output;

#[derive(Parser)]
#[command(name = "tweetvault")]
#[command(about = "Archive a Twitter user's timeline after an OAuth2 login", long_about = None)]
struct Cli {
    /// OAuth2 client id issued by the provider
    #[arg(long, env = "TWITTER_OAUTH2_CLIENT_ID")]
    client_id: String,

    /// OAuth2 client secret issued by the provider
    #[arg(long, env = "TWITTER_OAUTH2_CLIENT_SECRET")]
    client_secret: String,

    /// Redirect URL registered with the provider; must point at the local listener
    #[arg(long, env = "CALLBACK_URL")]
    callback_url: String,

    /// Port the callback listener binds on
    #[arg(long, env = "PORT")]
    port: u16,

    /// Directory archives are written to
    #[arg(long, default_value = "tweets")]
    out_dir: PathBuf,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("login failed: {0}")]
    Login(#[from] callback::LoginError),

    #[error(transparent)]
    Api(#[from] tweetvault_api::ApiError),

    #[error(transparent)]
    Collect(#[from] collector::CollectError),

    #[error(transparent)]
    Persistence(#[from] output::PersistenceError),
}

#[tokio::main]
async fn main() {
    // .env is optional; deployed environments set the variables directly
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("error,{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = OAuthConfig::twitter(cli.client_id, cli.client_secret, cli.callback_url);
    let session = AuthSession::generate(&config);

    println!("Authorize by visiting this URL:\n");
    println!("  {}", session.auth_url());
    println!();

    if open::that(session.auth_url()).is_err() {
        println!("(could not open the browser automatically, use the URL above)");
    }

    let token = callback::await_login(session, &config, cli.port).await?;
    let client = Client::from_token(&token)?;

    let archive = collector::collect(&client).await?;
    let count = archive.tweets.len();

    let path = output::write_archive(&cli.out_dir, &archive)?;
    println!(
        "{} tweet{} saved to {}.",
        count,
        if count == 1 { "" } else { "s" },
        path.display()
    );

    Ok(())
}
