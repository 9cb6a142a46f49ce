use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use near_orderbook_rs::{
    App, AskOrdering, FileKeyStore, NearRpc, NetworkConfig, SessionAdapter, SignInRequest,
    SpinContract, WalletSession,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "near-orderbook", version, about = "View order books of a NEAR order book contract")]
struct Cli {
    /// RPC node URL
    #[arg(long, global = true, value_name = "URL")]
    node_url: Option<String>,

    /// Order book contract account
    #[arg(long, global = true, value_name = "ACCOUNT")]
    contract: Option<String>,

    /// Where the signed-in session is kept
    #[arg(long, global = true, value_name = "PATH")]
    session_file: Option<PathBuf>,

    #[arg(long = "log-level", global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the wallet login URL, or record the account the wallet returned
    Signin { account_id: Option<String> },
    /// Forget the signed-in account
    Signout,
    /// Show the signed-in account and its balance
    Whoami,
    /// List the contract's markets
    Markets,
    /// Show one market's order book
    Book {
        market_id: u64,
        /// Sort direction of the ask side before the best ask is taken
        #[arg(long, value_name = "ORDER")]
        ask_order: Option<AskOrdering>,
    },
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn load_config(cli: &Cli) -> Result<NetworkConfig> {
    let mut config = NetworkConfig::from_env().context("load configuration")?;
    if let Some(url) = &cli.node_url {
        config.node_url = url.clone();
    }
    if let Some(contract) = &cli.contract {
        config.contract_id = contract.clone();
    }
    if let Some(path) = &cli.session_file {
        config.session_path = path.clone();
    }
    if let Command::Book {
        ask_order: Some(order),
        ..
    } = &cli.command
    {
        config.ask_ordering = *order;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = load_config(&cli)?;
    let rpc = match config.timeout {
        Some(timeout) => NearRpc::with_timeout(&config.node_url, timeout)?,
        None => NearRpc::new(&config.node_url),
    };
    let session = WalletSession::open(
        &config,
        FileKeyStore::new(config.session_path.clone()),
        rpc.clone(),
    )
    .context("open wallet session")?;
    let contract = SpinContract::new(&config.contract_id, rpc);
    let mut app = App::new(contract, session, config.ask_ordering);

    match cli.command {
        Command::Signin { account_id: None } => {
            let url = app
                .session()
                .request_sign_in(&SignInRequest::for_config(&config))?;
            println!("Open this URL to approve access, then run `signin <account_id>`:");
            println!("{url}");
        }
        Command::Signin {
            account_id: Some(account_id),
        } => {
            app.session_mut()
                .sign_in_verified(&account_id)
                .await
                .with_context(|| format!("sign in as {account_id}"))?;
            app.on_sign_in().await.context("load account and markets")?;
            print!("{}", app.view().render());
        }
        Command::Signout => {
            app.sign_out().context("sign out")?;
            println!("Signed out.");
        }
        Command::Whoami => match app.session().account_id() {
            Some(account_id) => {
                let balance = app.session().account_balance().await?;
                println!("account id: {account_id}");
                println!("available balance: {}", balance.available_display());
                println!("total balance: {}", balance.total_display());
            }
            None => println!("Not signed in."),
        },
        Command::Markets => {
            app.on_sign_in().await.context("load account and markets")?;
            print!("{}", app.view().render());
        }
        Command::Book { market_id, .. } => {
            app.on_sign_in().await.context("load account and markets")?;
            app.select_market(market_id)
                .await
                .with_context(|| format!("load market {market_id}"))?;
            print!("{}", app.view().render());
        }
    }

    Ok(())
}
