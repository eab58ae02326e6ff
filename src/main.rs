use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

use solana_launch_tracker::utils::helper::format_pubkey;
use solana_launch_tracker::{
    CompositeEventHandler, Config, ConsoleEventHandler, CreateTokenRequest, EventQueue, FeedEvent,
    KeypairWalletProvider, LedgerProvider, ListQuery, RpcLedgerProvider, SortOrder, StoreEvent,
    TokenCreator, TokenEventHandler, TokenStore, WalletProvider, WalletSession,
    WebSocketFeedProvider,
};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_level(true)
        .with_target(false)
        .init();

    dotenvy::dotenv().ok();

    tokio::runtime::Runtime::new()?.block_on(run())
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env();

    info!("Launch tracker v{}", solana_launch_tracker::VERSION);
    info!("Feed URL: {}", config.feed_url);
    info!("RPC URL: {}", config.rpc_url);

    // Wallet capability detection
    let provider = match KeypairWalletProvider::from_env() {
        Ok(Some(wallet)) => {
            info!("Wallet capability detected");
            Some(Arc::new(wallet) as Arc<dyn WalletProvider>)
        }
        Ok(None) => {
            warn!("No wallet capability; set WALLET_KEYPAIR to enable token creation");
            None
        }
        Err(e) => {
            error!("Wallet keypair unusable: {}", e);
            None
        }
    };
    let mut session = WalletSession::new(provider);

    let ledger: Arc<dyn LedgerProvider> = Arc::new(RpcLedgerProvider::new(config.rpc_url.clone()));
    let creator = TokenCreator::new(ledger.clone());

    let mut store = TokenStore::new(config.feed_capacity);
    let mut query = ListQuery::default();
    let mut draft = CreateTokenRequest::default();

    let mut composite = CompositeEventHandler::new();
    composite.add_handler(Arc::new(ConsoleEventHandler::new()));
    let handler: Arc<dyn TokenEventHandler> = Arc::new(composite);

    // One subscription for the lifetime of the view; a failure to open it
    // is a channel error, not a fatal one
    let (queue, mut events) = EventQueue::new();
    let feed = WebSocketFeedProvider::new(config.feed_url.clone(), queue);
    let feed_handle = match feed.subscribe().await {
        Ok(handle) => Some(handle),
        Err(e) => {
            error!("Feed subscription failed: {}", e);
            None
        }
    };

    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    // Single event-reaction loop: feed events, console commands, ctrl-c.
    // All store mutations happen here, one event at a time.
    loop {
        tokio::select! {
            Some(event) = events.recv() => match event {
                FeedEvent::TokenListed(record) => {
                    handler.on_token_listed(&record).await;
                    store.apply(StoreEvent::Listed(record));
                }
                FeedEvent::ChannelError(message) => {
                    handler.on_feed_error(&anyhow::anyhow!(message)).await;
                }
                FeedEvent::Closed => {
                    info!("Feed channel closed");
                }
            },
            line = lines.next_line() => match line? {
                Some(line) => {
                    let keep_going = handle_command(
                        line.trim(),
                        &mut store,
                        &mut query,
                        &mut draft,
                        &mut session,
                        &creator,
                        ledger.as_ref(),
                    )
                    .await;
                    if !keep_going {
                        break;
                    }
                }
                None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down...");
                break;
            }
        }
    }

    // The feed channel is the one scoped resource; release it on the way out
    if let Some(handle) = feed_handle {
        handle.close().await;
    }

    Ok(())
}

/// React to one console command; returns false when the loop should end
async fn handle_command(
    line: &str,
    store: &mut TokenStore,
    query: &mut ListQuery,
    draft: &mut CreateTokenRequest,
    session: &mut WalletSession,
    creator: &TokenCreator,
    ledger: &dyn LedgerProvider,
) -> bool {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "" => {}
        "list" => render_list(store, query),
        "search" => {
            query.search = rest.to_string();
            render_list(store, query);
        }
        "sort" => match rest.parse::<SortOrder>() {
            Ok(sort) => {
                query.sort = sort;
                render_list(store, query);
            }
            Err(e) => warn!("{}", e),
        },
        "connect" => match session.connect().await {
            Ok(address) => info!("Connected as {}", format_pubkey(&address)),
            Err(e) => warn!("{}", e),
        },
        "disconnect" => session.disconnect().await,
        "wallet" => render_wallet(session, ledger).await,
        "name" => draft.name = rest.to_string(),
        "symbol" => draft.symbol = rest.to_string(),
        "desc" => draft.description = rest.to_string(),
        "image" => draft.image_path = rest.to_string(),
        "create" => match creator.create_token(session, draft).await {
            Ok(record) => {
                info!("Token created on devnet. Address: {}", record.id);
                store.apply(StoreEvent::Created(record));
                // Reset the form for the next token
                *draft = CreateTokenRequest::default();
            }
            Err(e) => warn!("{}", e),
        },
        "help" => print_help(),
        "quit" | "exit" => return false,
        other => warn!("Unknown command: {} (try 'help')", other),
    }

    true
}

fn render_list(store: &TokenStore, query: &ListQuery) {
    let view = store.view(query);
    if view.is_empty() {
        info!("No tokens to show");
        return;
    }

    info!("{}", "-".repeat(80));
    for (i, record) in view.iter().enumerate() {
        let symbol = if record.symbol.is_empty() { "-" } else { record.symbol.as_str() };
        info!(
            "{:>3}. {} ({})  ${:.2}  {}%  {}",
            i + 1,
            record.name,
            symbol,
            record.value,
            record.change,
            record.created_at.format("%Y-%m-%d %H:%M:%S"),
        );
        if !record.id.is_empty() {
            info!("     {}", record.id);
        }
    }
    info!("{}", "-".repeat(80));
    info!("{} shown / {} tracked", view.len(), store.len());
}

async fn render_wallet(session: &WalletSession, ledger: &dyn LedgerProvider) {
    match session.address() {
        Some(address) => {
            info!("Wallet: {}", format_pubkey(&address));
            match ledger.fetch_sol_balance(&address).await {
                Ok(balance) => info!("Balance: \u{25ce}{:.4}", balance),
                Err(e) => warn!("Balance query failed: {}", e),
            }
        }
        None => info!("Wallet: disconnected"),
    }
}

fn print_help() {
    info!("Commands:");
    info!("  list                      show the token list");
    info!("  search [term]             filter by name (empty clears)");
    info!("  sort newest|highest|lowest");
    info!("  connect | disconnect | wallet");
    info!("  name|symbol|desc|image <value>   fill the create form");
    info!("  create                    submit the new token");
    info!("  help | quit");
}
