use chat_relay::config::{EmptyReplyPolicy, HistoryMode, RelayConfig, DEFAULT_PORT};
use chat_relay::llm::create_provider;
use chat_relay::llm::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use chat_relay::relay::Relay;
use chat_relay::routes::configure_routes;
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Command line arguments, each with an environment fallback
#[derive(Parser, Debug)]
#[command(name = "chat-relay", about = "Persona-injecting chat relay for the Gemini API")]
struct Args {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Address to bind
    #[arg(long, env = "RELAY_HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Gemini model identifier
    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Generative Language API base URL
    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Forward the whole conversation or only the last message
    #[arg(long, env = "RELAY_HISTORY", value_enum, default_value_t = HistoryMode::Full)]
    history: HistoryMode,

    /// Answer an empty upstream reply with an error or an apology
    #[arg(long, env = "RELAY_EMPTY_REPLY", value_enum, default_value_t = EmptyReplyPolicy::Error)]
    empty_reply: EmptyReplyPolicy,
}

impl Args {
    fn relay_config(&self) -> RelayConfig {
        RelayConfig::new(self.api_key.clone())
            .with_model(self.model.clone())
            .with_base_url(self.base_url.clone())
            .with_history(self.history)
            .with_empty_reply(self.empty_reply)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,chat_relay=debug")),
        )
        .init();

    let args = Args::parse();
    let config = args.relay_config();

    if config.api_key().is_some() {
        info!("Gemini API key loaded");
    } else {
        error!("GEMINI_API_KEY is missing; chat requests will answer with a server misconfiguration error");
    }
    info!(?config, "relay configuration");

    let generator = create_provider(&config)?;
    let relay = Arc::new(Relay::new(config, generator));
    let routes = configure_routes(relay);

    let addr = SocketAddr::new(args.host, args.port);
    info!(%addr, "starting chat relay");
    warp::serve(routes).run(addr).await;

    Ok(())
}
