use anyhow::Result;
use clap::Parser;
use email_composer::models::Config;
use email_composer::server;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "email-composer")]
#[command(about = "Serve the formal e-mail generation endpoint")]
struct CliArgs {
    /// Address to bind, overriding LISTEN_ADDR (for example 127.0.0.1:8080).
    #[arg(long, value_name = "ADDR")]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "email_composer=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting email-composer");

    let args = CliArgs::parse();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(listen) = args.listen {
        config.listen_addr = listen;
    }

    if let Err(e) = server::serve(config).await {
        error!("Server stopped: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::CliArgs;
    use clap::Parser;

    #[test]
    fn test_listen_flag_is_optional() {
        let args = CliArgs::try_parse_from(["email-composer"]).unwrap();
        assert!(args.listen.is_none());
    }

    #[test]
    fn test_listen_flag_parses() {
        let args = CliArgs::try_parse_from(["email-composer", "--listen", "127.0.0.1:8080"]).unwrap();
        assert_eq!(args.listen.as_deref(), Some("127.0.0.1:8080"));
    }
}
