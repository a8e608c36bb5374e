use std::fs;
use std::io::{Error, ErrorKind, Result};
use std::str::FromStr;

use actix_web::{web, App, HttpServer};
use clap::Parser;
use log::{info, LevelFilter};

use api_relay::error_log::ErrorLog;
use api_relay::http_client::{EgressProxy, HttpClientConfig};
use api_relay::relay_config::RelayConfigFile;
use api_relay::relay_service::{self, RelayState};
use api_relay::std_logger::StdLogger;
use api_relay::token_client::TokenClient;

static LOGGER: StdLogger = StdLogger;

#[derive(Parser, Debug)]
#[command(name = "api_relay", about = "Credential-holding relay for RESTful API calls")]
struct CliArgs {
    #[arg(long, default_value = "config.yaml")]
    config: String,
    #[arg(long, default_value = "0.0.0.0")]
    bind: String,
    #[arg(long, default_value_t = 8080)]
    port: u16,
    #[arg(long, default_value_t = 4)]
    workers: usize,
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[actix_web::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    log::set_logger(&LOGGER).map_err(|err| Error::new(ErrorKind::Other, err))?;
    log::set_max_level(LevelFilter::from_str(&args.log_level).unwrap_or(LevelFilter::Info));

    let config_fd = fs::File::open(&args.config)?;
    let relay_config = RelayConfigFile::load_from_file(&config_fd)?;

    let http_client = HttpClientConfig {
        accept_invalid_certs: relay_config.accept_invalid_certs,
        egress_proxy: relay_config.egress_proxy.as_ref().map(|proxy| EgressProxy {
            url: proxy.url.clone(),
            user: proxy.user.clone(),
            pass: proxy.pass.clone(),
        }),
    }
    .to_client()
    .map_err(|err| Error::new(ErrorKind::Other, err))?;

    let state = web::Data::new(RelayState {
        http_client,
        token_client: TokenClient::new(&relay_config.token_endpoint),
        error_log: ErrorLog::new(&relay_config.error_log),
        defaults: relay_config.defaults,
    });

    info!("Relay listening on {}:{}", &args.bind, args.port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(relay_service::configure)
            .wrap(relay_service::cors())
            .wrap(relay_service::security_headers())
    })
    .workers(args.workers)
    .bind((args.bind, args.port))?
    .run()
    .await
}
