use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};
use tradesim::{
    config::SimulatorConfig,
    logging::{init_json_logging, init_logging},
    model::{Asset, ExchangeId, Side, request::SimulationRequest},
    render::view::{ResultView, TablePrinter},
    simulator::Simulator,
    state::RequestState,
};

/// Submit one order to the trade simulation service and print the simulated execution.
#[derive(Debug, Parser)]
#[command(name = "tradesim", version)]
struct Args {
    /// Order size in quote currency (USD).
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
    quantity: f64,

    /// Order side: buy or sell.
    #[arg(long, default_value_t = Side::Buy)]
    side: Side,

    /// Trailing 30 day traded volume (USD), used for fee tier lookup.
    #[arg(long = "volume-30d", default_value_t = 0.0, allow_negative_numbers = true)]
    volume_30d: f64,

    #[arg(long, default_value_t = ExchangeId::Okx)]
    exchange: ExchangeId,

    /// One of BTC-USDT-SWAP, ETH-USDT-SWAP, SOL-USDT-SWAP.
    #[arg(long, default_value_t = Asset::BtcUsdtSwap)]
    asset: Asset,

    /// Base Url of the simulation service, overrides TRADESIM_API_URL.
    #[arg(long = "api-url")]
    api_url: Option<String>,

    /// Emit JSON logs.
    #[arg(long = "json-logs")]
    json_logs: bool,

    /// Only query the service root endpoint.
    #[arg(long)]
    health: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if args.json_logs {
        init_json_logging();
    } else {
        init_logging();
    }

    let mut config = SimulatorConfig::from_env();
    if let Some(api_url) = args.api_url {
        config = config.with_api_url(api_url);
    }

    let simulator = match Simulator::new(&config) {
        Ok(simulator) => simulator,
        Err(error) => {
            error!(%error, api_url = %config.api_url, "invalid simulation service Url");
            return ExitCode::FAILURE;
        }
    };

    if args.health {
        return match simulator.health().await {
            Ok(status) => {
                println!("{}", status.message);
                ExitCode::SUCCESS
            }
            Err(error) => {
                eprintln!("{}", error.message());
                ExitCode::FAILURE
            }
        };
    }

    let request = SimulationRequest::new(
        args.quantity,
        args.side,
        args.volume_30d,
        args.exchange,
        args.asset,
    );
    info!(?request, base_url = %simulator.base_url(), "simulating");

    match simulator.simulate(request).await {
        Ok(RequestState::Success(result)) => {
            ResultView::from(&result).print();
            ExitCode::SUCCESS
        }
        Ok(RequestState::Failed(message)) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
        Ok(state) => {
            error!(state = state.name(), "simulation ended in a non-terminal state");
            ExitCode::FAILURE
        }
        Err(rejected) => {
            eprintln!("{rejected}");
            ExitCode::FAILURE
        }
    }
}
