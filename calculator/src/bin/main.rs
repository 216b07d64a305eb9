use calculator::report::{
    render_fee_break_even_report, render_position_size_report, render_simple_profit_report,
    render_trade_report,
};
use calculator::{Calculator, CalculatorConfig, SummaryCard};
use clap::{Parser, Subcommand};
use common::decimal::Decimal;
use common::error::{Error, Result};
use common::model::breakeven::FeeBreakEvenInput;
use common::model::market::CurrencyPair;
use common::model::position::PositionSizeInput;
use common::model::trade::{TradeInput, ValuationMode};
use dotenv::dotenv;
use pnl_engine::parse_magnitude;
use serde::Serialize;
use tracing::{debug, error, info, Level};
use tracing_subscriber::EnvFilter;

/// Trade profit, break-even and position sizing calculators
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print a JSON summary card instead of a text report
    #[arg(long, global = true)]
    json: bool,

    /// Label for the summary card
    #[arg(long, global = true)]
    label: Option<String>,

    /// Conversion rate from base asset to fiat (overrides QUANTCALC_CONVERSION_RATE)
    #[arg(long, global = true)]
    rate: Option<Decimal>,

    /// Currency pair for fiat conversion, e.g. SOL/USD
    #[arg(long, global = true)]
    pair: Option<CurrencyPair>,

    /// Commands
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Project profit of a trade with slippage and fees
    Profit {
        /// Amount of base asset spent
        #[arg(long)]
        entry: Decimal,

        /// Entry price, or market cap with --market-cap (accepts k/m/b suffixes)
        #[arg(long, value_parser = parse_valuation)]
        entry_valuation: Decimal,

        /// Exit price, or market cap with --market-cap (accepts k/m/b suffixes)
        #[arg(long, value_parser = parse_valuation)]
        exit_valuation: Decimal,

        /// Buy slippage in percent
        #[arg(long, default_value = "0")]
        buy_slippage: Decimal,

        /// Sell slippage in percent
        #[arg(long, default_value = "0")]
        sell_slippage: Decimal,

        /// Flat fees in base asset (priority fees, tips)
        #[arg(long, default_value = "0")]
        fees: Decimal,

        /// Deduct the 1% bot fee from exit proceeds
        #[arg(long)]
        bot_fee: bool,

        /// Treat valuations as market caps
        #[arg(long)]
        market_cap: bool,
    },
    /// Multiple needed to recover entry plus fees
    BreakEven {
        /// Amount of base asset spent
        #[arg(long)]
        entry: Decimal,

        /// Estimated fees as a percentage of entry
        #[arg(long, default_value = "0")]
        fee_pct: Decimal,

        /// Extra fixed fees in base asset
        #[arg(long, default_value = "0")]
        extra_fees: Decimal,
    },
    /// Size a position from a risk budget and stop loss
    PositionSize {
        /// Account balance
        #[arg(long)]
        balance: Decimal,

        /// Share of the balance to risk, in percent
        #[arg(long)]
        risk_pct: Decimal,

        /// Entry price
        #[arg(long)]
        entry_price: Decimal,

        /// Stop loss price
        #[arg(long)]
        stop_loss: Decimal,
    },
    /// Profit between two prices without frictions
    SimpleProfit {
        /// Entry price
        #[arg(long)]
        entry_price: Decimal,

        /// Exit price
        #[arg(long)]
        exit_price: Decimal,

        /// Position size in units
        #[arg(long)]
        size: Decimal,
    },
}

fn parse_valuation(text: &str) -> std::result::Result<Decimal, String> {
    Ok(parse_magnitude(text))
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv().ok();

    let cli = Cli::parse();

    let mut config = CalculatorConfig::from_env();
    if let Some(rate) = cli.rate {
        config.set_conversion_rate(rate);
    }
    if let Some(pair) = cli.pair.clone() {
        config.pair = pair;
    }
    if let Some(label) = cli.label.clone() {
        config.card_label = label;
    }

    init_tracing(config.debug);

    if let Err(e) = run(cli, config).await {
        error!("Calculation failed: {}", e);
        eprintln!("{}", e);
        let code = match e {
            Error::UnreachableBreakEven(_) => 2,
            _ => 1,
        };
        std::process::exit(code);
    }
}

fn init_tracing(debug_enabled: bool) {
    let log_level = if debug_enabled { Level::DEBUG } else { Level::WARN };

    let env_filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    // Only set the global subscriber if it hasn't been set already
    if tracing::subscriber::set_global_default(subscriber).is_ok() && debug_enabled {
        debug!("Debug logging enabled");
    }
}

async fn run(cli: Cli, config: CalculatorConfig) -> Result<()> {
    config.validate()?;
    let calculator = Calculator::from_config(&config);
    let pair = calculator.pair().clone();

    match cli.command {
        Commands::Profit {
            entry,
            entry_valuation,
            exit_valuation,
            buy_slippage,
            sell_slippage,
            fees,
            bot_fee,
            market_cap,
        } => {
            let mode = if market_cap {
                ValuationMode::MarketCap
            } else {
                ValuationMode::UnitPrice
            };
            let input = TradeInput::new(entry, entry_valuation, exit_valuation)
                .with_slippage(buy_slippage, sell_slippage)
                .with_flat_fees(fees)
                .with_proportional_fee(bot_fee)
                .with_mode(mode);

            let result = calculator.profit(&input).await?;
            info!("Projected {} net profit", result.net_profit_base);

            let report = render_trade_report(&result, &pair, mode, calculator.cached_rate());
            emit(cli.json, &config, &pair, &result, report)
        }
        Commands::BreakEven { entry, fee_pct, extra_fees } => {
            let input = FeeBreakEvenInput::new(entry, fee_pct, extra_fees);
            let result = calculator.fee_break_even(&input)?;
            let report = render_fee_break_even_report(&result, &pair.base_asset);
            emit(cli.json, &config, &pair, &result, report)
        }
        Commands::PositionSize {
            balance,
            risk_pct,
            entry_price,
            stop_loss,
        } => {
            let input = PositionSizeInput::new(balance, risk_pct, entry_price, stop_loss);
            let result = calculator.position_size(&input)?;
            let report = render_position_size_report(&result);
            emit(cli.json, &config, &pair, &result, report)
        }
        Commands::SimpleProfit {
            entry_price,
            exit_price,
            size,
        } => {
            let result = calculator.simple_profit(entry_price, exit_price, size)?;
            let report = render_simple_profit_report(&result);
            emit(cli.json, &config, &pair, &result, report)
        }
    }
}

fn emit<T: Serialize>(json: bool, config: &CalculatorConfig, pair: &CurrencyPair, result: &T, report: String) -> Result<()> {
    if json {
        let card = SummaryCard::new(config.card_label.clone(), pair.symbol(), result);
        println!("{}", card.to_json()?);
    } else {
        println!("{}", report);
    }
    Ok(())
}
