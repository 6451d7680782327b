//! Account overview and the one-share buy/sell demonstrations.

use anyhow::{Context as _, Result};
use roho_client::Client;
use roho_core::{Context, Instrument, Interval, OrderOpts, Side, Span};
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Print portfolios, positions and market data for `symbol`.
pub async fn run(ctx: &Context, config_path: Option<&Path>, symbol: &str) -> Result<()> {
    let config = super::load(config_path)?;
    let client = super::client(&config)?;
    overview(ctx, &client, symbol).await?;
    Ok(())
}

/// Overview, then place a one-share buy at $1.00 and cancel it.
pub async fn buy(ctx: &Context, config_path: Option<&Path>, symbol: &str) -> Result<()> {
    let config = super::load(config_path)?;
    let client = super::client(&config)?;
    let instrument = overview(ctx, &client, symbol).await?;

    info!("Buying 1 share of {} ...", instrument.symbol);
    let order = client
        .buy(ctx, &instrument, OrderOpts::limit(Side::Buy, 1.0, 1))
        .await
        .context("buy failed")?;

    tokio::time::sleep(Duration::from_millis(5)).await;

    info!("Cancelling buy of {} ...", instrument.symbol);
    client
        .cancel_order(ctx, &order)
        .await
        .context("cancel failed")?;
    Ok(())
}

/// Overview, then place a one-share sell at $1.00.
pub async fn sell(ctx: &Context, config_path: Option<&Path>, symbol: &str) -> Result<()> {
    let config = super::load(config_path)?;
    let client = super::client(&config)?;
    let instrument = overview(ctx, &client, symbol).await?;

    info!("Selling 1 share of {} ...", instrument.symbol);
    client
        .sell(ctx, &instrument, OrderOpts::limit(Side::Sell, 1.0, 1))
        .await
        .context("sell failed")?;
    Ok(())
}

async fn overview(ctx: &Context, client: &Client, symbol: &str) -> Result<Instrument> {
    info!("Getting portfolios ...");
    let portfolios = client
        .portfolios(ctx)
        .await
        .context("get portfolios failed")?;
    for p in &portfolios {
        info!(
            "portfolio value: ${:.2} withdrawable: ${:.2}",
            p.equity, p.withdrawable_amount
        );
    }

    let positions = client.positions(ctx).await.context("positions failed")?;
    for p in &positions {
        info!(
            "position: {} x {:.4} @ ${:.2}",
            p.symbol.as_deref().unwrap_or(&p.instrument_url),
            p.quantity,
            p.average_buy_price
        );
    }

    info!("Looking up {symbol} ...");
    let instrument = client
        .instrument(ctx, symbol)
        .await
        .context("get instrument failed")?;
    info!("{} is {}", instrument.symbol, instrument.name);

    let fundamentals = client
        .fundamentals(ctx, &[symbol])
        .await
        .context("get fundamentals failed")?;
    if let Some(f) = fundamentals.first() {
        info!(
            "{} opening price was ${:.2} (52 week high: ${:.2})",
            instrument.symbol,
            f.open.unwrap_or_default(),
            f.high_52_weeks.unwrap_or_default()
        );
    }

    let historical = client
        .historical(ctx, symbol, Interval::TenMinute, Span::Day)
        .await
        .context("get historicals failed")?;
    for r in &historical.records {
        info!(
            "  {}: opened at {:.2}, closed at {:.2}",
            r.begins_at, r.open_price, r.close_price
        );
    }

    let quote = client
        .quote(ctx, symbol)
        .await
        .context("get quote failed")?;
    info!("{} current price is ${:.2}", instrument.symbol, quote.price());

    Ok(instrument)
}
