use roho_core::{ClientError, Context, Instrument, Order, OrderOpts, Side, Trade};
use serde::Serialize;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::client::Client;
use crate::transport::{Method, Request};

/// Wire body of `POST orders/`. Prices are sent as two-decimal strings.
#[derive(Debug, Serialize)]
struct OrderRequest<'a> {
    account: &'a str,
    instrument: &'a str,
    symbol: &'a str,
    #[serde(rename = "type")]
    order_type: roho_core::OrderType,
    time_in_force: roho_core::TimeInForce,
    trigger: roho_core::Trigger,
    price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop_price: Option<String>,
    quantity: u64,
    side: Side,
    extended_hours: bool,
    ref_id: String,
}

impl<'a> OrderRequest<'a> {
    fn new(account: &'a str, instrument: &'a Instrument, opts: &OrderOpts) -> Self {
        Self {
            account,
            instrument: &instrument.url,
            symbol: &instrument.symbol,
            order_type: opts.order_type,
            time_in_force: opts.time_in_force,
            trigger: opts.trigger,
            price: format!("{:.2}", opts.price),
            stop_price: opts.stop_price.map(|p| format!("{p:.2}")),
            quantity: opts.quantity,
            side: opts.side,
            extended_hours: opts.extended_hours,
            ref_id: Uuid::new_v4().to_string(),
        }
    }
}

impl Client {
    /// Place an order for `instrument` against the account.
    pub async fn place_order(
        &self,
        ctx: &Context,
        instrument: &Instrument,
        opts: OrderOpts,
    ) -> Result<Order, ClientError> {
        if opts.quantity == 0 {
            return Err(ClientError::InvalidRequest(
                "order quantity must be positive".to_string(),
            ));
        }

        let account = self.account(ctx).await?;
        let body = OrderRequest::new(&account.url, instrument, &opts);
        let url = self.api_url("orders")?;

        let order: Order = self.post(ctx, url, &body).await?;
        info!(
            order_id = %order.id,
            symbol = %instrument.symbol,
            side = %opts.side,
            quantity = opts.quantity,
            price = opts.price,
            "Order placed"
        );
        Ok(order)
    }

    pub async fn buy(
        &self,
        ctx: &Context,
        instrument: &Instrument,
        opts: OrderOpts,
    ) -> Result<Order, ClientError> {
        self.place_order(ctx, instrument, opts.with_side(Side::Buy))
            .await
    }

    pub async fn sell(
        &self,
        ctx: &Context,
        instrument: &Instrument,
        opts: OrderOpts,
    ) -> Result<Order, ClientError> {
        self.place_order(ctx, instrument, opts.with_side(Side::Sell))
            .await
    }

    /// Place the order a strategy proposed.
    pub async fn execute_trade(&self, ctx: &Context, trade: &Trade) -> Result<Order, ClientError> {
        let instrument = if trade.instrument_url.is_empty() {
            self.instrument(ctx, &trade.symbol).await?
        } else {
            self.instrument_by_url(ctx, &trade.instrument_url).await?
        };
        self.place_order(ctx, &instrument, trade.order.clone()).await
    }

    /// Ask the server to cancel `order`.
    pub async fn cancel_order(&self, ctx: &Context, order: &Order) -> Result<(), ClientError> {
        let cancel = order
            .cancel
            .as_deref()
            .ok_or_else(|| ClientError::NotCancelable(order.id.clone()))?;

        let _: Value = self.call(ctx, Request::parse(Method::POST, cancel)?).await?;
        info!(order_id = %order.id, "Order cancel requested");
        Ok(())
    }

    /// Refresh an order by id.
    pub async fn order(&self, ctx: &Context, id: &str) -> Result<Order, ClientError> {
        let url = self.api_url(&format!("orders/{id}"))?;
        self.get(ctx, url).await
    }

    /// Recent orders, newest first.
    pub async fn orders(&self, ctx: &Context) -> Result<Vec<Order>, ClientError> {
        let url = self.api_url("orders")?;
        self.list(ctx, url, &()).await
    }
}
