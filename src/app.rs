//! Sign-in, market listing, market selection and sign-out, applied to a
//! [`PageView`].

use tracing::info;

use crate::book::{render_market, AskOrdering};
use crate::contract::OrderBookContract;
use crate::error::{Error, Result};
use crate::models::MarketSummary;
use crate::session::SessionAdapter;
use crate::view::PageView;

pub struct App<C, S> {
    contract: C,
    session: S,
    ask_ordering: AskOrdering,
    view: PageView,
    markets: Vec<MarketSummary>,
    selected: Option<u64>,
}

impl<C, S> App<C, S>
where
    C: OrderBookContract,
    S: SessionAdapter,
{
    pub fn new(contract: C, session: S, ask_ordering: AskOrdering) -> Self {
        Self {
            contract,
            session,
            ask_ordering,
            view: PageView::new(),
            markets: Vec::new(),
            selected: None,
        }
    }

    pub fn view(&self) -> &PageView {
        &self.view
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }

    pub fn markets(&self) -> &[MarketSummary] {
        &self.markets
    }

    pub fn selected_market(&self) -> Option<u64> {
        self.selected
    }

    /// Fill the account panel and the market selector for the signed-in
    /// account.
    pub async fn on_sign_in(&mut self) -> Result<()> {
        let account_id = self
            .session
            .account_id()
            .ok_or(Error::NotSignedIn)?
            .to_string();
        let balance = self.session.account_balance().await?;
        self.view.show_signed_in(&account_id, &balance);

        let markets = self.contract.markets().await?;
        info!(
            contract = self.contract.contract_id(),
            count = markets.len(),
            "loaded markets"
        );
        self.view.set_markets(&markets);
        self.markets = markets;
        Ok(())
    }

    /// Fetch one market and replace the tables with it.
    ///
    /// Takes `&mut self`, so a second selection always waits for the first.
    pub async fn select_market(&mut self, market_id: u64) -> Result<()> {
        let market = self.contract.view_market(market_id).await?;
        info!(
            market_id,
            bids = market.bid_orders.len(),
            asks = market.ask_orders.len(),
            "loaded order book"
        );
        let book = render_market(&market, self.ask_ordering)?;
        self.selected = Some(market_id);
        self.view.show_book(book);
        Ok(())
    }

    pub fn sign_out(&mut self) -> Result<()> {
        self.session.sign_out()?;
        self.view.reset();
        self.markets.clear();
        self.selected = None;
        Ok(())
    }
}
