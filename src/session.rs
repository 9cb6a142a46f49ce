//! Wallet session: redirect-based sign-in, sign-out and account balances.

use async_trait::async_trait;
use tracing::{info, warn};
use url::Url;

use crate::config::NetworkConfig;
use crate::contract::VIEW_METHODS;
use crate::error::{Error, Result};
use crate::keystore::{FileKeyStore, StoredSession};
use crate::models::AccountBalance;
use crate::rpc::NearRpc;

/// Parameters of the wallet login redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInRequest {
    pub contract_id: String,
    pub method_names: Vec<String>,
    pub success_url: String,
    pub failure_url: String,
}

impl SignInRequest {
    /// Sign-in limited to the order book contract's view methods.
    pub fn for_config(config: &NetworkConfig) -> Self {
        Self {
            contract_id: config.contract_id.clone(),
            method_names: VIEW_METHODS.iter().map(|m| m.to_string()).collect(),
            success_url: config.success_url.clone(),
            failure_url: config.failure_url.clone(),
        }
    }
}

/// What the app needs from a signed-in session.
#[async_trait]
pub trait SessionAdapter: Send + Sync {
    fn account_id(&self) -> Option<&str>;

    fn is_signed_in(&self) -> bool {
        self.account_id().is_some()
    }

    async fn account_balance(&self) -> Result<AccountBalance>;

    fn sign_out(&mut self) -> Result<()>;
}

/// A signed-in account bound to an RPC node.
pub struct Account<'a> {
    account_id: &'a str,
    rpc: &'a NearRpc,
}

impl Account<'_> {
    pub fn account_id(&self) -> &str {
        self.account_id
    }

    pub async fn balance(&self) -> Result<AccountBalance> {
        let view = self.rpc.view_account(self.account_id).await?;
        AccountBalance::from_view(&view)
    }
}

/// Session persisted in a [`FileKeyStore`], the way a browser wallet keeps
/// it in local storage.
pub struct WalletSession {
    network_id: String,
    wallet_url: String,
    store: FileKeyStore,
    rpc: NearRpc,
    account_id: Option<String>,
}

impl WalletSession {
    /// Open the session for `config.network_id`, restoring a previous sign-in.
    ///
    /// An unparsable session file opens signed out; the next sign-in or
    /// sign-out rewrites it.
    pub fn open(config: &NetworkConfig, store: FileKeyStore, rpc: NearRpc) -> Result<Self> {
        let account_id = match store.get(&config.network_id) {
            Ok(stored) => stored.map(|s| s.account_id),
            Err(Error::Json(e)) => {
                warn!(path = %store.path().display(), error = %e, "ignoring unreadable session file");
                None
            }
            Err(e) => return Err(e),
        };
        Ok(Self {
            network_id: config.network_id.clone(),
            wallet_url: crate::utils::remove_trailing_slash(&config.wallet_url),
            store,
            rpc,
            account_id,
        })
    }

    /// Wallet URL the user is sent to for approving the sign-in.
    pub fn request_sign_in(&self, request: &SignInRequest) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/login/", self.wallet_url))?;
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("success_url", &request.success_url)
                .append_pair("failure_url", &request.failure_url)
                .append_pair("contract_id", &request.contract_id);
            for method in &request.method_names {
                query.append_pair("methodNames", method);
            }
        }
        Ok(url)
    }

    /// Confirm `account_id` exists on chain, then record it as signed in.
    ///
    /// Nothing is persisted when the node rejects the account.
    pub async fn sign_in_verified(&mut self, account_id: &str) -> Result<AccountBalance> {
        if !is_valid_account_id(account_id) {
            return Err(Error::InvalidAccountId(account_id.to_string()));
        }
        let view = self.rpc.view_account(account_id).await?;
        let balance = AccountBalance::from_view(&view)?;
        self.complete_sign_in(account_id)?;
        Ok(balance)
    }

    /// Record the account the wallet redirected back with.
    pub fn complete_sign_in(&mut self, account_id: &str) -> Result<()> {
        if !is_valid_account_id(account_id) {
            return Err(Error::InvalidAccountId(account_id.to_string()));
        }
        self.store.set(
            &self.network_id,
            StoredSession {
                account_id: account_id.to_string(),
            },
        )?;
        info!(account_id, network = self.network_id.as_str(), "signed in");
        self.account_id = Some(account_id.to_string());
        Ok(())
    }

    pub fn account(&self) -> Result<Account<'_>> {
        let account_id = self.account_id.as_deref().ok_or(Error::NotSignedIn)?;
        Ok(Account {
            account_id,
            rpc: &self.rpc,
        })
    }
}

#[async_trait]
impl SessionAdapter for WalletSession {
    fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    async fn account_balance(&self) -> Result<AccountBalance> {
        self.account()?.balance().await
    }

    fn sign_out(&mut self) -> Result<()> {
        self.store.remove(&self.network_id)?;
        if let Some(account_id) = self.account_id.take() {
            info!(account_id = account_id.as_str(), "signed out");
        }
        Ok(())
    }
}

/// NEAR account id rules: 2 to 64 characters of `a-z`, `0-9` and the
/// separators `-`, `_`, `.`; separators never lead, trail or repeat.
pub fn is_valid_account_id(account_id: &str) -> bool {
    if !(2..=64).contains(&account_id.len()) {
        return false;
    }
    let mut prev_separator = true;
    for c in account_id.chars() {
        let separator = matches!(c, '-' | '_' | '.');
        if separator {
            if prev_separator {
                return false;
            }
        } else if !(c.is_ascii_lowercase() || c.is_ascii_digit()) {
            return false;
        }
        prev_separator = separator;
    }
    !prev_separator
}
