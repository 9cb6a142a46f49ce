use serde::{Deserialize, Serialize};

use crate::utils::{parse_yocto, YOCTO_PER_NEAR};

/// Price of one byte of contract storage, in yoctoNEAR.
pub const STORAGE_PRICE_PER_BYTE: u128 = 10_000_000_000_000_000_000;

/// Result of the `view_account` RPC query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountView {
    pub amount: String,
    pub locked: String,
    #[serde(default)]
    pub code_hash: String,
    pub storage_usage: u64,
    #[serde(default)]
    pub block_height: u64,
    #[serde(default)]
    pub block_hash: String,
}

/// Account balance split the way wallets present it. All values in yoctoNEAR.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct AccountBalance {
    pub total: u128,
    pub state_staked: u128,
    pub staked: u128,
    pub available: u128,
}

impl AccountBalance {
    pub fn from_view(view: &AccountView) -> crate::Result<Self> {
        let amount = parse_yocto("amount", &view.amount)?;
        let locked = parse_yocto("locked", &view.locked)?;

        let total = amount.saturating_add(locked);
        let state_staked = u128::from(view.storage_usage) * STORAGE_PRICE_PER_BYTE;
        let staked = locked;
        let available = total.saturating_sub(staked.max(state_staked));

        Ok(Self {
            total,
            state_staked,
            staked,
            available,
        })
    }

    /// `total` in NEAR, 5 decimals.
    pub fn total_display(&self) -> String {
        crate::utils::format_units(self.total, YOCTO_PER_NEAR, 5)
    }

    /// `available` in NEAR, 5 decimals.
    pub fn available_display(&self) -> String {
        crate::utils::format_units(self.available, YOCTO_PER_NEAR, 5)
    }
}
