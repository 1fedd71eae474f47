//! Takeover pricing.
//!
//! The billboard asks a [`PriceOracle`] for the amount required to replace the
//! message. The built-in [`DemandCurve`] raises the price by a fixed step on
//! every takeover and lets it decay linearly back to the base price while the
//! slot sits idle:
//!
//! ```text
//! bumped = max(base, last_price * (10_000 + step_bps) / 10_000)
//! quote  = bumped - (bumped - base) * elapsed / decay_period   (elapsed < decay_period)
//! quote  = base                                              (otherwise, or no takeover yet)
//! ```
//!
//! Quotes never drop below `base_price`, which configuration keeps positive.

use adframe_errors::ContractError;
use soroban_sdk::Env;

use crate::config;
use crate::math::{div_i128, increase_by_bps, mul_i128, next_u64, sub_i128};
use crate::types::{BillboardConfig, DataKey, PricingState};

/// Source of the current takeover price.
pub trait PriceOracle {
    /// Amount required to take over the billboard at ledger time `now`.
    fn quote(&self, now: u64) -> Result<i128, ContractError>;
}

/// Demand-driven price curve backed by the last takeover record.
#[derive(Clone, Debug)]
pub struct DemandCurve {
    base_price: i128,
    step_bps: u32,
    decay_period: u64,
    last: Option<PricingState>,
}

impl DemandCurve {
    pub fn new(config: &BillboardConfig, last: Option<PricingState>) -> Self {
        Self {
            base_price: config.base_price,
            step_bps: config.step_bps,
            decay_period: config.decay_period,
            last,
        }
    }

    /// Builds the curve from the stored configuration and takeover record.
    pub fn load(e: &Env) -> Result<Self, ContractError> {
        let config = config::get_config(e)?;
        Ok(Self::new(&config, load_state(e)))
    }

    /// Price right after the last takeover, before any decay.
    fn bumped(&self, last_price: i128) -> Result<i128, ContractError> {
        let raised = increase_by_bps(last_price, self.step_bps)?;
        Ok(raised.max(self.base_price))
    }
}

impl PriceOracle for DemandCurve {
    fn quote(&self, now: u64) -> Result<i128, ContractError> {
        let Some(last) = &self.last else {
            return Ok(self.base_price);
        };
        let elapsed = now.saturating_sub(last.last_update);
        if elapsed >= self.decay_period {
            return Ok(self.base_price);
        }
        let bumped = self.bumped(last.last_price)?;
        let excess = sub_i128(bumped, self.base_price)?;
        let decayed = div_i128(
            mul_i128(excess, elapsed as i128)?,
            self.decay_period as i128,
        )?;
        sub_i128(bumped, decayed)
    }
}

pub fn load_state(e: &Env) -> Option<PricingState> {
    e.storage().instance().get(&DataKey::Pricing)
}

/// Records an accepted takeover at the quoted `price`.
pub fn record_takeover(e: &Env, price: i128, now: u64) -> Result<PricingState, ContractError> {
    let takeovers = match load_state(e) {
        Some(prev) => next_u64(prev.takeovers)?,
        None => 1,
    };
    let state = PricingState {
        last_price: price,
        last_update: now,
        takeovers,
    };
    e.storage().instance().set(&DataKey::Pricing, &state);
    Ok(state)
}
