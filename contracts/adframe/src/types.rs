use soroban_sdk::{contracttype, Address, String};

// ─── Configuration ─────────────────────────────────────────────────────────

/// Tunable billboard parameters, set at initialization and updatable by the admin.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BillboardConfig {
    /// Price quoted before any takeover and the floor the curve decays to.
    pub base_price: i128,
    /// Price increase applied on top of the last takeover price, in basis points.
    pub step_bps: u32,
    /// Seconds for a bumped price to decay linearly back to `base_price`.
    pub decay_period: u64,
    /// Maximum message length in bytes.
    pub max_message_len: u32,
}

// ─── Pricing ───────────────────────────────────────────────────────────────

/// Last accepted takeover, as seen by the price curve.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PricingState {
    /// Quoted price at the last takeover (tips excluded).
    pub last_price: i128,
    /// Ledger timestamp of the last takeover.
    pub last_update: u64,
    /// Number of takeovers accepted so far.
    pub takeovers: u64,
}

// ─── Billboard ─────────────────────────────────────────────────────────────

/// The single message slot.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Billboard {
    pub message: String,
    /// `None` until the first takeover.
    pub author: Option<Address>,
    /// Epoch opened by the takeover that set `message`. The author's payment
    /// was credited to `epoch - 1`.
    pub epoch: u64,
    /// Quoted price the author paid against.
    pub price: i128,
    pub updated_at: u64,
}

// ─── Holder tokens ─────────────────────────────────────────────────────────

/// One membership token.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HolderToken {
    pub owner: Address,
    /// Position of this token in the owner's enumeration list.
    pub owner_index: u32,
    /// Epoch that was open when the token was minted.
    pub minted_epoch: u64,
}

// ─── Epochs ────────────────────────────────────────────────────────────────

/// Per-epoch ledger entry.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Epoch {
    /// Payments credited to this epoch.
    pub total_collected: i128,
    /// Number of tokens in existence when the epoch closed. Token ids below
    /// this value share the epoch pot.
    pub eligible_holders: u32,
    /// Sum of shares withdrawn so far.
    pub total_claimed: i128,
    /// Number of (token, epoch) claim records written.
    pub claims: u32,
    pub closed: bool,
    pub closed_at: u64,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Contract admin address.
    Admin,
    /// Stellar asset used for payments and payouts.
    PaymentToken,
    /// BillboardConfig.
    Config,
    /// Pause flag.
    Paused,
    /// PricingState of the last takeover.
    Pricing,
    /// Current Billboard record.
    Billboard,
    /// Id of the open epoch.
    CurrentEpoch,
    /// All-time sum of accepted payments.
    TotalCollected,
    /// Number of holder tokens minted.
    TotalSupply,
    /// Holder token record by id. Stored in `persistent()`.
    Token(u32),
    /// Number of tokens held by an address. Stored in `persistent()`.
    Balance(Address),
    /// (owner, index) -> token id. Stored in `persistent()`.
    OwnedToken(Address, u32),
    /// Closed epoch record by id. Stored in `persistent()`.
    Epoch(u64),
    /// Claim record: amount withdrawn for (token id, epoch id). Stored in `persistent()`.
    Claim(u32, u64),
    /// Next epoch `claim_all_shares` inspects for a token. Stored in `persistent()`.
    ClaimCursor(u32),
}
