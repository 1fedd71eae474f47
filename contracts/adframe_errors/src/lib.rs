#![no_std]

use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups errors by domain for monitoring and off-chain display.
/// @dev    Clients should switch on this value first, then on the specific
///         `ContractError` code for fine-grained handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup and configuration errors (codes 1-99).
    Initialization,
    /// Caller identity and permission errors (codes 100-199).
    Authorization,
    /// Billboard takeover errors (codes 200-299).
    Billboard,
    /// Holder token registry errors (codes 300-399).
    Membership,
    /// Epoch share claim errors (codes 400-499).
    Distribution,
    /// Safe-math errors (codes 700-799).
    Arithmetic,
}

/// @title  ContractError
/// @notice Canonical error enum shared by the AdFrame contracts.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///
/// Error Code Layout:
///   1  -  99  : Initialization
///   100 - 199 : Authorization
///   200 - 299 : Billboard
///   300 - 399 : Membership
///   400 - 499 : Distribution
///   700 - 799 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    // --- Initialization (1-99) ---
    /// Contract has not been initialized yet.
    NotInitialized = 1,

    /// Contract has already been initialized and cannot be re-initialized.
    AlreadyInitialized = 2,

    /// Billboard configuration is out of range (zero base price, zero decay
    /// period, zero message bound, or an oversized price step).
    InvalidConfig = 3,

    // --- Authorization (100-199) ---
    /// Caller is not the admin.
    NotAdmin = 100,

    /// Caller is not the current owner of the holder token.
    NotOwner = 101,

    // --- Billboard (200-299) ---
    /// Attached payment is below the current adjusted price.
    InsufficientPayment = 200,

    /// Message exceeds the configured maximum length in bytes.
    MessageTooLong = 201,

    /// Contract is paused; state-changing operations are disabled.
    ContractPaused = 202,

    /// Payer has not approved the contract to pull the attached payment.
    InsufficientAllowance = 203,

    /// Message must contain at least one byte.
    EmptyMessage = 204,

    // --- Membership (300-399) ---
    /// No holder token exists for the given id.
    UnknownToken = 300,

    /// Owner holds fewer tokens than the requested index.
    IndexOutOfBounds = 301,

    /// Token transfer to the address that already owns it.
    SelfTransfer = 302,

    // --- Distribution (400-499) ---
    /// Epoch does not exist or is still open.
    InvalidEpoch = 400,

    /// The (token, epoch) share has already been withdrawn.
    AlreadyClaimed = 401,

    /// Token did not exist when the epoch closed.
    NotEligible = 402,

    /// Withdrawals from an epoch would exceed what it collected.
    ClaimExceedsCollected = 403,

    // --- Arithmetic (700-799) ---
    /// Integer overflow detected during a checked arithmetic operation.
    Overflow = 700,

    /// Integer underflow detected during a checked arithmetic operation.
    Underflow = 701,

    /// Division by zero in a checked arithmetic operation.
    DivisionByZero = 702,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every ContractError variant.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;
}

impl ErrorExt for ContractError {
    fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized
            | ContractError::AlreadyInitialized
            | ContractError::InvalidConfig => ErrorCategory::Initialization,

            ContractError::NotAdmin | ContractError::NotOwner => ErrorCategory::Authorization,

            ContractError::InsufficientPayment
            | ContractError::MessageTooLong
            | ContractError::ContractPaused
            | ContractError::InsufficientAllowance
            | ContractError::EmptyMessage => ErrorCategory::Billboard,

            ContractError::UnknownToken
            | ContractError::IndexOutOfBounds
            | ContractError::SelfTransfer => ErrorCategory::Membership,

            ContractError::InvalidEpoch
            | ContractError::AlreadyClaimed
            | ContractError::NotEligible
            | ContractError::ClaimExceedsCollected => ErrorCategory::Distribution,

            ContractError::Overflow | ContractError::Underflow | ContractError::DivisionByZero => {
                ErrorCategory::Arithmetic
            }
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract has already been initialized",
            ContractError::InvalidConfig => "Billboard configuration is out of range",
            ContractError::NotAdmin => "Caller is not the admin",
            ContractError::NotOwner => "Caller is not the token owner",
            ContractError::InsufficientPayment => "Payment is below the current price",
            ContractError::MessageTooLong => "Message exceeds the maximum length",
            ContractError::ContractPaused => "Contract is paused",
            ContractError::InsufficientAllowance => {
                "Payer has not approved enough tokens for the payment"
            }
            ContractError::EmptyMessage => "Message must not be empty",
            ContractError::UnknownToken => "No holder token exists for the given id",
            ContractError::IndexOutOfBounds => "Owner index out of bounds",
            ContractError::SelfTransfer => "Token is already owned by the recipient",
            ContractError::InvalidEpoch => "Epoch does not exist or is still open",
            ContractError::AlreadyClaimed => "Share for this epoch was already withdrawn",
            ContractError::NotEligible => "Token was not minted when the epoch closed",
            ContractError::ClaimExceedsCollected => "Epoch withdrawals would exceed its collected total",
            ContractError::Overflow => "Integer overflow in checked arithmetic",
            ContractError::Underflow => "Integer underflow in checked arithmetic",
            ContractError::DivisionByZero => "Division by zero in checked arithmetic",
        }
    }
}
