//! Protocol Constants for the Settlement Ecosystem
//!
//! This module centralizes system-level constants: pallet IDs used to derive the sovereign
//! accounts of the settlement core and its collaborators, and the default bounds the runtime
//! configurations share.

/// Pallet identifiers for deriving pallet-owned accounts.
///
/// These IDs are used by Polkadot SDK's `PalletId::into_account_truncating()`
/// to deterministically generate accounts for pallet-specific operations.
pub mod pallet_ids {
  /// Request settlement pallet ID. Its account is also the protocol instance identity folded
  /// into every request hash.
  pub const SETTLEMENT_PALLET_ID: &[u8; 8] = b"settlmnt";

  /// Stake ledger pallet ID (custody of bonded collateral)
  pub const STAKE_LEDGER_PALLET_ID: &[u8; 8] = b"stakeldg";

  /// Liquidity pool pallet ID (custody of pooled funds)
  pub const LIQUIDITY_POOL_PALLET_ID: &[u8; 8] = b"liqpool0";
}

/// Protocol parameters shared by runtime configurations and test mocks.
pub mod params {
  /// Maximum number of pre-calls (and, separately, post-calls) a request may carry.
  pub const SETTLEMENT_MAX_CALLS: u32 = 8;

  /// Maximum encoded length of a single side-effect call payload.
  pub const SETTLEMENT_MAX_PAYLOAD_LEN: u32 = 1024;

  /// Maximum number of requests settled by one `claim_many`.
  pub const SETTLEMENT_MAX_CLAIM_BATCH: u32 = 32;

  /// Upper bound on the ref-time a single side-effect call may declare (250 ms).
  pub const SETTLEMENT_MAX_CALL_REF_TIME: u64 = 250_000_000_000;

  /// Upper bound on the proof size a single side-effect call may declare (64 KiB).
  pub const SETTLEMENT_MAX_CALL_PROOF_SIZE: u64 = 64 * 1024;
}
