use crate::{Config, RecoverSigner};
use frame::prelude::*;

pub type BalanceOf<T> = <T as Config>::Balance;
pub type AssetIdOf<T> = <T as Config>::AssetId;

pub type SignatureOf<T> = <<T as Config>::SignerRecovery as RecoverSigner<
  <T as frame_system::Config>::AccountId,
>>::Signature;

pub type PayloadOf<T> = BoundedVec<u8, <T as Config>::MaxPayloadLen>;

pub type CallsOf<T> = BoundedVec<SideEffectCall<T>, <T as Config>::MaxCalls>;

/// One side-effect attached to a request.
///
/// `value` of the native asset is paid by the submitter to `target`. A non-empty `payload` is a
/// SCALE-encoded runtime call dispatched with the settlement account as signed origin.
#[derive(
  CloneNoBound,
  PartialEqNoBound,
  EqNoBound,
  RuntimeDebugNoBound,
  Encode,
  Decode,
  DecodeWithMemTracking,
  TypeInfo,
)]
#[scale_info(skip_type_params(T))]
pub struct SideEffectCall<T: Config> {
  pub target: T::AccountId,
  pub value: BalanceOf<T>,
  pub payload: PayloadOf<T>,
}

/// A signed intent to move `amount` of `asset` to `recipient` on the withdraw ledger, reimbursed
/// from the signer's stake on the claim ledger.
///
/// Never stored. Only its hash and a [`RequestStatus`] are persisted.
#[derive(
  CloneNoBound,
  PartialEqNoBound,
  EqNoBound,
  RuntimeDebugNoBound,
  Encode,
  Decode,
  DecodeWithMemTracking,
  TypeInfo,
)]
#[scale_info(skip_type_params(T))]
pub struct Request<T: Config> {
  pub asset: AssetIdOf<T>,
  pub amount: BalanceOf<T>,
  pub fee: BalanceOf<T>,
  pub claim_chain_id: u64,
  pub withdraw_chain_id: u64,
  pub recipient: T::AccountId,
  pub pre_calls: CallsOf<T>,
  pub post_calls: CallsOf<T>,
  /// Unix seconds, 0 = no upper bound
  pub valid_until: u64,
  /// Unix seconds, 0 = no lower bound
  pub valid_after: u64,
  pub nonce: u128,
}

/// Which half of a request a status bit (and a settlement event) refers to.
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Encode,
  Eq,
  PartialEq,
  TypeInfo,
  MaxEncodedLen,
)]
pub enum StatusKind {
  Withdrawn,
  Claimed,
}

/// Replay-protection record keyed by request hash. Each flag flips to `true` once and is never
/// reset.
#[derive(
  Clone,
  Copy,
  Debug,
  Default,
  Decode,
  DecodeWithMemTracking,
  Encode,
  Eq,
  PartialEq,
  TypeInfo,
  MaxEncodedLen,
)]
pub struct RequestStatus {
  pub withdrawn: bool,
  pub claimed: bool,
}

impl RequestStatus {
  pub fn is_set(&self, kind: StatusKind) -> bool {
    match kind {
      StatusKind::Withdrawn => self.withdrawn,
      StatusKind::Claimed => self.claimed,
    }
  }

  pub fn set(&mut self, kind: StatusKind) {
    match kind {
      StatusKind::Withdrawn => self.withdrawn = true,
      StatusKind::Claimed => self.claimed = true,
    }
  }
}
