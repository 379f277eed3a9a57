//! The two settlement paths of a request.
//!
//! Both paths share the canonical hash, signer recovery and the replay guard, and differ only in
//! their preconditions, whose authority the recovered signer is checked against, and what they
//! move. The shared driver lives in [`crate::Pallet::settle`].

use crate::{
  AssetOps, Config, Error, LiquidityPool, OperatorRegistry, Owner, Pallet, StakeLedger, executor,
  types::{Request, StatusKind},
};
use core::marker::PhantomData;
use frame::prelude::*;
use polkadot_sdk::{
  frame_support::traits::UnixTime,
  sp_runtime::traits::{CheckedAdd, Zero},
};

/// Decides whether a recovered signer may drive a path.
pub trait AuthorityCheck<T: Config> {
  fn authorize(signer: &T::AccountId) -> DispatchResult;
}

/// The signer must be in the operator registry.
pub struct OperatorAuthority<T>(PhantomData<T>);

impl<T: Config> AuthorityCheck<T> for OperatorAuthority<T> {
  fn authorize(signer: &T::AccountId) -> DispatchResult {
    ensure!(
      T::OperatorRegistry::is_authorized_operator(signer),
      Error::<T>::UnauthorizedOperator
    );
    Ok(())
  }
}

/// The signer is the party whose own stake gets seized. There is no registry lookup; a signer
/// without stake fails at seizure.
pub struct StakeholderAuthority<T>(PhantomData<T>);

impl<T: Config> AuthorityCheck<T> for StakeholderAuthority<T> {
  fn authorize(_signer: &T::AccountId) -> DispatchResult {
    Ok(())
  }
}

/// One half of the request lifecycle.
pub trait RequestPath<T: Config> {
  /// Status bit this path flips on success.
  const KIND: StatusKind;

  type Authority: AuthorityCheck<T>;

  /// Checks that only depend on the request and the executing ledger. Run before the signature
  /// is looked at.
  fn validate(request: &Request<T>) -> DispatchResult;

  /// Moves funds. Runs after authorization and the replay check.
  fn execute(
    submitter: &T::AccountId,
    request: &Request<T>,
    signer: &T::AccountId,
  ) -> DispatchResult;
}

/// Operator-authorized half: fronts pooled funds to the recipient.
pub struct WithdrawPath<T>(PhantomData<T>);

impl<T: Config> RequestPath<T> for WithdrawPath<T> {
  const KIND: StatusKind = StatusKind::Withdrawn;

  type Authority = OperatorAuthority<T>;

  fn validate(request: &Request<T>) -> DispatchResult {
    ensure!(
      request.withdraw_chain_id == T::ChainId::get(),
      Error::<T>::WrongChain
    );
    let now = T::TimeProvider::now().as_secs();
    ensure!(
      request.valid_until == 0 || now <= request.valid_until,
      Error::<T>::Expired
    );
    ensure!(
      request.valid_after == 0 || now >= request.valid_after,
      Error::<T>::NotYetValid
    );
    Ok(())
  }

  fn execute(
    submitter: &T::AccountId,
    request: &Request<T>,
    _signer: &T::AccountId,
  ) -> DispatchResult {
    let sovereign = Pallet::<T>::account_id();
    executor::run_all::<T>(&request.pre_calls, submitter, &sovereign)?;
    T::LiquidityPool::remove(request.asset, request.amount, &sovereign)?;
    T::AssetOps::transfer(
      &sovereign,
      &request.recipient,
      request.asset,
      request.amount,
    )?;
    executor::run_all::<T>(&request.post_calls, submitter, &sovereign)
  }
}

/// Stake-holder-authorized half: seizes `amount + fee` from the signer, pays `amount` back into
/// the pool and `fee` to the owner.
pub struct ClaimPath<T>(PhantomData<T>);

impl<T: Config> RequestPath<T> for ClaimPath<T> {
  const KIND: StatusKind = StatusKind::Claimed;

  type Authority = StakeholderAuthority<T>;

  fn validate(request: &Request<T>) -> DispatchResult {
    ensure!(
      request.claim_chain_id == T::ChainId::get(),
      Error::<T>::WrongChain
    );
    Ok(())
  }

  fn execute(
    _submitter: &T::AccountId,
    request: &Request<T>,
    signer: &T::AccountId,
  ) -> DispatchResult {
    let fee_recipient = if request.fee.is_zero() {
      None
    } else {
      Some(Owner::<T>::get().ok_or(Error::<T>::OwnerNotSet)?)
    };
    let total = request
      .amount
      .checked_add(&request.fee)
      .ok_or(Error::<T>::ArithmeticOverflow)?;
    let sovereign = Pallet::<T>::account_id();
    T::StakeLedger::seize(signer, request.asset, total, &sovereign)?;
    T::LiquidityPool::add(request.asset, request.amount, &sovereign)?;
    if let Some(owner) = fee_recipient {
      T::AssetOps::transfer(&sovereign, &owner, request.asset, request.fee)?;
    }
    Ok(())
  }
}
