//! Adapter traits for the settlement pallet
//!
//! The settlement core only orchestrates. Balances of stake and pooled funds, the operator set and
//! the token movements themselves live behind these traits, keeping the pallet generic over asset
//! types and independent of any runtime implementation.

use core::marker::PhantomData;
use frame::prelude::*;
use polkadot_sdk::frame_support::traits::{
  fungible, fungibles,
  tokens::Preservation,
};
use primitives::AssetKind;

/// Token transfers and balance queries.
pub trait AssetOps<AccountId, AssetId, Balance> {
  fn transfer(
    from: &AccountId,
    to: &AccountId,
    asset: AssetId,
    amount: Balance,
  ) -> Result<(), DispatchError>;

  fn balance(who: &AccountId, asset: AssetId) -> Balance;
}

/// Collateral held against claims.
pub trait StakeLedger<AccountId, AssetId, Balance> {
  /// Takes `amount` of `who`'s stake in `asset` and pays it to `beneficiary`.
  ///
  /// Must fail without side effects when the stake does not cover `amount`.
  fn seize(
    who: &AccountId,
    asset: AssetId,
    amount: Balance,
    beneficiary: &AccountId,
  ) -> Result<(), DispatchError>;

  fn staked(who: &AccountId, asset: AssetId) -> Balance;
}

/// Shared balance withdrawals are fronted from and claims are paid back into.
pub trait LiquidityPool<AccountId, AssetId, Balance> {
  /// Moves `amount` from `from` into the pool.
  fn add(asset: AssetId, amount: Balance, from: &AccountId) -> Result<(), DispatchError>;

  /// Pays `amount` out of the pool to `to`. Fails if the pool holds less than `amount`.
  fn remove(asset: AssetId, amount: Balance, to: &AccountId) -> Result<(), DispatchError>;

  fn pooled(asset: AssetId) -> Balance;
}

/// Set of identities allowed to authorize withdrawals.
pub trait OperatorRegistry<AccountId> {
  fn is_authorized_operator(who: &AccountId) -> bool;
}

/// `AssetOps` over `AssetKind`: the native asset moves through `fungible` (pallet-balances), every
/// other asset through `fungibles` (pallet-assets).
pub struct FungibleAssetOps<Currency, Assets>(PhantomData<(Currency, Assets)>);

impl<AccountId, Currency, Assets> AssetOps<AccountId, AssetKind, u128>
  for FungibleAssetOps<Currency, Assets>
where
  AccountId: Eq,
  Currency: fungible::Mutate<AccountId, Balance = u128>,
  Assets: fungibles::Mutate<AccountId, AssetId = u32, Balance = u128>,
{
  fn transfer(
    from: &AccountId,
    to: &AccountId,
    asset: AssetKind,
    amount: u128,
  ) -> Result<(), DispatchError> {
    match asset {
      AssetKind::Native => {
        <Currency as fungible::Mutate<AccountId>>::transfer(
          from,
          to,
          amount,
          Preservation::Expendable,
        )?;
      }
      AssetKind::Local(id) | AssetKind::Foreign(id) => {
        <Assets as fungibles::Mutate<AccountId>>::transfer(
          id,
          from,
          to,
          amount,
          Preservation::Expendable,
        )?;
      }
    }
    Ok(())
  }

  fn balance(who: &AccountId, asset: AssetKind) -> u128 {
    match asset {
      AssetKind::Native => <Currency as fungible::Inspect<AccountId>>::balance(who),
      AssetKind::Local(id) | AssetKind::Foreign(id) => {
        <Assets as fungibles::Inspect<AccountId>>::balance(id, who)
      }
    }
  }
}

/// An empty operator set: no withdrawal is ever authorized.
impl<AccountId> OperatorRegistry<AccountId> for () {
  fn is_authorized_operator(_: &AccountId) -> bool {
    false
  }
}
