//! Stake Ledger Pallet
//!
//! Holds collateral that users bond per asset. The settlement pallet seizes it through
//! [`pallet_request_settlement::StakeLedger`] to reimburse the liquidity pool for withdrawals a
//! user was fronted.
//!
//! Stake is keyed by the account that deposited it. Unbonding moves stake into a single unbonding
//! balance that unlocks `UnbondingPeriod` blocks after the latest `unbond`; until it is withdrawn
//! it can still be seized, so a pending claim cannot be escaped by unbonding.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;
pub use weights::WeightInfo;

/// Helper for benchmarking
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AssetId, AccountId, Balance> {
  fn asset() -> AssetId;
  fn ensure_funded(
    who: &AccountId,
    asset: AssetId,
    amount: Balance,
  ) -> frame::deps::sp_runtime::DispatchResult;
}

#[frame::pallet]
pub mod pallet {
  use super::WeightInfo;
  use frame::deps::{
    frame_support::PalletId,
    sp_runtime::traits::{AccountIdConversion, CheckedAdd, Zero},
  };
  use frame::prelude::*;
  use pallet_request_settlement::AssetOps;

  const LOG_TARGET: &str = "runtime::stake-ledger";

  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    type AssetId: Parameter + Member + Copy + MaxEncodedLen;

    type Balance: Parameter + Member + AtLeast32BitUnsigned + Default + Copy + MaxEncodedLen;

    type AssetOps: AssetOps<Self::AccountId, Self::AssetId, Self::Balance>;

    /// Derives the custody account bonded funds sit in
    #[pallet::constant]
    type PalletId: Get<PalletId>;

    /// Blocks between the latest `unbond` and `withdraw_unbonded`
    #[pallet::constant]
    type UnbondingPeriod: Get<BlockNumberFor<Self>>;

    type WeightInfo: WeightInfo;

    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper: crate::BenchmarkHelper<Self::AssetId, Self::AccountId, Self::Balance>;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(_);

  /// Stake of one account in one asset
  #[derive(
    Clone,
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
  pub struct StakeInfo<Balance, BlockNumber> {
    pub active: Balance,
    pub unbonding: Balance,
    pub unlock_at: BlockNumber,
  }

  impl<Balance: AtLeast32BitUnsigned + Copy, BlockNumber> StakeInfo<Balance, BlockNumber> {
    /// Everything a claim can seize.
    pub fn total(&self) -> Balance {
      self.active.saturating_add(self.unbonding)
    }

    pub fn is_empty(&self) -> bool {
      self.active.is_zero() && self.unbonding.is_zero()
    }
  }

  pub type StakeInfoOf<T> = StakeInfo<<T as Config>::Balance, BlockNumberFor<T>>;

  #[pallet::storage]
  #[pallet::getter(fn stakes)]
  pub type Stakes<T: Config> = StorageDoubleMap<
    _,
    Blake2_128Concat,
    T::AccountId,
    Blake2_128Concat,
    T::AssetId,
    StakeInfoOf<T>,
    OptionQuery,
  >;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    Bonded {
      who: T::AccountId,
      asset: T::AssetId,
      amount: T::Balance,
    },
    Unbonding {
      who: T::AccountId,
      asset: T::AssetId,
      amount: T::Balance,
      unlock_at: BlockNumberFor<T>,
    },
    Withdrawn {
      who: T::AccountId,
      asset: T::AssetId,
      amount: T::Balance,
    },
    /// Stake taken to settle a claim
    Seized {
      who: T::AccountId,
      asset: T::AssetId,
      amount: T::Balance,
      beneficiary: T::AccountId,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    AmountZero,
    /// Stake does not cover the requested amount
    InsufficientStake,
    /// Unbonding period has not elapsed
    StillLocked,
    NothingToWithdraw,
    ArithmeticOverflow,
  }

  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    #[serde(skip)]
    pub _marker: core::marker::PhantomData<T>,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      frame_system::Pallet::<T>::inc_providers(&Pallet::<T>::account_id());
    }
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Lock `amount` of `asset` as collateral of the caller.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::bond())]
    pub fn bond(origin: OriginFor<T>, asset: T::AssetId, amount: T::Balance) -> DispatchResult {
      let who = ensure_signed(origin)?;
      ensure!(!amount.is_zero(), Error::<T>::AmountZero);
      let mut stake = Stakes::<T>::get(&who, asset).unwrap_or_default();
      stake.active = stake
        .active
        .checked_add(&amount)
        .ok_or(Error::<T>::ArithmeticOverflow)?;
      T::AssetOps::transfer(&who, &Self::account_id(), asset, amount)?;
      Stakes::<T>::insert(&who, asset, stake);
      Self::deposit_event(Event::Bonded { who, asset, amount });
      Ok(())
    }

    /// Start unlocking `amount` of active stake. Restarts the unbonding period for everything
    /// already unbonding.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::unbond())]
    pub fn unbond(origin: OriginFor<T>, asset: T::AssetId, amount: T::Balance) -> DispatchResult {
      let who = ensure_signed(origin)?;
      ensure!(!amount.is_zero(), Error::<T>::AmountZero);
      let mut stake = Stakes::<T>::get(&who, asset).ok_or(Error::<T>::InsufficientStake)?;
      ensure!(stake.active >= amount, Error::<T>::InsufficientStake);
      stake.active = stake.active.saturating_sub(amount);
      stake.unbonding = stake
        .unbonding
        .checked_add(&amount)
        .ok_or(Error::<T>::ArithmeticOverflow)?;
      let unlock_at =
        frame_system::Pallet::<T>::block_number().saturating_add(T::UnbondingPeriod::get());
      stake.unlock_at = unlock_at;
      Stakes::<T>::insert(&who, asset, stake);
      Self::deposit_event(Event::Unbonding {
        who,
        asset,
        amount,
        unlock_at,
      });
      Ok(())
    }

    /// Pay out the caller's unlocked unbonding stake.
    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::withdraw_unbonded())]
    pub fn withdraw_unbonded(origin: OriginFor<T>, asset: T::AssetId) -> DispatchResult {
      let who = ensure_signed(origin)?;
      let mut stake = Stakes::<T>::get(&who, asset).ok_or(Error::<T>::NothingToWithdraw)?;
      ensure!(!stake.unbonding.is_zero(), Error::<T>::NothingToWithdraw);
      ensure!(
        frame_system::Pallet::<T>::block_number() >= stake.unlock_at,
        Error::<T>::StillLocked
      );
      let amount = core::mem::take(&mut stake.unbonding);
      T::AssetOps::transfer(&Self::account_id(), &who, asset, amount)?;
      Self::store(&who, asset, stake);
      Self::deposit_event(Event::Withdrawn { who, asset, amount });
      Ok(())
    }
  }

  impl<T: Config> Pallet<T> {
    pub fn account_id() -> T::AccountId {
      T::PalletId::get().into_account_truncating()
    }

    fn store(who: &T::AccountId, asset: T::AssetId, stake: StakeInfoOf<T>) {
      if stake.is_empty() {
        Stakes::<T>::remove(who, asset);
      } else {
        Stakes::<T>::insert(who, asset, stake);
      }
    }
  }

  impl<T: Config> pallet_request_settlement::StakeLedger<T::AccountId, T::AssetId, T::Balance>
    for Pallet<T>
  {
    fn seize(
      who: &T::AccountId,
      asset: T::AssetId,
      amount: T::Balance,
      beneficiary: &T::AccountId,
    ) -> Result<(), DispatchError> {
      let mut stake = Stakes::<T>::get(who, asset).ok_or(Error::<T>::InsufficientStake)?;
      ensure!(stake.total() >= amount, Error::<T>::InsufficientStake);

      let from_active = amount.min(stake.active);
      stake.active = stake.active.saturating_sub(from_active);
      stake.unbonding = stake
        .unbonding
        .saturating_sub(amount.saturating_sub(from_active));

      T::AssetOps::transfer(&Self::account_id(), beneficiary, asset, amount)?;
      Self::store(who, asset, stake);
      log::debug!(target: LOG_TARGET, "seized {amount:?} of {asset:?} from {who:?}");
      Self::deposit_event(Event::Seized {
        who: who.clone(),
        asset,
        amount,
        beneficiary: beneficiary.clone(),
      });
      Ok(())
    }

    fn staked(who: &T::AccountId, asset: T::AssetId) -> T::Balance {
      Stakes::<T>::get(who, asset)
        .map(|stake| stake.total())
        .unwrap_or_default()
    }
  }
}
