//! Liquidity Pool Pallet
//!
//! Per-asset pool that the settlement pallet fronts withdrawals from and pays claims back into,
//! plus the registry of operators whose signatures authorize withdrawals.
//!
//! Pooled funds sit in the pallet account. The pallet tracks the pooled amount per asset itself,
//! so tokens sent to the account outside of [`Pallet::provide_liquidity`] are not lent out.

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
  use alloc::vec::Vec;
  use frame::deps::{
    frame_support::PalletId,
    sp_runtime::traits::{AccountIdConversion, CheckedAdd, Zero},
  };
  use frame::prelude::*;
  use pallet_request_settlement::AssetOps;

  const LOG_TARGET: &str = "runtime::liquidity-pool";

  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    type AssetId: Parameter + Member + Copy + MaxEncodedLen;

    type Balance: Parameter + Member + AtLeast32BitUnsigned + Default + Copy + MaxEncodedLen;

    type AssetOps: AssetOps<Self::AccountId, Self::AssetId, Self::Balance>;

    /// Derives the account pooled funds sit in
    #[pallet::constant]
    type PalletId: Get<PalletId>;

    /// Origin that manages operators and reclaims liquidity
    type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;

    type WeightInfo: WeightInfo;

    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper: crate::BenchmarkHelper<Self::AssetId, Self::AccountId, Self::Balance>;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(_);

  /// Amount available to front withdrawals, per asset
  #[pallet::storage]
  #[pallet::getter(fn pooled_amount)]
  pub type Pooled<T: Config> = StorageMap<_, Blake2_128Concat, T::AssetId, T::Balance, ValueQuery>;

  /// Identities allowed to sign withdrawals
  #[pallet::storage]
  pub type Operators<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, (), OptionQuery>;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// A user funded the pool
    LiquidityProvided {
      who: T::AccountId,
      asset: T::AssetId,
      amount: T::Balance,
    },
    /// Governance took funds out of the pool
    LiquidityReclaimed {
      asset: T::AssetId,
      amount: T::Balance,
      dest: T::AccountId,
    },
    /// A settled claim repaid the pool
    LiquidityAdded {
      asset: T::AssetId,
      amount: T::Balance,
      from: T::AccountId,
    },
    /// A withdrawal was fronted from the pool
    LiquidityRemoved {
      asset: T::AssetId,
      amount: T::Balance,
      to: T::AccountId,
    },
    OperatorAdded {
      who: T::AccountId,
    },
    OperatorRemoved {
      who: T::AccountId,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    AmountZero,
    /// Pool holds less than requested
    InsufficientLiquidity,
    AlreadyOperator,
    NotOperator,
    ArithmeticOverflow,
  }

  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    pub operators: Vec<T::AccountId>,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      for who in &self.operators {
        Operators::<T>::insert(who, ());
      }
      frame_system::Pallet::<T>::inc_providers(&Pallet::<T>::account_id());
    }
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Move `amount` of `asset` from the caller into the pool.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::provide_liquidity())]
    pub fn provide_liquidity(
      origin: OriginFor<T>,
      asset: T::AssetId,
      amount: T::Balance,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      ensure!(!amount.is_zero(), Error::<T>::AmountZero);
      Self::deposit(asset, amount, &who)?;
      Self::deposit_event(Event::LiquidityProvided { who, asset, amount });
      Ok(())
    }

    /// Pay `amount` of pooled `asset` out to `dest`.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::reclaim_liquidity())]
    pub fn reclaim_liquidity(
      origin: OriginFor<T>,
      asset: T::AssetId,
      amount: T::Balance,
      dest: T::AccountId,
    ) -> DispatchResult {
      T::AdminOrigin::ensure_origin(origin)?;
      ensure!(!amount.is_zero(), Error::<T>::AmountZero);
      Self::pay_out(asset, amount, &dest)?;
      Self::deposit_event(Event::LiquidityReclaimed {
        asset,
        amount,
        dest,
      });
      Ok(())
    }

    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::add_operator())]
    pub fn add_operator(origin: OriginFor<T>, who: T::AccountId) -> DispatchResult {
      T::AdminOrigin::ensure_origin(origin)?;
      ensure!(
        !Operators::<T>::contains_key(&who),
        Error::<T>::AlreadyOperator
      );
      Operators::<T>::insert(&who, ());
      Self::deposit_event(Event::OperatorAdded { who });
      Ok(())
    }

    #[pallet::call_index(3)]
    #[pallet::weight(T::WeightInfo::remove_operator())]
    pub fn remove_operator(origin: OriginFor<T>, who: T::AccountId) -> DispatchResult {
      T::AdminOrigin::ensure_origin(origin)?;
      ensure!(Operators::<T>::contains_key(&who), Error::<T>::NotOperator);
      Operators::<T>::remove(&who);
      Self::deposit_event(Event::OperatorRemoved { who });
      Ok(())
    }
  }

  impl<T: Config> Pallet<T> {
    pub fn account_id() -> T::AccountId {
      T::PalletId::get().into_account_truncating()
    }

    pub fn is_operator(who: &T::AccountId) -> bool {
      Operators::<T>::contains_key(who)
    }

    fn deposit(asset: T::AssetId, amount: T::Balance, from: &T::AccountId) -> DispatchResult {
      let pooled = Pooled::<T>::get(asset)
        .checked_add(&amount)
        .ok_or(Error::<T>::ArithmeticOverflow)?;
      T::AssetOps::transfer(from, &Self::account_id(), asset, amount)?;
      Pooled::<T>::insert(asset, pooled);
      Ok(())
    }

    fn pay_out(asset: T::AssetId, amount: T::Balance, to: &T::AccountId) -> DispatchResult {
      let pooled = Pooled::<T>::get(asset);
      ensure!(pooled >= amount, Error::<T>::InsufficientLiquidity);
      T::AssetOps::transfer(&Self::account_id(), to, asset, amount)?;
      Pooled::<T>::insert(asset, pooled.saturating_sub(amount));
      Ok(())
    }
  }

  impl<T: Config> pallet_request_settlement::LiquidityPool<T::AccountId, T::AssetId, T::Balance>
    for Pallet<T>
  {
    fn add(asset: T::AssetId, amount: T::Balance, from: &T::AccountId) -> DispatchResult {
      Self::deposit(asset, amount, from)?;
      Self::deposit_event(Event::LiquidityAdded {
        asset,
        amount,
        from: from.clone(),
      });
      Ok(())
    }

    fn remove(asset: T::AssetId, amount: T::Balance, to: &T::AccountId) -> DispatchResult {
      Self::pay_out(asset, amount, to).inspect_err(|_| {
        log::debug!(
          target: LOG_TARGET,
          "cannot front {amount:?} of {asset:?}, pool holds {:?}",
          Pooled::<T>::get(asset),
        );
      })?;
      Self::deposit_event(Event::LiquidityRemoved {
        asset,
        amount,
        to: to.clone(),
      });
      Ok(())
    }

    fn pooled(asset: T::AssetId) -> T::Balance {
      Pooled::<T>::get(asset)
    }
  }

  impl<T: Config> pallet_request_settlement::OperatorRegistry<T::AccountId> for Pallet<T> {
    fn is_authorized_operator(who: &T::AccountId) -> bool {
      Self::is_operator(who)
    }
  }
}
