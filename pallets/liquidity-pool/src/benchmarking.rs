#![cfg(feature = "runtime-benchmarks")]

use super::*;
use frame::prelude::*;
use polkadot_sdk::frame_benchmarking::{account, v2::*};
use polkadot_sdk::frame_system::RawOrigin;

#[benchmarks]
mod benches {
  use super::*;

  fn funded_pool<T: Config>(amount: u32) -> T::AssetId {
    let provider: T::AccountId = account("provider", 0, 0);
    let asset = T::BenchmarkHelper::asset();
    T::BenchmarkHelper::ensure_funded(&provider, asset, T::Balance::from(amount.saturating_mul(2)))
      .expect("Failed to fund account");
    Pallet::<T>::provide_liquidity(
      RawOrigin::Signed(provider).into(),
      asset,
      T::Balance::from(amount),
    )
    .unwrap();
    asset
  }

  #[benchmark]
  fn provide_liquidity() {
    let caller: T::AccountId = whitelisted_caller();
    let asset = T::BenchmarkHelper::asset();
    T::BenchmarkHelper::ensure_funded(&caller, asset, T::Balance::from(2_000u32))
      .expect("Failed to fund account");

    #[extrinsic_call]
    _(RawOrigin::Signed(caller), asset, T::Balance::from(1_000u32));

    assert_eq!(Pooled::<T>::get(asset), T::Balance::from(1_000u32));
  }

  #[benchmark]
  fn reclaim_liquidity() -> Result<(), BenchmarkError> {
    let asset = funded_pool::<T>(1_000);
    let dest: T::AccountId = account("dest", 0, 0);
    let origin =
      T::AdminOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;

    #[extrinsic_call]
    _(origin as T::RuntimeOrigin, asset, T::Balance::from(400u32), dest);

    assert_eq!(Pooled::<T>::get(asset), T::Balance::from(600u32));
    Ok(())
  }

  #[benchmark]
  fn add_operator() -> Result<(), BenchmarkError> {
    let who: T::AccountId = account("operator", 0, 0);
    let origin =
      T::AdminOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;

    #[extrinsic_call]
    _(origin as T::RuntimeOrigin, who.clone());

    assert!(Operators::<T>::contains_key(&who));
    Ok(())
  }

  #[benchmark]
  fn remove_operator() -> Result<(), BenchmarkError> {
    let who: T::AccountId = account("operator", 0, 0);
    Operators::<T>::insert(&who, ());
    let origin =
      T::AdminOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;

    #[extrinsic_call]
    _(origin as T::RuntimeOrigin, who.clone());

    assert!(!Operators::<T>::contains_key(&who));
    Ok(())
  }

  impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
