#![cfg(feature = "runtime-benchmarks")]

use super::*;
use frame::prelude::*;
use polkadot_sdk::frame_benchmarking::v2::*;
use polkadot_sdk::frame_system::RawOrigin;

#[benchmarks]
mod benches {
  use super::*;

  fn bonded<T: Config>(who: &T::AccountId, amount: u32) -> T::AssetId {
    let asset = T::BenchmarkHelper::asset();
    T::BenchmarkHelper::ensure_funded(who, asset, T::Balance::from(amount.saturating_mul(2)))
      .expect("Failed to fund account");
    Pallet::<T>::bond(
      RawOrigin::Signed(who.clone()).into(),
      asset,
      T::Balance::from(amount),
    )
    .unwrap();
    asset
  }

  #[benchmark]
  fn bond() {
    let caller: T::AccountId = whitelisted_caller();
    let asset = T::BenchmarkHelper::asset();
    T::BenchmarkHelper::ensure_funded(&caller, asset, T::Balance::from(2_000u32))
      .expect("Failed to fund account");

    #[extrinsic_call]
    _(RawOrigin::Signed(caller.clone()), asset, T::Balance::from(1_000u32));

    assert!(Stakes::<T>::contains_key(&caller, asset));
  }

  #[benchmark]
  fn unbond() {
    let caller: T::AccountId = whitelisted_caller();
    let asset = bonded::<T>(&caller, 1_000);

    #[extrinsic_call]
    _(RawOrigin::Signed(caller.clone()), asset, T::Balance::from(500u32));

    assert_eq!(
      Stakes::<T>::get(&caller, asset).map(|s| s.unbonding),
      Some(T::Balance::from(500u32))
    );
  }

  #[benchmark]
  fn withdraw_unbonded() {
    let caller: T::AccountId = whitelisted_caller();
    let asset = bonded::<T>(&caller, 1_000);
    Pallet::<T>::unbond(
      RawOrigin::Signed(caller.clone()).into(),
      asset,
      T::Balance::from(500u32),
    )
    .unwrap();
    let unlock = frame_system::Pallet::<T>::block_number().saturating_add(T::UnbondingPeriod::get());
    frame_system::Pallet::<T>::set_block_number(unlock);

    #[extrinsic_call]
    _(RawOrigin::Signed(caller.clone()), asset);

    assert_eq!(
      Stakes::<T>::get(&caller, asset).map(|s| s.unbonding),
      Some(T::Balance::from(0u32))
    );
  }

  impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
