#![cfg(feature = "runtime-benchmarks")]

use crate::*;
use alloc::{boxed::Box, vec::Vec};
use frame::prelude::*;
use polkadot_sdk::frame_benchmarking::{account, v2::*};
use polkadot_sdk::frame_system::RawOrigin;

#[benchmarks]
mod benches {
  use super::*;

  const OPERATOR_KEY: u32 = 0;
  const STAKER_KEY: u32 = 1;

  fn units<T: Config>(n: u32) -> T::Balance {
    T::Balance::from(n)
  }

  fn bounded_calls<T: Config>(target: &T::AccountId, count: u32) -> types::CallsOf<T> {
    let calls: Vec<SideEffectCall<T>> = (0..count)
      .map(|_| SideEffectCall {
        target: target.clone(),
        value: units::<T>(1_000_000),
        payload: BoundedVec::default(),
      })
      .collect();
    BoundedVec::try_from(calls).unwrap_or_default()
  }

  fn make_request<T: Config>(nonce: u128, fee: T::Balance) -> Request<T> {
    Request {
      asset: T::BenchmarkHelper::asset(),
      amount: units::<T>(1_000),
      fee,
      claim_chain_id: T::ChainId::get(),
      withdraw_chain_id: T::ChainId::get(),
      recipient: account("recipient", 0, 0),
      pre_calls: BoundedVec::default(),
      post_calls: BoundedVec::default(),
      valid_until: 0,
      valid_after: 0,
      nonce,
    }
  }

  fn sign<T: Config>(key: u32, request: &Request<T>) -> SignatureOf<T> {
    let hash = Pallet::<T>::request_hash(request);
    T::BenchmarkHelper::sign(key, hash.as_fixed_bytes())
  }

  /// Stakes enough for `count` claims and names a fee recipient.
  fn setup_claims<T: Config>(count: u32) -> T::AccountId {
    let staker = T::BenchmarkHelper::signer(STAKER_KEY);
    let per_claim = units::<T>(1_000).saturating_add(units::<T>(10));
    T::BenchmarkHelper::fund_stake(
      &staker,
      T::BenchmarkHelper::asset(),
      per_claim.saturating_mul(units::<T>(count)),
    )
    .expect("Failed to fund stake");
    Owner::<T>::put(account::<T::AccountId>("owner", 0, 0));
    staker
  }

  #[benchmark]
  fn withdraw(c: Linear<0, { T::MaxCalls::get() * 2 }>) {
    let caller: T::AccountId = whitelisted_caller();
    let target: T::AccountId = account("target", 0, 0);
    let operator = T::BenchmarkHelper::signer(OPERATOR_KEY);
    T::BenchmarkHelper::make_operator(&operator);
    T::BenchmarkHelper::fund_account(&caller, T::NativeAsset::get(), units::<T>(u32::MAX))
      .expect("Failed to fund caller");
    T::BenchmarkHelper::fund_pool(T::BenchmarkHelper::asset(), units::<T>(1_000_000))
      .expect("Failed to fund pool");

    let pre = c.min(T::MaxCalls::get());
    let mut request = make_request::<T>(0, units::<T>(10));
    request.pre_calls = bounded_calls::<T>(&target, pre);
    request.post_calls = bounded_calls::<T>(&target, c - pre);
    let signature = sign::<T>(OPERATOR_KEY, &request);
    let hash = Pallet::<T>::request_hash(&request);

    #[extrinsic_call]
    _(RawOrigin::Signed(caller), Box::new(request), signature);

    assert!(Pallet::<T>::is_withdrawn(hash));
  }

  #[benchmark]
  fn claim() {
    let caller: T::AccountId = whitelisted_caller();
    setup_claims::<T>(1);
    let request = make_request::<T>(0, units::<T>(10));
    let signature = sign::<T>(STAKER_KEY, &request);
    let hash = Pallet::<T>::request_hash(&request);

    #[extrinsic_call]
    _(RawOrigin::Signed(caller), Box::new(request), signature);

    assert!(Pallet::<T>::is_claimed(hash));
  }

  #[benchmark]
  fn claim_many(n: Linear<1, { T::MaxClaimBatch::get() }>) {
    let caller: T::AccountId = whitelisted_caller();
    setup_claims::<T>(n);
    let claims: Vec<(Request<T>, SignatureOf<T>)> = (0..n)
      .map(|nonce| {
        let request = make_request::<T>(nonce.into(), units::<T>(10));
        let signature = sign::<T>(STAKER_KEY, &request);
        (request, signature)
      })
      .collect();
    let last = Pallet::<T>::request_hash(&claims[claims.len() - 1].0);
    let claims = BoundedVec::try_from(claims).unwrap_or_default();

    #[extrinsic_call]
    _(RawOrigin::Signed(caller), claims);

    assert!(Pallet::<T>::is_claimed(last));
  }

  #[benchmark]
  fn set_owner() {
    let caller: T::AccountId = whitelisted_caller();
    Owner::<T>::put(&caller);
    let new_owner: T::AccountId = account("owner", 1, 0);

    #[extrinsic_call]
    _(RawOrigin::Signed(caller), new_owner.clone());

    assert_eq!(Owner::<T>::get(), Some(new_owner));
  }

  impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
