#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use core::marker::PhantomData;
use polkadot_sdk::frame_support::{
  traits::Get,
  weights::{constants::RocksDbWeight, Weight},
};

pub trait WeightInfo {
  fn provide_liquidity() -> Weight;
  fn reclaim_liquidity() -> Weight;
  fn add_operator() -> Weight;
  fn remove_operator() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config + crate::Config> WeightInfo for SubstrateWeight<T> {
  fn provide_liquidity() -> Weight {
    Weight::from_parts(30_000_000, 3600)
      .saturating_add(T::DbWeight::get().reads(3))
      .saturating_add(T::DbWeight::get().writes(3))
  }

  fn reclaim_liquidity() -> Weight {
    Weight::from_parts(30_000_000, 3600)
      .saturating_add(T::DbWeight::get().reads(3))
      .saturating_add(T::DbWeight::get().writes(3))
  }

  fn add_operator() -> Weight {
    Weight::from_parts(10_000_000, 700)
      .saturating_add(T::DbWeight::get().reads(1))
      .saturating_add(T::DbWeight::get().writes(1))
  }

  fn remove_operator() -> Weight {
    Weight::from_parts(10_000_000, 700)
      .saturating_add(T::DbWeight::get().reads(1))
      .saturating_add(T::DbWeight::get().writes(1))
  }
}

impl WeightInfo for () {
  fn provide_liquidity() -> Weight { Weight::from_parts(30_000_000, 3600) }
  fn reclaim_liquidity() -> Weight { Weight::from_parts(30_000_000, 3600) }
  fn add_operator() -> Weight { Weight::from_parts(10_000_000, 700) }
  fn remove_operator() -> Weight { Weight::from_parts(10_000_000, 700) }
}
