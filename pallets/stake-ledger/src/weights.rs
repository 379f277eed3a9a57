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
  fn bond() -> Weight;
  fn unbond() -> Weight;
  fn withdraw_unbonded() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config + crate::Config> WeightInfo for SubstrateWeight<T> {
  fn bond() -> Weight {
    Weight::from_parts(30_000_000, 3600)
      .saturating_add(T::DbWeight::get().reads(3))
      .saturating_add(T::DbWeight::get().writes(3))
  }

  fn unbond() -> Weight {
    Weight::from_parts(15_000_000, 1600)
      .saturating_add(T::DbWeight::get().reads(1))
      .saturating_add(T::DbWeight::get().writes(1))
  }

  fn withdraw_unbonded() -> Weight {
    Weight::from_parts(30_000_000, 3600)
      .saturating_add(T::DbWeight::get().reads(3))
      .saturating_add(T::DbWeight::get().writes(3))
  }
}

impl WeightInfo for () {
  fn bond() -> Weight {
    Weight::from_parts(30_000_000, 3600)
      .saturating_add(RocksDbWeight::get().reads(3))
      .saturating_add(RocksDbWeight::get().writes(3))
  }
  fn unbond() -> Weight { Weight::from_parts(15_000_000, 1600) }
  fn withdraw_unbonded() -> Weight {
    Weight::from_parts(30_000_000, 3600)
      .saturating_add(RocksDbWeight::get().reads(3))
      .saturating_add(RocksDbWeight::get().writes(3))
  }
}
