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
  fn withdraw(c: u32) -> Weight;
  fn claim() -> Weight;
  fn claim_many(n: u32) -> Weight;
  fn set_owner() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config + crate::Config> WeightInfo for SubstrateWeight<T> {
  // Status, executing guard, operator registry, pool and both token accounts; plus a native
  // transfer per attached call.
  fn withdraw(c: u32) -> Weight {
    Weight::from_parts(45_000_000, 4200)
      .saturating_add(Weight::from_parts(18_000_000, 2600).saturating_mul(c.into()))
      .saturating_add(T::DbWeight::get().reads(6_u64.saturating_add((2 * c).into())))
      .saturating_add(T::DbWeight::get().writes(5_u64.saturating_add((2 * c).into())))
  }

  fn claim() -> Weight {
    Weight::from_parts(50_000_000, 4800)
      .saturating_add(T::DbWeight::get().reads(7))
      .saturating_add(T::DbWeight::get().writes(7))
  }

  fn claim_many(n: u32) -> Weight {
    Weight::from_parts(8_000_000, 600)
      .saturating_add(Self::claim().saturating_mul(n.into()))
  }

  fn set_owner() -> Weight {
    Weight::from_parts(10_000_000, 700)
      .saturating_add(T::DbWeight::get().reads(1))
      .saturating_add(T::DbWeight::get().writes(1))
  }
}

impl WeightInfo for () {
  fn withdraw(c: u32) -> Weight {
    Weight::from_parts(45_000_000, 4200)
      .saturating_add(Weight::from_parts(18_000_000, 2600).saturating_mul(c.into()))
      .saturating_add(RocksDbWeight::get().reads(6_u64.saturating_add((2 * c).into())))
      .saturating_add(RocksDbWeight::get().writes(5_u64.saturating_add((2 * c).into())))
  }
  fn claim() -> Weight {
    Weight::from_parts(50_000_000, 4800)
      .saturating_add(RocksDbWeight::get().reads(7))
      .saturating_add(RocksDbWeight::get().writes(7))
  }
  fn claim_many(n: u32) -> Weight {
    Weight::from_parts(8_000_000, 600).saturating_add(Self::claim().saturating_mul(n.into()))
  }
  fn set_owner() -> Weight { Weight::from_parts(10_000_000, 700) }
}
