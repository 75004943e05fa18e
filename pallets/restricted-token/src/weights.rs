//! Weights for pallet-restricted-token.
//!
//! Reference values until benchmarks are run against production hardware.
//! Regenerate with `frame-omni-bencher` and the `runtime-benchmarks` feature.

#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::{traits::Get, weights::Weight};
use sp_std::marker::PhantomData;

pub trait WeightInfo {
    fn mint() -> Weight;
    fn transfer() -> Weight;
    fn restrict_address() -> Weight;
    fn unrestrict_address() -> Weight;
}

/// Weights scaled by the runtime's database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: `Ownership::Owner` (r:1 w:0)
    /// Storage: `RestrictedToken::TotalSupply` (r:1 w:1)
    /// Storage: `RestrictedToken::Balances` (r:1 w:1)
    fn mint() -> Weight {
        Weight::from_parts(14_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `RestrictedToken::Restricted` (r:2 w:0)
    /// Storage: `RestrictedToken::Balances` (r:2 w:2)
    fn transfer() -> Weight {
        Weight::from_parts(18_000_000, 6_200)
            .saturating_add(T::DbWeight::get().reads(4_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `Ownership::Owner` (r:1 w:0)
    /// Storage: `RestrictedToken::Restricted` (r:0 w:1)
    fn restrict_address() -> Weight {
        Weight::from_parts(10_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `Ownership::Owner` (r:1 w:0)
    /// Storage: `RestrictedToken::Restricted` (r:0 w:1)
    fn unrestrict_address() -> Weight {
        Weight::from_parts(10_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
}

impl WeightInfo for () {
    fn mint() -> Weight {
        Weight::from_parts(14_000_000, 3_600)
    }
    fn transfer() -> Weight {
        Weight::from_parts(18_000_000, 6_200)
    }
    fn restrict_address() -> Weight {
        Weight::from_parts(10_000_000, 1_500)
    }
    fn unrestrict_address() -> Weight {
        Weight::from_parts(10_000_000, 1_500)
    }
}
