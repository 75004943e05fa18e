//! Benchmarking setup for pallet-restricted-token

use super::*;

#[allow(unused)]
use crate::Pallet as RestrictedToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

fn seeded_owner<T: Config>() -> T::AccountId {
    let owner: T::AccountId = whitelisted_caller();
    T::Ownership::set_owner(&owner);
    owner
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn mint() {
        let owner = seeded_owner::<T>();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;

        Balances::<T>::insert(&caller, 10_000_000);
        TotalSupply::<T>::put(10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn restrict_address() {
        let owner = seeded_owner::<T>();
        let target: T::AccountId = account("target", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), target.clone());

        assert!(Restricted::<T>::get(&target));
    }

    #[benchmark]
    fn unrestrict_address() {
        let owner = seeded_owner::<T>();
        let target: T::AccountId = account("target", 0, 0);
        Restricted::<T>::insert(&target, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), target.clone());

        assert!(!Restricted::<T>::contains_key(&target));
    }

    impl_benchmark_test_suite!(RestrictedToken, crate::mock::new_test_ext(), crate::mock::Test);
}
