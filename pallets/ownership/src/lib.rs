//! # Ownership Pallet
//!
//! Tracks the single privileged account (the owner) and exposes the
//! [`OwnershipGuard`] trait other pallets use to authorize owner-only calls.
//!
//! The owner is seeded at genesis and can only be reassigned by the current
//! owner through [`Pallet::transfer_ownership`].

#![cfg_attr(not(feature = "std"), no_std)]

use frame_support::{dispatch::DispatchResult, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};

pub use pallet::*;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;

pub const LOG_TARGET: &str = "runtime::ownership";

/// Returned by [`OwnershipGuard::require_owner`] when the caller is not the owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotOwner;

/// Owner lookup and authorization, as seen by dependent pallets.
pub trait OwnershipGuard<AccountId> {
    /// The current owner, if one was ever configured.
    fn current_owner() -> Option<AccountId>;

    /// Succeeds iff `who` is the current owner.
    fn require_owner(who: &AccountId) -> Result<(), NotOwner>;

    /// Seed an owner for benchmarks of dependent pallets.
    #[cfg(feature = "runtime-benchmarks")]
    fn set_owner(who: &AccountId);
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    pub struct Pallet<T>(_);

    /// The account allowed to perform owner-only operations
    #[pallet::storage]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Ownership moved to a new account
        OwnershipTransferred { previous_owner: T::AccountId, new_owner: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The caller is not the current owner
        NotOwner,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::transfer_ownership())]
        pub fn transfer_ownership(origin: OriginFor<T>, new_owner: T::AccountId) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::require_owner(&caller).map_err(|_| Error::<T>::NotOwner)?;

            Owner::<T>::put(&new_owner);
            log::debug!(target: LOG_TARGET, "ownership transferred to {new_owner:?}");
            Self::deposit_event(Event::OwnershipTransferred { previous_owner: caller, new_owner });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Initial owner. Without one, every owner check fails until a runtime
        /// upgrade seeds the storage.
        pub owner: Option<T::AccountId>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            if let Some(ref owner) = self.owner {
                Owner::<T>::put(owner);
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    pub fn current_owner() -> Option<T::AccountId> {
        Owner::<T>::get()
    }

    pub fn require_owner(who: &T::AccountId) -> Result<(), NotOwner> {
        match Owner::<T>::get() {
            Some(ref owner) if owner == who => Ok(()),
            _ => Err(NotOwner),
        }
    }
}

impl<T: Config> OwnershipGuard<T::AccountId> for Pallet<T> {
    fn current_owner() -> Option<T::AccountId> {
        Pallet::<T>::current_owner()
    }

    fn require_owner(who: &T::AccountId) -> Result<(), NotOwner> {
        Pallet::<T>::require_owner(who)
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn set_owner(who: &T::AccountId) {
        Owner::<T>::put(who);
    }
}
