//! # Restricted Token Pallet
//!
//! A fungible token whose transfers are gated by an owner-managed restriction
//! list. A restricted account can neither send nor receive through
//! [`Pallet::transfer`]; everything else behaves like a plain balance ledger.
//!
//! Owner checks are delegated to [`Config::Ownership`], normally
//! `pallet_ownership::Pallet<Runtime>`.

#![cfg_attr(not(feature = "std"), no_std)]

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use pallet_ownership::OwnershipGuard;
use sp_std::prelude::*;

pub use pallet::*;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod migrations;
pub mod weights;

pub const LOG_TARGET: &str = "runtime::restricted-token";

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
        /// Source of truth for who may mint and edit the restriction list.
        type Ownership: OwnershipGuard<Self::AccountId>;
        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Total token supply
    #[pallet::storage]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Restricted accounts (cannot send or receive transfers).
    ///
    /// Only `true` is ever stored; unrestricting removes the entry.
    #[pallet::storage]
    pub type Restricted<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens transferred from one account to another
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// New tokens minted
        Minted { to: T::AccountId, amount: u128 },
        /// Account added to the restriction list
        AddressRestricted { account: T::AccountId },
        /// Account removed from the restriction list
        AddressUnrestricted { account: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller is not the current owner
        NotOwner,
        /// Sender is on the restriction list
        RestrictedSender,
        /// Recipient is on the restriction list
        RestrictedRecipient,
        InsufficientBalance,
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            Self::ensure_owner(origin)?;

            let new_supply =
                TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;
            let new_balance =
                Balances::<T>::get(&to).checked_add(amount).ok_or(Error::<T>::Overflow)?;

            TotalSupply::<T>::put(new_supply);
            Balances::<T>::insert(&to, new_balance);
            Self::deposit_event(Event::Minted { to, amount });
            Ok(())
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::do_transfer(sender, to, amount)
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::restrict_address())]
        pub fn restrict_address(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Restricted::<T>::insert(&account, true);
            log::debug!(target: LOG_TARGET, "restricted {account:?}");
            Self::deposit_event(Event::AddressRestricted { account });
            Ok(())
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::unrestrict_address())]
        pub fn unrestrict_address(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Restricted::<T>::remove(&account);
            log::debug!(target: LOG_TARGET, "unrestricted {account:?}");
            Self::deposit_event(Event::AddressUnrestricted { account });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Initial token mints (account, amount). Repeated accounts accumulate.
        pub initial_balances: Vec<(T::AccountId, u128)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let mut total: u128 = 0;
            for (account, amount) in &self.initial_balances {
                Balances::<T>::mutate(account, |balance| {
                    *balance = balance.checked_add(*amount).expect("Genesis balance overflow");
                });
                total = total.checked_add(*amount).expect("Genesis total supply overflow");
            }
            TotalSupply::<T>::put(total);
        }
    }
}

impl<T: Config> Pallet<T> {
    pub fn balance_of(who: &T::AccountId) -> u128 {
        Balances::<T>::get(who)
    }

    pub fn is_restricted(who: &T::AccountId) -> bool {
        Restricted::<T>::get(who)
    }

    pub fn total_supply() -> u128 {
        TotalSupply::<T>::get()
    }

    /// Move `amount` from `from` to `to` behind the restriction gate.
    ///
    /// Every check runs before the first write, in this order: sender
    /// restriction, recipient restriction, sender balance, recipient overflow.
    /// A self-transfer still needs a sufficient balance but leaves it unchanged.
    pub fn do_transfer(from: T::AccountId, to: T::AccountId, amount: u128) -> DispatchResult {
        ensure!(!Self::is_restricted(&from), Error::<T>::RestrictedSender);
        ensure!(!Self::is_restricted(&to), Error::<T>::RestrictedRecipient);

        let from_balance =
            Balances::<T>::get(&from).checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;

        if from != to {
            let to_balance =
                Balances::<T>::get(&to).checked_add(amount).ok_or(Error::<T>::Overflow)?;
            Balances::<T>::insert(&from, from_balance);
            Balances::<T>::insert(&to, to_balance);
        }

        Self::deposit_event(Event::Transferred { from, to, amount });
        Ok(())
    }

    fn ensure_owner(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        T::Ownership::require_owner(&who).map_err(|_| Error::<T>::NotOwner)?;
        Ok(who)
    }

    /// Balances must add up to the total supply and the restriction map must
    /// hold no `false` flags.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), DispatchError> {
        let sum = Balances::<T>::iter_values()
            .try_fold(0u128, |acc, balance| acc.checked_add(balance))
            .ok_or(DispatchError::Other("Balance sum overflows u128"))?;
        ensure!(
            sum == TotalSupply::<T>::get(),
            DispatchError::Other("Balance sum does not match total supply")
        );
        ensure!(
            Restricted::<T>::iter_values().all(|flag| flag),
            DispatchError::Other("Restriction map holds an unrestricted entry")
        );
        Ok(())
    }
}
