//! Storage migrations for pallet-restricted-token.
//!
//! Each migration checks the on-chain storage version first, so re-running it
//! is harmless. Wire migrations into the runtime's `Executive` in order:
//!
//! ```ignore
//! pub type Executive = frame_executive::Executive<
//!     Runtime,
//!     Block,
//!     frame_system::ChainContext<Runtime>,
//!     Runtime,
//!     AllPalletsWithSystem,
//!     pallet_restricted_token::migrations::v1::MigrateToV1<Runtime>,
//! >;
//! ```

use frame_support::{pallet_prelude::*, traits::OnRuntimeUpgrade};
use sp_std::{marker::PhantomData, vec::Vec};

use crate::{Config, Pallet, Restricted, LOG_TARGET};

/// Version 0 → 1: drop explicit `false` flags from the restriction map.
///
/// Early deployments unrestricted accounts by writing `false`. Since v1 an
/// absent entry is the only representation of "not restricted".
pub mod v1 {
    use super::*;

    pub struct MigrateToV1<T>(PhantomData<T>);

    impl<T: Config> OnRuntimeUpgrade for MigrateToV1<T> {
        fn on_runtime_upgrade() -> Weight {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();

            if on_chain_version >= 1 {
                log::info!(
                    target: LOG_TARGET,
                    "Storage already at v{on_chain_version:?}, skipping v1 migration"
                );
                return T::DbWeight::get().reads(1);
            }

            let mut scanned: u64 = 0;
            let stale: Vec<T::AccountId> = Restricted::<T>::iter()
                .inspect(|_| scanned += 1)
                .filter_map(|(account, flag)| (!flag).then_some(account))
                .collect();

            for account in &stale {
                Restricted::<T>::remove(account);
            }

            StorageVersion::new(1).put::<Pallet<T>>();

            log::info!(
                target: LOG_TARGET,
                "Migrated to v1: pruned {} of {} restriction entries",
                stale.len(),
                scanned
            );

            // version read + map scan, then one removal per stale entry + version write
            T::DbWeight::get().reads_writes(scanned + 1, stale.len() as u64 + 1)
        }

        #[cfg(feature = "try-runtime")]
        fn pre_upgrade() -> Result<Vec<u8>, sp_runtime::TryRuntimeError> {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();
            let restricted = Restricted::<T>::iter_values().filter(|flag| *flag).count() as u32;
            log::info!(
                target: LOG_TARGET,
                "Pre-upgrade: version {on_chain_version:?}, {restricted} restricted accounts"
            );
            Ok(restricted.encode())
        }

        #[cfg(feature = "try-runtime")]
        fn post_upgrade(state: Vec<u8>) -> Result<(), sp_runtime::TryRuntimeError> {
            let restricted_before: u32 = Decode::decode(&mut &state[..])
                .map_err(|_| sp_runtime::TryRuntimeError::Other("Failed to decode pre-state"))?;

            ensure!(
                Pallet::<T>::on_chain_storage_version() >= 1,
                sp_runtime::TryRuntimeError::Other("Migration to v1 did not complete")
            );
            ensure!(
                Restricted::<T>::iter_values().all(|flag| flag),
                sp_runtime::TryRuntimeError::Other("Unrestricted entry survived migration")
            );
            ensure!(
                Restricted::<T>::iter().count() as u32 == restricted_before,
                sp_runtime::TryRuntimeError::Other("Restricted account count changed")
            );
            Ok(())
        }
    }
}
