#![cfg_attr(not(feature = "std"), no_std)]
// Allow deprecated weight constants until benchmark-generated weights land
#![allow(deprecated)]

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*, traits::EnsureOrigin};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::DispatchError;
use sp_std::prelude::*;

pub use pallet::*;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod migrations;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

/// Restriction code meaning "transfer allowed".
pub const SUCCESS_CODE: u8 = 0;

/// Message registered for [`SUCCESS_CODE`].
pub const SUCCESS_MESSAGE: &str = "SUCCESS";

/// Restriction code for transfers whose destination is the reserved account.
pub const ZERO_ADDRESS_RESTRICTION_CODE: u8 = 1;

/// Message registered for [`ZERO_ADDRESS_RESTRICTION_CODE`].
pub const ZERO_ADDRESS_RESTRICTION_MESSAGE: &str = "ILLEGAL_TRANSFER_TO_ZERO_ADDRESS";

/// Restriction code for transfers out of a frozen account.
pub const FROZEN_ACCOUNT_RESTRICTION_CODE: u8 = 2;

/// Message registered for [`FROZEN_ACCOUNT_RESTRICTION_CODE`].
pub const FROZEN_ACCOUNT_RESTRICTION_MESSAGE: &str = "ILLEGAL_TRANSFER_FROM_FROZEN_ACCOUNT";

/// One entry of the transfer restriction registry.
///
/// The registry is evaluated in order; the first rule whose predicate matches
/// decides the restriction code for a prospective transfer. Predicates read
/// only their arguments and pallet storage; they never write.
pub struct RestrictionRule<T: Config> {
    /// Stable non-zero code identifying the rule. Codes are never reused.
    pub code: u8,
    /// Fixed human-readable message registered for `code`.
    pub message: &'static str,
    /// Predicate over (from, to, amount).
    pub applies: fn(&T::AccountId, &T::AccountId, u128) -> bool,
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
        /// Origin allowed to freeze and unfreeze accounts.
        type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;
        /// Reserved account standing in for the all-zero address: never a
        /// valid transfer destination or allowance spender.
        type ReservedAccount: Get<Self::AccountId>;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "Restricted Equity Token")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "RET")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    /// Token decimals (e.g., 6 for USDC-style, 18 for ETH-style)
    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Total token supply, fixed at genesis
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Remaining amount a spender may move out of an owner's balance.
    /// Keyed by (owner, spender); set by `approve`, consumed by `transfer_from`.
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    /// Frozen accounts (cannot send transfers)
    #[pallet::storage]
    #[pallet::getter(fn is_frozen)]
    pub type Frozen<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens transferred from one account to another
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// Allowance set (overwritten) for a spender on an owner's balance
        Approved { owner: T::AccountId, spender: T::AccountId, amount: u128 },
        /// Account frozen (cannot send transfers)
        Frozen { account: T::AccountId },
        /// Account unfrozen
        Unfrozen { account: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// A restriction rule disallows the transfer; the payload is the
        /// restriction code, resolvable via `message_for_transfer_restriction`.
        TransferRestricted(u8),
        InsufficientBalance,
        InsufficientAllowance,
        /// The reserved account cannot be granted an allowance.
        InvalidSpender,
        /// No restriction rule is registered under this code.
        UnknownRestrictionCode,
        Overflow,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(10_000)]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let from = ensure_signed(origin)?;
            Self::do_transfer(&from, &to, amount)?;
            Self::deposit_event(Event::Transferred { from, to, amount });
            Ok(())
        }

        #[pallet::call_index(1)]
        #[pallet::weight(10_000)]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: u128) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            ensure!(spender != T::ReservedAccount::get(), Error::<T>::InvalidSpender);

            Allowances::<T>::insert(&owner, &spender, amount);
            Self::deposit_event(Event::Approved { owner, spender, amount });
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(10_000)]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;

            // Checks run restriction -> allowance -> balance, all before any write.
            let code = Self::detect_transfer_restriction(&from, &to, amount);
            ensure!(code == SUCCESS_CODE, Error::<T>::TransferRestricted(code));

            let remaining = Allowances::<T>::get(&from, &spender)
                .checked_sub(amount)
                .ok_or(Error::<T>::InsufficientAllowance)?;

            Self::move_balance(&from, &to, amount)?;
            Allowances::<T>::insert(&from, &spender, remaining);
            Self::deposit_event(Event::Transferred { from, to, amount });
            Ok(())
        }

        #[pallet::call_index(3)]
        #[pallet::weight(10_000)]
        pub fn freeze(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            Frozen::<T>::insert(&account, true);
            Self::deposit_event(Event::Frozen { account });
            Ok(())
        }

        #[pallet::call_index(4)]
        #[pallet::weight(10_000)]
        pub fn unfreeze(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            Frozen::<T>::remove(&account);
            Self::deposit_event(Event::Unfrozen { account });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Account receiving the entire initial supply
        pub initial_holder: Option<T::AccountId>,
        /// Fixed total supply, minted in full to `initial_holder`
        pub total_supply: u128,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals
        pub decimals: u8,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);

            // Mint the full supply to the initial holder
            if self.total_supply > 0 {
                let holder = self
                    .initial_holder
                    .clone()
                    .expect("Initial holder required for a non-zero total supply");
                assert!(
                    holder != T::ReservedAccount::get(),
                    "Initial holder must not be the reserved account"
                );
                Balances::<T>::insert(&holder, self.total_supply);
            }
            TotalSupply::<T>::put(self.total_supply);
        }
    }
}

impl<T: Config> Pallet<T> {
    /// The transfer restriction registry, in evaluation order.
    ///
    /// The reserved-destination rule always comes first; additional rules are
    /// appended with fresh codes so existing codes keep their meaning.
    fn restriction_rules() -> [RestrictionRule<T>; 2] {
        [
            RestrictionRule {
                code: ZERO_ADDRESS_RESTRICTION_CODE,
                message: ZERO_ADDRESS_RESTRICTION_MESSAGE,
                applies: |_from, to, _amount| *to == T::ReservedAccount::get(),
            },
            RestrictionRule {
                code: FROZEN_ACCOUNT_RESTRICTION_CODE,
                message: FROZEN_ACCOUNT_RESTRICTION_MESSAGE,
                applies: |from, _to, _amount| Frozen::<T>::get(from),
            },
        ]
    }

    /// Classify a prospective transfer against the restriction registry.
    ///
    /// Returns the code of the first matching rule, or [`SUCCESS_CODE`] if no
    /// rule matches. Side-effect-free; both `transfer` and `transfer_from`
    /// consult this exact function before mutating anything, so a transfer
    /// fails with `TransferRestricted` if and only if this returns non-zero.
    pub fn detect_transfer_restriction(
        from: &T::AccountId,
        to: &T::AccountId,
        amount: u128,
    ) -> u8 {
        Self::restriction_rules()
            .iter()
            .find(|rule| (rule.applies)(from, to, amount))
            .map_or(SUCCESS_CODE, |rule| rule.code)
    }

    /// Resolve a restriction code to its registered message.
    pub fn message_for_transfer_restriction(code: u8) -> Result<&'static str, DispatchError> {
        if code == SUCCESS_CODE {
            return Ok(SUCCESS_MESSAGE);
        }
        Self::restriction_rules()
            .iter()
            .find(|rule| rule.code == code)
            .map(|rule| rule.message)
            .ok_or_else(|| Error::<T>::UnknownRestrictionCode.into())
    }

    fn do_transfer(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        let code = Self::detect_transfer_restriction(from, to, amount);
        ensure!(code == SUCCESS_CODE, Error::<T>::TransferRestricted(code));
        Self::move_balance(from, to, amount)
    }

    /// Move `amount` between two balance entries. Both entries are read and
    /// checked before either is written, so a failure changes nothing.
    fn move_balance(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        let debited = Balances::<T>::get(from)
            .checked_sub(amount)
            .ok_or(Error::<T>::InsufficientBalance)?;

        if from == to {
            // Debit and credit cancel out; nothing to write.
            return Ok(());
        }

        let credited = Balances::<T>::get(to)
            .checked_add(amount)
            .ok_or(Error::<T>::Overflow)?;

        Balances::<T>::insert(from, debited);
        Balances::<T>::insert(to, credited);
        Ok(())
    }
}
