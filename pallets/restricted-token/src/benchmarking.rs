//! Benchmarking setup for pallet-restricted-token

use super::*;

#[allow(unused)]
use crate::Pallet as RestrictedToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;

        // Setup: give the caller a balance to spend
        Balances::<T>::insert(&caller, 10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);
        let amount: u128 = 1_000_000;

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), amount);

        assert_eq!(Allowances::<T>::get(&caller, &spender), amount);
    }

    #[benchmark]
    fn transfer_from() {
        let owner: T::AccountId = account("owner", 0, 0);
        let spender: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;

        // Setup: fund the owner and grant the spender an allowance
        Balances::<T>::insert(&owner, 10_000_000);
        Allowances::<T>::insert(&owner, &spender, amount);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), owner.clone(), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
        assert_eq!(Allowances::<T>::get(&owner, &spender), 0);
    }

    #[benchmark]
    fn freeze() {
        let account: T::AccountId = whitelisted_caller();
        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, account.clone());

        assert_eq!(Frozen::<T>::get(&account), true);
    }

    #[benchmark]
    fn unfreeze() {
        let account: T::AccountId = whitelisted_caller();
        Frozen::<T>::insert(&account, true);
        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, account.clone());

        assert_eq!(Frozen::<T>::get(&account), false);
    }

    impl_benchmark_test_suite!(RestrictedToken, crate::mock::new_test_ext(), crate::mock::Test);
}
