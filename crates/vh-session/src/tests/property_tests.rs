use crate::tests::{memory_slot, restored_store};

use proptest::prelude::*;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

// =========================================================================
// Property-Based Tests - Login
// =========================================================================

proptest! {
    #[test]
    fn given_non_empty_credentials_when_login_then_email_and_local_part_kept(
        local in "[a-z0-9._]{1,12}",
        domain in "[a-z]{1,10}\\.[a-z]{2,3}",
        password in "\\PC{1,20}",
    ) {
        let email = format!("{local}@{domain}");
        let store = restored_store(memory_slot());

        let identity = runtime().block_on(store.login(&email, &password)).unwrap();

        prop_assert_eq!(&identity.email, &email);
        prop_assert_eq!(&identity.name, &local);
        prop_assert_eq!(store.current_identity(), Some(identity));
    }

    #[test]
    fn given_empty_password_when_login_then_always_rejected(email in "[a-z]{1,8}@[a-z]{1,8}\\.com") {
        let store = restored_store(memory_slot());

        let result = runtime().block_on(store.login(&email, ""));

        prop_assert!(result.is_err());
        prop_assert!(store.current_identity().is_none());
    }

    #[test]
    fn given_login_when_restored_in_fresh_store_then_identity_round_trips(
        email in "[a-z]{1,8}@[a-z]{1,8}\\.org",
    ) {
        let slot = memory_slot();
        let first = restored_store(slot.clone());
        let identity = runtime().block_on(first.login(&email, "pw")).unwrap();

        let second = restored_store(slot);

        prop_assert_eq!(second.current_identity(), Some(identity));
    }
}
