use churn_core::auth::CredentialStore;

#[test]
fn demo_accounts_authenticate() {
    let store = CredentialStore::demo();
    assert!(store.authenticate("admin@example.com", "1234"));
    assert!(store.authenticate("manager@example.com", "manager"));
    assert_eq!(store.account_count(), 2);
}

#[test]
fn wrong_password_or_unknown_email_fails() {
    let store = CredentialStore::demo();
    assert!(!store.authenticate("admin@example.com", "manager"));
    assert!(!store.authenticate("admin@example.com", ""));
    assert!(!store.authenticate("nobody@example.com", "1234"));
    assert!(!store.authenticate("", ""));
}

/// Email and password are both compared case-sensitively.
#[test]
fn comparison_is_case_sensitive() {
    let store = CredentialStore::demo();
    assert!(!store.authenticate("Admin@example.com", "1234"));
    assert!(!store.authenticate("manager@example.com", "Manager"));
    assert!(!store.authenticate("admin@example.com ", "1234"));
}
