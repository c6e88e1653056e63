//! In-memory user repository tests

use edt_domain::entities::{SensitiveEntity, User};
use edt_domain::error::Error;
use edt_domain::repositories::UserRepository;
use edt_infrastructure::adapters::InMemoryUserRepository;
use uuid::Uuid;

const PASSWORD_HASH: &str = "$2b$04$abcdefghijklmnopqrstuuJ1lq0Hq7o1nN8kX2sR5eVbW3yZ4aBcD";

fn email_hash(seed: char) -> String {
    seed.to_string().repeat(64)
}

fn user(name: &str, seed: char) -> User {
    let mut user = User::new(name, &email_hash(seed), PASSWORD_HASH).unwrap();
    user.set_encrypted_data(vec![0xA5; 32]).unwrap();
    user
}

#[tokio::test]
async fn test_insert_and_find() {
    let repo = InMemoryUserRepository::new();
    let mut alice = user("alice", 'a');
    alice.set_encrypted_data(vec![1u8; 32]).unwrap();
    repo.insert(&alice).await.unwrap();

    let by_id = repo.find_by_id(alice.id()).await.unwrap().unwrap();
    assert_eq!(by_id.user_name(), "alice");
    assert_eq!(by_id.encrypted_data(), &[1u8; 32][..]);
    assert_eq!(by_id.to_record(), alice.to_record());

    let by_hash = repo.find_by_email_hash(&email_hash('a')).await.unwrap().unwrap();
    assert_eq!(by_hash.id(), alice.id());

    assert!(repo.find_by_id(Uuid::now_v7()).await.unwrap().is_none());
    assert!(repo.find_by_email_hash(&email_hash('z')).await.unwrap().is_none());
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_exists_queries() {
    let repo = InMemoryUserRepository::new();
    assert!(repo.is_empty().await);
    repo.insert(&user("alice", 'a')).await.unwrap();

    assert!(repo.exists_by_email_hash(&email_hash('a')).await.unwrap());
    assert!(!repo.exists_by_email_hash(&email_hash('b')).await.unwrap());
    assert!(repo.exists_by_user_name("alice").await.unwrap());
    assert!(!repo.exists_by_user_name("bob").await.unwrap());
}

#[tokio::test]
async fn test_insert_rejects_duplicates() {
    let repo = InMemoryUserRepository::new();
    let alice = user("alice", 'a');
    repo.insert(&alice).await.unwrap();

    let cases = [
        ("same id", alice.clone()),
        ("same email hash", user("alice2", 'a')),
        ("same user name", user("alice", 'b')),
    ];
    for (label, candidate) in cases {
        assert!(
            matches!(repo.insert(&candidate).await, Err(Error::AlreadyExists { .. })),
            "{label} should be rejected"
        );
    }
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_update_moves_indexes() {
    let repo = InMemoryUserRepository::new();
    let mut alice = user("alice", 'a');
    repo.insert(&alice).await.unwrap();

    alice.update_user_name("alicia").unwrap();
    alice.update_email_hash(&email_hash('c')).unwrap();
    repo.update(&alice).await.unwrap();

    assert!(!repo.exists_by_user_name("alice").await.unwrap());
    assert!(repo.exists_by_user_name("alicia").await.unwrap());
    assert!(!repo.exists_by_email_hash(&email_hash('a')).await.unwrap());
    let stored = repo.record(alice.id()).await.unwrap();
    assert_eq!(stored.email_hash, email_hash('c'));
    assert_eq!(stored.updated_at, alice.to_record().updated_at);
    assert_eq!(stored.version, 1);
}

#[tokio::test]
async fn test_update_conflicts_and_missing() {
    let repo = InMemoryUserRepository::new();
    repo.insert(&user("alice", 'a')).await.unwrap();
    let mut bob = user("bob", 'b');

    assert!(matches!(repo.update(&bob).await, Err(Error::NotFound { .. })));

    repo.insert(&bob).await.unwrap();
    bob.update_user_name("alice").unwrap();
    assert!(matches!(repo.update(&bob).await, Err(Error::AlreadyExists { .. })));
    assert!(repo.exists_by_user_name("bob").await.unwrap());
}

#[tokio::test]
async fn test_stored_record_holds_no_plaintext() {
    use edt_domain::value_objects::UserSensitive;

    let repo = InMemoryUserRepository::new();
    let mut alice = user("alice", 'a');
    alice.set_encrypted_data(vec![5u8; 48]).unwrap();
    alice
        .set_sensitive_data(UserSensitive {
            first_name: "Alice".to_string(),
            middle_name: String::new(),
            last_name: "Liddell".to_string(),
            email: "alice@example.com".to_string(),
        })
        .unwrap();
    repo.insert(&alice).await.unwrap();

    let reloaded = repo.find_by_id(alice.id()).await.unwrap().unwrap();
    assert!(reloaded.sensitive_data().is_none());
    let json = serde_json::to_string(&repo.record(alice.id()).await.unwrap()).unwrap();
    assert!(!json.contains("Liddell"));
}

#[tokio::test]
async fn test_stale_update_is_rejected() {
    let repo = InMemoryUserRepository::new();
    let alice = user("alice", 'a');
    repo.insert(&alice).await.unwrap();

    let mut first = repo.find_by_id(alice.id()).await.unwrap().unwrap();
    let mut second = repo.find_by_id(alice.id()).await.unwrap().unwrap();

    first.update_password_hash("$2b$04$new-password-hash").unwrap();
    repo.update(&first).await.unwrap();

    second.update_user_name("alicia").unwrap();
    assert!(matches!(repo.update(&second).await, Err(Error::Conflict { .. })));

    let stored = repo.record(alice.id()).await.unwrap();
    assert_eq!(stored.password_hash, "$2b$04$new-password-hash");
    assert_eq!(stored.user_name, "alice");
    assert_eq!(stored.version, 1);

    let reloaded = repo.find_by_id(alice.id()).await.unwrap().unwrap();
    assert_eq!(reloaded.version(), 1);
    assert_eq!(reloaded.password_hash(), "$2b$04$new-password-hash");
}

#[tokio::test]
async fn test_user_without_ciphertext_is_not_persisted() {
    let repo = InMemoryUserRepository::new();
    let bare = User::new("carol", &email_hash('c'), PASSWORD_HASH).unwrap();
    assert!(matches!(repo.insert(&bare).await, Err(Error::InvalidState { .. })));
    assert!(repo.is_empty().await);

    let alice = user("alice", 'a');
    repo.insert(&alice).await.unwrap();
    let before = repo.record(alice.id()).await.unwrap();

    let mut scrubbed = repo.find_by_id(alice.id()).await.unwrap().unwrap();
    scrubbed.clear_encrypted_data();
    assert!(matches!(repo.update(&scrubbed).await, Err(Error::InvalidState { .. })));
    assert_eq!(repo.record(alice.id()).await.unwrap(), before);
}
