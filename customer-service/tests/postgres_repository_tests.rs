mod common;

use chrono::DateTime;
use chrono::Duration;
use chrono::TimeZone;
use chrono::Utc;
use common::TestDb;
use customer_service::domain::customer::errors::CustomerError;
use customer_service::domain::customer::models::Customer;
use customer_service::domain::customer::models::CustomerDraft;
use customer_service::domain::customer::models::CustomerId;
use customer_service::domain::customer::models::CustomerName;
use customer_service::domain::customer::models::Phone;
use customer_service::domain::customer::ports::CustomerRepository;
use customer_service::domain::security::errors::TokenStoreError;
use customer_service::domain::security::models::Token;
use customer_service::domain::security::models::TokenRecord;
use customer_service::domain::security::ports::CredentialRepository;
use customer_service::domain::security::ports::TokenStore;
use customer_service::outbound::repositories::PostgresCustomerRepository;
use customer_service::outbound::repositories::PostgresTokenStore;

fn draft(name: &str, phone: &str, password_hash: Option<&str>) -> CustomerDraft {
    CustomerDraft {
        name: CustomerName::new(name.to_string()).unwrap(),
        phone: Phone::new(phone.to_string()).unwrap(),
        password_hash: password_hash.map(str::to_string),
    }
}

fn token_record(token: &str, customer_id: CustomerId, expires_at: DateTime<Utc>) -> TokenRecord {
    TokenRecord {
        token: Token::new(token.to_string()),
        customer_id,
        expires_at,
    }
}

/// Whole-second timestamp, so values survive the microsecond column unchanged.
fn now_seconds() -> DateTime<Utc> {
    Utc.timestamp_opt(Utc::now().timestamp(), 0).unwrap()
}

async fn create_alice(customers: &PostgresCustomerRepository) -> Customer {
    customers
        .create(draft("Alice", "alice", Some("$argon2id$first")))
        .await
        .expect("Failed to create customer")
}

#[tokio::test]
async fn test_create_and_find_customer() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let customers = PostgresCustomerRepository::new(db.pool.clone());

    let alice = create_alice(&customers).await;

    assert!(alice.id.value() > 0);
    assert!(alice.active);
    let found = customers.find_by_id(alice.id).await.unwrap();
    assert_eq!(found, Some(alice));
    assert_eq!(customers.find_by_id(CustomerId(9999)).await.unwrap(), None);
}

#[tokio::test]
async fn test_duplicate_phone_maps_to_phone_already_exists() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let customers = PostgresCustomerRepository::new(db.pool.clone());
    create_alice(&customers).await;

    let result = customers.create(draft("Other", "alice", None)).await;
    assert!(matches!(result, Err(CustomerError::PhoneAlreadyExists(phone)) if phone == "alice"));

    let bob = customers
        .create(draft("Bob", "bob", None))
        .await
        .expect("Failed to create customer");
    let result = customers.update(bob.id, draft("Bob", "alice", None)).await;
    assert!(matches!(result, Err(CustomerError::PhoneAlreadyExists(_))));
}

#[tokio::test]
async fn test_credential_lookup_skips_customers_without_password() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let customers = PostgresCustomerRepository::new(db.pool.clone());
    let alice = create_alice(&customers).await;
    customers
        .create(draft("Carol", "carol", None))
        .await
        .expect("Failed to create customer");

    let credential = customers
        .find_credential_by_login("alice")
        .await
        .unwrap()
        .expect("Missing credential");
    assert_eq!(credential.customer_id, alice.id);
    assert_eq!(credential.login, "alice");
    assert_eq!(credential.password_hash, "$argon2id$first");

    assert!(customers
        .find_credential_by_login("carol")
        .await
        .unwrap()
        .is_none());
    assert!(customers
        .find_credential_by_login("Alice")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_update_without_password_keeps_stored_hash() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let customers = PostgresCustomerRepository::new(db.pool.clone());
    let alice = create_alice(&customers).await;

    let updated = customers
        .update(alice.id, draft("Alice Smith", "alice", None))
        .await
        .unwrap();
    assert_eq!(updated.name.as_str(), "Alice Smith");
    assert_eq!(updated.created, alice.created);

    let credential = customers
        .find_credential_by_login("alice")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(credential.password_hash, "$argon2id$first");

    customers
        .update(alice.id, draft("Alice Smith", "alice", Some("$argon2id$second")))
        .await
        .unwrap();
    let credential = customers
        .find_credential_by_login("alice")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(credential.password_hash, "$argon2id$second");
}

#[tokio::test]
async fn test_missing_customer_writes_are_not_found() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let customers = PostgresCustomerRepository::new(db.pool.clone());
    let missing = CustomerId(4242);

    assert!(matches!(
        customers.update(missing, draft("X", "x", None)).await,
        Err(CustomerError::NotFound(_))
    ));
    assert!(matches!(
        customers.delete(missing).await,
        Err(CustomerError::NotFound(_))
    ));
    assert!(matches!(
        customers.set_active(missing, false).await,
        Err(CustomerError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_block_filters_active_listing() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let customers = PostgresCustomerRepository::new(db.pool.clone());
    let alice = create_alice(&customers).await;
    let bob = customers.create(draft("Bob", "bob", None)).await.unwrap();

    let blocked = customers.set_active(bob.id, false).await.unwrap();
    assert!(!blocked.active);

    let all = customers.list_all().await.unwrap();
    assert_eq!(
        all.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![alice.id, bob.id]
    );

    let active = customers.list_active().await.unwrap();
    assert_eq!(active.iter().map(|c| c.id).collect::<Vec<_>>(), vec![alice.id]);

    let unblocked = customers.set_active(bob.id, true).await.unwrap();
    assert!(unblocked.active);
    assert_eq!(customers.list_active().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_token_put_and_get() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let customers = PostgresCustomerRepository::new(db.pool.clone());
    let tokens = PostgresTokenStore::new(db.pool.clone());
    let alice = create_alice(&customers).await;
    let expires_at = now_seconds() + Duration::minutes(30);

    tokens
        .put(&token_record("a1b2", alice.id, expires_at))
        .await
        .unwrap();

    let found = tokens.get("a1b2").await.unwrap().expect("Missing token");
    assert_eq!(found, token_record("a1b2", alice.id, expires_at));
    assert!(tokens.get("a1b3").await.unwrap().is_none());
}

#[tokio::test]
async fn test_token_put_duplicate_is_conflict() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let customers = PostgresCustomerRepository::new(db.pool.clone());
    let tokens = PostgresTokenStore::new(db.pool.clone());
    let alice = create_alice(&customers).await;
    let bob = customers.create(draft("Bob", "bob", None)).await.unwrap();
    let expires_at = now_seconds() + Duration::minutes(30);

    tokens
        .put(&token_record("dup", alice.id, expires_at))
        .await
        .unwrap();
    let result = tokens.put(&token_record("dup", bob.id, expires_at)).await;

    assert_eq!(result, Err(TokenStoreError::Conflict));
    assert_eq!(
        tokens.get("dup").await.unwrap().unwrap().customer_id,
        alice.id
    );
}

#[tokio::test]
async fn test_token_for_unknown_customer_is_database_error() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let tokens = PostgresTokenStore::new(db.pool.clone());

    let result = tokens
        .put(&token_record("orphan", CustomerId(777), now_seconds()))
        .await;

    assert!(matches!(result, Err(TokenStoreError::DatabaseError(_))));
}

#[tokio::test]
async fn test_purge_expired_includes_boundary() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let customers = PostgresCustomerRepository::new(db.pool.clone());
    let tokens = PostgresTokenStore::new(db.pool.clone());
    let alice = create_alice(&customers).await;
    let now = now_seconds();

    for (token, expires_at) in [
        ("past", now - Duration::minutes(1)),
        ("boundary", now),
        ("future", now + Duration::seconds(1)),
    ] {
        tokens
            .put(&token_record(token, alice.id, expires_at))
            .await
            .unwrap();
    }

    assert_eq!(tokens.purge_expired(now).await.unwrap(), 2);
    assert!(tokens.get("past").await.unwrap().is_none());
    assert!(tokens.get("boundary").await.unwrap().is_none());
    assert!(tokens.get("future").await.unwrap().is_some());
}

#[tokio::test]
async fn test_delete_customer_removes_its_tokens() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let customers = PostgresCustomerRepository::new(db.pool.clone());
    let tokens = PostgresTokenStore::new(db.pool.clone());
    let alice = create_alice(&customers).await;

    tokens
        .put(&token_record(
            "gone",
            alice.id,
            now_seconds() + Duration::minutes(5),
        ))
        .await
        .unwrap();

    let removed = customers.delete(alice.id).await.unwrap();
    assert_eq!(removed.id, alice.id);
    assert!(tokens.get("gone").await.unwrap().is_none());
    assert!(customers
        .find_credential_by_login("alice")
        .await
        .unwrap()
        .is_none());
}
