use seekers_forum::domain::types::{GOOGLE_PROVIDER, IdentityResolution, User};
use seekers_forum::error::ForumError;
use seekers_forum::usecase::identity::{BindUsernameUseCase, ResolveIdentityUseCase};
use seekers_session::identity::derive_identity_hash;

use crate::helpers::{FakeIdentityProvider, InMemoryUsers, TEST_IDENTITY_KEY};

fn hash_of(subject: &str) -> String {
    derive_identity_hash(TEST_IDENTITY_KEY.as_bytes(), GOOGLE_PROVIDER, subject)
}

fn resolver(
    provider: FakeIdentityProvider,
    users: InMemoryUsers,
) -> ResolveIdentityUseCase<FakeIdentityProvider, InMemoryUsers> {
    ResolveIdentityUseCase {
        provider,
        users,
        identity_key: TEST_IDENTITY_KEY.to_owned(),
    }
}

#[tokio::test]
async fn should_resolve_bound_identity_as_known() {
    let user = User::new("andy".to_owned(), Some(hash_of("google-sub-1")));
    let users = InMemoryUsers::new(vec![user.clone()]);

    let resolution = resolver(FakeIdentityProvider::with("code-1", "google-sub-1"), users)
        .execute("code-1")
        .await
        .unwrap();

    match resolution {
        IdentityResolution::Known(found) => assert_eq!(found.id, user.id),
        other => panic!("expected Known, got {other:?}"),
    }
}

#[tokio::test]
async fn should_resolve_unbound_identity_as_unknown() {
    let resolution = resolver(
        FakeIdentityProvider::with("code-1", "google-sub-2"),
        InMemoryUsers::default(),
    )
    .execute("code-1")
    .await
    .unwrap();

    match resolution {
        IdentityResolution::Unknown { identity_hash } => {
            assert_eq!(identity_hash, hash_of("google-sub-2"));
            assert!(!identity_hash.contains("google-sub-2"));
        }
        other => panic!("expected Unknown, got {other:?}"),
    }
}

#[tokio::test]
async fn should_surface_provider_failure_as_upstream() {
    let result = resolver(FakeIdentityProvider::default(), InMemoryUsers::default())
        .execute("bad-code")
        .await;
    assert!(matches!(result, Err(ForumError::Upstream(_))), "got {result:?}");
}

#[tokio::test]
async fn should_bind_username_to_pending_identity() {
    let users = InMemoryUsers::default();
    let hash = hash_of("google-sub-3");

    let user = BindUsernameUseCase {
        repo: users.clone(),
    }
    .execute(Some(hash.clone()), "Daoist Andy")
    .await
    .unwrap();

    assert_eq!(user.username, "Daoist Andy");
    assert_eq!(user.identity_hash.as_deref(), Some(hash.as_str()));

    // The next login through the provider now finds the user.
    let resolution = resolver(FakeIdentityProvider::with("code", "google-sub-3"), users)
        .execute("code")
        .await
        .unwrap();
    assert!(matches!(resolution, IdentityResolution::Known(u) if u.id == user.id));
}

#[tokio::test]
async fn should_reject_binding_without_pending_identity() {
    let users = InMemoryUsers::default();
    let result = BindUsernameUseCase {
        repo: users.clone(),
    }
    .execute(None, "andy")
    .await;

    assert!(matches!(result, Err(ForumError::Unauthenticated)), "got {result:?}");
    assert_eq!(users.len(), 0);
}

#[tokio::test]
async fn should_reject_binding_taken_username() {
    let users = InMemoryUsers::new(vec![User::new("andy".to_owned(), None)]);

    let result = BindUsernameUseCase {
        repo: users.clone(),
    }
    .execute(Some(hash_of("google-sub-4")), "andy")
    .await;

    assert!(matches!(result, Err(ForumError::UsernameTaken)), "got {result:?}");
    assert_eq!(users.len(), 1);
}

#[tokio::test]
async fn should_return_existing_user_on_repeated_binding() {
    let hash = hash_of("google-sub-5");
    let users = InMemoryUsers::default();
    let uc = BindUsernameUseCase {
        repo: users.clone(),
    };

    let first = uc.execute(Some(hash.clone()), "andy").await.unwrap();
    let second = uc.execute(Some(hash), "andy-again").await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(users.len(), 1);
}
