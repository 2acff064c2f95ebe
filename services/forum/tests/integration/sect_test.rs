use seekers_forum::error::ForumError;
use seekers_forum::usecase::sect::{FoundSectUseCase, JoinSectUseCase};

use crate::helpers::{InMemorySects, InMemoryUsers, test_user};

#[tokio::test]
async fn should_fail_joining_unknown_sect() {
    let user = test_user("andy");
    let users = InMemoryUsers::new(vec![user.clone()]);

    let result = JoinSectUseCase {
        sects: InMemorySects::with_names(&["Doan Sect"]),
        users: users.clone(),
    }
    .execute(&user, "Nonexistent Sect")
    .await;

    assert!(matches!(result, Err(ForumError::SectNotFound)), "got {result:?}");
    assert_eq!(users.get("andy").unwrap().sect, None);
}

#[tokio::test]
async fn should_persist_joined_sect() {
    let user = test_user("andy");
    let users = InMemoryUsers::new(vec![user.clone()]);

    let joined = JoinSectUseCase {
        sects: InMemorySects::with_names(&["Doan Sect"]),
        users: users.clone(),
    }
    .execute(&user, "  Doan Sect ")
    .await
    .unwrap();

    assert_eq!(joined, "Doan Sect");
    assert_eq!(users.get("andy").unwrap().sect.as_deref(), Some("Doan Sect"));
}

#[tokio::test]
async fn should_found_new_sect_once() {
    let andy = test_user("andy");
    let wilson = test_user("wilson");
    let users = InMemoryUsers::new(vec![andy.clone(), wilson.clone()]);
    let sects = InMemorySects::default();
    let uc = FoundSectUseCase {
        sects: sects.clone(),
        users: users.clone(),
    };

    let founded = uc.execute(&andy, "Azure Cloud Sect").await.unwrap();
    assert_eq!(founded, "Azure Cloud Sect");
    assert_eq!(sects.names(), vec!["Azure Cloud Sect".to_owned()]);
    assert_eq!(
        users.get("andy").unwrap().sect.as_deref(),
        Some("Azure Cloud Sect")
    );

    let result = uc.execute(&wilson, "Azure Cloud Sect").await;
    assert!(
        matches!(result, Err(ForumError::SectAlreadyExists)),
        "got {result:?}"
    );
    assert_eq!(users.get("wilson").unwrap().sect, None);
}

#[tokio::test]
async fn should_allow_joining_a_freshly_founded_sect() {
    let andy = test_user("andy");
    let wilson = test_user("wilson");
    let users = InMemoryUsers::new(vec![andy.clone(), wilson.clone()]);
    let sects = InMemorySects::default();

    FoundSectUseCase {
        sects: sects.clone(),
        users: users.clone(),
    }
    .execute(&andy, "Doan Sect")
    .await
    .unwrap();

    JoinSectUseCase {
        sects,
        users: users.clone(),
    }
    .execute(&wilson, "Doan Sect")
    .await
    .unwrap();

    assert_eq!(users.get("wilson").unwrap().sect.as_deref(), Some("Doan Sect"));
}

#[tokio::test]
async fn should_reject_unroutable_sect_names() {
    let user = test_user("andy");
    let uc = FoundSectUseCase {
        sects: InMemorySects::default(),
        users: InMemoryUsers::new(vec![user.clone()]),
    };

    let too_long = "x".repeat(41);
    for name in ["", "   ", "a/b", too_long.as_str()] {
        let result = uc.execute(&user, name).await;
        assert!(
            matches!(result, Err(ForumError::InvalidSectName)),
            "{name:?}: got {result:?}"
        );
    }
}
