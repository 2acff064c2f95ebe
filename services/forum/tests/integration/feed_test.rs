use seekers_domain::feed::{FeedOrder, FeedScope, PostCollection};
use seekers_forum::domain::repository::PostRepository;
use seekers_forum::domain::types::NewPost;
use seekers_forum::error::ForumError;
use seekers_forum::usecase::account::RegisterUseCase;
use seekers_forum::usecase::feed::{
    CreatePostInput, CreatePostUseCase, DeletePostUseCase, LikePostUseCase, ListPostsUseCase,
};

use crate::helpers::{InMemoryPosts, InMemoryUsers, at_minute, member_of, test_user};

fn global_input(title: &str, content: &str) -> CreatePostInput {
    CreatePostInput {
        title: title.to_owned(),
        content: content.to_owned(),
        scope: FeedScope::Global,
    }
}

async fn seed_post(posts: &InMemoryPosts, username: &str, minute: i64, likes: i64) -> i64 {
    posts
        .create(&NewPost {
            title: format!("post at {minute}"),
            content: "content".to_owned(),
            username: username.to_owned(),
            created_at: at_minute(minute),
            likes,
            sect: None,
        })
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn should_show_registered_users_first_post_in_global_feed() {
    let users = InMemoryUsers::default();
    let posts = InMemoryPosts::default();

    let andy = RegisterUseCase {
        repo: users.clone(),
        enabled: true,
    }
    .execute("andy")
    .await
    .unwrap();

    CreatePostUseCase {
        repo: posts.clone(),
    }
    .execute(&andy, global_input("T", "C"))
    .await
    .unwrap();

    let feed = ListPostsUseCase { repo: posts }
        .execute(&FeedScope::Global, FeedOrder::Newest)
        .await
        .unwrap();

    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].username, "andy");
    assert_eq!(feed[0].title, "T");
    assert_eq!(feed[0].content, "C");
    assert_eq!(feed[0].likes, 0);
}

#[tokio::test]
async fn should_add_exactly_one_entry_per_created_post() {
    let posts = InMemoryPosts::default();
    let author = test_user("andy");
    seed_post(&posts, "wilson", 0, 3).await;

    let created = CreatePostUseCase {
        repo: posts.clone(),
    }
    .execute(&author, global_input("  Title  ", " Body "))
    .await
    .unwrap();

    let feed = ListPostsUseCase { repo: posts }
        .execute(&FeedScope::Global, FeedOrder::Newest)
        .await
        .unwrap();
    let matching: Vec<_> = feed.iter().filter(|p| p.id == created.id).collect();
    assert_eq!(feed.len(), 2);
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].title, "Title");
    assert_eq!(matching[0].content, "Body");
    assert_eq!(matching[0].likes, 0);
}

#[tokio::test]
async fn should_reject_blank_title_or_content() {
    let posts = InMemoryPosts::default();
    let uc = CreatePostUseCase {
        repo: posts.clone(),
    };
    let author = test_user("andy");

    let result = uc.execute(&author, global_input("   ", "C")).await;
    assert!(matches!(result, Err(ForumError::MissingData)), "got {result:?}");

    let result = uc.execute(&author, global_input("T", "")).await;
    assert!(matches!(result, Err(ForumError::MissingData)), "got {result:?}");

    assert_eq!(posts.count(PostCollection::Posts), 0);
}

#[tokio::test]
async fn should_increment_likes_one_at_a_time() {
    let posts = InMemoryPosts::default();
    let id = seed_post(&posts, "andy", 0, 0).await;
    let uc = LikePostUseCase {
        repo: posts.clone(),
    };

    assert_eq!(uc.execute(PostCollection::Posts, id).await.unwrap(), 1);
    assert_eq!(uc.execute(PostCollection::Posts, id).await.unwrap(), 2);
    assert_eq!(posts.likes_of(PostCollection::Posts, id), Some(2));
}

#[tokio::test]
async fn should_fail_liking_missing_post_without_side_effects() {
    let posts = InMemoryPosts::default();
    let id = seed_post(&posts, "andy", 0, 5).await;

    let result = LikePostUseCase {
        repo: posts.clone(),
    }
    .execute(PostCollection::Posts, id + 100)
    .await;

    assert!(matches!(result, Err(ForumError::PostNotFound)), "got {result:?}");
    assert_eq!(posts.likes_of(PostCollection::Posts, id), Some(5));
}

#[tokio::test]
async fn should_not_confuse_global_and_sect_ids_when_liking() {
    let posts = InMemoryPosts::default();
    let id = seed_post(&posts, "andy", 0, 0).await;

    let result = LikePostUseCase {
        repo: posts.clone(),
    }
    .execute(PostCollection::SectPosts, id)
    .await;

    assert!(matches!(result, Err(ForumError::PostNotFound)), "got {result:?}");
    assert_eq!(posts.likes_of(PostCollection::Posts, id), Some(0));
}

#[tokio::test]
async fn should_order_most_liked_non_increasing() {
    let posts = InMemoryPosts::default();
    for (minute, likes) in [(0, 3), (1, 40), (2, 0), (3, 40), (4, 7)] {
        seed_post(&posts, "andy", minute, likes).await;
    }

    let feed = ListPostsUseCase { repo: posts }
        .execute(&FeedScope::Global, FeedOrder::MostLiked)
        .await
        .unwrap();

    assert!(feed.windows(2).all(|w| w[0].likes >= w[1].likes));
    // Equal likes fall back to newest id first.
    assert_eq!(feed[0].likes, 40);
    assert!(feed[0].id > feed[1].id);
}

#[tokio::test]
async fn should_order_by_time_in_both_directions() {
    let posts = InMemoryPosts::default();
    let first = seed_post(&posts, "andy", 0, 0).await;
    let second = seed_post(&posts, "andy", 5, 0).await;
    let third = seed_post(&posts, "andy", 10, 0).await;
    let uc = ListPostsUseCase { repo: posts };

    let newest: Vec<i64> = uc
        .execute(&FeedScope::Global, FeedOrder::Newest)
        .await
        .unwrap()
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(newest, vec![third, second, first]);

    let oldest: Vec<i64> = uc
        .execute(&FeedScope::Global, FeedOrder::Oldest)
        .await
        .unwrap()
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(oldest, vec![first, second, third]);
}

#[tokio::test]
async fn should_keep_sect_posts_out_of_global_feed() {
    let posts = InMemoryPosts::default();
    let member = member_of("wilson", "Doan Sect");
    let uc = CreatePostUseCase {
        repo: posts.clone(),
    };

    uc.execute(
        &member,
        CreatePostInput {
            title: "Indeed".to_owned(),
            content: "I agree".to_owned(),
            scope: FeedScope::Sect("Doan Sect".to_owned()),
        },
    )
    .await
    .unwrap();

    let list = ListPostsUseCase { repo: posts };
    let global = list
        .execute(&FeedScope::Global, FeedOrder::Newest)
        .await
        .unwrap();
    let sect = list
        .execute(&FeedScope::Sect("Doan Sect".to_owned()), FeedOrder::Newest)
        .await
        .unwrap();
    let other = list
        .execute(&FeedScope::Sect("Truong Sect".to_owned()), FeedOrder::Newest)
        .await
        .unwrap();

    assert!(global.is_empty());
    assert_eq!(sect.len(), 1);
    assert_eq!(sect[0].sect.as_deref(), Some("Doan Sect"));
    assert!(other.is_empty());
}

#[tokio::test]
async fn should_forbid_posting_into_foreign_sect() {
    let posts = InMemoryPosts::default();
    let member = member_of("wilson", "Truong Sect");

    let result = CreatePostUseCase {
        repo: posts.clone(),
    }
    .execute(
        &member,
        CreatePostInput {
            title: "T".to_owned(),
            content: "C".to_owned(),
            scope: FeedScope::Sect("Doan Sect".to_owned()),
        },
    )
    .await;

    assert!(matches!(result, Err(ForumError::Forbidden)), "got {result:?}");
    assert_eq!(posts.count(PostCollection::SectPosts), 0);
}

#[tokio::test]
async fn should_let_only_the_author_delete() {
    let posts = InMemoryPosts::default();
    let id = seed_post(&posts, "andy", 0, 0).await;
    let uc = DeletePostUseCase {
        repo: posts.clone(),
    };

    let result = uc
        .execute(PostCollection::Posts, id, &test_user("wilson"))
        .await;
    assert!(matches!(result, Err(ForumError::Forbidden)), "got {result:?}");
    assert_eq!(posts.count(PostCollection::Posts), 1);

    uc.execute(PostCollection::Posts, id, &test_user("andy"))
        .await
        .unwrap();
    assert_eq!(posts.count(PostCollection::Posts), 0);

    let result = uc
        .execute(PostCollection::Posts, id, &test_user("andy"))
        .await;
    assert!(matches!(result, Err(ForumError::PostNotFound)), "got {result:?}");
}
