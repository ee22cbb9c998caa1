//! Post queries
//!
//! Unlike the laptop listings, every post listing reports NotFound when
//! nothing matches instead of returning an empty list.

use super::{provided, require_any};
use crate::core::{FieldValue, Query, QueryError, Record, RecordSource, SortDirection};
use crate::entities::{Category, Post, User};
use chrono::{DateTime, TimeDelta, Utc};
use std::collections::HashMap;

/// How many posts [`list_recent_published`] returns unless configured otherwise
pub const DEFAULT_RECENT_LIMIT: usize = 3;

/// The latest `limit` published posts, newest publication first
pub async fn list_recent_published(
    store: &dyn RecordSource<Post>,
    limit: usize,
) -> Result<Vec<Post>, QueryError> {
    let query = Query::new()
        .filter(Post::is_published)
        .order_by(|post: &Post| post.published_at.into(), SortDirection::Desc)
        .limit(limit);

    require_any(store.query(&query).await?)
}

/// Posts whose title or text contains `query`, ignoring case
pub async fn search(
    store: &dyn RecordSource<Post>,
    query: Option<&str>,
) -> Result<Vec<Post>, QueryError> {
    let needle = provided(query)
        .ok_or_else(|| QueryError::invalid_argument("query", "a search string is required"))?
        .to_lowercase();

    let query = Post::default_query().filter(move |post: &Post| post.mentions(&needle));

    require_any(store.query(&query).await?)
}

/// Posts without a category, by author first name then creation time
pub async fn list_untagged(
    posts: &dyn RecordSource<Post>,
    users: &dyn RecordSource<User>,
) -> Result<Vec<Post>, QueryError> {
    let first_names: HashMap<_, _> = users
        .list()
        .await?
        .into_iter()
        .map(|user| (user.id, user.first_name))
        .collect();

    let query = Query::new()
        .filter(|post: &Post| post.category.is_none())
        .order_by(
            move |post: &Post| {
                first_names
                    .get(&post.author)
                    .map_or(FieldValue::Null, |name| FieldValue::from(name.as_str()))
            },
            SortDirection::Asc,
        )
        .order_by(|post: &Post| post.created_at.into(), SortDirection::Asc);

    require_any(posts.query(&query).await?)
}

/// Posts in any of the comma-separated `categories`
///
/// Names that are not categories match nothing.
pub async fn list_by_categories(
    store: &dyn RecordSource<Post>,
    categories: Option<&str>,
) -> Result<Vec<Post>, QueryError> {
    let raw = provided(categories).ok_or_else(|| {
        QueryError::invalid_argument("categories", "a comma-separated list is required")
    })?;

    let wanted = parse_categories(raw);
    if wanted.is_empty() {
        tracing::debug!(categories = raw, "no known category requested");
    }

    let query = Post::default_query().filter(move |post: &Post| {
        post.category
            .is_some_and(|category| wanted.contains(&category))
    });

    require_any(store.query(&query).await?)
}

/// Posts published within the last `last_days` days before `now`
pub async fn list_recent(
    store: &dyn RecordSource<Post>,
    last_days: Option<&str>,
    now: DateTime<Utc>,
) -> Result<Vec<Post>, QueryError> {
    let raw = provided(last_days)
        .ok_or_else(|| QueryError::invalid_argument("last_days", "a number of days is required"))?;

    let cutoff = cutoff(raw, now)?;

    let query = Post::default_query().filter(move |post: &Post| {
        post.published_at
            .is_some_and(|published_at| published_at >= cutoff)
    });

    require_any(store.query(&query).await?)
}

fn parse_categories(raw: &str) -> Vec<Category> {
    let mut wanted = Vec::new();
    for category in raw
        .split(',')
        .filter_map(|name| name.trim().parse::<Category>().ok())
    {
        if !wanted.contains(&category) {
            wanted.push(category);
        }
    }
    wanted
}

fn cutoff(raw: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>, QueryError> {
    let days: i64 = raw.trim().parse().map_err(|_| {
        QueryError::invalid_argument("last_days", format!("'{}' is not an integer", raw))
    })?;

    TimeDelta::try_days(days)
        .and_then(|window| now.checked_sub_signed(window))
        .ok_or_else(|| {
            QueryError::invalid_argument("last_days", format!("{} days is out of range", days))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ManualClock;
    use crate::entities::PostStatus;
    use crate::storage::EntityStore;
    use std::sync::Arc;
    use uuid::Uuid;

    struct Fixture {
        clock: ManualClock,
        store: EntityStore,
        ada: User,
        bob: User,
    }

    impl Fixture {
        async fn new() -> Self {
            let clock = ManualClock::new(Utc::now());
            let store = EntityStore::in_memory_with_clock(Arc::new(clock.clone()));
            let bob = store.create_user(User::new("bob", "Bob", "Builder")).await.unwrap();
            let ada = store.create_user(User::new("ada", "Ada", "Lovelace")).await.unwrap();
            Self {
                clock,
                store,
                ada,
                bob,
            }
        }

        fn now(&self) -> DateTime<Utc> {
            use crate::core::Clock;
            self.clock.utc()
        }

        async fn add(&self, post: Post) -> Post {
            self.clock.advance(TimeDelta::seconds(1));
            self.store.create_post(post).await.unwrap()
        }

        async fn published(&self, title: &str, days_ago: i64) -> Post {
            let at = self.now() - TimeDelta::days(days_ago);
            self.add(Post::new(title, "", self.ada.id, PostStatus::Draft).publish(at))
                .await
        }

        fn posts(&self) -> &dyn RecordSource<Post> {
            self.store.posts()
        }
    }

    fn titles(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_recent_published_takes_latest_three() {
        let fx = Fixture::new().await;
        fx.published("four days", 4).await;
        fx.published("one day", 1).await;
        fx.published("three days", 3).await;
        fx.published("two days", 2).await;
        fx.add(Post::new("draft", "", fx.ada.id, PostStatus::Draft))
            .await;
        let mut banned = Post::new("banned", "", fx.ada.id, PostStatus::Banned);
        banned.published_at = Some(fx.now());
        fx.add(banned).await;

        let result = list_recent_published(fx.posts(), DEFAULT_RECENT_LIMIT)
            .await
            .unwrap();
        assert_eq!(titles(&result), vec!["one day", "two days", "three days"]);
    }

    #[tokio::test]
    async fn test_recent_published_none_is_not_found() {
        let fx = Fixture::new().await;
        fx.add(Post::new("draft", "", fx.ada.id, PostStatus::Draft))
            .await;

        let err = list_recent_published(fx.posts(), DEFAULT_RECENT_LIMIT)
            .await
            .unwrap_err();
        assert!(matches!(err, QueryError::NotFound { resource: "post" }));
    }

    #[tokio::test]
    async fn test_search_matches_title_or_text_ignoring_case() {
        let fx = Fixture::new().await;
        fx.add(Post::new("New Laptop day", "", fx.ada.id, PostStatus::Draft))
            .await;
        fx.add(Post::new("Weekend", "bought a LAPTOP stand", fx.bob.id, PostStatus::Draft))
            .await;
        fx.add(Post::new("Gardening", "tomatoes", fx.bob.id, PostStatus::Draft))
            .await;

        let result = search(fx.posts(), Some("laptop")).await.unwrap();
        let mut found = titles(&result);
        found.sort();
        assert_eq!(found, vec!["New Laptop day", "Weekend"]);
    }

    #[tokio::test]
    async fn test_search_requires_query() {
        let fx = Fixture::new().await;
        for query in [None, Some("")] {
            let err = search(fx.posts(), query).await.unwrap_err();
            assert!(matches!(err, QueryError::InvalidArgument { param: "query", .. }));
        }
    }

    #[tokio::test]
    async fn test_search_without_match_is_not_found() {
        let fx = Fixture::new().await;
        fx.add(Post::new("Gardening", "tomatoes", fx.bob.id, PostStatus::Draft))
            .await;
        let err = search(fx.posts(), Some("laptop")).await.unwrap_err();
        assert!(matches!(err, QueryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_untagged_ordered_by_author_then_creation() {
        let fx = Fixture::new().await;
        fx.add(Post::new("bob first", "", fx.bob.id, PostStatus::Draft))
            .await;
        let tagged = Post::new("ada tagged", "", fx.ada.id, PostStatus::Draft);
        fx.add(tagged.with_category(Category::Dev)).await;
        fx.add(Post::new("ada first", "", fx.ada.id, PostStatus::Draft))
            .await;
        fx.add(Post::new("bob second", "", fx.bob.id, PostStatus::Draft))
            .await;
        fx.add(Post::new("ada second", "", fx.ada.id, PostStatus::Published))
            .await;

        let result = list_untagged(fx.posts(), fx.store.users())
            .await
            .unwrap();
        assert_eq!(
            titles(&result),
            vec!["ada first", "ada second", "bob first", "bob second"]
        );
    }

    #[tokio::test]
    async fn test_untagged_none_is_not_found() {
        let fx = Fixture::new().await;
        fx.add(Post::new("tagged", "", fx.ada.id, PostStatus::Draft).with_category(Category::Home))
            .await;
        let err = list_untagged(fx.posts(), fx.store.users())
            .await
            .unwrap_err();
        assert!(matches!(err, QueryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_by_categories() {
        let fx = Fixture::new().await;
        fx.add(Post::new("home", "", fx.ada.id, PostStatus::Draft).with_category(Category::Home))
            .await;
        fx.add(Post::new("work", "", fx.ada.id, PostStatus::Draft).with_category(Category::Work))
            .await;
        fx.add(Post::new("dev", "", fx.ada.id, PostStatus::Draft).with_category(Category::Dev))
            .await;
        fx.add(Post::new("none", "", fx.ada.id, PostStatus::Draft))
            .await;

        let result = list_by_categories(fx.posts(), Some("home,dev")).await.unwrap();
        let mut found = titles(&result);
        found.sort();
        assert_eq!(found, vec!["dev", "home"]);

        // Whitespace around names and unknown names are tolerated
        let result = list_by_categories(fx.posts(), Some(" work , gaming")).await.unwrap();
        assert_eq!(titles(&result), vec!["work"]);
    }

    #[tokio::test]
    async fn test_by_categories_requires_parameter() {
        let fx = Fixture::new().await;
        for categories in [None, Some("")] {
            let err = list_by_categories(fx.posts(), categories).await.unwrap_err();
            assert!(matches!(err, QueryError::InvalidArgument { param: "categories", .. }));
        }
    }

    #[tokio::test]
    async fn test_by_unknown_categories_is_not_found() {
        let fx = Fixture::new().await;
        fx.add(Post::new("home", "", fx.ada.id, PostStatus::Draft).with_category(Category::Home))
            .await;
        let err = list_by_categories(fx.posts(), Some("gaming")).await.unwrap_err();
        assert!(matches!(err, QueryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_recent_days_window() {
        let fx = Fixture::new().await;
        fx.published("yesterday", 1).await;
        fx.published("last week", 6).await;
        fx.published("last month", 30).await;
        fx.add(Post::new("never published", "", fx.ada.id, PostStatus::Draft))
            .await;

        let result = list_recent(fx.posts(), Some("7"), fx.now()).await.unwrap();
        assert_eq!(titles(&result), vec!["yesterday", "last week"]);

        let result = list_recent(fx.posts(), Some(" 31 "), fx.now()).await.unwrap();
        assert_eq!(result.len(), 3);
    }

    #[tokio::test]
    async fn test_recent_days_cutoff_is_inclusive() {
        let fx = Fixture::new().await;
        let now = fx.now() + TimeDelta::seconds(2);
        let cutoff = now - TimeDelta::days(7);

        let draft = |title: &str| Post::new(title, "", fx.ada.id, PostStatus::Draft);
        fx.add(draft("just outside").publish(cutoff - TimeDelta::seconds(1)))
            .await;
        fx.add(draft("on the cutoff").publish(cutoff)).await;
        assert_eq!(fx.now(), now);

        let result = list_recent(fx.posts(), Some("7"), now).await.unwrap();
        assert_eq!(titles(&result), vec!["on the cutoff"]);
    }

    #[tokio::test]
    async fn test_recent_days_rejects_bad_input() {
        let fx = Fixture::new().await;
        for raw in [None, Some(""), Some("abc"), Some("1.5"), Some("99999999999999999")] {
            let err = list_recent(fx.posts(), raw, fx.now()).await.unwrap_err();
            assert!(
                matches!(err, QueryError::InvalidArgument { param: "last_days", .. }),
                "{:?} should be rejected",
                raw
            );
        }
    }

    #[tokio::test]
    async fn test_recent_days_none_is_not_found() {
        let fx = Fixture::new().await;
        fx.published("last month", 30).await;
        let err = list_recent(fx.posts(), Some("7"), fx.now()).await.unwrap_err();
        assert!(matches!(err, QueryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_storage_errors_pass_through() {
        use anyhow::anyhow;
        use async_trait::async_trait;

        struct Broken;

        #[async_trait]
        impl RecordSource<Post> for Broken {
            async fn get(&self, _: &Uuid) -> anyhow::Result<Option<Post>> {
                Err(anyhow!("offline"))
            }
            async fn list(&self) -> anyhow::Result<Vec<Post>> {
                Err(anyhow!("offline"))
            }
            async fn query(&self, _: &Query<Post>) -> anyhow::Result<Vec<Post>> {
                Err(anyhow!("offline"))
            }
        }

        let err = search(&Broken, Some("x")).await.unwrap_err();
        assert!(matches!(err, QueryError::Storage(_)));
    }
}
