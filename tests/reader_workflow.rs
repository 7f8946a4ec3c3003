// tests/reader_workflow.rs
use neuralpulse_core::application::{
    commands::newsletter::SubscribeCommand,
    error::ApplicationError,
    queries::articles::{ListArticlesQuery, ReadArticleQuery},
};
use neuralpulse_core::domain::{content::EMPTY_PAGE_MESSAGE, errors::DomainError};

mod support;

use support::{ArticleBuilder, TestApp, topic};

fn read(slug: &str, page: usize) -> ReadArticleQuery {
    ReadArticleQuery {
        slug: slug.into(),
        page,
    }
}

/// シナリオC: 下書きは読者から見えない
#[tokio::test]
async fn draft_article_reads_as_not_found() {
    let app = TestApp::new();
    app.repos.seed_topic(topic(1, "Science"));
    app.repos.seed_article(ArticleBuilder::new().slug("hidden").draft().build());

    let err = app
        .services
        .article_queries
        .read_article(read("hidden", 0))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));

    let listed = app
        .services
        .article_queries
        .list_published(ListArticlesQuery::default())
        .await
        .unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn unknown_or_malformed_slug_is_not_found() {
    let app = TestApp::new();
    for slug in ["nope", "", "a/b"] {
        let err = app
            .services
            .article_queries
            .read_article(read(slug, 0))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound(_)), "{slug}");
    }
}

#[tokio::test]
async fn mismatched_columns_page_through_the_longer_one() {
    let app = TestApp::new();
    app.repos.seed_topic(topic(1, "Science"));
    app.repos.seed_article(
        ArticleBuilder::new()
            .slug("uneven")
            .columns(
                &["<p>1</p>", "<p>2</p>", "<p>3</p>"],
                &[None, None, None, Some("https://cdn.test/4.png"), None],
            )
            .build(),
    );
    let queries = &app.services.article_queries;

    let first = queries.read_article(read("uneven", 0)).await.unwrap();
    assert_eq!(first.topic.as_deref(), Some("Science"));
    assert_eq!(first.page.total_pages, 5);
    assert_eq!(first.page.index, 0);
    assert_eq!(first.page.section_html.as_deref(), Some("<p>1</p>"));
    assert!(!first.page.has_previous);
    assert!(first.page.has_next);

    let fourth = queries.read_article(read("uneven", 3)).await.unwrap();
    assert_eq!(fourth.page.section_html, None);
    assert_eq!(fourth.page.image_url.as_deref(), Some("https://cdn.test/4.png"));
    assert_eq!(fourth.page.placeholder, None);

    let fifth = queries.read_article(read("uneven", 4)).await.unwrap();
    assert_eq!(fifth.page.placeholder.as_deref(), Some(EMPTY_PAGE_MESSAGE));
    assert!(fifth.page.has_previous);
    assert!(!fifth.page.has_next);

    // Past the end stays on the last page.
    let clamped = queries.read_article(read("uneven", 42)).await.unwrap();
    assert_eq!(clamped.page.index, 4);
}

#[tokio::test]
async fn article_without_pages_has_one_placeholder_page() {
    let app = TestApp::new();
    app.repos.seed_article(ArticleBuilder::new().slug("empty").columns(&[], &[]).build());

    let reading = app
        .services
        .article_queries
        .read_article(read("empty", 0))
        .await
        .unwrap();
    assert_eq!(reading.page.total_pages, 1);
    assert_eq!(reading.page.placeholder.as_deref(), Some(EMPTY_PAGE_MESSAGE));
    assert_eq!(reading.topic, None);
}

#[tokio::test]
async fn listing_is_newest_first_and_filterable() {
    let app = TestApp::new();
    app.repos.seed_topic(topic(1, "Mind & Curiosity"));
    app.repos.seed_topic(topic(2, "Science"));
    app.repos.seed_article(
        ArticleBuilder::new().slug("old").title("Old Brain Facts").date(2023, 5, 1).build(),
    );
    app.repos.seed_article(
        ArticleBuilder::new().slug("new").title("New Stars").topic(2).date(2024, 3, 1).build(),
    );
    app.repos.seed_article(
        ArticleBuilder::new().slug("mid").title("Brainy Draft").date(2024, 1, 1).draft().build(),
    );
    let queries = &app.services.article_queries;

    let all = queries.list_published(ListArticlesQuery::default()).await.unwrap();
    let slugs: Vec<&str> = all.iter().map(|a| a.slug.as_str()).collect();
    assert_eq!(slugs, vec!["new", "old"]);
    assert_eq!(all[1].topic.as_deref(), Some("Mind & Curiosity"));
    assert_eq!(all[0].page_count, 1);

    let by_topic = queries
        .list_published(ListArticlesQuery {
            topic: Some("mind-curiosity".into()),
            search: None,
        })
        .await
        .unwrap();
    assert_eq!(by_topic.len(), 1);
    assert_eq!(by_topic[0].slug, "old");

    let searched = queries
        .list_published(ListArticlesQuery {
            topic: None,
            search: Some("BRAIN".into()),
        })
        .await
        .unwrap();
    assert_eq!(searched.len(), 1);
    assert_eq!(searched[0].slug, "old");

    let admin = queries.admin_list(Some("stars".into())).await.unwrap();
    assert_eq!(admin.len(), 1);
    assert_eq!(admin[0].slug, "new");
}

#[tokio::test]
async fn topics_count_only_published_articles() {
    let app = TestApp::new();
    app.repos.seed_topic(topic(1, "Science"));
    app.repos.seed_topic(topic(2, "Art"));
    app.repos.seed_article(ArticleBuilder::new().slug("a").build());
    app.repos.seed_article(ArticleBuilder::new().slug("b").draft().build());

    let topics = app.services.topic_queries.list_topics().await.unwrap();
    let summary: Vec<(&str, u64)> = topics
        .iter()
        .map(|t| (t.title.as_str(), t.article_count))
        .collect();
    assert_eq!(summary, vec![("Art", 0), ("Science", 1)]);
}

#[tokio::test]
async fn editable_article_loads_drafts_with_stored_images() {
    let app = TestApp::new();
    app.repos.seed_topic(topic(1, "Science"));
    app.repos.seed_article(
        ArticleBuilder::new()
            .slug("wip")
            .draft()
            .columns(&["<p>a</p>", "<p>b</p>"], &[None, Some("https://cdn.test/b.png")])
            .build(),
    );

    let editable = app
        .services
        .article_queries
        .editable_article("wip".into())
        .await
        .unwrap();
    assert_eq!(editable.status, "draft");
    assert_eq!(editable.topic, "Science");
    assert_eq!(editable.pages.len(), 2);
    assert_eq!(editable.pages[0].image_url, None);
    assert_eq!(editable.pages[1].image_url.as_deref(), Some("https://cdn.test/b.png"));
    assert!(editable.pages.iter().all(|p| p.pending_image.is_none()));
}

#[tokio::test]
async fn newsletter_rejects_bad_and_duplicate_addresses() {
    let app = TestApp::new();
    let newsletter = &app.services.newsletter_commands;

    let created = newsletter
        .subscribe(SubscribeCommand {
            email: " Reader@Example.com ".into(),
        })
        .await
        .unwrap();
    assert_eq!(created.email, "reader@example.com");

    let dup = newsletter
        .subscribe(SubscribeCommand {
            email: "reader@example.com".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(dup, ApplicationError::Domain(DomainError::Conflict(_))));

    let bad = newsletter
        .subscribe(SubscribeCommand {
            email: "not-an-email".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(bad, ApplicationError::Domain(DomainError::Validation(_))));
}
