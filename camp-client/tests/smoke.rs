use camp_client::{CampClient, CampClientError};

#[tokio::test]
#[ignore = "requires running camps API"]
async fn http_smoke_get_camp() {
    let base_url =
        std::env::var("CAMP_API_URL").unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());
    let client = CampClient::new(base_url);

    let slug = std::env::var("CAMP_SMOKE_SLUG").unwrap_or_else(|_| "1".to_string());

    let post = client
        .get_camp(&slug)
        .await
        .expect("get_camp must succeed")
        .expect("camp must exist for the smoke slug");
    assert!(!post.title.is_empty());
    assert_eq!(post.user.id, post.organizer_id);
    for join in &post.join_camping_posts {
        assert_eq!(join.post_id, post.id);
    }

    // Несуществующий slug: API либо отвечает 404, либо конвертом без данных.
    let missing = client.get_camp("slug-that-does-not-exist").await;
    match missing {
        Ok(None) | Err(CampClientError::NotFound) => {}
        Ok(Some(post)) => panic!("unexpected camp for missing slug: id={}", post.id),
        Err(other) => panic!("unexpected error for missing slug: {other}"),
    }
}
