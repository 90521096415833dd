use crate::support::*;
use kosh_harvester::crawler::{
    extract_content, AuthorResolver, Fetcher, Session, SiteSelectors, WorkResolver,
};
use kosh_harvester::record::{AuthorEntry, PartRecord, WorkEntry, WorkRecord};
use kosh_harvester::HarvestError;
use scraper::Html;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn work_entry(server: &MockServer, title: &str, route: &str) -> WorkEntry {
    WorkEntry {
        title: title.to_string(),
        url: format!("{}{}", server.uri(), route),
    }
}

#[tokio::test]
async fn test_single_work_uses_page_content() {
    let mock_server = MockServer::start().await;
    let out = TempDir::new().unwrap();
    let config = test_config(&mock_server, out.path());
    mount_author(&mock_server).await;

    let session = Session::from_config(&config).unwrap();
    let record = WorkResolver::new(&session)
        .resolve(AUTHOR, &work_entry(&mock_server, "आँसू / महादेवी वर्मा", "/kk/Aansu"))
        .await
        .expect("Work resolution failed");

    let selectors = SiteSelectors::from_config(&config.site).unwrap();
    let expected = extract_content(&Html::parse_document(&aansu_page()), &selectors);

    assert_eq!(expected, "पहली पंक्ति\nदूसरी पंक्ति\nतीसरी पंक्ति");
    assert_eq!(
        record,
        WorkRecord::Single {
            title: "आँसू / महादेवी वर्मा".to_string(),
            content: expected,
        }
    );
}

#[tokio::test]
async fn test_multipart_work_keeps_part_order() {
    let mock_server = MockServer::start().await;
    let out = TempDir::new().unwrap();
    let config = test_config(&mock_server, out.path());
    mount_author(&mock_server).await;

    let session = Session::from_config(&config).unwrap();
    let record = WorkResolver::new(&session)
        .resolve(AUTHOR, &work_entry(&mock_server, "यामा / महादेवी वर्मा", "/kk/Yama"))
        .await
        .expect("Work resolution failed");

    let expected_parts = vec![
        PartRecord {
            title: "नीहार / महादेवी वर्मा".to_string(),
            content: "नीहार की पंक्ति".to_string(),
        },
        PartRecord {
            title: "रश्मि / महादेवी वर्मा".to_string(),
            content: "रश्मि की पंक्ति".to_string(),
        },
        PartRecord {
            title: "नीरजा / महादेवी वर्मा".to_string(),
            content: "नीरजा की पंक्ति".to_string(),
        },
    ];
    assert_eq!(
        record,
        WorkRecord::Multipart {
            title: "यामा / महादेवी वर्मा".to_string(),
            parts: expected_parts,
        }
    );
}

#[tokio::test]
async fn test_part_failure_propagates() {
    let mock_server = MockServer::start().await;
    let out = TempDir::new().unwrap();
    let config = test_config(&mock_server, out.path());

    mount_page(&mock_server, "/kk/Yama", yama_page()).await;
    mount_page(&mock_server, "/kk/Yama_1", part_page("नीहार की पंक्ति")).await;
    mount_status(&mock_server, "/kk/Yama_2", 404).await;
    mount_untouched(&mock_server, "/kk/Yama_3").await;

    let session = Session::from_config(&config).unwrap();
    let result = WorkResolver::new(&session)
        .resolve(AUTHOR, &work_entry(&mock_server, "यामा / महादेवी वर्मा", "/kk/Yama"))
        .await;

    assert!(
        matches!(result, Err(HarvestError::Status { status: 404, .. })),
        "unexpected result: {:?}",
        result
    );
}

#[tokio::test]
async fn test_author_resolver_collects_works_in_order() {
    let mock_server = MockServer::start().await;
    let out = TempDir::new().unwrap();
    let config = test_config(&mock_server, out.path());
    mount_author(&mock_server).await;

    let session = Session::from_config(&config).unwrap();
    let author = AuthorEntry {
        name: AUTHOR.to_string(),
        index_url: format!("{}/kk/Mahadevi", mock_server.uri()),
    };
    let record = AuthorResolver::new(&session)
        .resolve(&author)
        .await
        .expect("Author resolution failed");

    assert_eq!(record.author, AUTHOR);
    let titles: Vec<_> = record.works.iter().map(|w| w.title()).collect();
    assert_eq!(titles, vec!["आँसू / महादेवी वर्मा", "यामा / महादेवी वर्मा"]);
    assert!(!record.works[0].is_multipart());
    assert!(matches!(
        &record.works[1],
        WorkRecord::Multipart { parts, .. } if parts.len() == 3
    ));
}

#[tokio::test]
async fn test_author_resolver_is_idempotent() {
    let mock_server = MockServer::start().await;
    let out = TempDir::new().unwrap();
    let config = test_config(&mock_server, out.path());
    mount_author(&mock_server).await;

    let session = Session::from_config(&config).unwrap();
    let resolver = AuthorResolver::new(&session);
    let author = AuthorEntry {
        name: AUTHOR.to_string(),
        index_url: format!("{}/kk/Mahadevi", mock_server.uri()),
    };

    let first = resolver.resolve(&author).await.unwrap();
    let second = resolver.resolve(&author).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_vec_pretty(&first).unwrap(),
        serde_json::to_vec_pretty(&second).unwrap()
    );
}

#[tokio::test]
async fn test_fetcher_retries_transient_status() {
    let mock_server = MockServer::start().await;
    let out = TempDir::new().unwrap();
    let mut config = test_config(&mock_server, out.path());
    config.crawler.max_retries = 1;

    Mock::given(method("GET"))
        .and(path("/kk/Flaky"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/kk/Flaky", part_page("अंततः")).await;

    let fetcher = Fetcher::from_config(&config).unwrap();
    let body = fetcher
        .fetch(&format!("{}/kk/Flaky", mock_server.uri()))
        .await
        .expect("Retry should have succeeded");

    assert!(body.contains("अंततः"));
}

#[tokio::test]
async fn test_fetcher_does_not_retry_client_errors() {
    let mock_server = MockServer::start().await;
    let out = TempDir::new().unwrap();
    let mut config = test_config(&mock_server, out.path());
    config.crawler.max_retries = 3;

    Mock::given(method("GET"))
        .and(path("/kk/Missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::from_config(&config).unwrap();
    let result = fetcher
        .fetch(&format!("{}/kk/Missing", mock_server.uri()))
        .await;

    assert!(matches!(
        result,
        Err(HarvestError::Status { status: 404, .. })
    ));
}

#[tokio::test]
async fn test_fetcher_ignores_declared_latin1_charset() {
    let mock_server = MockServer::start().await;
    let out = TempDir::new().unwrap();
    let config = test_config(&mock_server, out.path());

    Mock::given(method("GET"))
        .and(path("/kk/Latin1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(part_page(AUTHOR), "text/html; charset=iso-8859-1"),
        )
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::from_config(&config).unwrap();
    let body = fetcher
        .fetch(&format!("{}/kk/Latin1", mock_server.uri()))
        .await
        .expect("Fetch failed");

    assert!(body.contains(AUTHOR));
    assert!(body.contains("कविता कोश"));
}
