use std::{
    fs,
    path::{Path, PathBuf},
};

use reportkit::{ArchiveUrls, CrawlerConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn fixture_path(relative: impl AsRef<Path>) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(relative)
}

pub fn read_fixture(relative: impl AsRef<Path>) -> String {
    fs::read_to_string(fixture_path(relative)).expect("fixture file should be readable")
}

/// Pipeline config pointed at a mock archive server.
#[allow(dead_code)]
pub fn archive_config(server: &MockServer, output_dir: impl Into<PathBuf>) -> CrawlerConfig {
    CrawlerConfig {
        base_urls: ArchiveUrls {
            archives: format!("{}/Archives/edgar", server.uri()),
            data: server.uri(),
        },
        ..CrawlerConfig::new("test_agent example@example.com")
    }
    .with_output_dir(output_dir)
}

/// Mounts a GET route returning `body` with status 200.
#[allow(dead_code)]
pub async fn mount_page(server: &MockServer, url_path: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Mounts the standard archive layout: listings, quarter probe, company
/// index, submissions, and the Paychex 10-K document.
#[allow(dead_code)]
pub async fn mount_archive(server: &MockServer) {
    mount_page(
        server,
        "/Archives/edgar/full-index/",
        &read_fixture("listings/years.html"),
    )
    .await;
    mount_page(
        server,
        "/Archives/edgar/full-index/2024/",
        &read_fixture("listings/quarters.html"),
    )
    .await;
    mount_page(server, "/Archives/edgar/full-index/2024/QTR4/", "<html></html>").await;
    mount_page(
        server,
        "/Archives/edgar/full-index/2024/QTR4/company.idx",
        &read_fixture("indexes/company.idx"),
    )
    .await;
    mount_page(
        server,
        "/submissions/CIK0000723531.json",
        &read_fixture("submissions/submission.json"),
    )
    .await;
    mount_page(
        server,
        "/submissions/CIK0000111111.json",
        &read_fixture("submissions/submission_no_10k.json"),
    )
    .await;
    mount_page(
        server,
        "/Archives/edgar/data/723531/000072353124000012/0000723531-24-000012.txt",
        &read_fixture("filings/tenk.html"),
    )
    .await;
}
