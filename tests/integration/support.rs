//! Fake archive pages and test configuration

use kosh_harvester::config::Config;
use std::path::Path;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const AUTHOR: &str = "महादेवी वर्मा";

/// Configuration pointing at the mock server, with near-zero delays
pub fn test_config(server: &MockServer, output_dir: &Path) -> Config {
    let mut config = Config::default();
    config.site.base_url = server.uri();
    config.site.index_path = "/kk/index".to_string();
    config.crawler.delay_min_ms = 0;
    config.crawler.delay_max_ms = 2;
    config.crawler.max_retries = 0;
    config.crawler.request_timeout_secs = 5;
    config.output.output_dir = output_dir.display().to_string();
    config
}

/// Wraps content in the wiki skin, with chrome outside the content region
pub fn wiki_page(content: &str) -> String {
    format!(
        r#"<html><head><title>कविता कोश</title></head><body>
        <div id="p-navigation">
            <a href="/kk/index">रचनाकारों की सूची</a>
            <a href="/kk/elsewhere">बाहर / महादेवी वर्मा</a>
        </div>
        <div id="mw-content-text">{}</div>
        </body></html>"#,
        content
    )
}

pub fn html_response(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "text/html; charset=utf-8")
}

pub async fn mount_page(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(html_response(body))
        .mount(server)
        .await;
}

pub async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// A route that must never be requested
pub async fn mount_untouched(server: &MockServer, route: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(html_response(wiki_page("")))
        .expect(0)
        .mount(server)
        .await;
}

pub fn aansu_page() -> String {
    wiki_page(
        r#"<div class="poem"><p>पहली पंक्ति<br>
        दूसरी पंक्ति</p><p>तीसरी पंक्ति</p></div>
        <p><a href="/kk/Mahadevi">महादेवी वर्मा</a></p>
        <p><a href="/kk/Nirala_Saroj">सरोज स्मृति / निराला</a></p>"#,
    )
}

pub fn yama_page() -> String {
    wiki_page(
        r#"<p>यामा चार संग्रहों का संकलन है।</p>
        <ul>
            <li><a href="/kk/Yama_1">नीहार / महादेवी वर्मा</a></li>
            <li><a href="/kk/Yama_2">रश्मि / महादेवी वर्मा</a></li>
            <li><a href="/kk/Yama_3">नीरजा / महादेवी वर्मा</a></li>
            <li><a href="/kk/Nirala_Saroj">सरोज स्मृति / निराला</a></li>
            <li><a href="/kk/वार्ता:Yama">यामा / महादेवी वर्मा</a></li>
            <li><a href="/kk/Mahadevi">महादेवी वर्मा</a></li>
        </ul>"#,
    )
}

pub fn part_page(line: &str) -> String {
    wiki_page(&format!(r#"<div class="poem"><p>{}</p></div>"#, line))
}

pub fn author_page() -> String {
    wiki_page(
        r#"<h2>रचनाएँ</h2>
        <ul>
            <li><a href="/kk/Aansu">आँसू / महादेवी वर्मा</a></li>
            <li><a href="/kk/Yama">यामा / महादेवी वर्मा</a></li>
            <li><a href="/kk/Hindi">हिन्दी / उर्दू</a></li>
            <li><a href="/kk/More">और रचनाएँ...</a></li>
            <li><a href="/kk/Nirala_Saroj">सरोज स्मृति / निराला</a></li>
        </ul>"#,
    )
}

/// Mounts the author page, both works and the three parts of the multipart work
pub async fn mount_author(server: &MockServer) {
    mount_page(server, "/kk/Mahadevi", author_page()).await;
    mount_page(server, "/kk/Aansu", aansu_page()).await;
    mount_page(server, "/kk/Yama", yama_page()).await;
    mount_page(server, "/kk/Yama_1", part_page("नीहार की पंक्ति")).await;
    mount_page(server, "/kk/Yama_2", part_page("रश्मि की पंक्ति")).await;
    mount_page(server, "/kk/Yama_3", part_page("नीरजा की पंक्ति")).await;
    mount_untouched(server, "/kk/Nirala_Saroj").await;
    mount_untouched(server, "/kk/Hindi").await;
    mount_untouched(server, "/kk/More").await;
    mount_untouched(server, "/kk/elsewhere").await;
}
