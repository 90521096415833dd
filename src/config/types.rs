use serde::Deserialize;
use url::Url;

/// Main configuration structure for Kosh-Harvester
///
/// Every section is optional; a missing section falls back to the defaults
/// for the Kavita Kosh archive.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
    pub filters: FilterConfig,
}

/// Layout of the archive being harvested
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Scheme and host that relative links are resolved against
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Path of the top-level author index page
    #[serde(rename = "index-path")]
    pub index_path: String,

    /// Path prefix shared by all article links
    #[serde(rename = "article-prefix")]
    pub article_prefix: String,

    /// Category and talk namespace prefixes that never lead to content
    #[serde(rename = "namespace-prefixes")]
    pub namespace_prefixes: Vec<String>,

    /// Main content region; anchors are only collected inside it
    #[serde(rename = "content-selector")]
    pub content_selector: String,

    /// Poem containers, tried in order before the main content region
    #[serde(rename = "poem-selectors")]
    pub poem_selectors: Vec<String>,
}

impl SiteConfig {
    /// Absolute URL of the author index page
    pub fn index_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.base_url)?.join(&self.index_path)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://kavitakosh.org".to_string(),
            index_path: "/kk/रचनाकारों_की_सूची".to_string(),
            article_prefix: "/kk/".to_string(),
            namespace_prefixes: vec!["/kk/श्रेणी:".to_string(), "/kk/वार्ता:".to_string()],
            content_selector: "#mw-content-text".to_string(),
            poem_selectors: vec![
                ".poem".to_string(),
                "#poem".to_string(),
                "div.mw-content-ltr".to_string(),
            ],
        }
    }
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum number of authors taken from the index page
    #[serde(rename = "max-authors")]
    pub max_authors: usize,

    /// Lower bound of the politeness pause (milliseconds)
    #[serde(rename = "delay-min-ms")]
    pub delay_min_ms: u64,

    /// Upper bound of the politeness pause (milliseconds)
    #[serde(rename = "delay-max-ms")]
    pub delay_max_ms: u64,

    /// Per-request timeout (seconds)
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// Timeout for establishing a connection (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,

    /// Retries for transient failures (transport errors, 5xx, 429)
    #[serde(rename = "max-retries")]
    pub max_retries: u32,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_authors: 3140,
            delay_min_ms: 1000,
            delay_max_ms: 2000,
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
            max_retries: 2,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,
}

impl UserAgentConfig {
    /// Formats the User-Agent header value
    pub fn header_value(&self) -> String {
        format!(
            "Mozilla/5.0 (compatible; {}/{}; +{})",
            self.crawler_name, self.crawler_version, self.contact_url
        )
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "KoshHarvester".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://example.com".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory that receives one JSON document per author
    #[serde(rename = "output-dir")]
    pub output_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: "poets".to_string(),
        }
    }
}

/// Link text denylists
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Site navigation and UI labels
    #[serde(rename = "navigation-labels")]
    pub navigation_labels: Vec<String>,

    /// Language section labels
    #[serde(rename = "language-labels")]
    pub language_labels: Vec<String>,
}

const NAVIGATION_LABELS: &[&str] = &[
    "पृष्ठ",
    "स्रोत देखें",
    "इतिहास",
    "चर्चा",
    "लॉग इन",
    "लॉगिन",
    "कविता कोश खोज",
    "ई-पत्रिकाएँ",
    "ई-पुस्तकें",
    "विधाएँ",
    "विषय",
    "फ़िल्मी गीत",
    "फ़िल्मी गीत",
    "अनुवाद",
    "श्रेणी",
    "मुखपृष्ठ",
    "विदेशी",
    "कविता कोश",
    "महत्त्वपूर्ण कड़ियाँ",
    "नए जुड़े पन्नों की सूची",
    "अन्य भाषाएँ",
    "टाइपिंग टूल्स",
    "गद्य कोश",
    "रचनाकारों की सूची",
];

const LANGUAGE_LABELS: &[&str] = &[
    "हिन्दी",
    "हिन्दी / उर्दू",
    "उर्दू",
    "भोजपुरी",
    "मैथिली",
    "राजस्थानी",
    "अंगिका",
    "अवधी",
    "नेपाली",
    "हरियाणवी",
    "ब्रज भाषा",
    "संस्कृतम्",
    "छत्तीसगढ़ी",
    "सिन्धी",
    "मराठी",
    "गुजराती",
    "पालि",
    "गढ़वाली",
];

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            navigation_labels: NAVIGATION_LABELS.iter().map(|s| s.to_string()).collect(),
            language_labels: LANGUAGE_LABELS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
