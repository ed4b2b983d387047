//! Legacy chromedriver bucket listing
//!
//! The legacy storage bucket publishes an S3-style `ListBucketResult` XML
//! document. Each `<Key>` names one archive, e.g. `2.46/chromedriver_linux64.zip`.

use std::sync::LazyLock;

use regex::Regex;
use semver::Version;

use crate::platform::OsFamily;
use crate::version::normalize::normalize;
use crate::version::types::BinaryUrl;

static KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<Key>([^<]*)</Key>").expect("valid regex"));

/// Extract object keys from a bucket listing, in document order.
/// Predefined XML entities in key text are decoded.
///
/// Returns `None` when the body is not a `ListBucketResult` document.
pub fn parse_bucket_keys(xml: &str) -> Option<Vec<String>> {
    if !xml.contains("<ListBucketResult") {
        return None;
    }

    Some(
        KEY_RE
            .captures_iter(xml)
            .map(|caps| unescape_xml(&caps[1]))
            .collect(),
    )
}

/// `&amp;` goes last so `&amp;lt;` decodes to `&lt;`
fn unescape_xml(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Keep the keys usable on the given OS family and architecture.
///
/// - 32-bit hosts drop every key mentioning "64"
/// - only arm64 macs keep keys mentioning "m1"
/// - the key must mention the OS family name
pub fn filter_version_list(keys: &[String], os: OsFamily, arch: &str) -> Vec<String> {
    let is_64_bit = arch.contains("64");
    let is_apple_silicon = os == OsFamily::Mac && arch == "arm64";

    keys.iter()
        .filter(|key| is_64_bit || !key.contains("64"))
        .filter(|key| is_apple_silicon || !key.contains("m1"))
        .filter(|key| key.contains(os.as_str()))
        .cloned()
        .collect()
}

/// Pick the highest version among `<version>/<file>` keys.
///
/// Keys whose version does not normalize are skipped, as are versions above
/// `max_version` when one is given.
pub fn latest_listed(
    keys: &[String],
    base_url: &str,
    max_version: Option<&str>,
) -> Option<BinaryUrl> {
    let cap = max_version.and_then(|max| Version::parse(&normalize(max)).ok());

    keys.iter()
        .filter_map(|key| {
            let (dir, _) = key.split_once('/')?;
            let normalized = normalize(dir);
            let parsed = Version::parse(&normalized).ok()?;
            Some((key, normalized, parsed))
        })
        .filter(|(_, _, parsed)| cap.as_ref().is_none_or(|cap| parsed <= cap))
        .max_by(|(_, _, a), (_, _, b)| a.cmp(b))
        .map(|(key, normalized, _)| BinaryUrl {
            url: format!("{base_url}{key}"),
            version: normalized,
        })
}
