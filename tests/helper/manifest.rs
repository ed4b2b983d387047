//! Manifest fixtures

use driver_resolver::platform::Platform;

pub fn download_url(version: &str, platform: Platform) -> String {
    format!(
        "https://storage.googleapis.com/chrome-for-testing-public/{version}/{platform}/chromedriver-{platform}.zip"
    )
}

fn driver_downloads(version: &str, platforms: &[Platform]) -> String {
    platforms
        .iter()
        .map(|p| {
            format!(
                r#"{{"platform": "{}", "url": "{}"}}"#,
                p,
                download_url(version, *p)
            )
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// last-known-good-versions-with-downloads.json with a single Stable channel
pub fn channel_manifest(stable_version: &str, platforms: &[Platform]) -> String {
    format!(
        r#"{{
            "timestamp": "2023-11-15T08:09:24.584Z",
            "channels": {{
                "Stable": {{
                    "channel": "Stable",
                    "version": "{stable_version}",
                    "revision": "1217362",
                    "downloads": {{
                        "chromedriver": [{}]
                    }}
                }}
            }}
        }}"#,
        driver_downloads(stable_version, platforms)
    )
}

/// known-good-versions-with-downloads.json
pub fn versions_manifest(versions: &[(&str, Vec<Platform>)]) -> String {
    let records = versions
        .iter()
        .map(|(version, platforms)| {
            format!(
                r#"{{"version": "{version}", "revision": "1", "downloads": {{"chromedriver": [{}]}}}}"#,
                driver_downloads(version, platforms)
            )
        })
        .collect::<Vec<_>>()
        .join(",");

    format!(r#"{{"timestamp": "2023-11-15T08:09:24.584Z", "versions": [{records}]}}"#)
}

/// ListBucketResult XML for the given object keys
pub fn bucket_listing(keys: &[&str]) -> String {
    let contents: String = keys
        .iter()
        .map(|k| format!("<Contents><Key>{k}</Key><Size>1</Size></Contents>"))
        .collect();
    format!(
        "<?xml version='1.0' encoding='UTF-8'?><ListBucketResult xmlns='http://doc.s3.amazonaws.com/2006-03-01'><Name>chromedriver</Name>{contents}</ListBucketResult>"
    )
}
