use podium::{BrowserName, Speaker};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_speaker_profile_from_json() {
    let mut temp_file = NamedTempFile::new().unwrap();

    let profile = serde_json::json!({
        "first_name": "Grace",
        "last_name": "Hopper",
        "email": "grace@example.com",
        "years_experience": 7,
        "has_blog": true,
        "blog_url": "https://blog.example.com",
        "browser": { "name": "Chrome", "major_version": 126 },
        "certifications": ["CNCF"],
        "employer": "Acme",
        "sessions": [
            { "title": "Modern Cloud", "description": "Serverless patterns" }
        ]
    });

    temp_file
        .write_all(profile.to_string().as_bytes())
        .unwrap();

    let speaker = Speaker::from_json_file(temp_file.path()).unwrap();

    assert_eq!(speaker.first_name, "Grace");
    assert_eq!(speaker.years_experience, Some(7));
    assert_eq!(speaker.browser.name, BrowserName::Chrome);
    assert_eq!(speaker.sessions.len(), 1);
}

#[test]
fn test_partial_profile_fills_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();

    let profile = serde_json::json!({
        "first_name": "Grace",
        "last_name": "Hopper",
        "email": "grace@example.com",
        "sessions": [
            { "title": "Modern Cloud", "description": "Serverless patterns" }
        ]
    });

    temp_file
        .write_all(profile.to_string().as_bytes())
        .unwrap();

    let speaker = Speaker::from_json_file(temp_file.path()).unwrap();

    assert_eq!(speaker.years_experience, None);
    assert!(!speaker.has_blog);
    assert_eq!(speaker.browser.name, BrowserName::Unknown);
    assert!(speaker.certifications.is_empty());
}

#[test]
fn test_malformed_profile_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"{ not json").unwrap();

    assert!(Speaker::from_json_file(temp_file.path()).is_err());
    assert!(Speaker::from_json_file("/nonexistent/speaker.json").is_err());
}
