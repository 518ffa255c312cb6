use crate::artifacts::{ArtifactRecord, ArtifactsAction, BuildIdentity, S3Artifact};
use chrono::{DateTime, TimeZone, Utc};

/// Build `my-app#42`, the build most tests attach artifacts to
pub fn create_test_build() -> BuildIdentity {
    BuildIdentity::new("my-app", 42)
}

/// Creates a test ArtifactRecord stored in `test-bucket` in us-east-1
///
/// # Arguments
///
/// * `name` - The artifact's relative path as uploaded
/// * `show_directly_in_browser` - Whether downloads may render inline
pub fn create_test_record(name: &str, show_directly_in_browser: bool) -> ArtifactRecord {
    ArtifactRecord {
        artifact: S3Artifact {
            bucket: "test-bucket".to_string(),
            name: name.to_string(),
            region: "us-east-1".to_string(),
            use_full_project_name: true,
        },
        show_directly_in_browser,
        md5sum: None,
        keep_forever: false,
    }
}

/// Creates a test ArtifactsAction for the `default` profile
pub fn create_test_action(records: Vec<ArtifactRecord>) -> ArtifactsAction {
    ArtifactsAction {
        profile: "default".to_string(),
        artifacts: records,
    }
}

/// A fixed, whole-second issue time so signed URLs are reproducible
pub fn fixed_issue_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
}
