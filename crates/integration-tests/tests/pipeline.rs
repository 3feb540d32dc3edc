//! End-to-end runs of the handler against mocked TTS and Supabase

mod harness;

use std::sync::Arc;

use harness::config::ConfigBuilder;
use harness::mock_supabase::{MockSupabase, header};
use harness::mock_tts::{AUDIO, MockTts};
use podcaster_core::{PodcastError, Stage};
use podcaster_runtime::JobRunner;
use serde_json::json;

fn runner(config: &podcaster_config::Config) -> JobRunner {
    JobRunner::new(Arc::new(podcaster_runtime::build_handler(config).unwrap()))
}

fn event(podcast_id: &str, script: &str) -> serde_json::Value {
    json!({"input": {"podcast_id": podcast_id, "podcast_script": script}})
}

#[tokio::test]
async fn generates_uploads_and_marks_ready() {
    let tts = MockTts::start().await;
    let supabase = MockSupabase::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigBuilder::new(&supabase.url(), &tts.base_url(), dir.path()).build();

    let output = runner(&config).run(&event("abc123", "Hello world")).await.unwrap();

    assert_eq!(output, "abc123");
    assert_eq!(tts.scripts().await, ["Hello world"]);

    let uploads = supabase.uploads().await;
    assert_eq!(uploads.len(), 1);
    let upload = &uploads[0];
    assert_eq!(upload.url.path(), "/storage/v1/object/podcasts/abc123.mp3");
    assert_eq!(header(upload, "content-type"), Some("audio/mpeg"));
    assert_eq!(header(upload, "cache-control"), Some("max-age=3600"));
    assert_eq!(header(upload, "x-upsert"), Some("false"));
    assert_eq!(header(upload, "authorization"), Some("Bearer service-key"));
    assert_eq!(upload.body, AUDIO);

    let updates = supabase.updates().await;
    assert_eq!(updates.len(), 1);
    let update = &updates[0];
    assert_eq!(update.url.path(), "/rest/v1/podcasts");
    assert_eq!(update.url.query(), Some("id=eq.abc123"));
    assert_eq!(
        serde_json::from_slice::<serde_json::Value>(&update.body).unwrap(),
        json!({"status": "READY"})
    );

    assert!(!dir.path().join("abc123.mp3").exists());
}

#[tokio::test]
async fn keeps_artifact_when_configured() {
    let tts = MockTts::start().await;
    let supabase = MockSupabase::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigBuilder::new(&supabase.url(), &tts.base_url(), dir.path())
        .keep_artifacts()
        .build();

    runner(&config).run(&event("abc123", "Hello world")).await.unwrap();

    assert_eq!(std::fs::read(dir.path().join("abc123.mp3")).unwrap(), AUDIO);
}

#[tokio::test]
async fn empty_script_makes_no_downstream_calls() {
    let tts = MockTts::start().await;
    let supabase = MockSupabase::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigBuilder::new(&supabase.url(), &tts.base_url(), dir.path()).build();

    let err = runner(&config).run(&event("abc123", "")).await.unwrap_err();

    assert!(matches!(err, PodcastError::InvalidInput(_)));
    assert!(tts.scripts().await.is_empty());
    assert!(supabase.uploads().await.is_empty());
    assert!(supabase.updates().await.is_empty());
}

#[tokio::test]
async fn synthesis_failure_leaves_nothing_behind() {
    let tts = MockTts::failing(500).await;
    let supabase = MockSupabase::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigBuilder::new(&supabase.url(), &tts.base_url(), dir.path()).build();

    let err = runner(&config).run(&event("abc123", "Hello world")).await.unwrap_err();

    assert!(matches!(err, PodcastError::Synthesis(_)));
    assert!(!dir.path().join("abc123.mp3").exists());
    assert!(supabase.uploads().await.is_empty());
    assert!(supabase.updates().await.is_empty());
}

#[tokio::test]
async fn duplicate_upload_skips_status_update() {
    let tts = MockTts::start().await;
    let supabase = MockSupabase::duplicate_uploads().await;
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigBuilder::new(&supabase.url(), &tts.base_url(), dir.path()).build();

    let err = runner(&config).run(&event("abc123", "Hello world")).await.unwrap_err();

    assert!(matches!(err, PodcastError::Storage(_)));
    assert_eq!(err.stage(), Stage::Uploading);
    assert!(err.to_string().contains("already exists"));
    assert!(supabase.updates().await.is_empty());
    assert!(dir.path().join("abc123.mp3").exists());
}

#[tokio::test]
async fn upsert_allows_regenerating() {
    let tts = MockTts::start().await;
    let supabase = MockSupabase::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigBuilder::new(&supabase.url(), &tts.base_url(), dir.path())
        .with_upsert()
        .build();
    let runner = runner(&config);

    runner.run(&event("abc123", "Hello world")).await.unwrap();
    runner.run(&event("abc123", "Hello again")).await.unwrap();

    let uploads = supabase.uploads().await;
    assert_eq!(uploads.len(), 2);
    assert!(uploads.iter().all(|upload| header(upload, "x-upsert") == Some("true")));
    assert_eq!(supabase.updates().await.len(), 2);
}

#[tokio::test]
async fn built_in_config_reads_environment() {
    let tts = MockTts::start().await;
    let supabase = MockSupabase::start().await;
    let dir = tempfile::tempdir().unwrap();

    let supabase_url = supabase.url();
    let tts_url = format!("{}/v1", tts.base_url());
    let artifact_dir = dir.path().display().to_string();

    let config = temp_env::with_vars(
        [
            ("SUPABASE_URL", Some(supabase_url.as_str())),
            ("SUPABASE_KEY", Some("service-key")),
            ("TTS_API_KEY", Some("sk-test")),
            ("TTS_BASE_URL", Some(tts_url.as_str())),
            ("PODCASTER_ARTIFACT_DIR", Some(artifact_dir.as_str())),
            ("PODCASTER_BUCKET", None),
            ("TTS_PROVIDER", None),
            ("TTS_MODEL", None),
            ("TTS_VOICE", None),
            ("TTS_SPEED", None),
        ],
        podcaster_config::Config::load_default,
    )
    .unwrap();

    let output = runner(&config).run(&event("abc123", "Hello world")).await.unwrap();

    assert_eq!(output, "abc123");
    assert_eq!(supabase.uploads().await[0].url.path(), "/storage/v1/object/podcasts/abc123.mp3");
}
