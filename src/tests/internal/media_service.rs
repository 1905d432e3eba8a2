//! 媒体服务测试
//!
//! 测试项：
//! - 链接识别与视频 id 解析
//! - 提取接口的信封：成功、服务端消息、兜底文案
//! - 标注接口的请求格式与解析
//! - 合并规则：标注优先，失败时退回原始字段
//! - 可选：`src/tests/env/live.env` 存在时请求真实服务

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::media::{
    Annotation, DEFAULT_ANNOTATOR_BASE_URL, DEFAULT_ANNOTATOR_MODEL, DEFAULT_EXTRACTOR_BASE_URL,
    FALLBACK_TAG, FALLBACK_TITLE, GENERIC_FAILURE_MESSAGE, GeminiAnnotator,
    INVALID_URL_MESSAGE, MediaAnnotator, MediaService, MediaServiceError, MetadataExtractor,
    RawMediaInfo, SERVER_ERROR_MESSAGE, ServiceConfig, TikwmExtractor, is_platform_link,
    parse_video_id,
};
use crate::tests::load_live_config_optional;

const LINK: &str = "https://www.tiktok.com/@dancer/video/7312345678901234567";

fn raw_info() -> RawMediaInfo {
    RawMediaInfo {
        play: "https://cdn.example/play.mp4".to_string(),
        music: "https://cdn.example/music.mp3".to_string(),
        cover: "https://cdn.example/cover.jpg".to_string(),
        duration: 27,
        title: "周末的舞蹈练习 #dance".to_string(),
        author_unique_id: "dancer".to_string(),
    }
}

struct FixedExtractor {
    result: fn() -> Result<RawMediaInfo, MediaServiceError>,
    calls: AtomicUsize,
}

#[async_trait]
impl MetadataExtractor for FixedExtractor {
    async fn extract(&self, _url: &str) -> Result<RawMediaInfo, MediaServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.result)()
    }
}

struct FixedAnnotator {
    result: fn() -> Result<Annotation, MediaServiceError>,
}

#[async_trait]
impl MediaAnnotator for FixedAnnotator {
    async fn annotate(&self, _url: &str) -> Result<Annotation, MediaServiceError> {
        (self.result)()
    }
}

fn service_with(
    extract: fn() -> Result<RawMediaInfo, MediaServiceError>,
    annotate: fn() -> Result<Annotation, MediaServiceError>,
) -> (MediaService, Arc<FixedExtractor>) {
    let extractor = Arc::new(FixedExtractor {
        result: extract,
        calls: AtomicUsize::new(0),
    });
    let service = MediaService::with_collaborators(
        extractor.clone(),
        Arc::new(FixedAnnotator { result: annotate }),
    );
    (service, extractor)
}

// ═══════════════════════════ 链接 ═══════════════════════════

#[test]
fn recognizes_platform_links() {
    assert!(is_platform_link(LINK));
    assert!(is_platform_link("https://vm.tiktok.com/ZMabc/"));
    assert!(!is_platform_link("https://www.youtube.com/watch?v=1"));
    assert!(!is_platform_link("   "));
}

#[test]
fn parses_video_id() {
    assert_eq!(parse_video_id(LINK), Some("7312345678901234567"));
    assert_eq!(
        parse_video_id("https://www.tiktok.com/@a/video/123?is_from_webapp=1"),
        Some("123")
    );
    assert_eq!(parse_video_id("https://vm.tiktok.com/ZMabc/"), None, "短链没有 id");
    assert_eq!(parse_video_id("https://www.tiktok.com/@a/video/"), None);
}

#[test]
fn default_config_points_at_public_endpoints() {
    let config = ServiceConfig::default();
    assert_eq!(config.extractor_base_url, DEFAULT_EXTRACTOR_BASE_URL);
    assert_eq!(config.annotator_base_url, DEFAULT_ANNOTATOR_BASE_URL);
    assert_eq!(config.annotator_model, DEFAULT_ANNOTATOR_MODEL);
    assert!(config.api_key.is_empty(), "默认不带密钥");
}

// ═══════════════════════════ 合并规则 ═══════════════════════════

#[tokio::test]
async fn annotation_fields_take_priority() {
    let (service, _) = service_with(
        || Ok(raw_info()),
        || {
            Ok(Annotation {
                title: Some("舞蹈练习".to_string()),
                author: Some("@dancer_official".to_string()),
                tags: Some(vec!["#dance".to_string(), "#weekend".to_string()]),
            })
        },
    );

    let result = service.extract_media(LINK).await.unwrap();

    assert_eq!(result.title, "舞蹈练习");
    assert_eq!(result.author, "@dancer_official");
    assert_eq!(result.tags, Some(vec!["#dance".to_string(), "#weekend".to_string()]));
    assert_eq!(result.video_url, "https://cdn.example/play.mp4");
    assert_eq!(result.audio_url, "https://cdn.example/music.mp3");
    assert_eq!(result.thumbnail, "https://cdn.example/cover.jpg");
    assert_eq!(result.duration.as_deref(), Some("27s"));
    assert_eq!(result.description.as_deref(), Some("周末的舞蹈练习 #dance"));
    assert_eq!(result.url.as_deref(), Some(LINK));
}

#[tokio::test]
async fn annotation_failure_falls_back_to_raw_fields() {
    let (service, _) = service_with(
        || Ok(raw_info()),
        || Err(MediaServiceError::UpstreamFailure("配额用尽".to_string())),
    );

    let result = service.extract_media(LINK).await.unwrap();

    assert_eq!(result.title, "周末的舞蹈练习 #dance", "标注失败时标题退回原始文案");
    assert_eq!(result.author, "@dancer");
    assert_eq!(result.tags, Some(vec![FALLBACK_TAG.to_string()]));
}

#[tokio::test]
async fn empty_fields_use_fallback_title() {
    let (service, _) = service_with(
        || {
            Ok(RawMediaInfo {
                title: String::new(),
                ..raw_info()
            })
        },
        || {
            Ok(Annotation {
                title: Some("  ".to_string()),
                author: None,
                tags: Some(Vec::new()),
            })
        },
    );

    let result = service.extract_media(LINK).await.unwrap();

    assert_eq!(result.title, FALLBACK_TITLE);
    assert_eq!(result.tags, Some(vec![FALLBACK_TAG.to_string()]));
}

#[tokio::test]
async fn invalid_url_makes_no_requests() {
    let (service, extractor) = service_with(|| Ok(raw_info()), || Ok(Annotation::default()));

    match service.extract_media("https://vm.tiktok.com/ZMabc/").await {
        Err(MediaServiceError::InvalidInput(msg)) => assert_eq!(msg, INVALID_URL_MESSAGE),
        other => panic!("预期 InvalidInput，得到: {:?}", other),
    }
    assert_eq!(extractor.calls.load(Ordering::SeqCst), 0, "无效链接不应发起请求");
}

#[tokio::test]
async fn extractor_failure_is_returned() {
    let (service, _) = service_with(
        || Err(MediaServiceError::UpstreamFailure("视频不存在".to_string())),
        || Ok(Annotation::default()),
    );

    let err = service.extract_media(LINK).await.unwrap_err();
    assert_eq!(err.user_message(), "视频不存在");
}

// ═══════════════════════════ 提取接口 ═══════════════════════════

async fn tikwm_returning(body: serde_json::Value) -> (MockServer, TikwmExtractor) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/"))
        .and(query_param("url", LINK))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;
    let extractor = TikwmExtractor::new(reqwest::Client::new(), format!("{}/api/", server.uri()));
    (server, extractor)
}

#[tokio::test]
async fn tikwm_success_envelope() {
    let (_server, extractor) = tikwm_returning(json!({
        "code": 0,
        "msg": "success",
        "data": {
            "title": "周末的舞蹈练习 #dance",
            "cover": "https://cdn.example/cover.jpg",
            "duration": 27,
            "play": "https://cdn.example/play.mp4",
            "music": "https://cdn.example/music.mp3",
            "author": { "unique_id": "dancer", "nickname": "Dancer" }
        }
    }))
    .await;

    let info = extractor.extract(LINK).await.unwrap();
    assert_eq!(info, raw_info());
}

#[tokio::test]
async fn tikwm_error_uses_server_message() {
    let (_server, extractor) =
        tikwm_returning(json!({ "code": -1, "msg": "Url parsing is failed!" })).await;

    let err = extractor.extract(LINK).await.unwrap_err();
    assert_eq!(err.user_message(), "Url parsing is failed!");
}

#[tokio::test]
async fn tikwm_error_without_message_uses_default() {
    let (_server, extractor) = tikwm_returning(json!({ "code": -1 })).await;

    let err = extractor.extract(LINK).await.unwrap_err();
    assert_eq!(err.user_message(), SERVER_ERROR_MESSAGE);
}

#[tokio::test]
async fn tikwm_error_with_partial_data_uses_server_message() {
    let (_server, extractor) = tikwm_returning(json!({
        "code": -1,
        "msg": "Url parsing is failed!",
        "data": { "title": "只有标题" }
    }))
    .await;

    let err = extractor.extract(LINK).await.unwrap_err();
    assert!(
        matches!(err, MediaServiceError::UpstreamFailure(_)),
        "失败信封里的残缺 data 不应被解码，得到: {:?}",
        err
    );
    assert_eq!(err.user_message(), "Url parsing is failed!");
}

#[tokio::test]
async fn tikwm_success_code_with_null_data_is_failure() {
    let (_server, extractor) = tikwm_returning(json!({ "code": 0, "data": null })).await;

    let err = extractor.extract(LINK).await.unwrap_err();
    assert_eq!(err.user_message(), SERVER_ERROR_MESSAGE);
}

#[tokio::test]
async fn tikwm_garbage_is_generic_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;
    let extractor = TikwmExtractor::new(reqwest::Client::new(), format!("{}/api/", server.uri()));

    let err = extractor.extract(LINK).await.unwrap_err();
    assert!(matches!(err, MediaServiceError::Decode(_)));
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
}

// ═══════════════════════════ 标注接口 ═══════════════════════════

fn gemini_reply(annotation: serde_json::Value) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "parts": [{ "text": annotation.to_string() }], "role": "model" }
        }]
    })
}

#[tokio::test]
async fn gemini_annotation_is_parsed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/test-model:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply(json!({
            "title": "舞蹈练习",
            "author": "@dancer",
            "tags": ["#dance"]
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let annotator = GeminiAnnotator::new(
        reqwest::Client::new(),
        format!("{}/v1beta/", server.uri()),
        "test-model",
        "test-key",
    );
    let annotation = annotator.annotate(LINK).await.unwrap();

    assert_eq!(
        annotation,
        Annotation {
            title: Some("舞蹈练习".to_string()),
            author: Some("@dancer".to_string()),
            tags: Some(vec!["#dance".to_string()]),
        }
    );
}

#[tokio::test]
async fn gemini_without_key_fails_fast() {
    let annotator = GeminiAnnotator::new(
        reqwest::Client::new(),
        "http://127.0.0.1:1/v1beta/",
        "test-model",
        "",
    );
    assert!(matches!(
        annotator.annotate(LINK).await,
        Err(MediaServiceError::UpstreamFailure(_))
    ));
}

#[tokio::test]
async fn gemini_error_status_is_upstream_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({ "error": { "code": 429 } })))
        .mount(&server)
        .await;

    let annotator =
        GeminiAnnotator::new(reqwest::Client::new(), server.uri(), "test-model", "test-key");
    assert!(matches!(
        annotator.annotate(LINK).await,
        Err(MediaServiceError::UpstreamFailure(_))
    ));
}

// ═══════════════════════════ 组合 ═══════════════════════════

#[tokio::test]
async fn service_from_config_against_mock_servers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "data": {
                "title": "原始文案",
                "cover": "c",
                "duration": 9,
                "play": "https://cdn.example/p.mp4",
                "music": "https://cdn.example/m.mp3",
                "author": { "unique_id": "dancer" }
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-3-flash-preview:generateContent"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(gemini_reply(json!({ "title": "AI 标题", "author": "@ai" }))),
        )
        .mount(&server)
        .await;

    let config = ServiceConfig::default()
        .with_extractor_base_url(format!("{}/api/", server.uri()))
        .with_annotator_base_url(format!("{}/v1beta", server.uri()))
        .with_api_key("test-key");
    let result = MediaService::from_config(&config)
        .unwrap()
        .extract_media(LINK)
        .await
        .unwrap();

    assert_eq!(result.title, "AI 标题");
    assert_eq!(result.author, "@ai");
    assert_eq!(result.tags, Some(vec![FALLBACK_TAG.to_string()]));
    assert_eq!(result.duration.as_deref(), Some("9s"));
    assert_eq!(result.description.as_deref(), Some("原始文案"));
}

/// 真实服务：需要 `src/tests/env/live.env`，否则跳过
#[tokio::test]
async fn live_extraction_optional() {
    let Some(config) = load_live_config_optional() else {
        println!("[live] 未找到 live.env，跳过");
        return;
    };

    match MediaService::from_config(&config).unwrap().extract_media(LINK).await {
        Ok(result) => {
            assert!(!result.title.is_empty());
            println!("[live] {} / {}", result.title, result.author);
        }
        Err(e) => eprintln!("[live] 提取失败: {}", e),
    }
}
