//! 组装与交付测试
//!
//! 测试项：
//! - 组装按顺序拼接，空序列得到空对象
//! - 文件名格式：去掉第一个 `@`、毫秒时间戳、按类别取扩展名
//! - 交付成功与保存失败时，临时对象都恰好释放一次
//! - `DirectorySaveTarget` 在真实目录中保存并清理 `.part` 文件
//! - `TransferRequest` 只接受 http(s) 绝对地址

use bytes::Bytes;

use crate::media::MediaKind;
use crate::tests::{RecordingSaveTarget, random_bytes};
use crate::transfer::functions::assemble::assemble;
use crate::transfer::functions::deliver::deliver;
use crate::transfer::{
    AssembledMedia, ChunkSequence, DirectorySaveTarget, TransferError, TransferRequest,
    synthesize_filename,
};

// ═══════════════════════════ 组装 ═══════════════════════════

#[test]
fn assemble_concatenates_in_order() {
    let parts: Vec<Vec<u8>> = (0..4).map(|_| random_bytes(257)).collect();
    let mut sequence = ChunkSequence::new();
    for p in &parts {
        sequence.push(Bytes::from(p.clone()));
    }

    let bytes = assemble(sequence);
    assert_eq!(bytes.len(), 4 * 257);
    assert_eq!(bytes.as_ref(), parts.concat().as_slice(), "拼接结果应保持块顺序");
}

#[test]
fn assemble_empty_sequence() {
    assert!(assemble(ChunkSequence::new()).is_empty(), "空序列应得到空对象");
}

// ═══════════════════════════ 文件名 ═══════════════════════════

#[test]
fn filename_strips_first_at_and_uses_extension() {
    assert_eq!(
        synthesize_filename("@dancer", MediaKind::Video, 1_700_000_000_000),
        "dancer_1700000000000.mp4"
    );
    assert_eq!(
        synthesize_filename("@dancer", MediaKind::Audio, 42),
        "dancer_42.mp3"
    );
    assert_eq!(
        synthesize_filename("@@twice", MediaKind::Video, 1),
        "@twice_1.mp4",
        "只去掉第一个 @"
    );
    assert_eq!(synthesize_filename("plain", MediaKind::Audio, 7), "plain_7.mp3");
}

#[test]
fn filename_never_contains_path_separators() {
    let name = synthesize_filename("@../etc/passwd", MediaKind::Video, 1);
    assert!(!name.contains('/') && !name.contains('\\'), "文件名: {name}");
    assert_eq!(name, ".._etc_passwd_1.mp4");
}

#[test]
fn filename_replaces_reserved_characters() {
    assert_eq!(
        synthesize_filename("@a:b*c?d\"e<f>g|h", MediaKind::Video, 1),
        "a_b_c_d_e_f_g_h_1.mp4"
    );
    assert_eq!(
        synthesize_filename("@line\nbreak\ttab", MediaKind::Audio, 2),
        "line_break_tab_2.mp3",
        "控制字符也应替换"
    );
}

#[test]
fn assembled_media_uses_current_millis() {
    let before = chrono::Utc::now().timestamp_millis();
    let media = AssembledMedia::new(Bytes::from_static(b"x"), "@someone", MediaKind::Video);
    let after = chrono::Utc::now().timestamp_millis();

    let stamp: i64 = media
        .filename
        .strip_prefix("someone_")
        .and_then(|s| s.strip_suffix(".mp4"))
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| panic!("文件名格式不符: {}", media.filename));
    assert!((before..=after).contains(&stamp));
    assert_eq!(media.len(), 1);
}

// ═══════════════════════════ 交付 ═══════════════════════════

#[tokio::test]
async fn deliver_saves_once_and_revokes_once() {
    let target = RecordingSaveTarget::new();
    let payload = random_bytes(1000);
    let media = AssembledMedia {
        bytes: Bytes::from(payload.clone()),
        filename: "someone_1.mp4".to_string(),
        kind: MediaKind::Video,
    };

    let saved = deliver(&target, media).await.unwrap();

    assert_eq!(saved.filename, "someone_1.mp4");
    assert_eq!(saved.size, 1000);
    let saves = target.saved();
    assert_eq!(saves.len(), 1, "保存动作应恰好执行一次");
    assert_eq!(saves[0].1.as_ref(), payload.as_slice());
    assert_eq!(target.revoked(), target.created(), "每个临时对象都应被释放");
    assert_eq!(target.revoked().len(), 1);
    assert_eq!(target.live_objects(), 0);
}

#[tokio::test]
async fn deliver_failure_still_revokes_once() {
    let target = RecordingSaveTarget::failing();
    let media = AssembledMedia {
        bytes: Bytes::from(random_bytes(10)),
        filename: "someone_1.mp3".to_string(),
        kind: MediaKind::Audio,
    };

    let result = deliver(&target, media).await;

    assert!(matches!(result, Err(TransferError::DeliveryFailed(_))));
    assert!(target.saved().is_empty());
    assert_eq!(target.revoked().len(), 1, "保存失败也应释放临时对象");
    assert_eq!(target.live_objects(), 0);
}

#[tokio::test]
async fn directory_target_writes_file_and_cleans_part() {
    let dir = tempfile::tempdir().unwrap();
    let target = DirectorySaveTarget::new(dir.path().join("downloads"));
    let payload = random_bytes(4096);
    let media = AssembledMedia {
        bytes: Bytes::from(payload.clone()),
        filename: "someone_99.mp4".to_string(),
        kind: MediaKind::Video,
    };

    let saved = deliver(&target, media).await.unwrap();

    assert_eq!(saved.location, target.dir().join("someone_99.mp4"));
    let written = tokio::fs::read(&saved.location).await.unwrap();
    assert_eq!(written, payload);

    let mut leftovers = Vec::new();
    let mut entries = tokio::fs::read_dir(target.dir()).await.unwrap();
    while let Some(entry) = entries.next_entry().await.unwrap() {
        leftovers.push(entry.file_name().to_string_lossy().into_owned());
    }
    assert_eq!(leftovers, vec!["someone_99.mp4".to_string()], "临时文件应已删除");
}

// ═══════════════════════════ 请求 ═══════════════════════════

#[test]
fn request_rejects_unusable_addresses() {
    for resource in ["", "   ", "/relative/v.mp4", "cdn.example/v.mp4", "ftp://cdn.example/v.mp4"] {
        match TransferRequest::new(MediaKind::Video, resource, "@someone") {
            Err(TransferError::InvalidInput(_)) => {}
            other => panic!("{resource:?} 应被拒绝为 InvalidInput，得到: {:?}", other),
        }
    }
}

#[test]
fn request_accepts_http_and_https() {
    for resource in ["https://cdn.example/v.mp4", "http://cdn.example/a.mp3", "  https://cdn.example/v.mp4  "] {
        let request = TransferRequest::new(MediaKind::Video, resource, "@someone")
            .unwrap_or_else(|e| panic!("{resource:?} 应被接受: {e}"));
        assert_eq!(request.resource_url().as_str(), resource.trim());
    }
}
