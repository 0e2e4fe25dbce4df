use screenplay_rust::{create_parser, parse_screenplay, summarize_script, ScriptFormat, ScriptParser};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_extension_dispatch() {
    let dir = tempdir().expect("无法创建临时目录");

    // .fountain → Fountain解析器（Title:元数据只有它识别）
    let fountain_path = dir.path().join("draft.fountain");
    fs::write(
        &fountain_path,
        "Title: Draft\n\nINT. LAB - NIGHT\n\nBeakers bubble.\n",
    )
    .unwrap();
    let doc = parse_screenplay(&fountain_path, None).expect("解析fountain文件失败");
    assert_eq!(doc.title, "Draft");
    assert_eq!(doc.scenes.len(), 1);

    // .fdx → FDX解析器（页数按场景数估算）
    let fdx_path = dir.path().join("draft.fdx");
    fs::write(
        &fdx_path,
        r#"<FinalDraft><Content><Paragraph Type="Scene Heading"><Text>EXT. DOCKS - DAWN</Text></Paragraph></Content></FinalDraft>"#,
    )
    .unwrap();
    let doc = parse_screenplay(&fdx_path, None).expect("解析fdx文件失败");
    assert_eq!(doc.scenes.len(), 1);
    assert_eq!(doc.page_count, 1);
    assert_eq!(doc.scenes[0].time_of_day, "DAWN");

    // 其他扩展名一律按纯文本
    let txt_path = dir.path().join("draft.screenplay");
    fs::write(&txt_path, "INT. LAB - NIGHT\n\nBeakers bubble.\n").unwrap();
    let doc = parse_screenplay(&txt_path, None).expect("解析文本文件失败");
    assert_eq!(doc.scenes.len(), 1);
    assert_eq!(doc.title, "");
}

#[test]
fn test_lossy_decoding() {
    let dir = tempdir().expect("无法创建临时目录");
    let path = dir.path().join("broken.txt");

    // 含有非法UTF-8字节的文件照常解析，不报错
    fs::write(&path, b"INT. CAVE - NIGHT\n\nA torch fli\xffckers.\n").unwrap();
    let doc = parse_screenplay(&path, None).expect("非法字节应该被替换而不是报错");

    assert_eq!(doc.scenes.len(), 1);
    assert_eq!(doc.scenes[0].action.len(), 1);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().expect("无法创建临时目录");
    let missing = dir.path().join("no_such_file.txt");

    assert!(
        parse_screenplay(&missing, None).is_err(),
        "文件不存在应该返回IO错误"
    );
}

#[test]
fn test_dialogue_detail_capability() {
    // 对白明细的不对称是接口契约的一部分
    assert!(create_parser(ScriptFormat::Text).supports_dialogue_detail());
    assert!(!create_parser(ScriptFormat::Fountain).supports_dialogue_detail());
    assert!(!create_parser(ScriptFormat::Fdx).supports_dialogue_detail());
}

#[test]
fn test_summary_view() {
    let dir = tempdir().expect("无法创建临时目录");
    let path = dir.path().join("crew.txt");

    let script = r#"INT. MINE SHAFT - DAY

ALPHA
We dig.

BRAVO
We dig more.

CHARLIE
Deeper.

DELTA
Careful.

ECHO
Too deep.
"#;
    fs::write(&path, script).unwrap();
    let doc = parse_screenplay(&path, None).unwrap();
    let summary = summarize_script(&doc);

    println!("{}", summary);

    assert!(summary.contains("Scenes: 1"));
    assert!(summary.contains("Characters: 5"));
    assert!(summary.contains("Est. Pages: 1"));
    assert!(summary.contains("  1. INT. MINE SHAFT - DAY"));
    // 每个场景最多列4个角色，超出折叠
    assert!(
        summary.contains("ALPHA, BRAVO, CHARLIE, DELTA (+1 more)"),
        "超出4个角色应该折叠为 +N more"
    );
}

#[test]
fn test_untitled_summary() {
    let dir = tempdir().expect("无法创建临时目录");
    let path = dir.path().join("bare.txt");

    fs::write(&path, "INT. NOWHERE - NIGHT\n\nNothing happens.\n").unwrap();
    let doc = parse_screenplay(&path, None).unwrap();
    let summary = summarize_script(&doc);

    assert!(summary.starts_with("Title: Untitled"), "无标题时显示Untitled");
}
