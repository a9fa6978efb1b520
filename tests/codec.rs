// Board file format guard rails: the documented fixture, round-tripping, and
// malformed-line rejection.

#[path = "support/common.rs"]
mod common;

use aacboard::{codec, BoardError};
use anyhow::Result;
use common::{keys, sample_board, SAMPLE_BOARD};

#[test]
fn parse_matches_the_documented_fixture() -> Result<()> {
    let mut board = codec::parse(SAMPLE_BOARD)?;
    assert_eq!(
        keys(&board),
        ["img/food/plate.png", "img/clothing/hanger.png"]
    );
    assert_eq!(board.select("img/food/plate.png")?, "");
    assert_eq!(board.select("img/food/watermelon.png")?, "watermelon");
    Ok(())
}

#[test]
fn serialize_reproduces_the_source_text() -> Result<()> {
    let board = codec::parse(SAMPLE_BOARD)?;
    assert_eq!(codec::serialize(&board), SAMPLE_BOARD);
    Ok(())
}

// A board built purely through the API survives serialize/parse with
// identical keys at every navigable state and identical select results.
#[test]
fn round_trip_preserves_every_navigable_state() -> Result<()> {
    let original = sample_board()?;
    let text = codec::serialize(&original);
    let reparsed = codec::parse(&text)?;

    assert_eq!(keys(&original), keys(&reparsed));
    for (key, name) in original.top_level() {
        let ours = original.category(name).expect("category present");
        let theirs = reparsed
            .category(name)
            .unwrap_or_else(|| panic!("category '{name}' lost in round trip"));
        assert_eq!(ours.image_keys(), theirs.image_keys());
        for (leaf, utterance) in ours.iter() {
            assert_eq!(theirs.select(leaf.as_str())?, utterance);
        }
        assert!(reparsed.has_image(key.as_str()));
    }
    assert_eq!(codec::serialize(&reparsed), text);
    Ok(())
}

#[test]
fn category_text_with_spaces_round_trips() -> Result<()> {
    let text = "img/p.png things to wear\n>img/s.png long sleeve shirt\n";
    let mut board = codec::parse(text)?;
    board.select("img/p.png")?;
    assert_eq!(board.select("img/s.png")?, "long sleeve shirt");
    assert_eq!(codec::serialize(&board), text);
    Ok(())
}

#[test]
fn malformed_line_reports_position_and_content() {
    let err = codec::parse("img/p.png food\nbroken-line\n").unwrap_err();
    match err {
        BoardError::MalformedLine { line, content } => {
            assert_eq!(line, 2);
            assert_eq!(content, "broken-line");
        }
        other => panic!("expected MalformedLine, got {other:?}"),
    }
}

#[test]
fn item_line_before_any_category_is_rejected() {
    assert!(matches!(
        codec::parse(">img/f.png fries\nimg/p.png food\n"),
        Err(BoardError::MalformedLine { line: 1, .. })
    ));
}
