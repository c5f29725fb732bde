//! Search tests to verify the engine finds correct moves in various positions.

use mailbox_engine::{
    Move, MoveParseError, Position, PositionError, SearchInfo, SearchParams, Searcher,
    SharedSearcher, Side, MATE_LOWER, STANDARD,
};

fn white(layout: &str) -> Position {
    Position::new(layout, Side::White, "-", "-", &STANDARD).unwrap()
}

/// The engine takes a hanging queen
#[test]
fn captures_free_queen() {
    let root = white("4k3/8/8/3q4/4P3/8/8/4K3");
    let best = Searcher::default().best_move(&root, 3).unwrap();
    assert_eq!(best.to_string(), "e4d5");
}

/// A queen attacked by a pawn moves away rather than staying en prise
#[test]
fn saves_attacked_queen() {
    let root = white("4k3/8/8/8/3p4/4Q3/8/4K3");
    let best = Searcher::default().best_move(&root, 3).unwrap();
    assert!(best.to_string().starts_with("e3"), "{best}");
}

/// Black to move mates on the back rank
#[test]
fn black_finds_back_rank_mate() {
    let root =
        Position::new("4q2k/8/8/8/8/8/5PPP/6K1", Side::Black, "-", "-", &STANDARD).unwrap();
    let mut searcher = Searcher::default();
    let infos: Vec<SearchInfo> = searcher.search(&root, Some(3)).collect();

    let last = infos.last().unwrap();
    assert!(last.score >= MATE_LOWER);
    let best = root.to_absolute(last.best_move.unwrap());
    assert_eq!(best.to_string(), "e8e1");
}

#[test]
fn probes_narrow_the_window() {
    let root = Position::initial(&STANDARD);
    let mut searcher = Searcher::default();
    let mut lower = -MATE_LOWER;
    let mut upper = MATE_LOWER;
    let mut depth = 0;

    for info in searcher.search(&root, Some(3)) {
        if info.depth != depth {
            depth = info.depth;
            lower = -MATE_LOWER;
            upper = MATE_LOWER;
        }
        assert!(lower <= info.gamma && info.gamma <= upper + 1);
        if info.score >= info.gamma {
            lower = info.score;
        } else {
            upper = info.score;
        }
    }
    assert_eq!(depth, 3);
}

#[test]
fn searches_are_repeatable() {
    let root = Position::initial(&STANDARD).make_move("e2e4".parse().unwrap(), &STANDARD);
    let mut searcher = Searcher::default();
    let first: Vec<SearchInfo> = searcher.search(&root, Some(3)).collect();
    let second: Vec<SearchInfo> = searcher.search(&root, Some(3)).collect();
    assert_eq!(first, second);
}

#[test]
fn shared_searcher_matches_plain_searcher() {
    let root = Position::initial(&STANDARD);
    let shared = SharedSearcher::with_params(SearchParams::default());
    let via_shared = shared.think(&root, 2);
    let direct = Searcher::default().search(&root, Some(2)).last();
    assert_eq!(via_shared, direct);
}

#[test]
fn malformed_input_is_rejected() {
    assert!(matches!(
        Position::new("8/8/8/8/8/8/8", Side::White, "-", "-", &STANDARD),
        Err(PositionError::WrongRankCount { found: 7 })
    ));
    assert!(matches!(
        "e2".parse::<Move>(),
        Err(MoveParseError::InvalidLength { len: 2 })
    ));
    assert!(matches!(
        "e7e8k".parse::<Move>(),
        Err(MoveParseError::InvalidPromotion { char: 'k' })
    ));
    assert!("i2i4".parse::<Move>().is_err());
}

#[cfg(feature = "serde")]
#[test]
fn params_roundtrip_through_json() {
    let params = SearchParams {
        tt_entries: 0,
        null_score_limit: 300,
        ..SearchParams::default()
    };
    let json = serde_json::to_string(&params).unwrap();
    let back: SearchParams = serde_json::from_str(&json).unwrap();
    assert_eq!(back, params);

    // Missing fields fall back to defaults.
    let partial: SearchParams = serde_json::from_str(r#"{"qs": 60}"#).unwrap();
    assert_eq!(partial.qs, 60);
    assert_eq!(partial.qs_a, SearchParams::default().qs_a);
}
