use serde::Deserialize;

use chess_moves::board::{Board, Position};

#[derive(Deserialize)]
struct CaseSet {
    cases: Vec<Case>,
}

#[derive(Deserialize)]
struct Case {
    name: String,
    placement: String,
    square: String,
    targets: Vec<String>,
}

fn parse_all(squares: &[String]) -> Vec<Position> {
    let mut out: Vec<Position> = squares
        .iter()
        .map(|s| s.parse().expect("invalid square in cases.json"))
        .collect();
    out.sort();
    out
}

#[test]
fn movegen_case_suite() {
    let data = include_str!("data/cases.json");
    let set: CaseSet = serde_json::from_str(data).expect("invalid cases.json");
    assert!(!set.cases.is_empty());

    for case in &set.cases {
        let board = Board::try_from_placement(&case.placement)
            .unwrap_or_else(|e| panic!("{}: {e}", case.name));
        let from: Position = case.square.parse().expect("invalid square");

        let mut got = board.moves_from(from);
        got.sort();
        assert_eq!(got, parse_all(&case.targets), "case '{}'", case.name);
    }
}

#[test]
fn every_square_round_trips_through_notation() {
    for file in 'a'..='h' {
        for rank in '1'..='8' {
            let text = format!("{file}{rank}");
            let pos: Position = text.parse().unwrap();
            assert_eq!(pos.to_string(), text);
        }
    }
}

#[test]
fn standard_board_renders_and_generates() {
    let board = Board::standard_seeded(2024);
    let bottom = board.bottom_color().expect("standard board records its orientation");
    assert_eq!(board.moves_for(bottom).len(), 20);
    assert_eq!(board.moves_for(bottom.opponent()).len(), 20);
    assert_eq!(board.to_string().lines().count(), 8);
}
