//! Tests for the negamax search engine.

use strictly_tictactoe::search::{DRAW, LOSS, WIN};
use strictly_tictactoe::{Board, Outcome, Player, score_moves, search};

fn parse(s: &str) -> Board {
    s.parse().expect("valid board")
}

#[test]
fn test_immediate_win_in_top_row() {
    // X X . / O O . / . . .
    let board = parse("XX. OO. ...");
    let result = search(&board, Player::X);
    assert_eq!(result.best_move, Some(2));
    assert_eq!(result.score, WIN);
}

#[test]
fn test_immediate_win_in_column() {
    // . . . / X O . / X . O
    let board = parse("... XO. X.O");
    let result = search(&board, Player::X);
    assert_eq!(result.best_move, Some(0));
    assert_eq!(result.score, WIN);
}

#[test]
fn test_immediate_win_for_o() {
    // X . X / . O . / . O X
    let board = parse("X.X .O. .OX");
    let result = search(&board, Player::O);
    assert_eq!(result.best_move, Some(1));
    assert_eq!(result.score, WIN);
}

#[test]
fn test_blocks_opponent_two_in_a_row() {
    // . . . / . O . / X X .
    let board = parse("... .O. XX.");
    let result = search(&board, Player::O);
    assert_eq!(result.best_move, Some(8));
    assert_eq!(result.score, DRAW);
}

#[test]
fn test_blocks_at_lowest_threat() {
    // X X . / . O . / . . .
    let board = parse("XX. .O. ...");
    assert_eq!(search(&board, Player::O).best_move, Some(2));
}

#[test]
fn test_center_reply_is_not_losing() {
    let board = Board::new().apply_move(4, Player::X);
    let result = search(&board, Player::O);
    assert!(result.score >= DRAW);
    let reply = result.best_move.expect("move available");
    assert!(board.is_vacant(reply));
}

#[test]
fn test_lost_position_scores_loss() {
    // X . X / . O . / X . O: X threatens 1 and 3, O can block only one.
    let board = parse("X.X .O. X.O");
    assert_eq!(board.to_move(), Player::O);
    let result = search(&board, Player::O);
    assert_eq!(result.score, LOSS);
    assert!(result.best_move.is_some());
}

#[test]
fn test_search_is_deterministic() {
    for text in ["... ... ...", "X.. ... ...", "X.. .O. ..X", "XO. .X. ..O"] {
        let board = parse(text);
        let player = board.to_move();
        assert_eq!(search(&board, player), search(&board, player));
    }
}

#[test]
fn test_scores_are_bounded() {
    for text in ["... ... ...", "X.. .O. ...", "XO. .X. ...", "XX. OO. ...", "XOX OXX OXO"] {
        let board = parse(text);
        for player in [Player::X, Player::O] {
            let score = search(&board, player).score;
            assert!((LOSS..=WIN).contains(&score), "score {score} on {text}");
        }
    }
}

#[test]
fn test_optimal_self_play_draws() {
    let mut board = Board::new();
    let mut player = Player::X;
    while !board.winner().is_terminal() {
        let pos = search(&board, player).best_move.expect("move available");
        assert!(board.is_vacant(pos));
        board = board.apply_move(pos, player);
        player = player.opponent();
    }
    assert_eq!(board.winner(), Outcome::Draw);
}

#[test]
fn test_empty_board_value_is_draw() {
    let result = search(&Board::new(), Player::X);
    assert_eq!(result.score, DRAW);
    assert_eq!(result.best_move, Some(0));
}

#[test]
fn test_score_moves_agrees_with_search() {
    let board = parse("X.. .O. ..X");
    let player = board.to_move();
    let scores = score_moves(&board, player);

    let cells: Vec<usize> = scores.iter().map(|(pos, _)| *pos).collect();
    assert_eq!(cells, board.empty_cells());

    let best = search(&board, player);
    let top = scores.iter().map(|(_, score)| *score).max().expect("moves");
    assert_eq!(top, best.score);
    let first_best = scores
        .iter()
        .find(|(_, score)| *score == top)
        .map(|(pos, _)| *pos);
    assert_eq!(first_best, best.best_move);
}

#[test]
fn test_score_moves_marks_winning_square() {
    let board = parse("XX. OO. ...");
    let scores = score_moves(&board, Player::X);
    assert_eq!(scores.first(), Some(&(2, WIN)));
}
