//! プロパティベーステスト
//! ランダムな入力列に対してエンジンの不変条件を検証する。

use std::time::Duration;

use proptest::prelude::*;

use othello_core::ai::{FixedPolicy, GreedyPolicy, MovePolicy};
use othello_core::game::{GameState, Position};
use othello_core::session::MatchSession;

/// 範囲外も含むクリック座標の戦略
fn click_strategy() -> impl Strategy<Value = (usize, usize)> {
    (0usize..10, 0usize..10)
}

proptest! {
    /// ランダムなクリック列を処理しても、着手のたびに石がちょうど1つ増え、
    /// 失敗した入力は盤面に影響しない
    #[test]
    fn test_disk_conservation_under_random_clicks(
        clicks in prop::collection::vec(click_strategy(), 1..60)
    ) {
        let mut session =
            MatchSession::with_policy(Box::new(FixedPolicy::first_candidate()), Duration::ZERO);

        for (col, row) in clicks {
            let before = session.state().board().total_disks();

            match session.on_cell_clicked(col, row) {
                Ok(update) => {
                    prop_assert_eq!(session.state().board().total_disks(), before + 1);

                    // テストではタイマーを即時発火させてComputerの手番を消化する
                    let mut timer = update.timer;
                    while let Some(request) = timer {
                        let turn_before = session.state().board().total_disks();
                        match session.on_computer_timer(request.token) {
                            Ok(Some(next)) => {
                                prop_assert_eq!(
                                    session.state().board().total_disks(),
                                    turn_before + 1
                                );
                                timer = next.timer;
                            }
                            Ok(None) => break,
                            Err(e) => prop_assert!(false, "timer error: {}", e),
                        }
                    }
                }
                Err(_) => {
                    prop_assert_eq!(session.state().board().total_disks(), before);
                }
            }
        }

        // スナップショットは常に8x8で、スコアと盤面の石数が一致する
        let snapshot = session.snapshot();
        prop_assert_eq!(snapshot.board.len(), 8);
        for row in &snapshot.board {
            prop_assert_eq!(row.len(), 8);
        }
        prop_assert_eq!(
            snapshot.human_count + snapshot.computer_count,
            session.state().board().total_disks()
        );
        prop_assert!(session.state().board().total_disks() <= 64);

        // 合法手は必ず空マスを指す
        for position in &snapshot.legal_moves {
            prop_assert!(session.state().board().is_empty(*position));
        }
    }

    /// 合法でない着手は状態を一切変更しない
    #[test]
    fn test_illegal_moves_never_mutate(
        inputs in prop::collection::vec((0usize..8, 0usize..8), 1..40)
    ) {
        let mut state = GameState::new();

        for (col, row) in inputs {
            if state.is_finished() {
                break;
            }

            let position = Position::new(col, row).unwrap();
            let board_before = state.board().clone();
            let turn_before = state.turn();
            let legal = state.legal_moves().contains(&position);

            match state.play(position) {
                Ok(_) => {
                    prop_assert!(legal);
                    // 手番がある限り、そのプレイヤーには必ず合法手がある
                    prop_assert!(
                        state.current_player().is_none() || !state.legal_moves().is_empty()
                    );
                }
                Err(_) => {
                    prop_assert!(!legal);
                    prop_assert_eq!(state.board(), &board_before);
                    prop_assert_eq!(state.turn(), turn_before);
                }
            }
        }
    }

    /// 同一局面・同一候補に対する貪欲ポリシーの選択は決定的
    #[test]
    fn test_greedy_policy_is_deterministic(
        choices in prop::collection::vec(0usize..16, 0..30)
    ) {
        let mut state = GameState::new();

        // ランダムな手順で中盤の局面を作る
        for choice in choices {
            if state.is_finished() {
                break;
            }
            let moves = state.legal_moves();
            if moves.is_empty() {
                break;
            }
            let position = moves[choice % moves.len()];
            state.play(position).unwrap();
        }

        if let Some(player) = state.current_player() {
            let candidates = state.legal_moves();
            prop_assert!(!candidates.is_empty());

            let policy = GreedyPolicy::new();
            let first = policy.select_move(state.board(), player, &candidates).unwrap();
            let second = policy.select_move(state.board(), player, &candidates).unwrap();

            prop_assert_eq!(first, second);
            prop_assert!(candidates.contains(&first));
        }
    }

    /// 手の履歴は着手数と一致し、タイムスタンプは単調非減少
    #[test]
    fn test_move_history_is_consistent(
        choices in prop::collection::vec(0usize..16, 1..30)
    ) {
        let mut state = GameState::new();

        for choice in choices {
            if state.is_finished() {
                break;
            }
            let moves = state.legal_moves();
            let position = moves[choice % moves.len()];
            state.play(position).unwrap();
        }

        let history = state.move_history();
        prop_assert_eq!(history.len(), state.move_count());
        for pair in history.windows(2) {
            prop_assert!(pair[0].timestamp <= pair[1].timestamp);
        }
        // 各着手は少なくとも1石をフリップしている
        for entry in history {
            prop_assert!(!entry.flipped.is_empty());
        }
    }
}
