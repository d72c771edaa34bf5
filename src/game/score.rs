//! スコア計算モジュール
//! 盤面から両者の石数と最終結果を導出する純関数を提供する。

use super::board::Board;
use super::types::{Outcome, Player};

/// 現在のスコアを取得する
/// 戻り値: (Humanの石数, Computerの石数)
pub fn score(board: &Board) -> (u8, u8) {
    (board.count(Player::Human), board.count(Player::Computer))
}

/// 石数の比較から最終結果を導出する
/// 同数の場合は引き分け
pub fn outcome(board: &Board) -> Outcome {
    let (human_count, computer_count) = score(board);

    if human_count > computer_count {
        Outcome::HumanWin
    } else if computer_count > human_count {
        Outcome::ComputerWin
    } else {
        Outcome::Draw
    }
}
