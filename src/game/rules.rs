//! オセロのルールとゲームロジック実装モジュール
//! 合法手の判定、石のフリップ処理、終局判定などを担当する。

use super::board::Board;
use super::types::{Cell, Player, Position};

/// 盤面上の8方向への移動ベクトル
/// 上下左右および斜めの8方向で石のフリップをチェックする
const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1), (0, -1), (1, -1),  // 左上、上、右上
    (-1, 0),           (1, 0),   // 左、右
    (-1, 1),  (0, 1),  (1, 1),   // 左下、下、右下
];

/// オセロのルールを実装する構造体
/// スタティックメソッドのみを提供する
pub struct Rules;

impl Rules {
    /// 指定した位置に指定したプレイヤーが置けるかチェックする
    /// 空のマスで、かつ相手の石を少なくとも1個フリップできる必要がある
    /// いずれかの方向が成立した時点で探索を打ち切る
    pub fn is_legal(board: &Board, player: Player, position: Position) -> bool {
        if !board.is_empty(position) {
            return false;
        }

        DIRECTIONS
            .iter()
            .any(|&direction| !Self::ray_flips(board, player, position, direction).is_empty())
    }

    /// 指定した位置に石を置いた場合にフリップされる石の位置を全て返す
    /// 8方向それぞれを独立に走査し、成立した方向の相手石を全て集める
    pub fn flips(board: &Board, player: Player, position: Position) -> Vec<Position> {
        let mut flipped = Vec::new();

        for &direction in &DIRECTIONS {
            flipped.extend(Self::ray_flips(board, player, position, direction));
        }

        flipped
    }

    /// 1方向のレイスキャン
    /// 隣から相手の石が1個以上連続し、空マスに遮られずに自分の石で
    /// 終端する場合のみ、その連続部分を返す。成立しなければ空を返す
    fn ray_flips(
        board: &Board,
        player: Player,
        position: Position,
        (dc, dr): (i8, i8),
    ) -> Vec<Position> {
        let own = player.cell();
        let other = player.opponent().cell();

        let mut run = Vec::new();
        let mut col = position.col as i8 + dc;
        let mut row = position.row as i8 + dr;

        while (0..8).contains(&col) && (0..8).contains(&row) {
            let current = Position {
                col: col as usize,
                row: row as usize,
            };

            let cell = board.get_cell(current);
            if cell == other {
                // 相手の石を発見、フリップ候補に追加
                run.push(current);
            } else if cell == own {
                // 自分の石で終端、この方向のフリップが確定
                return run;
            } else {
                // 空マス、この方向のフリップは無効
                break;
            }

            col += dc;
            row += dr;
        }

        // 盤端まで自分の石が現れなかった
        Vec::new()
    }

    /// 指定したプレイヤーの合法手を全て取得する
    /// 盤面全体を行優先でスキャンする
    pub fn legal_moves(board: &Board, player: Player) -> Vec<Position> {
        Position::all()
            .filter(|&position| Self::is_legal(board, player, position))
            .collect()
    }

    /// 指定したプレイヤーに合法手があるかチェックする
    /// パス判定に使用される
    pub fn has_legal_move(board: &Board, player: Player) -> bool {
        Position::all().any(|position| Self::is_legal(board, player, position))
    }

    /// 指定した位置に手を適用し、盤面を更新する
    /// 戻り値はフリップされた石の位置リスト
    ///
    /// 事前条件: `is_legal`が真であること。本メソッドは再検証を行わない
    /// （合法性チェックと適用の非対称分割）。相手の色は常に着手した
    /// プレイヤーから導出し、手番などの外部状態には依存しない
    pub fn apply_move(board: &mut Board, player: Player, position: Position) -> Vec<Position> {
        let flipped = Self::flips(board, player, position);
        debug_assert!(
            board.is_empty(position) && !flipped.is_empty(),
            "apply_move called without a prior legality check: ({}, {})",
            position.col,
            position.row
        );

        board.set_cell(position, player.cell());
        for &flip_pos in &flipped {
            board.set_cell(flip_pos, player.cell());
        }

        flipped
    }

    /// 終局判定（両プレイヤーとも合法手がない）
    /// 盤面が埋まっていない中盤でも成立しうる
    pub fn is_game_over(board: &Board) -> bool {
        !Self::has_legal_move(board, Player::Human) && !Self::has_legal_move(board, Player::Computer)
    }
}
