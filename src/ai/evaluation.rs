//! 着手評価モジュール
//! 自動対戦相手が候補手の優劣を判定するための評価関数を提供する。
//! 角の優先とフリップによる石数の増分で評価する。

use crate::game::{Board, Player, Position, Rules};

/// 角に置ける手へのボーナス値のデフォルト
pub const DEFAULT_CORNER_BONUS: i32 = 100;

/// 候補手の評価を行う構造体
/// 評価値 = 角ボーナス + 石数の増分（置いた石とフリップの合計）
#[derive(Debug, Clone)]
pub struct MoveEvaluator {
    /// 角の位置への加点
    pub corner_bonus: i32,
}

impl MoveEvaluator {
    pub fn new(corner_bonus: i32) -> Self {
        Self { corner_bonus }
    }

    /// 指定した候補手の評価値を計算する
    ///
    /// 事前条件: 候補手は合法であること。仮適用は使い捨てのコピー上で
    /// 行い、渡された盤面には一切変更を加えない
    pub fn evaluate(&self, board: &Board, player: Player, position: Position) -> i32 {
        let bonus = if position.is_corner() {
            self.corner_bonus
        } else {
            0
        };

        let before = board.count(player) as i32;

        let mut scratch = board.clone();
        Rules::apply_move(&mut scratch, player, position);
        let after = scratch.count(player) as i32;

        bonus + (after - before)
    }
}

impl Default for MoveEvaluator {
    fn default() -> Self {
        Self::new(DEFAULT_CORNER_BONUS)
    }
}
