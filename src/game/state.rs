//! ゲーム状態管理モジュール
//! 手番の状態機械（交代、パス、終局）と盤面・履歴の保持を担当する。

use super::board::Board;
use super::rules::Rules;
use super::score;
use super::types::{Move, Outcome, Player, Position};
use crate::error::{GameError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 手番の状態を表すenum
/// 「どちらの手番でもない」はPlayerに畳み込まず、独立した状態として扱う
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    /// 指定したプレイヤーの手番
    ToMove(Player),
    /// 両者とも合法手がなく終局
    GameOver,
}

/// 1回の状態遷移の種類を表すenum
/// 表示層が「交代」「スキップ」「終局」を区別して描画するために使う
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    /// 手番が相手に移った
    Switched(Player),
    /// skippedに合法手がなく、nextが連続して打つ
    Skipped { skipped: Player, next: Player },
    /// 両者とも合法手がなく終局した
    Finished(Outcome),
}

/// オセロゲームの全体状態を保持する構造体
/// 盤面、手番、手の履歴を1ゲームのライフタイムで所有する
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: Turn,
    move_history: Vec<Move>,
    created_at: DateTime<Utc>,
    last_updated: DateTime<Utc>,
}

impl GameState {
    /// 新しいゲーム状態を作成する
    /// 初期状態：Humanの手番でゲーム開始
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            board: Board::new(),
            turn: Turn::ToMove(Player::Human),
            move_history: Vec::new(),
            created_at: now,
            last_updated: now,
        }
    }

    /// 任意の盤面と手番からゲーム状態を作成する
    /// テストで合成盤面を使う場合に使用
    pub fn with_board(board: Board, to_move: Player) -> Self {
        let now = Utc::now();
        Self {
            board,
            turn: Turn::ToMove(to_move),
            move_history: Vec::new(),
            created_at: now,
            last_updated: now,
        }
    }

    /// 現在の手番プレイヤーの着手を適用し、状態を遷移させる
    ///
    /// 無効な入力（終局後、非合法マス）は盤面にも手番にも一切影響を
    /// 与えずエラーを返す
    pub fn play(&mut self, position: Position) -> Result<TurnEvent> {
        let mover = match self.turn {
            Turn::ToMove(player) => player,
            Turn::GameOver => return Err(GameError::GameFinished),
        };

        if !Rules::is_legal(&self.board, mover, position) {
            return Err(GameError::IllegalMove {
                col: position.col,
                row: position.row,
            });
        }

        let flipped = Rules::apply_move(&mut self.board, mover, position);
        self.move_history.push(Move::new(mover, position, flipped));
        self.last_updated = Utc::now();

        Ok(self.advance(mover))
    }

    /// 着手後の手番遷移を行う
    /// 1. 相手に合法手があれば交代
    /// 2. なければ着手側が継続（相手の手番スキップ）
    /// 3. 両者とも合法手がなければ終局
    fn advance(&mut self, mover: Player) -> TurnEvent {
        let next = mover.opponent();

        if Rules::has_legal_move(&self.board, next) {
            self.turn = Turn::ToMove(next);
            return TurnEvent::Switched(next);
        }

        if Rules::has_legal_move(&self.board, mover) {
            // 相手はパス、着手側が連続して打つ
            self.turn = Turn::ToMove(mover);
            return TurnEvent::Skipped {
                skipped: next,
                next: mover,
            };
        }

        self.turn = Turn::GameOver;
        TurnEvent::Finished(score::outcome(&self.board))
    }

    /// 現在の手番プレイヤーの合法手を取得する
    /// 終局後は空集合を返す
    pub fn legal_moves(&self) -> Vec<Position> {
        match self.turn {
            Turn::ToMove(player) => Rules::legal_moves(&self.board, player),
            Turn::GameOver => Vec::new(),
        }
    }

    /// 現在の手番を取得する
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// 現在の手番プレイヤーを取得する（終局後はNone）
    pub fn current_player(&self) -> Option<Player> {
        match self.turn {
            Turn::ToMove(player) => Some(player),
            Turn::GameOver => None,
        }
    }

    /// ゲームが終了しているかチェックする
    pub fn is_finished(&self) -> bool {
        self.turn == Turn::GameOver
    }

    /// 盤面への参照を取得する
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 現在のスコアを取得する
    /// 戻り値: (Humanの石数, Computerの石数)
    pub fn score(&self) -> (u8, u8) {
        score::score(&self.board)
    }

    /// 現在の盤面から導出した結果を取得する
    pub fn outcome(&self) -> Outcome {
        score::outcome(&self.board)
    }

    /// これまでの手の履歴を取得する
    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }

    /// これまでの手数を取得する
    pub fn move_count(&self) -> usize {
        self.move_history.len()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
