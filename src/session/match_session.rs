//! 対局セッション管理モジュール
//! 表示層との境界となるイベント処理（クリック、タイマー、リセット）と
//! 状態変化の通知、自動対戦相手のタイマー契約を担当する。

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ai::{GreedyPolicy, MovePolicy};
use crate::config::EngineConfig;
use crate::error::{GameError, Result};
use crate::game::{score, GameState, Outcome, Player, Position, Turn, TurnEvent};

/// 自動対戦相手のタイマーを識別するトークン
/// リセットや新しいスケジュールで無効化され、古い発火は無視される
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerToken(u64);

/// 表示層（外部スケジューラ）へのタイマー要求
/// 同時に有効なタイマーは常に1つだけ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerRequest {
    pub token: TimerToken,
    pub delay: Duration,
}

/// 表示層が描画に使うゲーム状態のスナップショット
/// 盤面全体、合法手、手番、スコア、終局結果を含む
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// board[row][col]、石がなければNone
    pub board: Vec<Vec<Option<Player>>>,
    pub turn: Turn,
    /// 現在の手番プレイヤーの合法手（マスのハイライト用）
    pub legal_moves: Vec<Position>,
    pub human_count: u8,
    pub computer_count: u8,
    /// 終局時のみSome
    pub outcome: Option<Outcome>,
    pub move_count: u32,
}

impl GameSnapshot {
    /// ゲーム状態からスナップショットを構築する
    pub fn from_state(state: &GameState) -> Self {
        let mut board = vec![vec![None; 8]; 8];
        for position in Position::all() {
            if let crate::game::Cell::Disk(player) = state.board().get_cell(position) {
                board[position.row][position.col] = Some(player);
            }
        }

        let (human_count, computer_count) = state.score();
        let outcome = if state.is_finished() {
            Some(score::outcome(state.board()))
        } else {
            None
        };

        Self {
            board,
            turn: state.turn(),
            legal_moves: state.legal_moves(),
            human_count,
            computer_count,
            outcome,
            move_count: state.move_count() as u32,
        }
    }
}

/// 1回のイベント処理の結果として表示層へ渡す通知
#[derive(Debug, Clone)]
pub struct MatchUpdate {
    /// 直前の遷移の種類（交代・スキップ・終局）
    pub event: TurnEvent,
    /// 遷移後の全体スナップショット
    pub snapshot: GameSnapshot,
    /// Computerの手番になった場合のみSome
    pub timer: Option<TimerRequest>,
}

/// 人間対Computerの1対局を駆動するセッション
/// 盤面の唯一の所有者であり、イベントを1件ずつ完結して処理する
pub struct MatchSession {
    pub id: Uuid,
    state: GameState,
    policy: Box<dyn MovePolicy>,
    computer_delay: Duration,
    timer_seq: u64,
    created_at: DateTime<Utc>,
}

impl MatchSession {
    /// 設定に基づいてセッションを作成する
    /// 着手ポリシーは貪欲法（角優先）
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_policy(
            Box::new(GreedyPolicy::with_corner_bonus(config.corner_bonus)),
            config.computer_move_delay,
        )
    }

    /// 任意のポリシーと遅延でセッションを作成する
    /// テストで固定手ポリシーを使う場合に使用
    pub fn with_policy(policy: Box<dyn MovePolicy>, computer_delay: Duration) -> Self {
        Self {
            id: Uuid::new_v4(),
            state: GameState::new(),
            policy,
            computer_delay,
            timer_seq: 0,
            created_at: Utc::now(),
        }
    }

    /// 盤面のマスがクリックされた時の処理
    ///
    /// Humanの手番でなければ着手せずエラーを返す。無効な入力は
    /// 盤面にも手番にも影響しない（表示層は無視してよい）
    pub fn on_cell_clicked(&mut self, col: usize, row: usize) -> Result<MatchUpdate> {
        let position = Position::new(col, row).ok_or(GameError::OutOfRange { col, row })?;

        match self.state.turn() {
            Turn::GameOver => return Err(GameError::GameFinished),
            Turn::ToMove(Player::Computer) => return Err(GameError::NotHumanTurn),
            Turn::ToMove(Player::Human) => {}
        }

        let event = self.state.play(position)?;
        Ok(self.build_update(event))
    }

    /// 自動対戦相手のタイマーが発火した時の処理
    ///
    /// 無効化済みトークンやComputerの手番でない発火はOk(None)で無視する
    /// （リセット後に残った古いタイマーが着手してしまうのを防ぐ）
    pub fn on_computer_timer(&mut self, token: TimerToken) -> Result<Option<MatchUpdate>> {
        if token != TimerToken(self.timer_seq) {
            return Ok(None);
        }
        if self.state.turn() != Turn::ToMove(Player::Computer) {
            return Ok(None);
        }

        let candidates = self.state.legal_moves();
        let position = self
            .policy
            .select_move(self.state.board(), Player::Computer, &candidates)?;

        let event = self.state.play(position)?;
        Ok(Some(self.build_update(event)))
    }

    /// ゲームを初期状態から再構築する
    /// 保留中のタイマーは無効化される。連続して呼んでも結果は同じ
    pub fn reset(&mut self) -> GameSnapshot {
        self.state = GameState::new();
        self.timer_seq += 1;
        GameSnapshot::from_state(&self.state)
    }

    /// 遷移イベントから通知を組み立てる
    /// Computerの手番になった場合は新しいタイマーを要求する
    fn build_update(&mut self, event: TurnEvent) -> MatchUpdate {
        let timer = if self.state.turn() == Turn::ToMove(Player::Computer) {
            Some(self.schedule_timer())
        } else {
            None
        };

        MatchUpdate {
            event,
            snapshot: GameSnapshot::from_state(&self.state),
            timer,
        }
    }

    /// 新しいタイマートークンを発行する
    /// 発行と同時に以前のトークンは無効になる
    fn schedule_timer(&mut self) -> TimerRequest {
        self.timer_seq += 1;
        TimerRequest {
            token: TimerToken(self.timer_seq),
            delay: self.computer_delay,
        }
    }

    /// ゲーム状態への参照を取得する
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// 現在のスナップショットを取得する
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from_state(&self.state)
    }

    /// セッションの作成時刻を取得する
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
