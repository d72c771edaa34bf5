//! ゲームの基本型定義モジュール
//! オセロゲームで使用される基本的な型とenum、構造体を定義する。

use serde::{Deserialize, Serialize};

/// ゲームのプレイヤーを表すenum
/// Humanが先手、Computerが自動対戦相手
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    /// 相手プレイヤーを返す
    pub fn opponent(self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// プレイヤーを対応するセル状態に変換する
    pub fn cell(self) -> Cell {
        Cell::Disk(self)
    }
}

/// 盤面の各マスの状態を表現するenum
/// 石が置かれている場合はその持ち主を保持する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Disk(Player),
}

/// 8x8盤面上の座標を表す構造体
/// col, rowともに0-7の範囲で有効
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub col: usize,
    pub row: usize,
}

impl Position {
    /// 範囲チェック付きのコンストラクタ
    /// 8x8盤面の範囲外の座標の場合はNoneを返す
    pub fn new(col: usize, row: usize) -> Option<Position> {
        if col < 8 && row < 8 {
            Some(Position { col, row })
        } else {
            None
        }
    }

    /// 盤面上の全64マスを行優先（行が外側、列が内側）で列挙する
    pub fn all() -> impl Iterator<Item = Position> {
        (0..8).flat_map(|row| (0..8).map(move |col| Position { col, row }))
    }

    /// 四隅のいずれかであるかチェックする
    pub fn is_corner(&self) -> bool {
        (self.col == 0 || self.col == 7) && (self.row == 0 || self.row == 7)
    }
}

/// ゲームの最終結果を表すenum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    HumanWin,
    ComputerWin,
    Draw,
}

/// ゲームの1手を表現する構造体
/// 手の情報とひっくり返された石の位置、タイムスタンプを保持する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub player: Player,
    pub position: Position,
    pub flipped: Vec<Position>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl Move {
    /// 新しい手を作成する
    /// タイムスタンプは現在時刻で自動設定される
    pub fn new(player: Player, position: Position, flipped: Vec<Position>) -> Self {
        Self {
            player,
            position,
            flipped,
            timestamp: chrono::Utc::now(),
        }
    }
}
