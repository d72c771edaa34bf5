//! オセロゲームの盤面状態を管理するモジュール
//! 8x8グリッドの盤面と石の配置、操作を担当する。

use super::types::{Cell, Player, Position};
use serde::{Deserialize, Serialize};

/// 8x8オセロ盤面を表現する構造体
/// 各マスのCell状態を保持し、盤面操作を提供する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 8]; 8],
}

impl Board {
    /// 新しいオセロ盤面を作成する
    /// 中央の4マスに初期配置（交互の2石ずつ）を設定する
    pub fn new() -> Self {
        let mut board = Board {
            cells: [[Cell::Empty; 8]; 8],
        };

        // オセロの標準初期配置
        // (3,3)と(4,4)がComputer、(3,4)と(4,3)がHuman
        board.cells[3][3] = Cell::Disk(Player::Computer);
        board.cells[4][3] = Cell::Disk(Player::Human);
        board.cells[3][4] = Cell::Disk(Player::Human);
        board.cells[4][4] = Cell::Disk(Player::Computer);

        board
    }

    /// 行単位のセル配列（cells[row][col]）から盤面を構築する
    /// テストや合成盤面の構築に使用
    pub fn from_cells(cells: [[Cell; 8]; 8]) -> Self {
        Board { cells }
    }

    /// 指定した位置のセル状態を取得する
    /// Positionは構築時に範囲検証済みのため常に有効
    pub fn get_cell(&self, position: Position) -> Cell {
        self.cells[position.row][position.col]
    }

    /// 指定した位置にセル状態を設定する
    /// 合法性の検証はルールエンジン側の責務のため、クレート内部に限定
    pub(crate) fn set_cell(&mut self, position: Position, cell: Cell) {
        self.cells[position.row][position.col] = cell;
    }

    /// 指定した位置が空かチェックする
    pub fn is_empty(&self, position: Position) -> bool {
        self.get_cell(position) == Cell::Empty
    }

    /// 指定したプレイヤーの石の数を数える
    /// 全64マスをスキャンする
    pub fn count(&self, player: Player) -> u8 {
        let mut count = 0;

        for row in &self.cells {
            for &cell in row {
                if cell == Cell::Disk(player) {
                    count += 1;
                }
            }
        }

        count
    }

    /// 盤面上の石の総数を数える
    pub fn total_disks(&self) -> u8 {
        self.count(Player::Human) + self.count(Player::Computer)
    }

    /// デバッグ用の盤面表示文字列を生成する
    /// ●でHuman、○でComputer、.で空マスを表現
    pub fn display(&self) -> String {
        let mut result = String::new();
        result.push_str("  0 1 2 3 4 5 6 7\n");

        for (row_idx, row) in self.cells.iter().enumerate() {
            result.push_str(&format!("{} ", row_idx));
            for &cell in row {
                let symbol = match cell {
                    Cell::Empty => ".",
                    Cell::Disk(Player::Human) => "●",
                    Cell::Disk(Player::Computer) => "○",
                };
                result.push_str(&format!("{} ", symbol));
            }
            result.push('\n');
        }

        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
