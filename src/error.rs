//! アプリケーション全体のエラー定義モジュール
//! ゲームロジックと自動対戦相手のエラーを統一管理。

use thiserror::Error;

/// ゲームロジックに関連するエラー
#[derive(Debug, Error)]
pub enum GameError {
    #[error("座標が範囲外です: ({col}, {row})")]
    OutOfRange { col: usize, row: usize },

    #[error("無効な着手です: ({col}, {row})")]
    IllegalMove { col: usize, row: usize },

    #[error("プレイヤーの手番ではありません")]
    NotHumanTurn,

    #[error("ゲームは既に終了しています")]
    GameFinished,

    #[error("相手側の着手計算に失敗: {source}")]
    Ai {
        #[from]
        source: AiError,
    },
}

/// 自動対戦相手（着手ポリシー）に関連するエラー
#[derive(Debug, Error)]
pub enum AiError {
    #[error("合法手がありません")]
    NoLegalMoves,

    #[error("ポリシーエラー: {message}")]
    PolicyError { message: String },
}

/// ゲームエラーをベースとした結果型
pub type Result<T> = std::result::Result<T, GameError>;
