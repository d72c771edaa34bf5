//! 着手ポリシーの実装モジュール
//! 自動対戦相手の手の選択を統一されたインターフェースで提供する。

use super::evaluation::MoveEvaluator;
use crate::error::AiError;
use crate::game::{Board, Player, Position};

/// 着手ポリシーの共通インターフェース
/// 異なる選択アルゴリズムを統一して扱うためのtrait
pub trait MovePolicy: Send + Sync {
    /// 合法手の候補から1手を選択する
    /// 候補が空の場合はNoLegalMovesを返す（呼び出し側は空で呼ばないこと）
    fn select_move(
        &self,
        board: &Board,
        player: Player,
        candidates: &[Position],
    ) -> Result<Position, AiError>;

    /// ポリシーの名前を返す
    fn name(&self) -> &'static str;
}

/// 1手読みの貪欲ポリシー
/// 角を最優先し、次に石数の増分が最大の手を選ぶ。先読みはしない
#[derive(Debug, Clone, Default)]
pub struct GreedyPolicy {
    evaluator: MoveEvaluator,
}

impl GreedyPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// 角ボーナスを指定して作成する
    pub fn with_corner_bonus(corner_bonus: i32) -> Self {
        Self {
            evaluator: MoveEvaluator::new(corner_bonus),
        }
    }
}

impl MovePolicy for GreedyPolicy {
    /// 候補を渡された順に評価し、評価値が真に大きい手のみ採用する
    /// 同点は先に見つかった候補が残るため、結果は決定的
    fn select_move(
        &self,
        board: &Board,
        player: Player,
        candidates: &[Position],
    ) -> Result<Position, AiError> {
        let mut best: Option<(Position, i32)> = None;

        for &candidate in candidates {
            let value = self.evaluator.evaluate(board, player, candidate);

            match best {
                Some((_, best_value)) if value <= best_value => {}
                _ => best = Some((candidate, value)),
            }
        }

        best.map(|(position, _)| position)
            .ok_or(AiError::NoLegalMoves)
    }

    fn name(&self) -> &'static str {
        "GreedyPolicy"
    }
}

/// テスト用の固定手ポリシー
/// 指定した手が候補に含まれればそれを、なければ先頭の候補を返す
#[derive(Debug, Clone, Default)]
pub struct FixedPolicy {
    pub fixed_move: Option<Position>,
}

impl FixedPolicy {
    pub fn new(position: Position) -> Self {
        Self {
            fixed_move: Some(position),
        }
    }

    /// 常に先頭の候補を返すポリシーを作成する
    pub fn first_candidate() -> Self {
        Self { fixed_move: None }
    }
}

impl MovePolicy for FixedPolicy {
    fn select_move(
        &self,
        _board: &Board,
        _player: Player,
        candidates: &[Position],
    ) -> Result<Position, AiError> {
        if candidates.is_empty() {
            return Err(AiError::NoLegalMoves);
        }

        match self.fixed_move {
            Some(position) if candidates.contains(&position) => Ok(position),
            _ => Ok(candidates[0]),
        }
    }

    fn name(&self) -> &'static str {
        "FixedPolicy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Rules};

    #[test]
    fn test_greedy_policy_initial_board() {
        let board = Board::new();
        let policy = GreedyPolicy::new();
        let candidates = Rules::legal_moves(&board, Player::Computer);

        let position = policy.select_move(&board, Player::Computer, &candidates).unwrap();

        // 初期盤面は全候補が同点（増分2）のため、先頭の候補が選ばれる
        assert_eq!(position, candidates[0]);
    }

    #[test]
    fn test_greedy_policy_deterministic() {
        let board = Board::new();
        let policy = GreedyPolicy::new();
        let candidates = Rules::legal_moves(&board, Player::Computer);

        let first = policy.select_move(&board, Player::Computer, &candidates).unwrap();
        for _ in 0..10 {
            let again = policy.select_move(&board, Player::Computer, &candidates).unwrap();
            assert_eq!(first, again);
        }
    }

    #[test]
    fn test_greedy_policy_prefers_corner_over_bigger_flip() {
        // 角(0,0)はフリップ1石、(0,4)はフリップ4石
        let mut cells = [[Cell::Empty; 8]; 8];
        cells[0][1] = Cell::Disk(Player::Human);    // (1,0)
        cells[0][2] = Cell::Disk(Player::Computer); // (2,0)
        cells[4][1] = Cell::Disk(Player::Human);    // (1,4)
        cells[4][2] = Cell::Disk(Player::Human);    // (2,4)
        cells[4][3] = Cell::Disk(Player::Human);    // (3,4)
        cells[4][4] = Cell::Disk(Player::Human);    // (4,4)
        cells[4][5] = Cell::Disk(Player::Computer); // (5,4)
        let board = Board::from_cells(cells);

        let policy = GreedyPolicy::new();
        let candidates = Rules::legal_moves(&board, Player::Computer);
        assert!(candidates.contains(&Position::new(0, 0).unwrap()));
        assert!(candidates.contains(&Position::new(0, 4).unwrap()));

        let position = policy.select_move(&board, Player::Computer, &candidates).unwrap();
        assert_eq!(position, Position::new(0, 0).unwrap());
    }

    #[test]
    fn test_greedy_policy_tie_keeps_first_candidate() {
        // (0,2)と(0,4)はどちらもフリップ1石で同点
        let mut cells = [[Cell::Empty; 8]; 8];
        cells[2][1] = Cell::Disk(Player::Human);    // (1,2)
        cells[2][2] = Cell::Disk(Player::Computer); // (2,2)
        cells[4][1] = Cell::Disk(Player::Human);    // (1,4)
        cells[4][2] = Cell::Disk(Player::Computer); // (2,4)
        let board = Board::from_cells(cells);

        let policy = GreedyPolicy::new();
        let candidates = Rules::legal_moves(&board, Player::Computer);
        assert_eq!(
            candidates,
            vec![Position::new(0, 2).unwrap(), Position::new(0, 4).unwrap()]
        );

        let position = policy.select_move(&board, Player::Computer, &candidates).unwrap();
        assert_eq!(position, Position::new(0, 2).unwrap());
    }

    #[test]
    fn test_greedy_policy_empty_candidates() {
        let board = Board::new();
        let policy = GreedyPolicy::new();

        let result = policy.select_move(&board, Player::Computer, &[]);
        assert!(matches!(result, Err(AiError::NoLegalMoves)));
    }

    #[test]
    fn test_fixed_policy() {
        let board = Board::new();
        let candidates = Rules::legal_moves(&board, Player::Human);
        let target = candidates[2];

        let policy = FixedPolicy::new(target);
        let position = policy.select_move(&board, Player::Human, &candidates).unwrap();
        assert_eq!(position, target);
    }

    #[test]
    fn test_fixed_policy_falls_back_to_first() {
        let board = Board::new();
        let candidates = Rules::legal_moves(&board, Player::Human);

        // 候補に含まれない手を指定した場合は先頭の候補を返す
        let policy = FixedPolicy::new(Position::new(0, 0).unwrap());
        let position = policy.select_move(&board, Player::Human, &candidates).unwrap();
        assert_eq!(position, candidates[0]);
    }

    #[test]
    fn test_fixed_policy_empty_candidates() {
        let board = Board::new();
        let policy = FixedPolicy::first_candidate();

        let result = policy.select_move(&board, Player::Human, &[]);
        assert!(matches!(result, Err(AiError::NoLegalMoves)));
    }

    #[test]
    fn test_policy_trait_object() {
        let board = Board::new();
        let candidates = Rules::legal_moves(&board, Player::Computer);
        let policy: Box<dyn MovePolicy> = Box::new(GreedyPolicy::new());

        assert_eq!(policy.name(), "GreedyPolicy");
        assert!(policy.select_move(&board, Player::Computer, &candidates).is_ok());
    }
}
