//! 走法生成
//!
//! 每种棋子只按自身的走子模式给出可达格，不关心轮到谁走，也没有将军的概念。
//! 真正的走子合法性 = 目标格属于这里返回的集合，由 [`Board`] 在落子前检查。

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::constants::{MAX_RAY_STEPS, ORTHO_SIZE};
use crate::geometry::{is_valid, Coord};
use crate::piece::{Color, Piece, PieceId, PieceKind, Role};

/// 正交直线方向
const ORTHO_ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// 正交斜线方向
const ORTHO_BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// 国际象棋马的 8 个跳点
const ORTHO_KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// 王的 8 个相邻格
const ORTHO_KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// 六角格的 6 个相邻方向（三组轴线）
///
/// 行列构成轴向坐标，(1, 1) 与 (-1, -1) 是第三条轴。
const HEX_ROOK_DIRS: [(i8, i8); 6] = [(1, 0), (-1, 0), (0, 1), (0, -1), (1, 1), (-1, -1)];

/// 六角格的 6 个斜向方向（穿过两个相邻格之间的顶点）
const HEX_BISHOP_DIRS: [(i8, i8); 6] = [(2, 1), (-2, -1), (1, 2), (-1, -2), (1, -1), (-1, 1)];

/// 六角马的 12 个跳点
const HEX_KNIGHT_JUMPS: [(i8, i8); 12] = [
    (1, -2),
    (1, 3),
    (2, -1),
    (2, 3),
    (3, 1),
    (3, 2),
    (-1, 2),
    (-1, -3),
    (-2, 1),
    (-2, -3),
    (-3, -1),
    (-3, -2),
];

/// 升变或成王
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Promotion {
    /// 跳棋成王（同一枚棋子）
    Crowned,
    /// 六角兵被替换为新的后
    Replaced(PieceId),
}

/// 走法历史记录
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// 起始位置
    pub from: Coord,
    /// 目标位置
    pub to: Coord,
    /// 走动的棋子
    pub moved: PieceId,
    /// 目标格上被吃的棋子（如果有）
    pub captured: Option<PieceId>,
    /// 跳棋跳吃时越过的棋子
    pub jumped: Option<(Coord, PieceId)>,
    /// 走动前的 has_moved 标记
    pub had_moved: bool,
    /// 这一步引发的升变
    pub promotion: Option<Promotion>,
}

impl Move {
    /// 是否吃子
    pub fn is_capture(&self) -> bool {
        self.captured.is_some() || self.jumped.is_some()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// 走法生成器
pub struct MoveGenerator;

impl MoveGenerator {
    /// 生成指定位置棋子的所有可达格；空格返回空集合
    pub fn legal_destinations(board: &Board, from: Coord) -> Vec<Coord> {
        let mut moves = Vec::with_capacity(32);
        if let Some(piece) = board.get_piece(from) {
            Self::generate_piece_moves(board, from, *piece, &mut moves);
        }
        moves
    }

    /// 生成指定阵营所有棋子的 (起点, 终点) 对
    pub fn generate_pseudo_legal(board: &Board, color: Color) -> Vec<(Coord, Coord)> {
        let mut moves = Vec::with_capacity(64);
        for (from, _) in board.pieces_of(color) {
            for to in Self::legal_destinations(board, from) {
                moves.push((from, to));
            }
        }
        moves
    }

    fn generate_piece_moves(board: &Board, from: Coord, piece: Piece, moves: &mut Vec<Coord>) {
        match piece.kind {
            PieceKind::Chess(role) => match role {
                Role::Pawn => Self::generate_pawn_moves(board, from, piece, moves),
                Role::Rook => Self::slide(board, from, piece.color, &ORTHO_ROOK_DIRS, moves),
                Role::Bishop => Self::slide(board, from, piece.color, &ORTHO_BISHOP_DIRS, moves),
                Role::Queen => {
                    Self::slide(board, from, piece.color, &ORTHO_ROOK_DIRS, moves);
                    Self::slide(board, from, piece.color, &ORTHO_BISHOP_DIRS, moves);
                }
                Role::Knight => Self::leap(board, from, piece.color, &ORTHO_KNIGHT_JUMPS, moves),
                Role::King => Self::leap(board, from, piece.color, &ORTHO_KING_STEPS, moves),
            },
            PieceKind::Hex(role) => match role {
                Role::Pawn => Self::generate_hex_pawn_moves(board, from, piece.color, moves),
                Role::Rook => Self::slide(board, from, piece.color, &HEX_ROOK_DIRS, moves),
                Role::Bishop => Self::slide(board, from, piece.color, &HEX_BISHOP_DIRS, moves),
                Role::Queen => {
                    Self::slide(board, from, piece.color, &HEX_ROOK_DIRS, moves);
                    Self::slide(board, from, piece.color, &HEX_BISHOP_DIRS, moves);
                }
                Role::Knight => Self::leap(board, from, piece.color, &HEX_KNIGHT_JUMPS, moves),
                Role::King => Self::leap(board, from, piece.color, &HEX_ROOK_DIRS, moves),
            },
            PieceKind::Checker => Self::generate_checker_moves(board, from, piece, moves),
        }
    }

    /// 兵：前进一格、首步双格、斜前方吃子
    fn generate_pawn_moves(board: &Board, from: Coord, piece: Piece, moves: &mut Vec<Coord>) {
        let (forward, start_row) = match piece.color {
            Color::White => (-1, ORTHO_SIZE - 2),
            Color::Black => (1, 1),
        };

        let one = from.offset(forward, 0);
        if board.is_on_board(one) && board.is_empty(one) {
            moves.push(one);

            let two = from.offset(2 * forward, 0);
            if !piece.has_moved
                && from.row == start_row
                && board.is_on_board(two)
                && board.is_empty(two)
            {
                moves.push(two);
            }
        }

        for dc in [-1, 1] {
            let target = from.offset(forward, dc);
            if Self::is_enemy(board, target, piece.color) {
                moves.push(target);
            }
        }
    }

    /// 六角兵：两个不对称的前进格，两个斜向吃子格
    fn generate_hex_pawn_moves(board: &Board, from: Coord, color: Color, moves: &mut Vec<Coord>) {
        let (steps, captures): ([(i8, i8); 2], [(i8, i8); 2]) = match color {
            Color::White => ([(1, 0), (1, 1)], [(1, -1), (1, 2)]),
            Color::Black => ([(-1, 0), (-1, -1)], [(-1, 1), (-1, -2)]),
        };

        for (dr, dc) in steps {
            let target = from.offset(dr, dc);
            if board.is_on_board(target) && board.is_empty(target) {
                moves.push(target);
            }
        }

        for (dr, dc) in captures {
            let target = from.offset(dr, dc);
            if Self::is_enemy(board, target, color) {
                moves.push(target);
            }
        }
    }

    /// 跳棋：有跳吃时只能跳吃（按单枚棋子判断）
    fn generate_checker_moves(board: &Board, from: Coord, piece: Piece, moves: &mut Vec<Coord>) {
        let mut steps = Vec::new();
        let mut jumps = Vec::new();

        if piece.is_king {
            for (dr, dc) in ORTHO_BISHOP_DIRS {
                for i in 1..ORTHO_SIZE {
                    let target = from.offset(dr * i, dc * i);
                    if !board.is_on_board(target) {
                        break;
                    }
                    match board.get_piece(target) {
                        None => steps.push(target),
                        Some(other) => {
                            if other.color != piece.color {
                                let landing = target.offset(dr, dc);
                                if board.is_on_board(landing) && board.is_empty(landing) {
                                    jumps.push(landing);
                                }
                            }
                            break;
                        }
                    }
                }
            }
        } else {
            let forward = Self::checker_forward(piece.color);
            for dc in [-1, 1] {
                let target = from.offset(forward, dc);
                if !board.is_on_board(target) {
                    continue;
                }
                match board.get_piece(target) {
                    None => steps.push(target),
                    Some(other) if other.color != piece.color => {
                        let landing = target.offset(forward, dc);
                        if board.is_on_board(landing) && board.is_empty(landing) {
                            jumps.push(landing);
                        }
                    }
                    Some(_) => {}
                }
            }
        }

        if jumps.is_empty() {
            moves.extend(steps);
        } else {
            moves.extend(jumps);
        }
    }

    /// 跳棋普通棋子的前进方向
    pub(crate) fn checker_forward(color: Color) -> i8 {
        match color {
            Color::Black => 1,
            Color::White => -1,
        }
    }

    /// 跳棋从 from 斜走到 to 时越过的棋子位置
    ///
    /// 普通斜走时路径上没有棋子，返回 None。
    pub(crate) fn jumped_square(board: &Board, from: Coord, to: Coord) -> Option<Coord> {
        let dr = to.row - from.row;
        let dc = to.col - from.col;
        if dr.abs() != dc.abs() || dr.abs() < 2 {
            return None;
        }
        let (sr, sc) = (dr.signum(), dc.signum());
        (1..dr.abs())
            .map(|i| from.offset(sr * i, sc * i))
            .find(|&square| !board.is_empty(square))
    }

    /// 沿射线滑行：遇到己方棋子停在其前，遇到敌方棋子吃掉后停止
    fn slide(board: &Board, from: Coord, color: Color, dirs: &[(i8, i8)], moves: &mut Vec<Coord>) {
        for &(dr, dc) in dirs {
            for i in 1..=MAX_RAY_STEPS {
                let target = from.offset(dr * i, dc * i);
                if !board.is_on_board(target) {
                    break;
                }
                match board.get_piece(target) {
                    None => moves.push(target),
                    Some(other) => {
                        if other.color != color {
                            moves.push(target);
                        }
                        break;
                    }
                }
            }
        }
    }

    /// 固定跳点：目标在棋盘上且不是己方棋子
    fn leap(board: &Board, from: Coord, color: Color, jumps: &[(i8, i8)], moves: &mut Vec<Coord>) {
        for &(dr, dc) in jumps {
            let target = from.offset(dr, dc);
            if !board.is_on_board(target) {
                continue;
            }
            match board.get_piece(target) {
                Some(other) if other.color == color => {}
                _ => moves.push(target),
            }
        }
    }

    fn is_enemy(board: &Board, target: Coord, color: Color) -> bool {
        is_valid(target, board.variant())
            && board
                .get_piece(target)
                .is_some_and(|other| other.color != color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Variant;

    fn c(row: i8, col: i8) -> Coord {
        Coord::new(row, col)
    }

    fn sorted(mut moves: Vec<Coord>) -> Vec<Coord> {
        moves.sort();
        moves
    }

    #[test]
    fn test_empty_square_has_no_moves() {
        let board = Board::new(Variant::Chess);
        assert!(MoveGenerator::legal_destinations(&board, c(4, 4)).is_empty());
        assert!(MoveGenerator::legal_destinations(&board, c(-3, 20)).is_empty());
    }

    #[test]
    fn test_pawn_initial_moves() {
        let board = Board::initial(Variant::Chess);
        let moves = sorted(MoveGenerator::legal_destinations(&board, c(6, 4)));
        assert_eq!(moves, vec![c(4, 4), c(5, 4)]);

        let moves = sorted(MoveGenerator::legal_destinations(&board, c(1, 3)));
        assert_eq!(moves, vec![c(2, 3), c(3, 3)]);
    }

    #[test]
    fn test_pawn_blocked() {
        let mut board = Board::new(Variant::Chess);
        board.place(c(6, 4), Piece::chess(Role::Pawn, Color::White));
        board.place(c(5, 4), Piece::chess(Role::Knight, Color::Black));
        // 正前方被挡，双步也不行，且兵不能直吃
        assert!(MoveGenerator::legal_destinations(&board, c(6, 4)).is_empty());
    }

    #[test]
    fn test_pawn_double_step_blocked_on_second_square() {
        let mut board = Board::new(Variant::Chess);
        board.place(c(6, 4), Piece::chess(Role::Pawn, Color::White));
        board.place(c(4, 4), Piece::chess(Role::Pawn, Color::Black));
        let moves = MoveGenerator::legal_destinations(&board, c(6, 4));
        assert_eq!(moves, vec![c(5, 4)]);
    }

    #[test]
    fn test_pawn_no_double_step_after_moving() {
        let mut board = Board::new(Variant::Chess);
        let mut pawn = Piece::chess(Role::Pawn, Color::White);
        pawn.has_moved = true;
        board.place(c(6, 4), pawn);
        let moves = MoveGenerator::legal_destinations(&board, c(6, 4));
        assert_eq!(moves, vec![c(5, 4)]);
    }

    #[test]
    fn test_pawn_captures() {
        let mut board = Board::new(Variant::Chess);
        board.place(c(4, 4), Piece::chess(Role::Pawn, Color::White));
        board.place(c(3, 3), Piece::chess(Role::Rook, Color::Black));
        board.place(c(3, 5), Piece::chess(Role::Rook, Color::White));
        let moves = sorted(MoveGenerator::legal_destinations(&board, c(4, 4)));
        assert_eq!(moves, vec![c(3, 3), c(3, 4)]);
    }

    #[test]
    fn test_pawn_on_edge_file() {
        let mut board = Board::new(Variant::Chess);
        board.place(c(1, 0), Piece::chess(Role::Pawn, Color::Black));
        board.place(c(2, 1), Piece::chess(Role::Pawn, Color::White));
        let moves = sorted(MoveGenerator::legal_destinations(&board, c(1, 0)));
        assert_eq!(moves, vec![c(2, 0), c(2, 1), c(3, 0)]);
    }

    #[test]
    fn test_pawn_last_rank_has_no_forward_move() {
        let mut board = Board::new(Variant::Chess);
        board.place(c(0, 2), Piece::chess(Role::Pawn, Color::White));
        assert!(MoveGenerator::legal_destinations(&board, c(0, 2)).is_empty());
    }

    #[test]
    fn test_rook_open_board() {
        let mut board = Board::new(Variant::Chess);
        board.place(c(4, 4), Piece::chess(Role::Rook, Color::White));
        assert_eq!(MoveGenerator::legal_destinations(&board, c(4, 4)).len(), 14);
    }

    #[test]
    fn test_rook_stop_rule() {
        let mut board = Board::new(Variant::Chess);
        board.place(c(4, 4), Piece::chess(Role::Rook, Color::White));
        board.place(c(4, 6), Piece::chess(Role::Pawn, Color::White));
        board.place(c(2, 4), Piece::chess(Role::Pawn, Color::Black));

        let moves = MoveGenerator::legal_destinations(&board, c(4, 4));
        // 己方棋子本身及之后都不可达
        assert!(moves.contains(&c(4, 5)));
        assert!(!moves.contains(&c(4, 6)));
        assert!(!moves.contains(&c(4, 7)));
        // 敌方棋子可吃，之后不可达
        assert!(moves.contains(&c(3, 4)));
        assert!(moves.contains(&c(2, 4)));
        assert!(!moves.contains(&c(1, 4)));
        assert!(!moves.contains(&c(0, 4)));
        // 1 + 2 + 4 + 3
        assert_eq!(moves.len(), 10);
    }

    #[test]
    fn test_bishop_stop_rule() {
        let mut board = Board::new(Variant::Chess);
        board.place(c(4, 4), Piece::chess(Role::Bishop, Color::Black));
        board.place(c(6, 6), Piece::chess(Role::Pawn, Color::White));
        board.place(c(2, 2), Piece::chess(Role::Pawn, Color::Black));

        let moves = MoveGenerator::legal_destinations(&board, c(4, 4));
        assert!(moves.contains(&c(5, 5)));
        assert!(moves.contains(&c(6, 6)));
        assert!(!moves.contains(&c(7, 7)));
        assert!(moves.contains(&c(3, 3)));
        assert!(!moves.contains(&c(2, 2)));
        assert!(!moves.contains(&c(1, 1)));
    }

    #[test]
    fn test_queen_is_rook_plus_bishop() {
        let mut board = Board::new(Variant::Chess);
        board.place(c(3, 3), Piece::chess(Role::Queen, Color::White));
        board.place(c(3, 6), Piece::chess(Role::Knight, Color::Black));
        let queen = sorted(MoveGenerator::legal_destinations(&board, c(3, 3)));

        let mut rook_board = Board::new(Variant::Chess);
        rook_board.place(c(3, 3), Piece::chess(Role::Rook, Color::White));
        rook_board.place(c(3, 6), Piece::chess(Role::Knight, Color::Black));
        let mut expected = MoveGenerator::legal_destinations(&rook_board, c(3, 3));

        let mut bishop_board = Board::new(Variant::Chess);
        bishop_board.place(c(3, 3), Piece::chess(Role::Bishop, Color::White));
        bishop_board.place(c(3, 6), Piece::chess(Role::Knight, Color::Black));
        expected.extend(MoveGenerator::legal_destinations(&bishop_board, c(3, 3)));

        assert_eq!(queen, sorted(expected));
        assert_eq!(queen.len(), 26);
    }

    #[test]
    fn test_knight_moves() {
        let mut board = Board::new(Variant::Chess);
        board.place(c(4, 4), Piece::chess(Role::Knight, Color::White));
        assert_eq!(MoveGenerator::legal_destinations(&board, c(4, 4)).len(), 8);

        // 角落只有 2 个跳点，其中一个被己方占据
        board.place(c(7, 7), Piece::chess(Role::Knight, Color::White));
        board.place(c(5, 6), Piece::chess(Role::Pawn, Color::White));
        let moves = MoveGenerator::legal_destinations(&board, c(7, 7));
        assert_eq!(moves, vec![c(6, 5)]);
    }

    #[test]
    fn test_knight_jumps_over_pieces() {
        let board = Board::initial(Variant::Chess);
        let moves = sorted(MoveGenerator::legal_destinations(&board, c(7, 1)));
        assert_eq!(moves, vec![c(5, 0), c(5, 2)]);
    }

    #[test]
    fn test_king_moves() {
        let mut board = Board::new(Variant::Chess);
        board.place(c(0, 0), Piece::chess(Role::King, Color::Black));
        board.place(c(1, 1), Piece::chess(Role::Pawn, Color::White));
        let moves = sorted(MoveGenerator::legal_destinations(&board, c(0, 0)));
        assert_eq!(moves, vec![c(0, 1), c(1, 0), c(1, 1)]);
    }

    #[test]
    fn test_initial_position_move_count() {
        let board = Board::initial(Variant::Chess);
        // 16 个兵步 + 4 个马步
        assert_eq!(MoveGenerator::generate_pseudo_legal(&board, Color::White).len(), 20);
        assert_eq!(MoveGenerator::generate_pseudo_legal(&board, Color::Black).len(), 20);
    }

    #[test]
    fn test_hex_rook_from_center() {
        let mut board = Board::new(Variant::HexChess);
        board.place(c(5, 5), Piece::hex(Role::Rook, Color::White));
        assert_eq!(MoveGenerator::legal_destinations(&board, c(5, 5)).len(), 30);
    }

    #[test]
    fn test_hex_rook_stop_rule() {
        let mut board = Board::new(Variant::HexChess);
        board.place(c(5, 5), Piece::hex(Role::Rook, Color::White));
        board.place(c(7, 7), Piece::hex(Role::Pawn, Color::Black));
        board.place(c(5, 3), Piece::hex(Role::Pawn, Color::White));

        let moves = MoveGenerator::legal_destinations(&board, c(5, 5));
        assert!(moves.contains(&c(6, 6)));
        assert!(moves.contains(&c(7, 7)));
        assert!(!moves.contains(&c(8, 8)));
        assert!(moves.contains(&c(5, 4)));
        assert!(!moves.contains(&c(5, 3)));
        assert!(!moves.contains(&c(5, 2)));
    }

    #[test]
    fn test_hex_rook_respects_hexagon() {
        let mut board = Board::new(Variant::HexChess);
        board.place(c(0, 0), Piece::hex(Role::Rook, Color::White));
        let moves = MoveGenerator::legal_destinations(&board, c(0, 0));
        // 角格：沿行 5 格，沿列 5 格，沿第三轴 10 格
        assert_eq!(moves.len(), 20);
        assert!(moves.contains(&c(10, 10)));
        assert!(moves.contains(&c(0, 5)));
        assert!(!moves.contains(&c(0, 6)));
    }

    #[test]
    fn test_hex_bishop_from_center() {
        let mut board = Board::new(Variant::HexChess);
        board.place(c(5, 5), Piece::hex(Role::Bishop, Color::Black));
        let moves = sorted(MoveGenerator::legal_destinations(&board, c(5, 5)));
        assert_eq!(moves.len(), 12);
        assert!(moves.contains(&c(7, 6)));
        assert!(moves.contains(&c(9, 7)));
        assert!(moves.contains(&c(6, 4)));
        assert!(moves.contains(&c(7, 3)));
    }

    #[test]
    fn test_hex_bishop_stop_rule() {
        let mut board = Board::new(Variant::HexChess);
        board.place(c(5, 5), Piece::hex(Role::Bishop, Color::Black));
        board.place(c(7, 6), Piece::hex(Role::Knight, Color::White));
        board.place(c(4, 6), Piece::hex(Role::Knight, Color::Black));

        let moves = MoveGenerator::legal_destinations(&board, c(5, 5));
        assert!(moves.contains(&c(7, 6)));
        assert!(!moves.contains(&c(9, 7)));
        assert!(!moves.contains(&c(4, 6)));
        assert!(!moves.contains(&c(3, 7)));
    }

    #[test]
    fn test_hex_queen_from_center() {
        let mut board = Board::new(Variant::HexChess);
        board.place(c(5, 5), Piece::hex(Role::Queen, Color::White));
        assert_eq!(MoveGenerator::legal_destinations(&board, c(5, 5)).len(), 42);
    }

    #[test]
    fn test_hex_king_moves() {
        let mut board = Board::new(Variant::HexChess);
        board.place(c(5, 5), Piece::hex(Role::King, Color::White));
        assert_eq!(MoveGenerator::legal_destinations(&board, c(5, 5)).len(), 6);

        // 角格只有 3 个相邻格，其中一个是己方
        board.place(c(0, 0), Piece::hex(Role::King, Color::Black));
        board.place(c(1, 1), Piece::hex(Role::Pawn, Color::Black));
        board.place(c(0, 1), Piece::hex(Role::Pawn, Color::White));
        let moves = sorted(MoveGenerator::legal_destinations(&board, c(0, 0)));
        assert_eq!(moves, vec![c(0, 1), c(1, 0)]);
    }

    #[test]
    fn test_hex_knight_moves() {
        let mut board = Board::new(Variant::HexChess);
        board.place(c(5, 5), Piece::hex(Role::Knight, Color::White));
        assert_eq!(MoveGenerator::legal_destinations(&board, c(5, 5)).len(), 12);

        board.place(c(0, 0), Piece::hex(Role::Knight, Color::Black));
        let moves = sorted(MoveGenerator::legal_destinations(&board, c(0, 0)));
        assert_eq!(moves, vec![c(1, 3), c(2, 3), c(3, 1), c(3, 2)]);
    }

    #[test]
    fn test_hex_pawn_moves() {
        let mut board = Board::new(Variant::HexChess);
        board.place(c(4, 4), Piece::hex(Role::Pawn, Color::White));
        let moves = sorted(MoveGenerator::legal_destinations(&board, c(4, 4)));
        assert_eq!(moves, vec![c(5, 4), c(5, 5)]);

        board.place(c(6, 6), Piece::hex(Role::Pawn, Color::Black));
        let moves = sorted(MoveGenerator::legal_destinations(&board, c(6, 6)));
        assert_eq!(moves, vec![c(5, 5), c(5, 6)]);
    }

    #[test]
    fn test_hex_pawn_captures_and_blocks() {
        let mut board = Board::new(Variant::HexChess);
        board.place(c(4, 4), Piece::hex(Role::Pawn, Color::White));
        // 前进格被敌方占据：不能直走也不能直吃
        board.place(c(5, 4), Piece::hex(Role::Rook, Color::Black));
        // 斜向吃子格
        board.place(c(5, 3), Piece::hex(Role::Bishop, Color::Black));
        board.place(c(5, 6), Piece::hex(Role::Bishop, Color::White));

        let moves = sorted(MoveGenerator::legal_destinations(&board, c(4, 4)));
        assert_eq!(moves, vec![c(5, 3), c(5, 5)]);
    }

    #[test]
    fn test_hex_pawn_has_no_double_step() {
        let board = Board::initial(Variant::HexChess);
        let moves = sorted(MoveGenerator::legal_destinations(&board, c(1, 0)));
        assert_eq!(moves, vec![c(2, 0), c(2, 1)]);
    }

    #[test]
    fn test_hex_moves_stay_on_board() {
        let board = Board::initial(Variant::HexChess);
        for color in [Color::White, Color::Black] {
            for (_, to) in MoveGenerator::generate_pseudo_legal(&board, color) {
                assert!(is_valid(to, Variant::HexChess), "off board: {to}");
            }
        }
    }

    #[test]
    fn test_checker_simple_moves() {
        let mut board = Board::new(Variant::Checkers);
        board.place(c(5, 2), Piece::checker(Color::White));
        let moves = sorted(MoveGenerator::legal_destinations(&board, c(5, 2)));
        assert_eq!(moves, vec![c(4, 1), c(4, 3)]);

        board.place(c(2, 3), Piece::checker(Color::Black));
        let moves = sorted(MoveGenerator::legal_destinations(&board, c(2, 3)));
        assert_eq!(moves, vec![c(3, 2), c(3, 4)]);
    }

    #[test]
    fn test_checker_forced_capture() {
        let mut board = Board::new(Variant::Checkers);
        board.place(c(5, 2), Piece::checker(Color::White));
        board.place(c(4, 3), Piece::checker(Color::Black));
        // 左前方可以普通走，但有跳吃时只能跳吃
        let moves = MoveGenerator::legal_destinations(&board, c(5, 2));
        assert_eq!(moves, vec![c(3, 4)]);
    }

    #[test]
    fn test_checker_jump_needs_empty_landing() {
        let mut board = Board::new(Variant::Checkers);
        board.place(c(5, 2), Piece::checker(Color::White));
        board.place(c(4, 3), Piece::checker(Color::Black));
        board.place(c(3, 4), Piece::checker(Color::Black));
        let moves = MoveGenerator::legal_destinations(&board, c(5, 2));
        assert_eq!(moves, vec![c(4, 1)]);
    }

    #[test]
    fn test_checker_cannot_jump_off_board() {
        let mut board = Board::new(Variant::Checkers);
        board.place(c(2, 1), Piece::checker(Color::White));
        board.place(c(1, 0), Piece::checker(Color::Black));
        let moves = MoveGenerator::legal_destinations(&board, c(2, 1));
        assert_eq!(moves, vec![c(1, 2)]);
    }

    #[test]
    fn test_checker_man_does_not_move_backward() {
        let mut board = Board::new(Variant::Checkers);
        board.place(c(3, 3), Piece::checker(Color::White));
        board.place(c(4, 4), Piece::checker(Color::Black));
        let moves = sorted(MoveGenerator::legal_destinations(&board, c(3, 3)));
        assert_eq!(moves, vec![c(2, 2), c(2, 4)]);
    }

    #[test]
    fn test_checker_king_slides() {
        let mut board = Board::new(Variant::Checkers);
        let mut king = Piece::checker(Color::White);
        king.is_king = true;
        board.place(c(4, 3), king);
        board.place(c(2, 5), Piece::checker(Color::White));

        let moves = MoveGenerator::legal_destinations(&board, c(4, 3));
        // 右上 1 格（被己方挡住），左上 3 格，右下 3 格，左下 3 格
        assert_eq!(moves.len(), 10);
        assert!(moves.contains(&c(3, 4)));
        assert!(!moves.contains(&c(2, 5)));
        assert!(moves.contains(&c(7, 6)));
        assert!(moves.contains(&c(7, 0)));
        assert!(moves.contains(&c(1, 0)));
    }

    #[test]
    fn test_checker_king_long_capture() {
        let mut board = Board::new(Variant::Checkers);
        let mut king = Piece::checker(Color::Black);
        king.is_king = true;
        board.place(c(0, 1), king);
        board.place(c(3, 4), Piece::checker(Color::White));

        let moves = MoveGenerator::legal_destinations(&board, c(0, 1));
        assert_eq!(moves, vec![c(4, 5)]);
    }

    #[test]
    fn test_checker_king_blocked_jump_stops_ray() {
        let mut board = Board::new(Variant::Checkers);
        let mut king = Piece::checker(Color::Black);
        king.is_king = true;
        board.place(c(0, 1), king);
        board.place(c(2, 3), Piece::checker(Color::White));
        board.place(c(3, 4), Piece::checker(Color::White));

        let moves = sorted(MoveGenerator::legal_destinations(&board, c(0, 1)));
        // 无法跳吃，只剩普通走法，且射线在第一个敌子处停止
        assert_eq!(moves, vec![c(1, 0), c(1, 2)]);
    }

    #[test]
    fn test_jumped_square() {
        let mut board = Board::new(Variant::Checkers);
        board.place(c(3, 4), Piece::checker(Color::White));
        assert_eq!(MoveGenerator::jumped_square(&board, c(0, 1), c(4, 5)), Some(c(3, 4)));
        assert_eq!(MoveGenerator::jumped_square(&board, c(5, 2), c(4, 3)), None);
        assert_eq!(MoveGenerator::jumped_square(&board, c(2, 2), c(2, 6)), None);
    }
}
