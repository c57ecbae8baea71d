//! 棋盘状态
//!
//! 棋子存放在竞技场（`pieces`）里，网格只保存棋子编号。
//! 吃子和撤销都通过编号完成，被吃的棋子依旧留在竞技场中，撤销时原样放回。

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::constants::{GRID_SIZE, HEX_SIZE, ORTHO_SIZE};
use crate::error::{MoveError, Result};
use crate::geometry::{is_valid, Coord, Variant};
use crate::moves::{Move, MoveGenerator, Promotion};
use crate::piece::{Color, Piece, PieceId, PieceKind, Role};

/// 国际象棋底线
const CHESS_BACK_RANK: [Role; 8] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

/// 六角象棋白方阵型（黑方由镜像得到）
const HEX_WHITE_LAYOUT: [(i8, i8, Role); 18] = [
    (0, 0, Role::Rook),
    (0, 1, Role::Knight),
    (0, 2, Role::Bishop),
    (0, 3, Role::Bishop),
    (0, 4, Role::Knight),
    (0, 5, Role::Rook),
    (1, 2, Role::Queen),
    (1, 3, Role::Bishop),
    (1, 4, Role::King),
    (1, 0, Role::Pawn),
    (1, 1, Role::Pawn),
    (1, 5, Role::Pawn),
    (1, 6, Role::Pawn),
    (2, 2, Role::Pawn),
    (2, 3, Role::Pawn),
    (2, 4, Role::Pawn),
    (2, 5, Role::Pawn),
    (3, 4, Role::Pawn),
];

/// 棋盘
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// 变体，创建后不变
    variant: Variant,
    /// 11x11 网格，索引为 row * 11 + col；正交变体只使用左上 8x8
    grid: Vec<Option<PieceId>>,
    /// 棋子竞技场，按 PieceId 索引
    pieces: Vec<Piece>,
    /// 走法历史
    history: Vec<Move>,
}

impl Board {
    /// 创建空棋盘
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            grid: vec![None; GRID_SIZE * GRID_SIZE],
            pieces: Vec::with_capacity(32),
            history: Vec::new(),
        }
    }

    /// 创建初始棋盘
    pub fn initial(variant: Variant) -> Self {
        let mut board = Self::new(variant);
        board.setup();
        board
    }

    /// 按变体摆放初始局面，清空之前的棋子和历史
    pub fn setup(&mut self) {
        self.grid.iter_mut().for_each(|cell| *cell = None);
        self.pieces.clear();
        self.history.clear();

        match self.variant {
            Variant::Chess => self.setup_chess(),
            Variant::Checkers => self.setup_checkers(),
            Variant::HexChess => self.setup_hex_chess(),
        }
        debug!(variant = %self.variant, pieces = self.pieces.len(), "棋盘已摆放");
    }

    fn setup_chess(&mut self) {
        for (col, role) in CHESS_BACK_RANK.into_iter().enumerate() {
            let col = col as i8;
            self.place(Coord::new(0, col), Piece::chess(role, Color::Black));
            self.place(Coord::new(1, col), Piece::chess(Role::Pawn, Color::Black));
            self.place(Coord::new(ORTHO_SIZE - 2, col), Piece::chess(Role::Pawn, Color::White));
            self.place(Coord::new(ORTHO_SIZE - 1, col), Piece::chess(role, Color::White));
        }
    }

    /// 只在深色格（行列之和为奇数）摆放
    fn setup_checkers(&mut self) {
        for row in 0..ORTHO_SIZE {
            for col in 0..ORTHO_SIZE {
                if (row + col) % 2 == 0 {
                    continue;
                }
                let coord = Coord::new(row, col);
                if row < 3 {
                    self.place(coord, Piece::checker(Color::Black));
                } else if row > 4 {
                    self.place(coord, Piece::checker(Color::White));
                }
            }
        }
    }

    fn setup_hex_chess(&mut self) {
        for (row, col, role) in HEX_WHITE_LAYOUT {
            let white = Coord::new(row, col);
            self.place(white, Piece::hex(role, Color::White));
            self.place(Self::hex_mirror(white), Piece::hex(role, Color::Black));
        }
    }

    /// 六角棋盘上把白方一侧映射到黑方一侧的镜像（王对王、后对后）
    fn hex_mirror(coord: Coord) -> Coord {
        let last = HEX_SIZE - 1;
        Coord::new(last - coord.row, coord.col - coord.row + last / 2)
    }

    /// 当前变体
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// 坐标是否在当前变体的棋盘上
    pub fn is_on_board(&self, coord: Coord) -> bool {
        is_valid(coord, self.variant)
    }

    /// 获取指定位置的棋子；任何坐标都可以查询
    pub fn get_piece(&self, coord: Coord) -> Option<&Piece> {
        self.piece_id_at(coord).and_then(|id| self.pieces.get(id.0))
    }

    /// 获取指定位置的棋子编号
    pub fn piece_id_at(&self, coord: Coord) -> Option<PieceId> {
        coord.to_index().and_then(|index| self.grid[index])
    }

    /// 按编号获取棋子（包括已被吃掉的）
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.0)
    }

    /// 格子是否为空
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.piece_id_at(coord).is_none()
    }

    /// 直接放置棋子（摆局面用，不记录历史）
    ///
    /// 坐标不在棋盘上时不放置并返回 None；原有棋子会被移出网格。
    pub fn place(&mut self, coord: Coord, piece: Piece) -> Option<PieceId> {
        if !self.is_on_board(coord) {
            return None;
        }
        let index = coord.to_index()?;
        let id = PieceId(self.pieces.len());
        self.pieces.push(piece);
        self.grid[index] = Some(id);
        Some(id)
    }

    /// 棋盘上的所有棋子，按行优先顺序
    pub fn all_pieces(&self) -> Vec<(Coord, Piece)> {
        self.variant
            .cells()
            .filter_map(|coord| self.get_piece(coord).map(|piece| (coord, *piece)))
            .collect()
    }

    /// 指定阵营在棋盘上的所有棋子
    pub fn pieces_of(&self, color: Color) -> Vec<(Coord, Piece)> {
        self.all_pieces()
            .into_iter()
            .filter(|(_, piece)| piece.color == color)
            .collect()
    }

    /// 走法历史
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// 最后一步
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// 走子，成功返回 true；失败时棋盘保持不变
    pub fn move_piece(&mut self, from: Coord, to: Coord) -> bool {
        self.try_move(from, to).is_ok()
    }

    /// 撤销最后一步，成功返回 true
    pub fn undo_move(&mut self) -> bool {
        self.try_undo().is_ok()
    }

    /// 走子并返回记录
    ///
    /// 所有检查都在修改之前完成，出错时网格和历史都不会变化。
    pub fn try_move(&mut self, from: Coord, to: Coord) -> Result<Move> {
        let result = self.validate(from, to);
        let id = match result {
            Ok(id) => id,
            Err(err) => {
                trace!(%from, %to, error = %err, "拒绝走子");
                return Err(err);
            }
        };
        Ok(self.apply(id, from, to))
    }

    fn validate(&self, from: Coord, to: Coord) -> Result<PieceId> {
        if !self.is_on_board(from) {
            return Err(MoveError::invalid(from));
        }
        if !self.is_on_board(to) {
            return Err(MoveError::invalid(to));
        }
        let id = self
            .piece_id_at(from)
            .ok_or_else(|| MoveError::no_piece(from))?;
        if !MoveGenerator::legal_destinations(self, from).contains(&to) {
            return Err(MoveError::IllegalMove { from, to });
        }
        Ok(id)
    }

    fn apply(&mut self, id: PieceId, from: Coord, to: Coord) -> Move {
        let piece = self.pieces[id.0];
        let captured = self.piece_id_at(to);
        let jumped = match piece.kind {
            PieceKind::Checker => MoveGenerator::jumped_square(self, from, to)
                .and_then(|square| self.piece_id_at(square).map(|jid| (square, jid))),
            _ => None,
        };

        self.set(from, None);
        self.set(to, Some(id));
        if let Some((square, _)) = jumped {
            self.set(square, None);
        }
        self.pieces[id.0].has_moved = true;

        let promotion = self.promote(id, to);
        let mv = Move {
            from,
            to,
            moved: id,
            captured,
            jumped,
            had_moved: piece.has_moved,
            promotion,
        };
        self.history.push(mv);

        debug!(
            %from,
            %to,
            piece = %piece.symbol(),
            capture = mv.is_capture(),
            "走子"
        );
        mv
    }

    /// 处理落子后的升变：跳棋到达对方底线成王，六角兵到达最远行变后
    fn promote(&mut self, id: PieceId, to: Coord) -> Option<Promotion> {
        let piece = self.pieces[id.0];
        match piece.kind {
            PieceKind::Checker if !piece.is_king => {
                let back_rank = match piece.color {
                    Color::Black => ORTHO_SIZE - 1,
                    Color::White => 0,
                };
                if to.row != back_rank {
                    return None;
                }
                self.pieces[id.0].is_king = true;
                debug!(%to, color = ?piece.color, "跳棋成王");
                Some(Promotion::Crowned)
            }
            PieceKind::Hex(Role::Pawn) => {
                let far_row = match piece.color {
                    Color::White => HEX_SIZE - 1,
                    Color::Black => 0,
                };
                if to.row != far_row {
                    return None;
                }
                let mut queen = Piece::hex(Role::Queen, piece.color);
                queen.has_moved = true;
                let queen_id = PieceId(self.pieces.len());
                self.pieces.push(queen);
                self.set(to, Some(queen_id));
                debug!(%to, color = ?piece.color, "六角兵升变为后");
                Some(Promotion::Replaced(queen_id))
            }
            _ => None,
        }
    }

    /// 撤销最后一步并返回被撤销的记录
    pub fn try_undo(&mut self) -> Result<Move> {
        let mv = self.history.pop().ok_or(MoveError::EmptyHistory)?;

        self.set(mv.from, Some(mv.moved));
        self.set(mv.to, mv.captured);
        if let Some((square, jid)) = mv.jumped {
            self.set(square, Some(jid));
        }

        self.pieces[mv.moved.0].has_moved = mv.had_moved;
        match mv.promotion {
            Some(Promotion::Crowned) => self.pieces[mv.moved.0].is_king = false,
            Some(Promotion::Replaced(queen_id)) => {
                // 升变产生的后总是竞技场中最新的棋子
                if queen_id.0 + 1 == self.pieces.len() {
                    self.pieces.pop();
                }
            }
            None => {}
        }

        debug!(from = %mv.from, to = %mv.to, "撤销走子");
        Ok(mv)
    }

    fn set(&mut self, coord: Coord, id: Option<PieceId>) {
        if let Some(index) = coord.to_index() {
            self.grid[index] = id;
        }
    }
}
