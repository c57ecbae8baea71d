//! 对局会话
//!
//! 管理走子方和步数，把“请求走子”转换为对棋盘的调用。

use tracing::info;

use crate::board::Board;
use crate::error::{MoveError, Result};
use crate::geometry::{Coord, Variant};
use crate::moves::{Move, MoveGenerator};
use crate::piece::Color;

/// 一局游戏
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current_player: Color,
    move_count: u32,
}

impl Game {
    /// 开始新对局（白方先走）
    pub fn new(variant: Variant) -> Self {
        info!(variant = %variant, "新对局");
        Self {
            board: Board::initial(variant),
            current_player: Color::White,
            move_count: 0,
        }
    }

    /// 从自定义局面开始
    pub fn from_board(board: Board, current_player: Color) -> Self {
        Self {
            board,
            current_player,
            move_count: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn variant(&self) -> Variant {
        self.board.variant()
    }

    /// 当前走子方
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// 已走步数
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// 当前走子方走一步
    pub fn play(&mut self, from: Coord, to: Coord) -> Result<Move> {
        if let Some(piece) = self.board.get_piece(from) {
            if piece.color != self.current_player {
                return Err(MoveError::NotYourTurn);
            }
        }
        let mv = self.board.try_move(from, to)?;
        self.switch_player();
        self.move_count += 1;
        Ok(mv)
    }

    /// 撤销上一步，轮次随之回退
    pub fn undo(&mut self) -> Result<Move> {
        let mv = self.board.try_undo()?;
        self.switch_player();
        self.move_count = self.move_count.saturating_sub(1);
        Ok(mv)
    }

    /// 指定格子上棋子的可达格
    pub fn destinations(&self, from: Coord) -> Vec<Coord> {
        MoveGenerator::legal_destinations(&self.board, from)
    }

    fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }
}
