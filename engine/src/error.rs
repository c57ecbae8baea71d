//! 错误类型定义

use thiserror::Error;

use crate::geometry::Coord;

/// 走子错误
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// 坐标不在当前变体的棋盘上
    #[error("Invalid coordinate: ({row}, {col})")]
    InvalidCoordinate { row: i8, col: i8 },

    /// 起点没有棋子
    #[error("No piece at ({row}, {col})")]
    NoPiece { row: i8, col: i8 },

    /// 目标不在棋子的可达集合中
    #[error("Illegal move: from {from} to {to}")]
    IllegalMove { from: Coord, to: Coord },

    /// 没有可以撤销的走法
    #[error("No move to undo")]
    EmptyHistory,

    /// 不是你的回合
    #[error("Not your turn")]
    NotYourTurn,
}

impl MoveError {
    pub(crate) fn invalid(coord: Coord) -> Self {
        MoveError::InvalidCoordinate {
            row: coord.row,
            col: coord.col,
        }
    }

    pub(crate) fn no_piece(coord: Coord) -> Self {
        MoveError::NoPiece {
            row: coord.row,
            col: coord.col,
        }
    }
}

/// 坐标记谱解析错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// 长度不对
    #[error("Square must be a file letter followed by a rank: {0:?}")]
    InvalidLength(String),

    /// 列字母超出范围
    #[error("File must be between 'a' and '{max}', got {found:?}")]
    InvalidFile { found: char, max: char },

    /// 行号超出范围
    #[error("Rank must be between {min} and {max}, got {found:?}")]
    InvalidRank { found: String, min: u8, max: u8 },

    /// 六角棋盘的角落空位
    #[error("Square {0} is outside the board")]
    OffBoard(String),
}

/// 走子操作结果类型
pub type Result<T> = std::result::Result<T, MoveError>;
