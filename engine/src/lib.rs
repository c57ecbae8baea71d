//! 多变体棋类规则引擎
//!
//! 包含:
//! - 棋盘几何（国际象棋、跳棋、格林斯基六角象棋）
//! - 棋子定义与各棋子的走法生成
//! - 棋盘状态、走子与撤销
//! - 对局会话（轮次与步数）
//! - 坐标记谱

mod board;
mod constants;
mod error;
mod geometry;
mod moves;
mod notation;
mod piece;
mod session;

pub use board::Board;
pub use constants::*;
pub use error::{MoveError, NotationError, Result};
pub use geometry::{is_valid, Coord, Variant};
pub use moves::{Move, MoveGenerator, Promotion};
pub use notation::Notation;
pub use piece::{Color, Piece, PieceId, PieceKind, Role};
pub use session::Game;
