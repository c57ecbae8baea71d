//! 棋子定义

use serde::{Deserialize, Serialize};

use crate::geometry::Variant;

/// 阵营
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// 白方（先手）
    White,
    /// 黑方
    Black,
}

impl Color {
    /// 获取对方阵营
    pub fn opponent(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// 显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Color::White => "白方",
            Color::Black => "黑方",
        }
    }
}

/// 走法模式
///
/// 正交棋盘和六角棋盘共用同一组角色，具体方向由 [`PieceKind`] 的家族决定。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl Role {
    /// 记谱字母（小写）
    pub fn letter(&self) -> char {
        match self {
            Role::Pawn => 'p',
            Role::Rook => 'r',
            Role::Knight => 'n',
            Role::Bishop => 'b',
            Role::Queen => 'q',
            Role::King => 'k',
        }
    }
}

/// 棋子种类，按几何家族划分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    /// 8x8 国际象棋棋子
    Chess(Role),
    /// 六角象棋棋子
    Hex(Role),
    /// 跳棋棋子（是否成王记录在 [`Piece::is_king`]）
    Checker,
}

impl PieceKind {
    /// 该种类所属的变体
    pub fn variant(&self) -> Variant {
        match self {
            PieceKind::Chess(_) => Variant::Chess,
            PieceKind::Hex(_) => Variant::HexChess,
            PieceKind::Checker => Variant::Checkers,
        }
    }
}

/// 棋子在棋盘竞技场中的稳定编号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub(crate) usize);

impl PieceId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// 棋子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    /// 是否走过（只用于兵的双步）
    pub has_moved: bool,
    /// 跳棋是否已成王
    pub is_king: bool,
}

impl Piece {
    /// 创建新棋子
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
            is_king: false,
        }
    }

    /// 国际象棋棋子
    pub fn chess(role: Role, color: Color) -> Self {
        Self::new(PieceKind::Chess(role), color)
    }

    /// 六角象棋棋子
    pub fn hex(role: Role, color: Color) -> Self {
        Self::new(PieceKind::Hex(role), color)
    }

    /// 跳棋棋子
    pub fn checker(color: Color) -> Self {
        Self::new(PieceKind::Checker, color)
    }

    /// 显示字符：白方大写，黑方小写；跳棋用圆点
    pub fn symbol(&self) -> char {
        match self.kind {
            PieceKind::Chess(role) | PieceKind::Hex(role) => match self.color {
                Color::White => role.letter().to_ascii_uppercase(),
                Color::Black => role.letter(),
            },
            PieceKind::Checker => match (self.color, self.is_king) {
                (Color::White, false) => '●',
                (Color::Black, false) => '○',
                (Color::White, true) => '◉',
                (Color::Black, true) => '◎',
            },
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
