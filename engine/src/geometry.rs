//! 棋盘几何
//!
//! 每种变体的有效坐标判定都集中在这里：
//! - 国际象棋与跳棋：8x8 全部有效
//! - 六角象棋：嵌入 11x11 数组，只有 91 格构成的正六边形有效

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{HEX_CENTER, HEX_SIZE, ORTHO_SIZE};

/// 游戏变体
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// 国际象棋
    Chess,
    /// 跳棋
    Checkers,
    /// 格林斯基六角象棋
    HexChess,
}

impl Variant {
    /// 所有变体
    pub fn all() -> &'static [Variant] {
        &[Variant::Chess, Variant::Checkers, Variant::HexChess]
    }

    /// 网格边长
    pub fn dimension(self) -> i8 {
        match self {
            Variant::Chess | Variant::Checkers => ORTHO_SIZE,
            Variant::HexChess => HEX_SIZE,
        }
    }

    /// 标识名（与配置文件、命令行一致）
    pub fn name(self) -> &'static str {
        match self {
            Variant::Chess => "chess",
            Variant::Checkers => "checkers",
            Variant::HexChess => "hex_chess",
        }
    }

    /// 显示名称
    pub fn display_name(self) -> &'static str {
        match self {
            Variant::Chess => "国际象棋",
            Variant::Checkers => "跳棋",
            Variant::HexChess => "六角象棋（格林斯基）",
        }
    }

    /// 按行优先顺序遍历该变体的所有有效坐标
    pub fn cells(self) -> impl Iterator<Item = Coord> {
        let n = self.dimension();
        (0..n)
            .flat_map(move |row| (0..n).map(move |col| Coord::new(row, col)))
            .filter(move |&coord| is_valid(coord, self))
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chess" | "1" => Ok(Variant::Chess),
            "checkers" | "2" => Ok(Variant::Checkers),
            "hex_chess" | "hex" | "3" => Ok(Variant::HexChess),
            other => Err(format!("unknown variant: {other}")),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 棋盘坐标（行, 列）
///
/// 使用有符号整数，偏移后越界的坐标依然可以表示，由 [`is_valid`] 判定。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    /// 创建坐标
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// 获取偏移后的坐标（不检查边界）
    pub fn offset(self, dr: i8, dc: i8) -> Coord {
        Coord::new(self.row + dr, self.col + dc)
    }

    /// 网格索引，仅对数组范围内的坐标返回值
    pub(crate) fn to_index(self) -> Option<usize> {
        let n = HEX_SIZE;
        if (0..n).contains(&self.row) && (0..n).contains(&self.col) {
            Some(self.row as usize * n as usize + self.col as usize)
        } else {
            None
        }
    }
}

impl From<(i8, i8)> for Coord {
    fn from((row, col): (i8, i8)) -> Self {
        Coord::new(row, col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 坐标在指定变体下是否位于棋盘上
pub fn is_valid(coord: Coord, variant: Variant) -> bool {
    match variant {
        Variant::Chess | Variant::Checkers => {
            (0..ORTHO_SIZE).contains(&coord.row) && (0..ORTHO_SIZE).contains(&coord.col)
        }
        Variant::HexChess => is_valid_hex(coord),
    }
}

/// 六边形区域：离中心行越远，列的范围越窄
fn is_valid_hex(coord: Coord) -> bool {
    let Coord { row, col } = coord;
    if !(0..HEX_SIZE).contains(&row) || !(0..HEX_SIZE).contains(&col) {
        return false;
    }
    let min_col = (row - HEX_CENTER).max(0);
    let max_col = (row + HEX_CENTER).min(HEX_SIZE - 1);
    (min_col..=max_col).contains(&col)
}
