//! 坐标记谱
//!
//! 列字母 + 行号，例如 `e2`：
//! - 国际象棋/跳棋：a-h，1-8，第 8 行在最上方（row 0）
//! - 六角象棋：a-k，0-10，第 10 行在最上方（row 0）

use crate::constants::{HEX_SIZE, ORTHO_SIZE};
use crate::error::NotationError;
use crate::geometry::{is_valid, Coord, Variant};

/// 坐标记谱
pub struct Notation;

impl Notation {
    /// 解析坐标
    pub fn parse(text: &str, variant: Variant) -> Result<Coord, NotationError> {
        let text = text.trim().to_ascii_lowercase();
        let mut chars = text.chars();
        let Some(file) = chars.next() else {
            return Err(NotationError::InvalidLength(text));
        };
        let rank_str: String = chars.collect();
        let max_rank_len = match variant {
            Variant::HexChess => 2,
            Variant::Chess | Variant::Checkers => 1,
        };
        if rank_str.is_empty() || rank_str.chars().count() > max_rank_len {
            return Err(NotationError::InvalidLength(text));
        }

        let (min_rank, max_rank) = Self::rank_range(variant);
        let max_file = (b'a' + (variant.dimension() - 1) as u8) as char;
        if !('a'..=max_file).contains(&file) {
            return Err(NotationError::InvalidFile {
                found: file,
                max: max_file,
            });
        }

        let rank = rank_str
            .parse::<u8>()
            .ok()
            .filter(|rank| (min_rank..=max_rank).contains(rank))
            .ok_or(NotationError::InvalidRank {
                found: rank_str,
                min: min_rank,
                max: max_rank,
            })?;

        let coord = Coord::new(Self::top_rank(variant) - rank as i8, (file as u8 - b'a') as i8);
        if !is_valid(coord, variant) {
            return Err(NotationError::OffBoard(text));
        }
        Ok(coord)
    }

    /// 坐标转为记谱字符串
    pub fn format(coord: Coord, variant: Variant) -> String {
        let file = (b'a' + coord.col as u8) as char;
        let rank = Self::top_rank(variant) - coord.row;
        format!("{}{}", file, rank)
    }

    /// 网格第 `row` 行对应的行号
    pub fn rank_label(row: i8, variant: Variant) -> i8 {
        Self::top_rank(variant) - row
    }

    /// 第 `col` 列对应的字母
    pub fn file_label(col: i8) -> char {
        (b'a' + col as u8) as char
    }

    /// row 0 对应的行号
    fn top_rank(variant: Variant) -> i8 {
        match variant {
            Variant::Chess | Variant::Checkers => ORTHO_SIZE,
            Variant::HexChess => HEX_SIZE - 1,
        }
    }

    fn rank_range(variant: Variant) -> (u8, u8) {
        match variant {
            Variant::Chess | Variant::Checkers => (1, ORTHO_SIZE as u8),
            Variant::HexChess => (0, (HEX_SIZE - 1) as u8),
        }
    }
}
