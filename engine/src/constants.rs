//! 棋盘常量定义

/// 国际象棋/跳棋棋盘边长
pub const ORTHO_SIZE: i8 = 8;

/// 六角棋盘嵌入数组的边长（11x11）
pub const HEX_SIZE: i8 = 11;

/// 六角棋盘中心行/列
pub const HEX_CENTER: i8 = 5;

/// 六角棋盘有效格数
pub const HEX_CELL_COUNT: usize = 91;

/// 网格存储边长（足以容纳所有变体）
pub const GRID_SIZE: usize = HEX_SIZE as usize;

/// 滑行棋子单条射线的最大步数
pub const MAX_RAY_STEPS: i8 = 10;
