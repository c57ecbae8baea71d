//! 文本棋盘渲染
//!
//! 只通过 `Board::get_piece` 读取棋盘，不做任何修改。

use engine::{is_valid, Board, Coord, Notation, Variant};

/// 渲染选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// 是否显示行列标注
    pub show_coordinates: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_coordinates: true,
        }
    }
}

/// 渲染整块棋盘
pub fn render(board: &Board, options: RenderOptions) -> String {
    let variant = board.variant();
    let size = variant.dimension();
    let mut lines = Vec::with_capacity(size as usize + 4);

    let header = format!(
        "     {}",
        (0..size)
            .map(|col| Notation::file_label(col).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );
    let border = format!("   +{}+", "-".repeat(2 * size as usize + 1));

    if options.show_coordinates {
        lines.push(header.clone());
        lines.push(border.clone());
    }

    for row in 0..size {
        let cells: Vec<String> = (0..size)
            .map(|col| cell_char(board, Coord::new(row, col)).to_string())
            .collect();
        let cells = cells.join(" ");
        if options.show_coordinates {
            let rank = Notation::rank_label(row, variant);
            lines.push(format!("{:>2} | {} | {}", rank, cells, rank));
        } else {
            lines.push(cells.trim_end().to_string());
        }
    }

    if options.show_coordinates {
        lines.push(border);
        lines.push(header);
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

/// 单个格子的显示字符
fn cell_char(board: &Board, coord: Coord) -> char {
    let variant = board.variant();
    if !is_valid(coord, variant) {
        return ' ';
    }
    if let Some(piece) = board.get_piece(coord) {
        return piece.symbol();
    }
    match variant {
        // 跳棋只用深色格，浅色格画点
        Variant::Checkers if (coord.row + coord.col) % 2 == 1 => ' ',
        _ => '.',
    }
}
