//! 命令解析

use engine::{Coord, Notation, NotationError, Variant};
use thiserror::Error;

/// 用户命令
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// 走子：起点 终点
    Move(Coord, Coord),
    /// 悔棋
    Undo,
    /// 列出某个格子上棋子的可达格
    Moves(Coord),
    /// 帮助
    Help,
    /// 退出
    Quit,
}

/// 命令解析错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Expected two squares, e.g. 'e2 e4'")]
    WrongArity,

    #[error("Invalid square: {0}")]
    Square(#[from] NotationError),
}

impl Command {
    /// 按当前变体解析一行输入
    pub fn parse(line: &str, variant: Variant) -> Result<Command, CommandError> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&head) = parts.first() else {
            return Err(CommandError::Empty);
        };

        match head.to_lowercase().as_str() {
            "undo" | "悔棋" if parts.len() == 1 => return Ok(Command::Undo),
            "quit" | "exit" | "退出" if parts.len() == 1 => return Ok(Command::Quit),
            "help" | "帮助" if parts.len() == 1 => return Ok(Command::Help),
            "moves" | "提示" => {
                return match parts.as_slice() {
                    [_, square] => Ok(Command::Moves(Notation::parse(square, variant)?)),
                    _ => Err(CommandError::WrongArity),
                };
            }
            _ => {}
        }

        match parts.as_slice() {
            [from, to] => Ok(Command::Move(
                Notation::parse(from, variant)?,
                Notation::parse(to, variant)?,
            )),
            _ => Err(CommandError::WrongArity),
        }
    }
}
