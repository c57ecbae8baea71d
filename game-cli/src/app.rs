//! 命令行对局循环

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use engine::{Game, Notation, Variant};
use tracing::{debug, info, warn};

use crate::command::Command;
use crate::render::{render, RenderOptions};

const HELP_TEXT: &str = "\
命令:
  <起点> <终点>       走子，例如 e2 e4
  moves <格子>        查看该棋子可走的位置（也可用 提示）
  undo                悔棋
  help                显示本帮助
  quit                退出";

/// 命令行应用
pub struct App<R, W> {
    game: Game,
    options: RenderOptions,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(variant: Variant, options: RenderOptions, input: R, output: W) -> Self {
        Self {
            game: Game::new(variant),
            options,
            input,
            output,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// 消耗应用，取回输出
    pub fn into_output(self) -> W {
        self.output
    }

    /// 运行直到退出或输入结束
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{}，输入 help 查看命令", self.game.variant().display_name())?;

        loop {
            self.show_board()?;
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("读取输入失败")?;
            if read == 0 {
                info!("输入结束，退出对局");
                writeln!(self.output)?;
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match Command::parse(&line, self.game.variant()) {
                Ok(Command::Quit) => {
                    writeln!(self.output, "再见")?;
                    break;
                }
                Ok(command) => self.execute(command)?,
                Err(e) => {
                    debug!("命令解析失败: {}", e);
                    writeln!(self.output, "无效命令: {}", e)?;
                }
            }
        }

        Ok(())
    }

    fn show_board(&mut self) -> io::Result<()> {
        write!(self.output, "{}", render(self.game.board(), self.options))?;
        writeln!(
            self.output,
            "第 {} 步，轮到{}",
            self.game.move_count() + 1,
            self.game.current_player().display_name()
        )
    }

    fn execute(&mut self, command: Command) -> Result<()> {
        let variant = self.game.variant();
        match command {
            Command::Move(from, to) => match self.game.play(from, to) {
                Ok(mv) => {
                    info!("走子 {}", mv);
                    let mut message = format!(
                        "{} -> {}",
                        Notation::format(from, variant),
                        Notation::format(to, variant)
                    );
                    if mv.is_capture() {
                        message.push_str("，吃子");
                    }
                    if mv.promotion.is_some() {
                        message.push_str("，升变");
                    }
                    writeln!(self.output, "{}", message)?;
                }
                Err(e) => {
                    warn!("走子被拒绝: {}", e);
                    writeln!(self.output, "无法走子: {}", e)?;
                }
            },
            Command::Undo => match self.game.undo() {
                Ok(mv) => {
                    info!("悔棋 {}", mv);
                    writeln!(self.output, "已悔棋")?;
                }
                Err(e) => writeln!(self.output, "无法悔棋: {}", e)?,
            },
            Command::Moves(from) => {
                let destinations = self.game.destinations(from);
                if destinations.is_empty() {
                    writeln!(self.output, "{} 没有可走的位置", Notation::format(from, variant))?;
                } else {
                    let squares: Vec<String> = destinations
                        .iter()
                        .map(|&to| Notation::format(to, variant))
                        .collect();
                    writeln!(self.output, "可走: {}", squares.join(" "))?;
                }
            }
            Command::Help => writeln!(self.output, "{}", HELP_TEXT)?,
            Command::Quit => {}
        }
        Ok(())
    }
}

/// 变体选择菜单，输入结束时返回 None
pub fn select_variant<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<Variant>> {
    loop {
        writeln!(output, "请选择棋类:")?;
        for (i, variant) in Variant::all().iter().enumerate() {
            writeln!(output, "  {}. {}", i + 1, variant.display_name())?;
        }
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.trim().parse::<Variant>() {
            Ok(variant) => return Ok(Some(variant)),
            Err(_) => writeln!(output, "无效选择: {}", line.trim())?,
        }
    }
}
