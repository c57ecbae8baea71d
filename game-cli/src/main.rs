use std::env;
use std::io;

use anyhow::Result;
use engine::Variant;
use game_cli::{select_variant, App, RenderOptions, Settings};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // 初始化日志，输出到 stderr 以免干扰棋盘
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("game_cli=info".parse()?))
        .init();

    info!("棋类游戏启动中...");

    let settings = Settings::load();

    let from_args = env::args().nth(1).and_then(|arg| match arg.parse::<Variant>() {
        Ok(variant) => Some(variant),
        Err(e) => {
            warn!("忽略命令行参数: {}", e);
            None
        }
    });

    let stdin = io::stdin();
    let stdout = io::stdout();

    let variant = match from_args.or(settings.default_variant) {
        Some(variant) => variant,
        None => match select_variant(&mut stdin.lock(), &mut stdout.lock())? {
            Some(variant) => variant,
            None => return Ok(()),
        },
    };

    info!("开始对局: {}", variant);
    let options = RenderOptions {
        show_coordinates: settings.show_coordinates,
    };
    let mut app = App::new(variant, options, stdin.lock(), stdout.lock());
    app.run()?;

    info!("对局结束");
    Ok(())
}
