//! 终端分页导航器主程序

mod cli;

use clap::Parser;

use cli::args::CliArgs;
use paginator::app::error::types::Result;
use paginator::app::logging::setup::init_logging;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    // 初始化日志系统
    init_logging(args.verbose);

    // 运行命令行界面
    cli::run_cli(args)
}
