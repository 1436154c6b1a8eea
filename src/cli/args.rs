//! 命令行参数定义

use clap::Parser;
use paginator::core::viewer::pagination_bar::BarLocation;
use std::path::PathBuf;

/// 终端分页导航器 - 按页浏览文本文件或示例数据
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// 按行分页的文本文件
    #[arg(short, long, value_name = "FILE", conflicts_with = "total")]
    pub file_path: Option<PathBuf>,

    /// 生成的示例数据条数 (默认: 100)
    #[arg(short, long)]
    pub total: Option<u32>,

    /// 每页条数 (默认: 配置文件或 10)
    #[arg(short = 'l', long = "limit")]
    pub limit: Option<u32>,

    /// 当前页前后显示的页码数量 (默认: 配置文件或 2)
    #[arg(short = 's', long = "size")]
    pub window_size: Option<u32>,

    /// 起始页码
    #[arg(short = 'p', long = "page", default_value = "1")]
    pub page: u32,

    /// "Page" 文案
    #[arg(long)]
    pub page_text: Option<String>,

    /// "of" 文案
    #[arg(long)]
    pub of_text: Option<String>,

    /// 分页栏位置
    #[arg(long, value_enum)]
    pub location: Option<BarLocation>,

    /// 配置文件路径
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// 禁用颜色输出
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// 只输出当前页后退出
    #[arg(long)]
    pub once: bool,

    /// 详细模式 - 输出调试日志
    #[arg(short, long)]
    pub verbose: bool,
}
