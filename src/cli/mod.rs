//! 命令行界面模块

pub mod args;
pub mod page_viewer;

use colored::*;
use tracing::info;

use paginator::app::config::settings::Settings;
use paginator::app::error::types::{PaginatorError, Result};
use paginator::core::source::lines::{generated_items, LineSource};
use paginator::{Labels, PagedList};

use self::args::CliArgs;
use self::page_viewer::PageViewer;

/// 未指定文件和条数时生成的示例数据条数
const DEFAULT_TOTAL: u32 = 100;

/// 运行命令行界面
pub fn run_cli(args: CliArgs) -> Result<()> {
    // 检查文件是否存在
    if let Some(path) = &args.file_path {
        if !path.exists() {
            eprintln!(
                "{} 文件不存在: {}",
                "错误".red().bold(),
                path.display()
            );
            std::process::exit(1);
        }
    }

    let settings = resolve_settings(&args)?;

    let (source, items) = match &args.file_path {
        Some(path) => {
            let (info, lines) = LineSource::open(path)?.into_parts();
            (Some(info), lines)
        }
        None => (None, generated_items(args.total.unwrap_or(DEFAULT_TOTAL))),
    };
    info!(
        items = items.len(),
        page_size = settings.page_size,
        window_size = settings.window_size,
        "数据已加载"
    );

    let mut list =
        PagedList::new(items, settings.page_size, settings.window_size);
    list.pagination_mut().set_labels(Labels {
        page_text: settings.page_text.clone(),
        of_text: settings.of_text.clone(),
    });
    list.pagination_mut().set_page(args.page);

    let mut viewer = PageViewer::new(list, settings, source);
    if args.once {
        viewer.print_once()
    } else {
        viewer.run()
    }
}

/// 合并配置文件与命令行参数，命令行优先
fn resolve_settings(args: &CliArgs) -> Result<Settings> {
    let mut settings = Settings::load(args.config.as_deref())?;

    if let Some(limit) = args.limit {
        settings.page_size = limit;
    }
    if let Some(window_size) = args.window_size {
        settings.window_size = window_size;
    }
    if let Some(page_text) = &args.page_text {
        settings.page_text = page_text.clone();
    }
    if let Some(of_text) = &args.of_text {
        settings.of_text = of_text.clone();
    }
    if let Some(location) = args.location {
        settings.location = location;
    }
    if args.no_color {
        settings.color = false;
    }

    if settings.page_size == 0 {
        return Err(PaginatorError::InvalidArgument(
            "每页条数必须大于 0".to_string(),
        )
        .into());
    }
    if args.page == 0 {
        return Err(PaginatorError::InvalidArgument(
            "页码从 1 开始".to_string(),
        )
        .into());
    }

    Ok(settings)
}
