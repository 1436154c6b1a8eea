//! 分页查看器

use colored::*;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::cell::Cell;
use std::io::{self, Write};
use std::rc::Rc;

use paginator::app::config::settings::Settings;
use paginator::app::error::types::Result;
use paginator::core::input::keyboard::{map_key, Command, KeyboardHandler};
use paginator::core::source::lines::SourceInfo;
use paginator::core::viewer::pagination_bar::{
    render_bar, render_status, BarLocation,
};
use paginator::core::viewer::terminal::TerminalManager;
use paginator::{NavAction, PagedList};

/// 页面内容以外占用的行数：标题、两条分隔线、分页栏、状态、帮助
const RESERVED_LINES: usize = 6;

/// 数据行前的序号宽度（含 ": "）
const INDEX_WIDTH: usize = 8;

const HELP: &str = "导航: ←→ 翻页 | Home/End 首页/末页 | 1-9 跳转 | +/- 窗口 | [/] 每页条数 | r 刷新 | ESC/q 退出";

/// 分页查看器
pub struct PageViewer {
    list: PagedList<String>,
    settings: Settings,
    source: Option<SourceInfo>,
    terminal_manager: TerminalManager,
    keyboard_handler: KeyboardHandler,
    // 由页码变更监听器置位，用于检测是否需要重绘
    page_changed: Rc<Cell<bool>>,
    last_size: (usize, usize),
}

impl PageViewer {
    /// 创建新的分页查看器
    pub fn new(
        mut list: PagedList<String>,
        settings: Settings,
        source: Option<SourceInfo>,
    ) -> Self {
        let page_changed = Rc::new(Cell::new(true));
        let flag = Rc::clone(&page_changed);
        list.add_page_change_listener(move |_| flag.set(true));

        Self {
            list,
            settings,
            source,
            terminal_manager: TerminalManager::new(),
            keyboard_handler: KeyboardHandler::default(),
            page_changed,
            last_size: (0, 0),
        }
    }

    /// 运行查看器
    pub fn run(&mut self) -> Result<()> {
        self.apply_color_setting();
        self.interactive_mode()
    }

    /// 输出当前页后退出
    pub fn print_once(&self) -> Result<()> {
        self.apply_color_setting();
        let (width, _) = self.terminal_manager.get_size();
        let mut stdout = io::stdout().lock();
        for line in self.render_frame(width, usize::MAX) {
            writeln!(stdout, "{}", line)?;
        }
        Ok(())
    }

    fn apply_color_setting(&self) {
        if !self.settings.color {
            colored::control::set_override(false);
        }
    }

    /// 交互模式
    fn interactive_mode(&mut self) -> Result<()> {
        self.terminal_manager.enter_raw_mode()?;

        loop {
            let size = self.terminal_manager.get_size();
            let needs_redraw =
                self.page_changed.replace(false) || size != self.last_size;

            if needs_redraw {
                self.terminal_manager.clear_screen()?;
                self.draw(size)?;
                self.last_size = size;
            }

            match event::read()? {
                Event::Key(KeyEvent {
                    code,
                    kind: KeyEventKind::Press,
                    ..
                }) => {
                    if !self.keyboard_handler.should_process_key(&code) {
                        continue;
                    }
                    let Some(command) = map_key(code) else {
                        continue;
                    };
                    if !self.handle_command(command) {
                        break;
                    }
                }
                // 尺寸变化在下一轮循环中检测
                _ => continue,
            }
        }

        // 恢复终端（由 TerminalManager 的 Drop trait 自动处理）
        Ok(())
    }

    /// 处理命令，返回是否继续运行
    fn handle_command(&mut self, command: Command) -> bool {
        let pagination = self.list.pagination();
        let window_size = pagination.window_size();
        let page_size = pagination.limit();

        match command {
            Command::Quit => return false,
            Command::Navigate(action) => self.list.navigate(action),
            Command::JumpToVisible(n) => {
                let target = n
                    .checked_sub(1)
                    .and_then(|i| pagination.visible_window().get(i))
                    .copied();
                if let Some(page) = target {
                    self.list.navigate(NavAction::ToPage(page));
                }
            }
            Command::WidenWindow => {
                self.list.set_window_size(window_size.saturating_add(1))
            }
            Command::NarrowWindow => {
                if window_size > 0 {
                    self.list.set_window_size(window_size - 1);
                }
            }
            Command::GrowPageSize => {
                self.list.set_page_size(page_size.saturating_add(1))
            }
            Command::ShrinkPageSize => {
                if page_size > 1 {
                    self.list.set_page_size(page_size - 1);
                }
            }
            Command::Refresh => {
                // 刷新不触发页码变更，强制重绘
                self.list.pagination_mut().refresh();
                self.page_changed.set(true);
            }
        }
        true
    }

    /// 绘制一帧（原始模式下使用显式的\r\n）
    fn draw(&self, (width, height): (usize, usize)) -> Result<()> {
        let mut stdout = io::stdout().lock();
        for line in self.render_frame(width, height) {
            write!(stdout, "{}\r\n", line)?;
        }
        stdout.flush()?;
        Ok(())
    }

    /// 生成一帧的所有行
    fn render_frame(&self, width: usize, height: usize) -> Vec<String> {
        let use_color = self.settings.color;
        let pagination = self.list.pagination();
        let separator = "=".repeat(width.clamp(1, 80));
        let bar = render_bar(pagination, use_color);
        let mut lines = Vec::new();

        let title = match &self.source {
            Some(info) => info.describe(),
            None => "示例数据".to_string(),
        };
        lines.push(styled(&title, use_color, |s| s.bright_white().bold()));
        lines.push(separator.clone());

        if self.settings.location == BarLocation::Top {
            lines.push(bar.clone());
            lines.push(separator.clone());
        }

        let rows = height.saturating_sub(RESERVED_LINES);
        let text_width = width.saturating_sub(INDEX_WIDTH);
        let offset = self.list.offset();
        for (i, item) in
            self.list.current_items().iter().take(rows).enumerate()
        {
            let text: String = item.chars().take(text_width).collect();
            let index = format!("{:>6}", offset + i + 1);
            lines.push(format!(
                "{}: {}",
                styled(&index, use_color, |s| s.bright_blue()),
                text
            ));
        }

        if self.settings.location == BarLocation::Bottom {
            lines.push(separator);
            lines.push(bar);
        }

        lines.push(styled(&render_status(pagination), use_color, |s| {
            s.bright_white().bold()
        }));
        lines.push(styled(HELP, use_color, |s| s.bright_black()));
        lines
    }
}

fn styled(
    text: &str,
    use_color: bool,
    style: impl Fn(&str) -> ColoredString,
) -> String {
    if use_color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}
