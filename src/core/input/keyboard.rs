//! 键盘输入处理

use crossterm::event::KeyCode;
use std::time::Instant;

use crate::core::pagination::NavAction;

/// 按键对应的命令
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Navigate(NavAction),
    /// 跳转到可见窗口中的第 n 个页码（从 1 开始）
    JumpToVisible(usize),
    WidenWindow,
    NarrowWindow,
    GrowPageSize,
    ShrinkPageSize,
    Refresh,
    Quit,
}

/// 将按键映射为命令
pub fn map_key(code: KeyCode) -> Option<Command> {
    let command = match code {
        KeyCode::Esc | KeyCode::Char('q') => Command::Quit,
        KeyCode::Left | KeyCode::Char('h') => {
            Command::Navigate(NavAction::Previous)
        }
        KeyCode::Right | KeyCode::Char('l') => {
            Command::Navigate(NavAction::Next)
        }
        KeyCode::Home | KeyCode::Char('g') => {
            Command::Navigate(NavAction::First)
        }
        KeyCode::End | KeyCode::Char('G') => {
            Command::Navigate(NavAction::Last)
        }
        KeyCode::Char(c @ '1'..='9') => {
            Command::JumpToVisible(c as usize - '0' as usize)
        }
        KeyCode::Char('+') | KeyCode::Char('=') => Command::WidenWindow,
        KeyCode::Char('-') => Command::NarrowWindow,
        KeyCode::Char(']') => Command::GrowPageSize,
        KeyCode::Char('[') => Command::ShrinkPageSize,
        KeyCode::Char('r') => Command::Refresh,
        _ => return None,
    };
    Some(command)
}

/// 键盘输入处理器
pub struct KeyboardHandler {
    last_key_time: Instant,
    last_key_code: Option<KeyCode>,
    debounce_duration_ms: u64,
}

impl KeyboardHandler {
    /// 创建新的键盘处理器
    pub fn new(debounce_duration_ms: u64) -> Self {
        Self {
            last_key_time: Instant::now(),
            last_key_code: None,
            debounce_duration_ms,
        }
    }

    /// 判断是否应该处理按键（同一个键必须间隔指定时间）
    pub fn should_process_key(&mut self, code: &KeyCode) -> bool {
        let now = Instant::now();
        let time_since_last = now.duration_since(self.last_key_time);
        let is_same_key = self.last_key_code.as_ref() == Some(code);

        if is_same_key
            && time_since_last.as_millis()
                < self.debounce_duration_ms as u128
        {
            return false;
        }

        self.last_key_code = Some(*code);
        self.last_key_time = now;

        true
    }
}

impl Default for KeyboardHandler {
    /// 150ms 防抖
    fn default() -> Self {
        Self::new(150)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_navigation_keys() {
        assert_eq!(map_key(KeyCode::Left), Some(Command::Navigate(NavAction::Previous)));
        assert_eq!(map_key(KeyCode::Char('l')), Some(Command::Navigate(NavAction::Next)));
        assert_eq!(map_key(KeyCode::Home), Some(Command::Navigate(NavAction::First)));
        assert_eq!(map_key(KeyCode::Char('G')), Some(Command::Navigate(NavAction::Last)));
    }

    #[test]
    fn test_map_digit_keys() {
        assert_eq!(map_key(KeyCode::Char('1')), Some(Command::JumpToVisible(1)));
        assert_eq!(map_key(KeyCode::Char('9')), Some(Command::JumpToVisible(9)));
        assert_eq!(map_key(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_map_other_keys() {
        assert_eq!(map_key(KeyCode::Esc), Some(Command::Quit));
        assert_eq!(map_key(KeyCode::Char('+')), Some(Command::WidenWindow));
        assert_eq!(map_key(KeyCode::Char('[')), Some(Command::ShrinkPageSize));
        assert_eq!(map_key(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_same_key_is_debounced() {
        let mut handler = KeyboardHandler::new(60_000);
        assert!(handler.should_process_key(&KeyCode::Right));
        assert!(!handler.should_process_key(&KeyCode::Right));
        assert!(handler.should_process_key(&KeyCode::Left));
        assert!(handler.should_process_key(&KeyCode::Right));
    }

    #[test]
    fn test_zero_debounce_accepts_repeats() {
        let mut handler = KeyboardHandler::new(0);
        assert!(handler.should_process_key(&KeyCode::Right));
        assert!(handler.should_process_key(&KeyCode::Right));
    }
}
