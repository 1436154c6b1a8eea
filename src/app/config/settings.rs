//! 配置文件加载

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::app::error::types::{PaginatorError, Result};
use crate::core::viewer::pagination_bar::BarLocation;

/// 用户配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 每页条数
    pub page_size: u32,
    /// 当前页前后显示的页码数量
    pub window_size: u32,
    pub page_text: String,
    pub of_text: String,
    /// 分页栏位置
    pub location: BarLocation,
    /// 启用颜色输出
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: 10,
            window_size: 2,
            page_text: "Page".to_string(),
            of_text: "of".to_string(),
            location: BarLocation::Bottom,
            color: true,
        }
    }
}

impl Settings {
    /// 默认配置文件路径
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("paginator").join("config.toml"))
    }

    /// 从 TOML 文本解析
    pub fn from_toml_str(
        text: &str,
    ) -> std::result::Result<Self, PaginatorError> {
        toml::from_str(text)
            .map_err(|e| PaginatorError::ConfigError(e.to_string()))
    }

    /// 从指定文件加载
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(PaginatorError::from)?;
        let settings: Self = toml::from_str(&text).map_err(|e| {
            PaginatorError::ConfigError(format!(
                "{}: {}",
                path.display(),
                e
            ))
        })?;
        debug!(path = %path.display(), "已加载配置文件");
        Ok(settings)
    }

    /// 加载配置
    ///
    /// 显式指定的文件必须存在；否则尝试默认路径，不存在时使用默认值。
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }
}
