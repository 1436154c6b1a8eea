//! 文本行数据源

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use path_absolutize::Absolutize;

use crate::app::error::types::Result;

/// 数据源信息
#[derive(Debug, Clone)]
pub struct SourceInfo {
    /// 绝对路径
    pub path: PathBuf,
    /// 文件修改时间
    pub modified: Option<DateTime<Local>>,
}

impl SourceInfo {
    /// 格式化为一行描述
    pub fn describe(&self) -> String {
        match &self.modified {
            Some(time) => format!(
                "{} ({})",
                self.path.display(),
                time.format("%Y-%m-%d %H:%M:%S")
            ),
            None => self.path.display().to_string(),
        }
    }
}

/// 按行读取的数据源
pub struct LineSource {
    info: SourceInfo,
    lines: Vec<String>,
}

impl LineSource {
    /// 打开并读取文件
    pub fn open<P: AsRef<Path>>(file_path: P) -> Result<Self> {
        let file_path = file_path.as_ref();
        let path = file_path.absolutize()?.to_path_buf();
        let modified = std::fs::metadata(file_path)?
            .modified()
            .ok()
            .map(DateTime::<Local>::from);

        let file = File::open(file_path)?;
        let lines = Self::read_lines(BufReader::new(file))?;

        Ok(Self {
            info: SourceInfo { path, modified },
            lines,
        })
    }

    /// 读取所有行，非 UTF-8 内容按有损方式转换
    fn read_lines<R: Read>(
        mut reader: BufReader<R>,
    ) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        let mut buffer = Vec::new();
        loop {
            buffer.clear();
            if reader.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buffer);
            lines.push(
                line.trim_end_matches(['\r', '\n']).to_string(),
            );
        }
        Ok(lines)
    }

    pub fn info(&self) -> &SourceInfo {
        &self.info
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// 取出所有行
    pub fn into_parts(self) -> (SourceInfo, Vec<String>) {
        (self.info, self.lines)
    }
}

/// 生成 `Item 1..=total` 的示例数据
pub fn generated_items(total: u32) -> Vec<String> {
    (1..=total).map(|i| format!("Item {}", i)).collect()
}
