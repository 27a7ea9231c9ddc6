use crate::core::{Sink, Source};
use crate::utils::error::Result;
use std::fs;
use std::io::BufRead;
use std::path::Path;

/// 單行輸入來源，未指定路徑時讀取標準輸入
#[derive(Debug, Clone, Default)]
pub struct LineSource {
    path: Option<String>,
}

impl LineSource {
    pub fn stdin() -> Self {
        Self { path: None }
    }

    pub fn file(path: String) -> Self {
        Self { path: Some(path) }
    }
}

impl Source for LineSource {
    async fn read_line(&self) -> Result<String> {
        match &self.path {
            Some(path) => {
                let contents = fs::read_to_string(path)?;
                // 只取第一行，維持「讀取一次」的行為
                Ok(contents.lines().next().unwrap_or_default().to_string())
            }
            None => {
                let mut line = String::new();
                std::io::stdin().lock().read_line(&mut line)?;
                Ok(line)
            }
        }
    }
}

/// 單行輸出目的地，未指定路徑時寫到標準輸出
#[derive(Debug, Clone, Default)]
pub struct LineSink {
    path: Option<String>,
}

impl LineSink {
    pub fn stdout() -> Self {
        Self { path: None }
    }

    pub fn file(path: String) -> Self {
        Self { path: Some(path) }
    }
}

impl Sink for LineSink {
    async fn write_line(&self, line: &str) -> Result<()> {
        match &self.path {
            Some(path) => {
                let full_path = Path::new(path);

                if let Some(parent) = full_path.parent() {
                    if !parent.as_os_str().is_empty() {
                        fs::create_dir_all(parent)?;
                    }
                }

                fs::write(full_path, format!("{}\n", line))?;
            }
            None => {
                println!("{}", line);
            }
        }

        Ok(())
    }
}
