use serde::{Deserialize, Serialize};

/// 待分類的原始輸入行，尚未去除前後空白
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    pub raw: String,
}

#[derive(Debug, Clone)]
pub struct DescribeResult {
    pub element: String,
    pub description: String,
    pub matched: bool,
}
