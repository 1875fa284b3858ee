// ==========================================
// FBA货件装箱清单生成系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xls）")]
    UnsupportedFormat(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("工作表不存在: {0}")]
    SheetNotFound(String),

    // ===== 表结构错误 =====
    #[error("工作表 {sheet} 缺少必需列: {column}")]
    ColumnMissing { sheet: String, column: String },

    // ===== 行级错误 =====
    #[error("字段缺失 (行 {row}): {field} 为空")]
    FieldMissing { row: usize, field: String },

    #[error("品名格式错误 (行 {row}): {value}（期望 型号*包装*属性 三段, 属性含至少4个 / 分隔字段）")]
    ProductNameFormat { row: usize, value: String },

    #[error("数值解析失败 (行 {row}, 字段 {field}): {value}")]
    NumberFormat {
        row: usize,
        field: String,
        value: String,
    },

    #[error("日期解析失败 (行 {row}, 字段 {field}): {value}")]
    DateFormat {
        row: usize,
        field: String,
        value: String,
    },

    // ===== 补齐错误 =====
    #[error("首行货件头不完整 (行 {row}): 无可继承的前序完整行")]
    CarryForwardWithoutHeader { row: usize },
}

/// 导入模块 Result 别名
pub type ImportResult<T> = Result<T, ImportError>;
