// ==========================================
// FBA货件装箱清单生成系统 - 工作表读取
// ==========================================
// 支持: Excel (.xlsx/.xls)
// 产出: 表头 + 逐行 列名→单元格文本 映射
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook, Reader, Xlsx};
use std::collections::HashMap;
use std::path::Path;

/// 一张工作表的原始内容
///
/// `rows[i]` 对应文件第 `i + 2` 行（第1行为表头）;
/// 完全空白的行已跳过, 行号以 `DATA_ROW_OFFSET + i` 还原
#[derive(Debug, Clone)]
pub struct SheetRows {
    pub headers: Vec<String>,
    pub rows: Vec<(usize, HashMap<String, String>)>,
}

/// 数据区首行在文件中的行号（表头占第1行）
pub const DATA_ROW_OFFSET: usize = 2;

impl SheetRows {
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }
}

/// 读取工作簿中的一张表
///
/// # 参数
/// - file_path: 工作簿路径
/// - sheet_name: 表名; None 时取第一张表
pub fn read_sheet(file_path: &Path, sheet_name: Option<&str>) -> ImportResult<SheetRows> {
    // 检查文件存在
    if !file_path.exists() {
        return Err(ImportError::FileNotFound(file_path.display().to_string()));
    }

    // 检查扩展名
    let ext = file_path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if ext != "xlsx" && ext != "xls" {
        return Err(ImportError::UnsupportedFormat(ext.to_string()));
    }

    // 打开 Excel 文件
    let mut workbook: Xlsx<_> = open_workbook(file_path)
        .map_err(|e: calamine::XlsxError| ImportError::ExcelParseError(e.to_string()))?;

    // 定位目标表
    let sheet_names = workbook.sheet_names();
    if sheet_names.is_empty() {
        return Err(ImportError::ExcelParseError(
            "Excel 文件无工作表".to_string(),
        ));
    }

    let target = match sheet_name {
        Some(name) => {
            if !sheet_names.iter().any(|s| s == name) {
                return Err(ImportError::SheetNotFound(name.to_string()));
            }
            name.to_string()
        }
        None => sheet_names[0].clone(),
    };

    let range = workbook
        .worksheet_range(&target)
        .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

    // 提取表头（第一行）
    let mut rows_iter = range.rows();
    let header_row = rows_iter
        .next()
        .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无数据行".to_string()))?;

    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell.to_string().trim().to_string())
        .collect();

    // 读取数据行
    let mut rows = Vec::new();
    for (idx, data_row) in rows_iter.enumerate() {
        let mut row_map = HashMap::new();

        for (col_idx, cell) in data_row.iter().enumerate() {
            if let Some(header) = headers.get(col_idx) {
                let value = cell.to_string().trim().to_string();
                row_map.insert(header.clone(), value);
            }
        }

        // 跳过完全空白的行
        if row_map.values().all(|v| v.is_empty()) {
            continue;
        }

        rows.push((DATA_ROW_OFFSET + idx, row_map));
    }

    Ok(SheetRows { headers, rows })
}

/// 校验必需列, 缺失即返回错误
pub fn require_columns(sheet: &SheetRows, sheet_name: &str, columns: &[&str]) -> ImportResult<()> {
    for column in columns {
        if !sheet.has_column(column) {
            return Err(ImportError::ColumnMissing {
                sheet: sheet_name.to_string(),
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

/// 提取字符串字段（空白返回 None）
pub fn get_string(row: &HashMap<String, String>, key: &str) -> Option<String> {
    row.get(key).map(|v| v.trim()).filter(|v| !v.is_empty()).map(String::from)
}
