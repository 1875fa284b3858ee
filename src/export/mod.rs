// ==========================================
// FBA货件装箱清单生成系统 - 导出层
// ==========================================
// 职责: 清单行写出为 xlsx 工作簿
// ==========================================

pub mod manifest_writer;

pub use manifest_writer::{ExportError, ManifestWriter};
