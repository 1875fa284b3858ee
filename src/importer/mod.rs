// ==========================================
// FBA货件装箱清单生成系统 - 导入层
// ==========================================
// 职责: 外部工作簿解析, 生成内部数据
// 红线: 缺表/缺列/坏行即错, 不产出部分数据
// ==========================================

// 模块声明
pub mod error;
pub mod reference_loader;
pub mod sheet_reader;
pub mod shipment_parser;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use reference_loader::{ReferenceLoader, PACKING_LIST_SHEET, PRODUCT_SUMMARY_SHEET};
pub use sheet_reader::{read_sheet, SheetRows};
pub use shipment_parser::{ShipmentParser, COUNTRIES};
