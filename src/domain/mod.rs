// ==========================================
// FBA货件装箱清单生成系统 - 领域层
// ==========================================
// 职责: 领域实体与查找表, 不含 I/O
// ==========================================

pub mod manifest;
pub mod reference;
pub mod shipment;

// 重导出核心实体
pub use manifest::ManifestRow;
pub use reference::{PackingSpec, PackingTable, ProductCatalog, ReferenceProduct};
pub use shipment::{ShipmentHeader, ShipmentLayout, ShipmentRecord};
