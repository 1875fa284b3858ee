// ==========================================
// FBA货件装箱清单生成系统 - 核心库
// ==========================================
// 职责: 货件导出表 + 产品资料表 → 标准装箱清单
// 技术栈: Rust + calamine + rust_xlsxwriter + tokio
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 外部数据解析
pub mod importer;

// 引擎层 - 对账与装箱分配
pub mod engine;

// 导出层 - 清单写出
pub mod export;

// 任务层 - 异步任务调度
pub mod runner;

// 配置层
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::manifest::ManifestRow;
pub use domain::reference::{PackingSpec, PackingTable, ProductCatalog, ReferenceProduct};
pub use domain::shipment::{ShipmentHeader, ShipmentLayout, ShipmentRecord};

// 导入层
pub use importer::{ImportError, ReferenceLoader, ShipmentParser};

// 引擎
pub use engine::{carton_count, CartonAllocator, ManifestPipeline, Reconciler};

// 导出层
pub use export::{ExportError, ManifestWriter};

// 任务调度
pub use runner::{JobId, JobRunner, JobStatus};

// 配置
pub use config::PipelineConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "FBA货件装箱清单生成系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
