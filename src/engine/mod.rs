// ==========================================
// FBA货件装箱清单生成系统 - 引擎层
// ==========================================
// 职责: 对账与装箱分配的业务规则, 不含文件 I/O
//       （流水线编排除外）
// ==========================================

pub mod allocator;
pub mod brand;
pub mod pipeline;
pub mod reconcile;

// 重导出核心引擎
pub use allocator::CartonAllocator;
pub use brand::{infer_brand, BRAND_KEYWORDS, BRAND_KEYWORDS_CN};
pub use pipeline::ManifestPipeline;
pub use reconcile::{carton_count, Reconciler};
