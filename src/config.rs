// ==========================================
// FBA货件装箱清单生成系统 - 运行配置
// ==========================================
// 职责: 流水线运行参数（产品资料路径/输出目录/并发数）
// 说明: 字段名/品牌关键词/国家清单属于领域查找数据,
//       在各自模块中以常量维护, 不在此配置
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 默认并发处理任务数
pub const DEFAULT_WORKER_COUNT: usize = 3;

/// 流水线运行配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// 产品资料工作簿路径（品号汇总 + 装箱清单）
    pub reference_path: PathBuf,

    /// 清单输出目录
    pub output_dir: PathBuf,

    /// 工作池大小（同时处理的任务数上限）
    pub worker_count: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            reference_path: PathBuf::from("./product_info.xlsx"),
            output_dir: PathBuf::from("./results"),
            worker_count: DEFAULT_WORKER_COUNT,
        }
    }
}

impl PipelineConfig {
    /// 创建配置
    pub fn new(
        reference_path: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        worker_count: usize,
    ) -> Self {
        Self {
            reference_path: reference_path.into(),
            output_dir: output_dir.into(),
            // 工作池至少保留一个工作任务
            worker_count: worker_count.max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.worker_count, 3);
        assert_eq!(config.output_dir, PathBuf::from("./results"));
    }

    #[test]
    fn test_worker_count_floor() {
        let config = PipelineConfig::new("ref.xlsx", "out", 0);
        assert_eq!(config.worker_count, 1);
    }
}
