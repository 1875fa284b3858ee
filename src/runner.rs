// ==========================================
// FBA货件装箱清单生成系统 - 任务调度层
// ==========================================
// 职责: 任务受理 + 固定工作池 + 状态查询
// 红线: 状态表归 JobRunner 实例所有, 无进程级全局;
//       锁只覆盖状态读写, 不覆盖流水线执行;
//       成功路径先写结果再删上传件, 失败路径保留上传件
// ==========================================

use crate::config::PipelineConfig;
use crate::engine::pipeline::ManifestPipeline;
use crate::export::manifest_writer::ManifestWriter;
use anyhow::Context;
use chrono::Local;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tracing::{error, info};
use uuid::Uuid;

/// 任务标识
pub type JobId = String;

// ==========================================
// JobStatus - 任务状态
// ==========================================
/// 任务状态机: pending → completed | error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum JobStatus {
    /// 等待或执行中
    Pending,
    /// 已完成, 携带输出文件名
    Completed { output_file: String },
    /// 失败, 携带错误信息; 上传件保留待诊断
    Error { message: String },
}

impl JobStatus {
    pub fn as_str(&self) -> &str {
        match self {
            JobStatus::Pending => "PENDING",
            JobStatus::Completed { .. } => "COMPLETED",
            JobStatus::Error { .. } => "ERROR",
        }
    }
}

/// 队列中的一个任务
struct JobTask {
    job_id: JobId,
    shipment_path: PathBuf,
}

// ==========================================
// JobRunner - 任务调度器
// ==========================================
/// 固定大小工作池上的清单生成任务调度器
///
/// 提交即返回任务号, 超出池容量的任务在队列中等待,
/// 不阻塞提交方; 状态通过轮询获取
pub struct JobRunner {
    statuses: Arc<Mutex<HashMap<JobId, JobStatus>>>,
    sender: mpsc::UnboundedSender<JobTask>,
}

impl JobRunner {
    /// 创建调度器并启动工作池
    pub fn new(config: PipelineConfig) -> Self {
        let statuses: Arc<Mutex<HashMap<JobId, JobStatus>>> = Arc::new(Mutex::new(HashMap::new()));
        let (sender, receiver) = mpsc::unbounded_channel::<JobTask>();
        let receiver = Arc::new(tokio::sync::Mutex::new(receiver));
        let config = Arc::new(config);

        for worker_id in 0..config.worker_count {
            let receiver = Arc::clone(&receiver);
            let statuses = Arc::clone(&statuses);
            let config = Arc::clone(&config);

            tokio::spawn(async move {
                loop {
                    // 锁只覆盖取任务, 执行期间其余工作任务可继续取
                    let task = {
                        let mut guard = receiver.lock().await;
                        guard.recv().await
                    };
                    let Some(task) = task else {
                        // 发送端关闭, 工作任务退出
                        break;
                    };

                    info!(worker_id, job_id = %task.job_id, "任务开始");
                    let outcome = Self::run_job(&task, &config).await;

                    let status = match outcome {
                        Ok(output_file) => {
                            info!(job_id = %task.job_id, output_file, "任务完成");
                            JobStatus::Completed { output_file }
                        }
                        Err(e) => {
                            error!(job_id = %task.job_id, error = %e, "任务失败");
                            JobStatus::Error {
                                message: format!("{:#}", e),
                            }
                        }
                    };

                    if let Ok(mut map) = statuses.lock() {
                        map.insert(task.job_id.clone(), status);
                    }
                }
            });
        }

        Self { statuses, sender }
    }

    /// 提交货件文件, 返回任务号
    ///
    /// 立即返回; 任务排队等待工作池处理
    pub fn submit(&self, shipment_path: impl Into<PathBuf>) -> JobId {
        let job_id = Uuid::new_v4().to_string();

        if let Ok(mut map) = self.statuses.lock() {
            map.insert(job_id.clone(), JobStatus::Pending);
        }

        // 工作池在 runner 生命周期内常驻, 发送不会失败;
        // 即使失败, 任务保持 pending 可见
        let _ = self.sender.send(JobTask {
            job_id: job_id.clone(),
            shipment_path: shipment_path.into(),
        });

        job_id
    }

    /// 查询任务状态; 未知任务号返回 None
    ///
    /// 只读且无副作用, 可重复轮询
    pub fn poll(&self, job_id: &str) -> Option<JobStatus> {
        self.statuses
            .lock()
            .ok()
            .and_then(|map| map.get(job_id).cloned())
    }

    /// 执行单个任务: 流水线 → 写结果 → 删上传件
    async fn run_job(task: &JobTask, config: &PipelineConfig) -> anyhow::Result<String> {
        let rows = ManifestPipeline::generate(&task.shipment_path, &config.reference_path)
            .context("清单生成失败")?;

        tokio::fs::create_dir_all(&config.output_dir)
            .await
            .context("输出目录创建失败")?;

        let short_id = &task.job_id[..8.min(task.job_id.len())];
        let output_file = format!(
            "清单_{}_{}.xlsx",
            Local::now().format("%Y%m%d_%H%M%S"),
            short_id
        );
        let output_path = config.output_dir.join(&output_file);

        ManifestWriter::write(&rows, &output_path).context("清单写出失败")?;

        // 结果落盘后才删除上传件, 写失败时输入可恢复
        tokio::fs::remove_file(&task.shipment_path)
            .await
            .context("上传件删除失败")?;

        Ok(output_file)
    }
}
