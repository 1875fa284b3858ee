// ==========================================
// FBA货件装箱清单生成系统 - 命令行入口
// ==========================================
// 用法: fba-manifest <货件文件.xlsx> [产品资料.xlsx] [输出目录]
// 职责: 提交任务并轮询到终态; HTTP 受理层由外部系统承担
// ==========================================

use fba_manifest::{logging, JobRunner, JobStatus, PipelineConfig};
use std::process::ExitCode;
use std::time::Duration;

#[tokio::main]
async fn main() -> ExitCode {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", fba_manifest::APP_NAME);
    tracing::info!("系统版本: {}", fba_manifest::VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let Some(shipment_path) = args.next() else {
        eprintln!("用法: fba-manifest <货件文件.xlsx> [产品资料.xlsx] [输出目录]");
        return ExitCode::from(2);
    };

    let defaults = PipelineConfig::default();
    let reference_path = args
        .next()
        .map(Into::into)
        .unwrap_or(defaults.reference_path);
    let output_dir = args.next().map(Into::into).unwrap_or(defaults.output_dir);

    let config = PipelineConfig::new(reference_path, output_dir, defaults.worker_count);
    tracing::info!(
        reference = %config.reference_path.display(),
        output_dir = %config.output_dir.display(),
        "运行配置"
    );

    let runner = JobRunner::new(config);
    let job_id = runner.submit(&shipment_path);
    tracing::info!(%job_id, shipment = %shipment_path, "任务已提交");

    // 轮询到终态
    loop {
        match runner.poll(&job_id) {
            Some(JobStatus::Pending) => {
                tokio::time::sleep(Duration::from_millis(200)).await;
            }
            Some(JobStatus::Completed { output_file }) => {
                println!("清单已生成: {}", output_file);
                return ExitCode::SUCCESS;
            }
            Some(JobStatus::Error { message }) => {
                eprintln!("任务失败: {}", message);
                return ExitCode::FAILURE;
            }
            None => {
                eprintln!("任务状态丢失: {}", job_id);
                return ExitCode::FAILURE;
            }
        }
    }
}
