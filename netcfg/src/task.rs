//! 任务等待
//!
//! 轮询远端异步任务直到终态。轮询间隔和总超时都有界，
//! 超时后远端任务继续运行，引擎不取消也不重试。

use std::time::{Duration, Instant};

use tracing::debug;
use vnm_vsphere::{RemoteTask, TaskState};

use crate::error::{NetworkConfigError, Result};
use crate::hypervisor::HypervisorClient;

/// 任务等待配置
#[derive(Debug, Clone)]
pub struct WaitConfig {
    /// 轮询间隔（毫秒）
    pub poll_interval_ms: u64,

    /// 总超时（秒）
    pub timeout_secs: u64,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 500,
            timeout_secs: 300,
        }
    }
}

/// 轮询任务直到终态
///
/// 成功返回任务的结果载荷（网卡操作通常为空）；失败返回
/// ReconfigurationFailed 并携带远端故障信息；超出总超时返回
/// TaskTimeout。调用方中途放弃等待不会留下本地半应用状态——
/// 引擎不持有任何本地状态，远端任务自行跑完。
pub async fn wait_for_task(
    client: &dyn HypervisorClient,
    vm_id: &str,
    task: &RemoteTask,
    config: &WaitConfig,
) -> Result<Option<serde_json::Value>> {
    let start = Instant::now();
    let timeout = Duration::from_secs(config.timeout_secs);

    loop {
        let info = client.query_task(task).await?;

        match info.state {
            TaskState::Succeeded => {
                debug!("任务 {} 成功结束 (耗时 {:?})", task.id, start.elapsed());
                return Ok(info.result);
            }
            TaskState::Failed => {
                let fault = info.fault.unwrap_or_else(|| "未知错误".to_string());
                return Err(NetworkConfigError::ReconfigurationFailed {
                    vm: vm_id.to_string(),
                    fault,
                });
            }
            TaskState::Queued | TaskState::Running => {
                if start.elapsed() >= timeout {
                    return Err(NetworkConfigError::TaskTimeout {
                        task: task.id.clone(),
                        waited_secs: config.timeout_secs,
                    });
                }
                debug!(
                    "任务 {} 仍在执行，{} 毫秒后重新查询",
                    task.id, config.poll_interval_ms
                );
                tokio::time::sleep(Duration::from_millis(config.poll_interval_ms)).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_wait_config() {
        let config = WaitConfig::default();
        assert_eq!(config.poll_interval_ms, 500);
        assert_eq!(config.timeout_secs, 300);
    }
}
