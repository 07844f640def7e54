//! 任务管理 API
//!
//! 查询平台侧异步任务的执行状态，供调用方轮询到终态。

use reqwest::Method;
use tracing::debug;

use crate::client::VsphereClient;
use crate::error::{Result, VsphereError};
use crate::models::{RemoteTask, TaskInfo};

/// 任务管理 API
pub struct TaskApi<'a> {
    client: &'a VsphereClient,
}

impl<'a> TaskApi<'a> {
    /// 创建新的任务 API 实例
    pub(crate) fn new(client: &'a VsphereClient) -> Self {
        Self { client }
    }

    /// 查询任务状态
    pub async fn get(&self, task: &RemoteTask) -> Result<TaskInfo> {
        debug!("查询任务状态: {}", task.id);
        match self
            .client
            .request(
                Method::GET,
                &format!("/api/cis/tasks/{}", task.id),
                None::<()>,
            )
            .await
        {
            Err(VsphereError::ApiError(404, _)) => {
                Err(VsphereError::NotFound(format!("任务 {} 不存在", task.id)))
            }
            other => other,
        }
    }
}
