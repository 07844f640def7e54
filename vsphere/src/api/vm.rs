//! 虚拟机管理 API
//!
//! 提供虚拟机查询与重配置功能，包括：
//! - 查询虚拟机列表
//! - 获取虚拟机详情（含设备清单）
//! - 提交设备重配置（异步任务）

use reqwest::Method;
use tracing::info;

use crate::client::VsphereClient;
use crate::error::{Result, VsphereError};
use crate::models::{ConfigSpec, RemoteTask, VirtualMachine, VmSummary};

/// 虚拟机管理 API
pub struct VmApi<'a> {
    client: &'a VsphereClient,
}

impl<'a> VmApi<'a> {
    /// 创建新的虚拟机 API 实例
    pub(crate) fn new(client: &'a VsphereClient) -> Self {
        Self { client }
    }

    /// 查询虚拟机列表
    pub async fn list(&self) -> Result<Vec<VmSummary>> {
        info!("查询虚拟机列表");
        self.client
            .request(Method::GET, "/api/vcenter/vm", None::<()>)
            .await
    }

    /// 获取虚拟机详情（含设备清单）
    pub async fn get(&self, vm_id: &str) -> Result<VirtualMachine> {
        info!("获取虚拟机详情: {}", vm_id);
        match self
            .client
            .request(
                Method::GET,
                &format!("/api/vcenter/vm/{}", vm_id),
                None::<()>,
            )
            .await
        {
            Err(VsphereError::ApiError(404, _)) => Err(VsphereError::NotFound(format!(
                "虚拟机 {} 不存在",
                vm_id
            ))),
            other => other,
        }
    }

    /// 提交设备重配置
    ///
    /// 平台异步应用整个变更批次，返回任务句柄供轮询。
    pub async fn reconfigure(&self, vm_id: &str, spec: &ConfigSpec) -> Result<RemoteTask> {
        info!(
            "提交虚拟机重配置: {} ({} 项设备变更)",
            vm_id,
            spec.device_change.len()
        );
        let task_id: String = match self
            .client
            .request(
                Method::POST,
                &format!("/api/vcenter/vm/{}/hardware?action=reconfigure", vm_id),
                Some(spec),
            )
            .await
        {
            Err(VsphereError::ApiError(404, _)) => {
                return Err(VsphereError::NotFound(format!("虚拟机 {} 不存在", vm_id)))
            }
            other => other?,
        };

        Ok(RemoteTask::new(task_id))
    }
}
