//! 网卡配置引擎错误定义

use thiserror::Error;
use vnm_vsphere::VsphereError;

/// 网卡配置错误类型
///
/// 每个变体携带定位问题所需的上下文（虚拟机 ID、网卡标签、网络名称、
/// 远端故障信息），无需翻查平台日志即可诊断。所有错误对当前操作都是
/// 终态，引擎内部不做重试。
#[derive(Error, Debug)]
pub enum NetworkConfigError {
    #[error("虚拟机不存在: {0}")]
    VmNotFound(String),

    #[error("网络不存在: {0}")]
    NetworkNotFound(String),

    #[error("虚拟机 {vm} 上未找到网卡 '{label}'")]
    AdapterNotFound { vm: String, label: String },

    #[error("不支持的网卡型号: {0} (支持 vmxnet3 / e1000 / e1000e)")]
    UnsupportedAdapterType(String),

    #[error("未指定目标网络时仅分布式端口组网卡支持按 VLAN 切换: 虚拟机 {vm} 网卡 '{label}'")]
    VlanRequiresDistributedSwitch { vm: String, label: String },

    #[error("虚拟机 {vm} 重配置失败: {fault}")]
    ReconfigurationFailed { vm: String, fault: String },

    #[error("任务 {task} 等待超时 ({waited_secs} 秒,远端任务未被取消)")]
    TaskTimeout { task: String, waited_secs: u64 },

    #[error("平台客户端错误: {0}")]
    Platform(#[from] VsphereError),
}

/// 网卡配置结果类型
pub type Result<T> = std::result::Result<T, NetworkConfigError>;
