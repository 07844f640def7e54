//! vSphere 设备与任务数据模型
//!
//! 管理平面交互使用的类型化数据模型，包括：
//! - 虚拟机与设备清单（网卡、磁盘、其他设备）
//! - 网卡后端描述（标准交换机 / 分布式交换机端口组）
//! - 重配置描述（设备变更列表）
//! - 异步任务句柄与状态
//!
//! 多态载荷（设备、后端、网络）统一采用内部标签枚举建模，
//! 分类依靠穷举匹配而不是属性探测。

use serde::{Deserialize, Serialize};

/// 新增设备尚未由平台分配 key 时使用的占位 key
pub const PENDING_DEVICE_KEY: i32 = -1;

// ============================================
// 虚拟机与设备清单
// ============================================

/// 虚拟机信息（含设备清单）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachine {
    /// 虚拟机 ID
    pub id: String,

    /// 虚拟机名称
    pub name: String,

    /// 设备清单（顺序由平台维护）
    pub devices: Vec<VirtualDevice>,
}

impl VirtualMachine {
    /// 遍历设备清单中的网卡，保持清单顺序
    pub fn network_adapters(&self) -> impl Iterator<Item = &NetworkAdapter> {
        self.devices.iter().filter_map(|device| match device {
            VirtualDevice::Ethernet(adapter) => Some(adapter),
            _ => None,
        })
    }
}

/// 虚拟机摘要（列表查询结果）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VmSummary {
    /// 虚拟机 ID
    pub id: String,

    /// 虚拟机名称
    pub name: String,

    /// 电源状态
    pub power_state: String,
}

/// 虚拟设备（设备清单条目）
///
/// 引擎只改写网卡条目；磁盘等其他设备原样保留。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum VirtualDevice {
    /// 虚拟网卡
    Ethernet(NetworkAdapter),

    /// 虚拟磁盘
    Disk(DiskInfo),

    /// 其他设备（控制器、显卡等）
    Other(GenericDevice),
}

impl VirtualDevice {
    /// 设备 key
    pub fn key(&self) -> i32 {
        match self {
            VirtualDevice::Ethernet(adapter) => adapter.key,
            VirtualDevice::Disk(disk) => disk.key,
            VirtualDevice::Other(device) => device.key,
        }
    }

    /// 设备标签
    pub fn label(&self) -> &str {
        match self {
            VirtualDevice::Ethernet(adapter) => &adapter.label,
            VirtualDevice::Disk(disk) => &disk.label,
            VirtualDevice::Other(device) => &device.label,
        }
    }
}

/// 虚拟磁盘信息
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskInfo {
    /// 设备 key
    pub key: i32,

    /// 设备标签，如 "Hard disk 1"
    pub label: String,

    /// 容量 (KB)
    pub capacity_kb: u64,
}

/// 其他虚拟设备（引擎不关心的设备种类）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericDevice {
    /// 设备 key
    pub key: i32,

    /// 设备标签
    pub label: String,
}

// ============================================
// 网卡与网络后端
// ============================================

/// 虚拟网卡
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkAdapter {
    /// 设备 key（平台分配，重配置后保持稳定）
    pub key: i32,

    /// 设备标签，如 "Network adapter 3"，同一虚拟机内唯一
    pub label: String,

    /// 网卡型号
    pub adapter_type: AdapterType,

    /// MAC 地址（平台尚未分配时为 None）
    pub mac_address: Option<String>,

    /// 网络后端（未挂接网络时为 None）
    pub backing: Option<NetworkBacking>,

    /// 当前连接状态
    pub connected: bool,

    /// 开机自动连接
    pub start_connected: bool,
}

impl NetworkAdapter {
    /// 构造一块待添加的新网卡
    ///
    /// key 使用占位值，MAC 留空，均由平台在应用变更时分配；
    /// 新网卡默认立即连接并开机自动连接。
    pub fn new(adapter_type: AdapterType, label: &str, backing: NetworkBacking) -> Self {
        Self {
            key: PENDING_DEVICE_KEY,
            label: label.to_string(),
            adapter_type,
            mac_address: None,
            backing: Some(backing),
            connected: true,
            start_connected: true,
        }
    }
}

/// 网卡型号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdapterType {
    /// VMware 半虚拟化网卡
    Vmxnet3,
    /// Intel E1000 仿真网卡
    E1000,
    /// Intel E1000e 仿真网卡
    E1000e,
}

impl AdapterType {
    /// 解析操作者输入的型号字符串，未知型号返回 None
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "vmxnet3" => Some(AdapterType::Vmxnet3),
            "e1000" => Some(AdapterType::E1000),
            "e1000e" => Some(AdapterType::E1000e),
            _ => None,
        }
    }

    /// 型号字符串
    pub fn as_str(&self) -> &'static str {
        match self {
            AdapterType::Vmxnet3 => "vmxnet3",
            AdapterType::E1000 => "e1000",
            AdapterType::E1000e => "e1000e",
        }
    }
}

impl std::fmt::Display for AdapterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 网卡后端描述
///
/// 告诉平台网卡接入哪个网络。两种结构互斥，每块网卡只会携带其一。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NetworkBacking {
    /// 标准虚拟交换机网络，按名称引用
    #[serde(rename_all = "camelCase")]
    Standard {
        /// 网络名称
        network_name: String,
    },

    /// 分布式虚拟交换机端口组，按不透明 key 引用
    #[serde(rename_all = "camelCase")]
    Distributed {
        /// 端口组 key
        portgroup_key: String,

        /// 所属分布式交换机 UUID
        switch_uuid: String,
    },
}

/// 网络查询结果
///
/// 结构本身区分标准网络与分布式端口组，供后端解析器穷举匹配。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NetworkRef {
    /// 标准虚拟交换机网络
    #[serde(rename_all = "camelCase")]
    Standard {
        /// 网络名称
        name: String,
    },

    /// 分布式虚拟交换机端口组
    #[serde(rename_all = "camelCase")]
    DistributedPortgroup {
        /// 端口组名称
        name: String,

        /// 端口组 key
        key: String,

        /// 所属分布式交换机 UUID
        switch_uuid: String,
    },
}

impl NetworkRef {
    /// 网络/端口组名称
    pub fn name(&self) -> &str {
        match self {
            NetworkRef::Standard { name } => name,
            NetworkRef::DistributedPortgroup { name, .. } => name,
        }
    }
}

// ============================================
// 重配置描述
// ============================================

/// 设备变更操作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceOperation {
    /// 新增设备
    Add,
    /// 修改设备
    Edit,
    /// 移除设备
    Remove,
}

/// 单项设备变更
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceChange {
    /// 操作类型
    pub operation: DeviceOperation,

    /// 目标设备
    pub device: VirtualDevice,
}

impl DeviceChange {
    /// 新增设备变更
    pub fn add(device: VirtualDevice) -> Self {
        Self {
            operation: DeviceOperation::Add,
            device,
        }
    }

    /// 修改设备变更
    pub fn edit(device: VirtualDevice) -> Self {
        Self {
            operation: DeviceOperation::Edit,
            device,
        }
    }

    /// 移除设备变更
    pub fn remove(device: VirtualDevice) -> Self {
        Self {
            operation: DeviceOperation::Remove,
            device,
        }
    }
}

/// 重配置描述
///
/// 一次重配置提交的设备变更批次，平台原子地应用整个批次。
/// 构造后不再修改，提交一次即丢弃。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSpec {
    /// 设备变更列表（有序；当前操作均为单项变更，列表为将来的复合操作保留）
    pub device_change: Vec<DeviceChange>,
}

impl ConfigSpec {
    /// 构造单项变更的重配置描述
    pub fn single(change: DeviceChange) -> Self {
        Self {
            device_change: vec![change],
        }
    }
}

// ============================================
// 异步任务
// ============================================

/// 远程异步任务句柄
///
/// 平台侧持有任务的全部状态，本地只保存任务 ID 用于轮询。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteTask {
    /// 任务 ID
    pub id: String,
}

impl RemoteTask {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// 任务状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskState {
    /// 排队中
    Queued,
    /// 执行中
    Running,
    /// 成功结束
    Succeeded,
    /// 失败结束
    Failed,
}

/// 任务信息（单次轮询结果）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInfo {
    /// 任务状态
    pub state: TaskState,

    /// 失败原因（仅失败时携带）
    pub fault: Option<String>,

    /// 结果载荷（网卡操作通常为空）
    pub result: Option<serde_json::Value>,
}

impl TaskInfo {
    /// 是否已到达终态
    pub fn is_terminal(&self) -> bool {
        matches!(self.state, TaskState::Succeeded | TaskState::Failed)
    }
}
