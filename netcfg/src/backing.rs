//! 网络后端解析
//!
//! 把操作者给出的网络名称翻译为网卡后端描述。标准交换机网络按名称
//! 引用；分布式端口组按不透明 key 加交换机 UUID 引用，不携带名称。

use tracing::debug;
use vnm_vsphere::{NetworkBacking, NetworkRef};

use crate::error::Result;
use crate::hypervisor::HypervisorClient;

/// 把网络名称解析为网卡后端描述
///
/// 纯翻译，无副作用；查不到网络时返回 NetworkNotFound。
pub async fn resolve_backing(
    client: &dyn HypervisorClient,
    network_name: &str,
) -> Result<NetworkBacking> {
    let network = client.get_network(network_name).await?;
    debug!("网络 {} 解析结果: {:?}", network_name, network);
    Ok(backing_from_network(network))
}

/// 按网络结构构造对应的后端变体
pub fn backing_from_network(network: NetworkRef) -> NetworkBacking {
    match network {
        NetworkRef::Standard { name } => NetworkBacking::Standard { network_name: name },
        NetworkRef::DistributedPortgroup {
            key, switch_uuid, ..
        } => NetworkBacking::Distributed {
            portgroup_key: key,
            switch_uuid,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_network_keeps_name() {
        let backing = backing_from_network(NetworkRef::Standard {
            name: "VM Network".to_string(),
        });
        assert_eq!(
            backing,
            NetworkBacking::Standard {
                network_name: "VM Network".to_string()
            }
        );
    }

    #[test]
    fn test_portgroup_drops_name_keeps_key() {
        let backing = backing_from_network(NetworkRef::DistributedPortgroup {
            name: "prod-dvpg".to_string(),
            key: "dvportgroup-55".to_string(),
            switch_uuid: "50 2e 61 d5".to_string(),
        });
        assert_eq!(
            backing,
            NetworkBacking::Distributed {
                portgroup_key: "dvportgroup-55".to_string(),
                switch_uuid: "50 2e 61 d5".to_string(),
            }
        );
    }
}
