// netparams_registry/src/p2p/seeds.rs
// Resolves a network's DNS seeds into peer addresses on its effective port.

use crate::registry::NetworkView;
use log::{debug, info, warn};
use rand::seq::SliceRandom;
use std::net::SocketAddr;
use tokio::net::lookup_host;

pub async fn resolve_seeds(view: &NetworkView<'_>) -> Vec<SocketAddr> {
    let Some(port) = view.port() else {
        warn!("Network {} has no default port, not resolving seeds", view.name);
        return Vec::new();
    };

    let mut addrs: Vec<SocketAddr> = Vec::new();
    for host in view.dns_seeds() {
        match lookup_host((host.as_str(), port)).await {
            Ok(found) => {
                let before = addrs.len();
                for addr in found {
                    if !addrs.contains(&addr) {
                        addrs.push(addr);
                    }
                }
                debug!("Seed {} resolved to {} addresses", host, addrs.len() - before);
            }
            Err(e) => warn!("Failed to resolve seed {}: {}", host, e),
        }
    }

    addrs.shuffle(&mut rand::thread_rng());
    info!(
        "Resolved {} peer addresses from {} seeds for {} ({:?} mode)",
        addrs.len(),
        view.dns_seeds().len(),
        view.name,
        view.mode()
    );
    addrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chainparams::NetworkSpec;
    use crate::registry::NetworkRegistry;

    #[tokio::test]
    async fn literal_seeds_resolve_on_network_port() {
        let mut reg = NetworkRegistry::new();
        let net = reg
            .add(NetworkSpec {
                name: "localnet".into(),
                port: Some(19000),
                dns_seeds: vec!["127.0.0.1".into(), "127.0.0.1".into()],
                ..Default::default()
            })
            .unwrap();
        let addrs = resolve_seeds(&reg.view(&net)).await;
        assert_eq!(addrs, vec!["127.0.0.1:19000".parse::<SocketAddr>().unwrap()]);
    }

    #[tokio::test]
    async fn regtest_testnet_has_no_seeds() {
        let mut reg = NetworkRegistry::with_builtin();
        reg.enable_regtest();
        let testnet = reg.testnet().unwrap();
        assert!(resolve_seeds(&reg.view(&testnet)).await.is_empty());
    }

    #[tokio::test]
    async fn portless_network_resolves_nothing() {
        let mut reg = NetworkRegistry::new();
        let net = reg
            .add(NetworkSpec {
                name: "noport".into(),
                dns_seeds: vec!["127.0.0.1".into()],
                ..Default::default()
            })
            .unwrap();
        assert!(resolve_seeds(&reg.view(&net)).await.is_empty());
    }
}
