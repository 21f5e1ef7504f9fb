use env_logger;
use log;

use netparams_registry::p2p::seeds::resolve_seeds;
use netparams_registry::settings::Settings;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger
    env_logger::init();

    // Optional settings file path as the only argument.
    let settings_path = std::env::args().nth(1);
    let settings = match Settings::load(settings_path.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            log::error!("Failed to load settings: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("settings error: {}", e)));
        }
    };

    let registry = match settings.build_registry() {
        Ok(r) => r,
        Err(e) => {
            log::error!("Failed to build network registry: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, format!("registry error: {}", e)));
        }
    };
    log::info!("Network registry ready with {} networks ({:?} mode)", registry.len(), registry.mode());

    let network = match settings.default_network_in(&registry) {
        Ok(n) => n,
        Err(e) => {
            log::error!("{}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::NotFound, e.to_string()));
        }
    };
    let view = registry.view(&network);

    let summary = serde_json::json!({
        "network": &*network,
        "mode": view.mode(),
        "port": view.port(),
        "network_magic": view.network_magic().map(hex::encode),
        "dns_seeds": view.dns_seeds(),
    });
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize network {}: {}", network.name, e),
    }

    if settings.resolve_seeds {
        for addr in resolve_seeds(&view).await {
            println!("{}", addr);
        }
    }

    Ok(())
}
