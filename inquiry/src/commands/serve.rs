use inquiry_config::Config;
use tracing::info;

use crate::environment::Environment;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let server = Environment::new(&config).rest_server();
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve().await
}
