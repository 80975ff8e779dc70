use std::net::SocketAddr;

// This main function is the entry point when running `cargo run -p web-server`.
// Its only job is to resolve the listener address and call the `run_server`
// function from the crate's library.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = configuration::load_config()?;
    let addr: SocketAddr = settings.application.address().parse()?;
    web_server::run_server(addr).await
}
