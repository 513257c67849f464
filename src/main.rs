mod clipboard;
mod device;
mod provider;
mod screen;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use clipboard::SystemClipboard;
use provider::IntegrityService;
use screen::Screen;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// token endpoint of the platform integrity service
    #[arg(short, long, default_value = "http://127.0.0.1:8190/v1/token")]
    integrity_url: String,

    /// path to the device identifier file
    #[arg(short, long, default_value = "/etc/machine-id")]
    machine_id: String,
}

#[actix_rt::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let device_id = device::read_device_id(&cli.machine_id)?;
    let clipboard = SystemClipboard::new().context("unable to open the system clipboard")?;
    let service = IntegrityService::new(cli.integrity_url.clone());

    info!("integrity-token-demo talking to {}", cli.integrity_url);

    let mut screen = Screen::new(device_id, service, clipboard);
    screen.run().await.context("error while running the screen")?;
    Ok(())
}
