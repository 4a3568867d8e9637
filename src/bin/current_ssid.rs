use wifi_ssid::{config::Config, get_current_ssid, logging};

fn main() {
    let config = Config::load();
    logging::init(&config);

    log::info!("Starting SSID extraction...");
    match get_current_ssid() {
        Some(ssid) => println!("{}", ssid),
        None => std::process::exit(1),
    }
}
