mod bus;
mod config;

use bus::LoggingBus;
use config::DemoConfig;
use dotenv::dotenv;
use lcd1602rgb::backlight::{Color, RgbBacklightDriver};
use lcd1602rgb::delay::StdDelay;
use lcd1602rgb::lcd::hd44780::{CursorDirection, DisplayExt};
use lcd1602rgb::Lcd1602Rgb;
use log::{info, warn};
use std::thread::sleep;
use std::time::Duration;
use sysinfo::System;

fn main() -> eyre::Result<()> {
    dotenv().ok();
    pretty_env_logger::init();

    const UNKNOWN_STR: &str = "???";

    info!(
        "Hello, {}!",
        System::name().as_deref().unwrap_or(UNKNOWN_STR)
    );
    info!(
        "System ver {} kernel ver {}",
        System::long_os_version().as_deref().unwrap_or(UNKNOWN_STR),
        System::kernel_version().as_deref().unwrap_or(UNKNOWN_STR),
    );

    let config = DemoConfig::try_load().unwrap_or_else(|| {
        warn!("No config at {}, using defaults", DemoConfig::path().display());
        DemoConfig::default()
    });
    let color: Color = config.color.parse()?;

    let mut module = Lcd1602Rgb::new(LoggingBus::default(), StdDelay);
    module.init()?;

    info!("Backlight {}", color);
    module.set_color(color)?;
    module.write_text(&config.greeting, 0, 0)?;
    module.write_number(config.number, 0, 1)?;
    module.write_special_char(5, 15, 1)?;

    if config.animate {
        for _ in 0..4 {
            module.shift(CursorDirection::Right)?;
            sleep(Duration::from_millis(250));
        }
        for _ in 0..4 {
            module.shift(CursorDirection::Left)?;
            sleep(Duration::from_millis(250));
        }
        module.set_position(15, 0)?;
        module.set_cursor_blink(true)?;
        sleep(Duration::from_secs(1));
        module.set_cursor_blink(false)?;
    }

    sleep(Duration::from_secs(1));
    module.show_all_special_chars()?;
    module.clear_line(1)?;

    let (bus, _) = module.release();
    info!("Sent {} transactions", bus.transactions());

    Ok(())
}
