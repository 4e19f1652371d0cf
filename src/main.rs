use anyhow::Context;
use clap::Parser;
use std::io;

use parking_management::api::parking_lot_dto::ParkingLotDto;
use parking_management::cli::args::Args;
use parking_management::cli::menu::Menu;
use parking_management::domain::slot_allocator::SlotAllocator;
use parking_management::loader::parser::parse_json_file;
use parking_management::logger;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Some(
            parse_json_file::<ParkingLotDto>(path).with_context(|| format!("failed to load config '{}'", path.display()))?,
        ),
        None => None,
    };

    let log_level = args.log_level.as_deref().or(config.as_ref().and_then(|c| c.log_level.as_deref()));
    logger::init(logger::resolve_level(log_level));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock(), !args.no_color);

    // Flag beats config file beats prompt.
    let mut lot = match (args.capacity, config) {
        (Some(capacity), _) => SlotAllocator::new(capacity.get()),
        (None, Some(dto)) => SlotAllocator::from_dto(dto),
        (None, None) => SlotAllocator::new(menu.prompt_capacity()?),
    }
    .context("cannot create parking lot")?;

    menu.run(&mut lot)?;

    log::info!("Menu closed with {} of {} slots occupied.", lot.occupied_count(), lot.capacity());
    Ok(())
}
