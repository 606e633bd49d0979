use crate::{
    libs::{
        config::{parse_zone, Config},
        data_storage::DataStorage,
        messages::Message,
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// IANA time zone used for input, working days and display (e.g. Europe/Berlin)
    #[arg(long, conflicts_with = "clear")]
    timezone: Option<String>,
    /// Remove the configured time zone and use the system zone
    #[arg(long)]
    clear: bool,
    /// Print the current configuration
    #[arg(long)]
    show: bool,
}

pub fn cmd(args: ConfigArgs) -> Result<()> {
    let mut config = Config::read()?;

    let changed = match (args.timezone, args.clear) {
        (Some(name), _) => {
            let zone = parse_zone(&name)?;
            config.timezone = Some(zone.name().to_string());
            config.save()?;
            msg_success!(Message::TimezoneSet(zone.name().to_string()));
            true
        }
        (None, true) => {
            config.timezone = None;
            config.save()?;
            msg_success!(Message::TimezoneCleared);
            true
        }
        (None, false) => false,
    };

    // Without a change the command just reports the current state
    if args.show || !changed {
        show(&config);
    }
    Ok(())
}

fn show(config: &Config) {
    match &config.timezone {
        Some(zone) => msg_print!(Message::TimezoneCurrent(zone.clone())),
        None => msg_print!(Message::TimezoneSystemDefault),
    }
    msg_info!(Message::DataDirectory(DataStorage::new().base_path().display().to_string()));
}
