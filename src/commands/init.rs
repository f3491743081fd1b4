use crate::{
    libs::{config::Config, messages::Message},
    msg_info, msg_success,
};
use anyhow::{Context, Result};
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(short, long, help = "Delete the configuration file instead")]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        if Config::delete()? {
            msg_success!(Message::ConfigDeleted);
        } else {
            msg_info!(Message::ConfigNotFound);
        }
        return Ok(());
    }

    Config::init()?.save().context(Message::ConfigSaveError.to_string())?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
