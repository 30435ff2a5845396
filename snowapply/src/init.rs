use std::error::Error;

use common::init::logger;
use launch::fields::ConnectionFields;
use profile::record::{self, ProfileRecord};

use crate::args::Args;

pub(crate) fn init_logger(proc_args : &'_ Args) -> Result<(), Box<dyn Error>> {
    logger::init_once(proc_args.log_level.as_str(), proc_args.log_file.as_deref())
}

pub(crate) fn load_fields(proc_args : &'_ Args) -> Result<(ConnectionFields, ProfileRecord), Box<dyn Error>> {
    let config_label = proc_args.config_file.display().to_string();

    if let Some(secret_path) = proc_args.secret_file.as_ref() {
        let config = record::parse_flat(proc_args.config_file.as_path())?;
        let secret = record::parse_flat(secret_path.as_path())?;

        let secret_label = secret_path.display().to_string();
        let fields = ConnectionFields::from_split(&config, &secret, config_label.as_str(), secret_label.as_str());
        return Ok((fields, config));
    }

    let section = proc_args.section.as_deref().unwrap_or_default();
    let config = record::parse_section(proc_args.config_file.as_path(), section)?;

    let fields = ConnectionFields::from_section(&config, section, proc_args.schema.as_deref(), config_label.as_str());
    Ok((fields, config))
}
