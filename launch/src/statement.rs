use std::error::Error;
use std::fs;
use std::path::Path;

use common::err::define as err_def;
use common::err::make_err_msg;
use profile::record::ProfileRecord;

use crate::fields::KEY_STATEMENT;

pub const DEFAULT_APPLY_STATEMENT : &'static str = "";

// statement file wins over the profile value
pub fn resolve(statement_file : Option<&'_ Path>, record : &'_ ProfileRecord) -> Result<String, Box<dyn Error>> {
    if let Some(path) = statement_file {
        return match fs::read_to_string(path) {
            Ok(ok) => Ok(ok.trim().to_string()),
            Err(e) => Err(err_def::config::FileReadError::chain(
                make_err_msg!("{}", path.display()), Box::new(e)
            ))
        };
    }

    match record.get(KEY_STATEMENT) {
        Some(statement) => Ok(statement.clone()),
        None => Ok(DEFAULT_APPLY_STATEMENT.to_string())
    }
}
