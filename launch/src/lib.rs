pub mod fields;
pub mod statement;

use std::error::Error;

use common::err::define as err_def;
use common::err::make_err_msg;
use common::logger;
use conn::{WarehouseConnector, WarehouseExecuteSummary};
use profile::value::all_valid;

use fields::ConnectionFields;

pub fn run(fields : ConnectionFields, statement : &'_ str, connector : WarehouseConnector<'_>) -> Result<WarehouseExecuteSummary, Box<dyn Error>> {
    if !all_valid(fields.secret_group()) {
        return Err(err_def::validation::InvalidFieldError::new(make_err_msg!(
            "missing or invalid warehouse credential values in {}", fields.secret_source
        )));
    }

    if !all_valid(fields.config_group()) {
        return Err(err_def::validation::InvalidFieldError::new(make_err_msg!(
            "missing or invalid warehouse configuration values in {}", fields.config_source
        )));
    }

    let info = fields.into_info();

    let mut session = connector(&info)?;
    println!("Successfully connected to Snowflake.");

    // the session is closed on both exit paths, an execute error wins over a close error
    let exec_ret = session.execute(statement);
    let close_ret = session.close();

    let summary = exec_ret?;
    close_ret?;

    logger::debug!("statement done, {} rows", summary.row_count);
    println!("Row access policies applied successfully");

    Ok(summary)
}
