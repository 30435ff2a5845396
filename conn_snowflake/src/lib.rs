mod db_conn;

use std::error::Error;

use conn::{WarehouseConnectionInfo, WarehouseSqlConnection};
use db_conn::SnowflakeWarehouseConnection;

pub fn create_snowflake_connection(info : &'_ WarehouseConnectionInfo) -> Result<Box<dyn WarehouseSqlConnection>, Box<dyn Error>> {
    let conn = SnowflakeWarehouseConnection::new(info)?;

    Ok(Box::new(conn) as Box<dyn WarehouseSqlConnection>)
}
