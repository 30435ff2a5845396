use std::error::Error;

use snowflake_api::{QueryResult, SnowflakeApi};
use tokio::runtime::{Builder, Runtime};

use common::err::define as err_def;
use common::err::make_err_msg;
use conn::{WarehouseConnectionInfo, WarehouseExecuteSummary, WarehouseSqlConnection};

pub struct SnowflakeWarehouseConnection {
    api : SnowflakeApi,
    rt : Runtime
}

impl SnowflakeWarehouseConnection {
    pub(crate) fn new(info : &'_ WarehouseConnectionInfo) -> Result<Self, Box<dyn Error>> {
        let rt = match Builder::new_current_thread().enable_all().build() {
            Ok(ok) => Ok(ok),
            Err(err) => Err(err_def::system::ApiCallError::new(make_err_msg!("{}", err)))
        }?;

        // the client authenticates lazily, a bad credential surfaces on the first statement
        let api = match SnowflakeApi::with_password_auth(
            info.account.as_str(),
            Some(info.warehouse.as_str()),
            Some(info.database.as_str()),
            Some(info.schema.as_str()),
            info.user.as_str(),
            Some(info.role.as_str()),
            info.password.as_str()) {
            Ok(ok) => Ok(ok),
            Err(err) => Err(err_def::connection::GetConnectionFailedError::new(make_err_msg!("{}", err)))
        }?;

        Ok(SnowflakeWarehouseConnection { api : api, rt : rt })
    }
}

impl WarehouseSqlConnection for SnowflakeWarehouseConnection {
    fn execute(&mut self, statement : &'_ str) -> Result<WarehouseExecuteSummary, Box<dyn Error>> {
        let feature = self.api.exec(statement);

        let ret = match self.rt.block_on(feature) {
            Ok(ok) => Ok(ok),
            Err(err) => Err(err_def::connection::CommandRunError::new(make_err_msg!("{}", err)))
        }?;

        let row_count = match ret {
            QueryResult::Arrow(batches) => batches.iter().map(|b| b.num_rows()).sum(),
            QueryResult::Json(_) => 0,
            QueryResult::Empty => 0
        };

        Ok(WarehouseExecuteSummary { row_count : row_count })
    }

    fn close(&mut self) -> Result<(), Box<dyn Error>> {
        let feature = self.api.close_session();

        match self.rt.block_on(feature) {
            Ok(_) => Ok(()),
            Err(err) => Err(err_def::connection::SessionCloseError::new(make_err_msg!("{}", err)))
        }
    }
}
