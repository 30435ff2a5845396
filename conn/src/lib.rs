use std::error::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct WarehouseConnectionInfo {
    pub account : String,
    pub user : String,
    pub password : String,
    pub role : String,
    pub warehouse : String,
    pub database : String,
    pub schema : String
}

#[derive(Default, Debug, Clone)]
pub struct WarehouseExecuteSummary {
    pub row_count : usize
}

pub trait WarehouseSqlConnection {
    fn execute(&mut self, statement : &'_ str) -> Result<WarehouseExecuteSummary, Box<dyn Error>>;
    fn close(&mut self) -> Result<(), Box<dyn Error>>;
}

pub type WarehouseConnector<'a> = &'a dyn Fn(&WarehouseConnectionInfo) -> Result<Box<dyn WarehouseSqlConnection>, Box<dyn Error>>;
