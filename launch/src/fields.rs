use common::logger;
use conn::WarehouseConnectionInfo;
use profile::record::ProfileRecord;

pub const KEY_ACCOUNT : &'static str = "snowflakeAccount";
pub const KEY_USERNAME : &'static str = "snowflakeUsername";
pub const KEY_PASSWORD : &'static str = "snowflakePassword";
pub const KEY_ROLE : &'static str = "snowflakeRole";
pub const KEY_WAREHOUSE : &'static str = "snowflakeWarehouse";
pub const KEY_DATABASE : &'static str = "snowflakeDatabase";
pub const KEY_SCHEMA : &'static str = "snowflakeSchema";
pub const KEY_STATEMENT : &'static str = "snowflakeStatement";

#[derive(Debug)]
pub struct ConnectionFields {
    pub account : Option<String>,
    pub username : Option<String>,
    pub password : Option<String>,
    pub role : Option<String>,
    pub warehouse : Option<String>,
    pub database : Option<String>,
    pub schema : Option<String>,

    pub secret_source : String,
    pub config_source : String
}

fn pick(record : &'_ ProfileRecord, key : &'_ str) -> Option<String> {
    record.get(key).cloned()
}

impl ConnectionFields {
    pub fn from_split(config : &'_ ProfileRecord, secret : &'_ ProfileRecord, config_label : &'_ str, secret_label : &'_ str) -> Self {
        ConnectionFields {
            account : pick(secret, KEY_ACCOUNT),
            username : pick(secret, KEY_USERNAME),
            password : pick(secret, KEY_PASSWORD),
            role : pick(config, KEY_ROLE),
            warehouse : pick(config, KEY_WAREHOUSE),
            database : pick(config, KEY_DATABASE),
            schema : pick(config, KEY_SCHEMA),
            secret_source : secret_label.to_string(),
            config_source : config_label.to_string()
        }
    }

    pub fn from_section(record : &'_ ProfileRecord, section : &'_ str, schema_override : Option<&'_ str>, label : &'_ str) -> Self {
        let database = match pick(record, KEY_DATABASE) {
            Some(db) => Some(db),
            None => {
                logger::warn!("no {} key in section [{}], using the section name as database", KEY_DATABASE, section);
                Some(section.to_string())
            }
        };

        let schema = match schema_override {
            Some(s) => Some(s.to_string()),
            None => pick(record, KEY_SCHEMA)
        };

        let source = format!("{} [{}]", label, section);

        ConnectionFields {
            account : pick(record, KEY_ACCOUNT),
            username : pick(record, KEY_USERNAME),
            password : pick(record, KEY_PASSWORD),
            role : pick(record, KEY_ROLE),
            warehouse : pick(record, KEY_WAREHOUSE),
            database : database,
            schema : schema,
            secret_source : source.clone(),
            config_source : source
        }
    }

    pub fn secret_group(&self) -> [Option<&'_ str>; 3] {
        [self.account.as_deref(), self.username.as_deref(), self.password.as_deref()]
    }

    pub fn config_group(&self) -> [Option<&'_ str>; 4] {
        [self.role.as_deref(), self.warehouse.as_deref(), self.database.as_deref(), self.schema.as_deref()]
    }

    pub fn into_info(self) -> WarehouseConnectionInfo {
        WarehouseConnectionInfo {
            account : self.account.unwrap_or_default(),
            user : self.username.unwrap_or_default(),
            password : self.password.unwrap_or_default(),
            role : self.role.unwrap_or_default(),
            warehouse : self.warehouse.unwrap_or_default(),
            database : self.database.unwrap_or_default(),
            schema : self.schema.unwrap_or_default()
        }
    }
}
