use launch::fields::ConnectionFields;
use profile::record::ProfileRecord;

fn section_record() -> ProfileRecord {
    let mut record = ProfileRecord::new();
    record.insert("snowflakeAccount".to_string(), "UAT_ACCOUNT".to_string());
    record.insert("snowflakeUsername".to_string(), "uat_user".to_string());
    record.insert("snowflakePassword".to_string(), "uat_pass".to_string());
    record.insert("snowflakeRole".to_string(), "UAT_ROLE".to_string());
    record.insert("snowflakeWarehouse".to_string(), "UAT_WH".to_string());
    record.insert("snowflakeSchema".to_string(), "UAT_SCHEMA".to_string());
    record
}

#[test]
pub fn test_split_mode_groups_come_from_their_own_file() {
    let mut config = ProfileRecord::new();
    config.insert("snowflakeRole".to_string(), "MY_ROLE".to_string());
    config.insert("snowflakeAccount".to_string(), "WRONG_PLACE".to_string());

    let mut secret = ProfileRecord::new();
    secret.insert("snowflakeAccount".to_string(), "MY_ACCOUNT".to_string());
    secret.insert("snowflakeRole".to_string(), "WRONG_PLACE".to_string());

    let fields = ConnectionFields::from_split(&config, &secret, "config.txt", "secret.txt");

    assert_eq!(fields.account.as_deref(), Some("MY_ACCOUNT"), "account must come from the secret record");
    assert_eq!(fields.role.as_deref(), Some("MY_ROLE"), "role must come from the config record");
    assert_eq!(fields.warehouse, None, "absent key must stay absent");
    assert_eq!(fields.secret_source, "secret.txt", "secret label check failed");
    assert_eq!(fields.config_source, "config.txt", "config label check failed");
}

#[test]
pub fn test_section_mode_database_key_wins_over_section_name() {
    let mut record = section_record();
    record.insert("snowflakeDatabase".to_string(), "UAT_DB".to_string());

    let fields = ConnectionFields::from_section(&record, "UAT", None, "config.txt");

    assert_eq!(fields.database.as_deref(), Some("UAT_DB"), "explicit database key must win");
}

#[test]
pub fn test_section_mode_falls_back_to_section_name_as_database() {
    let fields = ConnectionFields::from_section(&section_record(), "UAT", None, "config.txt");

    assert_eq!(fields.database.as_deref(), Some("UAT"), "section name fallback check failed");
}

#[test]
pub fn test_section_mode_schema_override_wins() {
    let fields = ConnectionFields::from_section(&section_record(), "UAT", Some("OVERRIDE_SCHEMA"), "config.txt");

    assert_eq!(fields.schema.as_deref(), Some("OVERRIDE_SCHEMA"), "schema override check failed");

    let no_override = ConnectionFields::from_section(&section_record(), "UAT", None, "config.txt");
    assert_eq!(no_override.schema.as_deref(), Some("UAT_SCHEMA"), "section schema check failed");
}

#[test]
pub fn test_section_mode_sources_name_the_section() {
    let fields = ConnectionFields::from_section(&section_record(), "UAT", None, "config.txt");

    assert!(fields.secret_source.contains("UAT"), "secret source must name the section");
    assert!(fields.config_source.contains("config.txt"), "config source must name the file");
}
