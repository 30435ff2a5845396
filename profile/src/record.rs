use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use common::err::define as err_def;
use common::err::make_err_msg;

pub type ProfileRecord = HashMap<String, String>;

fn split_first_separator(line : &'_ str) -> Option<(String, String)> {
    let pos = line.find('=')?;

    Some((line[..pos].trim().to_string(), line[pos + 1..].trim().to_string()))
}

fn read_profile_text<P: AsRef<Path>>(filepath : P) -> Result<String, Box<dyn Error>> {
    match fs::read_to_string(filepath.as_ref()) {
        Ok(ok) => Ok(ok),
        Err(e) => Err(err_def::config::FileReadError::chain(
            make_err_msg!("{}", filepath.as_ref().display()), Box::new(e)
        ))
    }
}

// strict mode, every non blank line must be a key value pair
pub fn parse_flat<P: AsRef<Path>>(filepath : P) -> Result<ProfileRecord, Box<dyn Error>> {
    let text = read_profile_text(filepath)?;
    let mut record = ProfileRecord::new();

    for raw in text.lines() {
        let line = raw.trim();

        if line.is_empty() {
            continue;
        }

        match split_first_separator(line) {
            Some((key, value)) => { record.insert(key, value); },
            None => return Err(err_def::config::MalformedLineError::new(make_err_msg!(
                "no separator in line : {}", line
            )))
        };
    }

    Ok(record)
}

// lenient mode, only key value pairs inside the selected section are captured
pub fn parse_section<P: AsRef<Path>>(filepath : P, section : &'_ str) -> Result<ProfileRecord, Box<dyn Error>> {
    let text = read_profile_text(filepath)?;
    let mut record = ProfileRecord::new();
    let mut active = false;

    for raw in text.lines() {
        let line = raw.trim();

        if line.starts_with('[') && line.ends_with(']') {
            active = &line[1..line.len() - 1] == section;
            continue;
        }

        if !active || line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = split_first_separator(line) {
            record.insert(key, value);
        }
    }

    Ok(record)
}
