pub mod logger {
    use std::error::Error;
    use std::sync::OnceLock;

    use ftail::Ftail;
    use log::LevelFilter;

    fn convert_str_to_log_level(log_level : &'_ str) -> LevelFilter {
        match log_level {
            "debug" => LevelFilter::Debug,
            "warn" => LevelFilter::Warn,
            "trace" => LevelFilter::Trace,
            "info" => LevelFilter::Info,
            _ => LevelFilter::Error
        }
    }

    static LOGGER_INIT_RET : OnceLock<Result<(), String>> = OnceLock::new();

    pub fn init_once(log_level : &'_ str, log_file : Option<&'_ str>) -> Result<(), Box<dyn Error>> {
        let ret = LOGGER_INIT_RET.get_or_init(|| {
            let level = convert_str_to_log_level(log_level);
            let mut ftail = Ftail::new().console(level);

            if let Some(file) = log_file {
                ftail = ftail.single_file(file, true, level);
            }

            match ftail.init() {
                Ok(_) => Ok(()),
                Err(e) => Err(e.to_string())
            }
        });

        match ret {
            Ok(_) => Ok(()),
            Err(e) => Err(crate::err::define::system::ApiCallError::new(
                crate::make_err_msg!("{}", e)
            ))
        }
    }
}
