mod args;
mod constant;
mod init;

use std::error::Error;

use common::logger;

fn run(proc_args : &'_ args::Args) -> Result<(), Box<dyn Error>> {
    let (fields, config) = init::load_fields(proc_args)?;
    let statement = launch::statement::resolve(proc_args.statement_file.as_deref(), &config)?;

    launch::run(fields, statement.as_str(), &conn_snowflake::create_snowflake_connection)?;

    Ok(())
}

fn main() {
    let proc_args = args::parsing();

    if let Err(e) = init::init_logger(&proc_args) {
        eprintln!("logger init failed : {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&proc_args) {
        logger::error!("{}", e);
        std::process::exit(1);
    }
}
