pub const DEFAULT_LOG_LEVEL : &'static str = "error";
