use crate::err::impl_err_mod;

impl_err_mod!(config, [
    (FileReadError, "profile file read failed", "check file path or permission"),
    (MalformedLineError, "profile line is not key value shape", "check separator char in profile file")
]);

impl_err_mod!(validation, [
    (InvalidFieldError, "required connection field is missing or invalid", "check profile values, empty or null is not allowed")
]);

impl_err_mod!(connection, [
    (GetConnectionFailedError, "warehouse connection open failed", "check account values or server state"),
    (CommandRunError, "running statement is error", "check statement text"),
    (SessionCloseError, "warehouse session close failed", "check server state")
]);

impl_err_mod!(system, [
    (ApiCallError, "api function return error", "check runtime env")
]);
