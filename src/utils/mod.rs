pub mod ast_printer;
pub mod id_factory;
pub mod logger;
