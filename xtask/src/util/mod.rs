pub mod logger;
pub mod workdir;
