pub mod denials_xlsx;

pub use denials_xlsx::export_denials_xlsx;
