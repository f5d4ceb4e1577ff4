pub mod errors;
pub mod file;
pub mod html;
pub mod redirect;
pub mod xlsx;

pub use errors::{error_to_response, html_error_response, ResultResp};
pub use file::{file_response, text_response};
pub use html::html_response;
pub use redirect::{redirect, redirect_with_cookie};
pub use xlsx::xlsx_response;
