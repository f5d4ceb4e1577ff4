pub mod analytics;
pub mod appeal_form;
pub mod appeals;
pub mod dashboard;
pub mod denial_form;
pub mod denials;
pub mod login;
pub mod placeholder;

pub use analytics::analytics_page;
pub use appeal_form::appeal_form_page;
pub use appeals::{appeals_page, AppealsVm};
pub use dashboard::{dashboard_page, DashboardVm};
pub use denial_form::denial_form_page;
pub use denials::{denials_page, DenialsVm};
pub use login::login_page;
pub use placeholder::coming_soon_page;
