pub mod campus_view;
pub mod notifications;
pub mod url_param;
