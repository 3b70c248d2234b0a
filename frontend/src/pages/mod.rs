pub mod about_page;
pub mod admin_submissions_page;
pub mod area_detail_page;
pub mod building_page;
pub mod campus_page;
pub mod favorites_page;
pub mod home_page;
pub mod not_found_page;
pub mod submit_page;
