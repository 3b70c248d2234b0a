pub mod building_card;
pub mod error_boundary;
pub mod facet_panel;
pub mod list_controls;
pub mod navbar;
pub mod notifications;
pub mod photo_carousel;
pub mod photo_picker;
pub mod rating_display;
pub mod share_link;
pub mod space_card;
pub mod suspend_boundary;
