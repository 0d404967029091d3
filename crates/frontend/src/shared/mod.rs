pub mod api_utils;
pub mod icons;
pub mod toast;
pub mod upload;
