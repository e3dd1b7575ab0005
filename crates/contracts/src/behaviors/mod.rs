pub mod b101_mobile_menu;
pub mod b102_category_filter;
pub mod b103_smooth_scroll;
pub mod b104_active_nav;
