pub mod current_status;
pub mod daily_summary;
pub mod floor_table;
pub mod menu_item;
pub mod order;
pub mod punch_event;
pub mod punch_type;
pub mod staff;
