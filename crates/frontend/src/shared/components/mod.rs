pub mod stat_card;
pub mod table;
pub mod ui;
