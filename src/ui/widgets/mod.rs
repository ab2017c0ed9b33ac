pub mod contact_form;
pub mod footer;
pub mod header;
pub mod help;
pub mod menu_drawer;
