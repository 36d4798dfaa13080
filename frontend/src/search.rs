pub mod api;
pub mod cards;
pub mod components;
pub mod controller;
pub mod dropdowns;
pub mod option_sorter;
pub mod pagination;
pub mod query;
