// src/gui/router.rs
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::dashboard::PAGE,
    &pages::individual::PAGE,
    &pages::comparison::PAGE,
    &pages::data::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}
