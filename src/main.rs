#![allow(warnings)]
//! FashionStore Admin Frontend Entry Point

mod api;
mod app;
mod components;
mod format;
mod http;
mod models;
mod pages;
mod session;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
