// Output generation module

pub mod sitemap;

pub use sitemap::*;
