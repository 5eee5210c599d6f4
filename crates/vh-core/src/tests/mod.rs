mod catalog;
mod models;
