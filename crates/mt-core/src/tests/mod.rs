mod kiosk;
mod models;
