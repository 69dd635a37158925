pub mod user_app;
