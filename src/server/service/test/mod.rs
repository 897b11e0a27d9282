mod auth;
mod ownership;
