mod health;
mod helpers;
mod login;
mod user;
