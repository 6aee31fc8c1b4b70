mod group;
mod message;
mod user;
