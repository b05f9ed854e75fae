
mod github;
mod health;
