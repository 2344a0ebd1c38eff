pub mod discord;

pub use discord::DiscordWebhook;
