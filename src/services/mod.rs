pub mod providers;

pub use providers::{
    ChatMessage, ChatProvider, MockChatProvider, ProviderError, ProviderResponse, TelegramProvider,
};
