//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod add_comment;
pub mod authenticate_user;
pub mod disconnect_user;
pub mod error;
pub mod fetch_history;
pub mod list_conversations;
pub mod notify_typing;
pub mod send_direct_message;
pub mod toggle_like;

pub use add_comment::AddCommentUseCase;
pub use authenticate_user::AuthenticateUserUseCase;
pub use disconnect_user::DisconnectUserUseCase;
pub use error::{AddCommentError, AuthenticateError, SendMessageError, ToggleLikeError};
pub use fetch_history::FetchHistoryUseCase;
pub use list_conversations::ListConversationsUseCase;
pub use notify_typing::NotifyTypingUseCase;
pub use send_direct_message::{SendDirectMessageUseCase, SendOutcome};
pub use toggle_like::ToggleLikeUseCase;
