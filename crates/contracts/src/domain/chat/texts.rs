//! Фиксированные тексты интерфейса чата

pub const HEADER_TITLE: &str = "Chat";
pub const HEADER_SUBTITLE: &str = "Upload PDF and chat with AI";

pub const EMPTY_TITLE: &str = "Upload a PDF and start chatting!";
pub const EMPTY_SUBTITLE: &str = "How can I help you today?";

pub const TYPING: &str = "typing…";
pub const COMPOSER_PLACEHOLDER: &str = "Message Gemini…";

pub const UPLOAD_IDLE_LABEL: &str = "Upload PDF";
pub const UPLOAD_PENDING_LABEL: &str = "Uploading...";

pub const UPLOAD_FAILED: &str = "❌ File upload failed. Try again.";
pub const UPLOAD_TRANSPORT_ERROR: &str = "❌ File upload error. Check your connection.";
pub const CHAT_FAILED: &str = "❌ Failed to get response from chatbot.";

pub fn upload_succeeded(file_name: &str) -> String {
    format!("✅ File \"{}\" uploaded successfully.", file_name)
}

pub fn uploaded_label(file_name: &str) -> String {
    format!("Uploaded: {}", file_name)
}
