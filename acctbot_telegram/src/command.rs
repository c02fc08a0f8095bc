use teloxide::types::{BotCommand, KeyboardButton, KeyboardMarkup};

/// Reply-keyboard label that asks for a new account.
pub const CREATE_BUTTON: &str = "🎲 Tạo tài khoản mới";
/// Reply-keyboard label that lists recent accounts.
pub const LIST_BUTTON: &str = "📋 Xem danh sách";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Create,
    List,
}

impl Command {
    fn all() -> Vec<BotCommand> {
        vec![
            BotCommand::new("start", "Bắt đầu và hiện menu"),
            BotCommand::new("create", "Tạo tài khoản mới"),
            BotCommand::new("list", "Xem danh sách tài khoản gần nhất"),
            BotCommand::new("help", "Hướng dẫn sử dụng"),
        ]
    }

    #[must_use]
    pub fn bot_commands() -> Vec<BotCommand> {
        Self::all()
    }

    /// Match a slash command or one of the menu button labels.
    #[must_use]
    pub fn parse_from_text(text: &str) -> Option<Self> {
        let text = text.trim();

        match text {
            CREATE_BUTTON => return Some(Self::Create),
            LIST_BUTTON => return Some(Self::List),
            _ => {}
        }

        let text = text.to_lowercase();

        // Remove bot mention if present (e.g., "/start@my_bot")
        let text = text.split('@').next().unwrap_or(&text);

        match text {
            "/start" => Some(Self::Start),
            "/help" => Some(Self::Help),
            "/create" => Some(Self::Create),
            "/list" => Some(Self::List),
            _ => None,
        }
    }

    #[must_use]
    pub fn menu() -> KeyboardMarkup {
        KeyboardMarkup::new(vec![vec![
            KeyboardButton::new(CREATE_BUTTON),
            KeyboardButton::new(LIST_BUTTON),
        ]])
        .resize_keyboard()
    }

    #[must_use]
    pub const fn welcome_text() -> &'static str {
        r"👋 Chào mừng đến với Bot tạo tài khoản!

📌 Cách nhập: Gõ tất cả thông tin vào 1 dòng
📌 Ví dụ: Nguyễn Văn A 0123456789 1234567890
📌 Hoặc: 0123456789 Nguyễn Văn A 1234567890

⚡ Bot sẽ tự động nhận diện họ tên và số!

Chọn chức năng bạn muốn sử dụng:"
    }

    #[must_use]
    pub const fn create_prompt_text() -> &'static str {
        r"📝 Nhập thông tin (gõ tự do, bot sẽ tự phân tích):

Ví dụ:
• Nguyễn Văn A 0123456789 1234567890
• Trần Thị B 0987654321 9876543210
• 0912345678 Lê Văn C 1122334455

💡 Thứ tự không quan trọng, bot sẽ tự nhận diện!"
    }

    #[must_use]
    pub const fn help_text() -> &'static str {
        r"🤖 Bot tạo tài khoản

Danh sách lệnh:
/start  - Hiện menu
/create - Tạo tài khoản mới
/list   - Xem danh sách gần nhất
/help   - Hiện hướng dẫn này

Gửi họ tên kèm số điện thoại và số tài khoản (nếu có) trên 1 dòng để tạo tài khoản."
    }

    #[must_use]
    pub const fn unknown_text() -> &'static str {
        "❓ Vui lòng chọn chức năng từ menu bên dưới."
    }
}
