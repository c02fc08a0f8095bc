//! Telegram HTML replies. Copyable values go into `<code>` spans.

use acctbot_core::{ProcessError, RecentRecords, Record};
use teloxide::utils::html::{code_inline, escape};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━";

pub const EMPTY_LIST: &str = "📭 Chưa có dữ liệu nào được lưu.";

#[must_use]
pub fn created_message(record: &Record) -> String {
    format!(
        "✅ TẠO TÀI KHOẢN THÀNH CÔNG!\n\n\
         {RULE}\n\
         {line}\n\
         {RULE}\n\n\
         📋 Chi tiết:\n\
         🔑 Tài khoản: {username}\n\
         🔐 Mật khẩu: {password}\n\
         📞 Số điện thoại: {phone}\n\
         🏦 Số TK: {account}\n\
         👤 Họ và tên: {name}\n\
         🎂 Ngày sinh: {birthday}\n\n\
         💡 <i>Nhấn vào các đoạn mã để sao chép</i>",
        line = code_inline(&record.pipe_line()),
        username = code_inline(&record.username),
        password = code_inline(&record.password),
        phone = escape(&record.phone),
        account = escape(&record.account_number),
        name = escape(&record.full_name),
        birthday = escape(&record.birthday),
    )
}

#[must_use]
pub fn recent_message(recent: &RecentRecords) -> String {
    if recent.is_empty() {
        return EMPTY_LIST.to_string();
    }

    let mut response = String::from("📋 DANH SÁCH TÀI KHOẢN GẦN NHẤT:\n\n");
    for (i, record) in recent.records.iter().enumerate() {
        response.push_str(&format!(
            "━━━ #{} ━━━\n{}\n\n",
            i + 1,
            code_inline(&record.pipe_line())
        ));
    }
    response.push_str(&format!(
        "\n💡 <i>Tổng cộng: {} tài khoản</i>",
        recent.total
    ));
    response
}

#[must_use]
pub fn error_message(err: &ProcessError) -> String {
    match err {
        ProcessError::NameNotFound => format!("❌ {}", escape(&err.to_string())),
        ProcessError::Store(_) => format!(
            "❌ Có lỗi xảy ra: {}\n\nVui lòng nhập lại thông tin!",
            escape(&err.to_string())
        ),
    }
}
