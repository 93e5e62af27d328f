//! Command structs

use teloxide::utils::command::{BotCommands, ParseError};

/// Splits `<amount> [note...]`. Missing pieces become empty strings so the
/// handler can answer with a usage hint instead of ignoring the message.
pub fn split_entry(input: String) -> Result<(String, String), ParseError> {
    let input = input.trim();
    let (amount, note) = input.split_once(char::is_whitespace).unwrap_or((input, ""));
    Ok((amount.to_string(), note.trim().to_string()))
}

/// Keeps the whole argument text, trimmed.
pub fn rest_of_line(input: String) -> Result<(String,), ParseError> {
    Ok((input.trim().to_string(),))
}

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "snake_case", description = "Các lệnh quản lý thu chi:")]
pub enum LedgerCommands {
    #[command(description = "Bắt đầu và xem hướng dẫn.")]
    Start,
    #[command(description = "Hiện danh sách lệnh.")]
    Help,
    #[command(description = "Ghi một khoản thu, vd: /thu 200k lương.", parse_with = split_entry)]
    Thu { amount: String, note: String },
    #[command(description = "Ghi một khoản chi, vd: /chi 50k cà phê.", parse_with = split_entry)]
    Chi { amount: String, note: String },
    #[command(description = "Hoàn tác giao dịch vừa ghi.")]
    Hoantac,
    #[command(description = "Tìm giao dịch theo từ khoá.", parse_with = rest_of_line)]
    Tukhoa(String),
    #[command(description = "Xoá dữ liệu: all, YYYY-MM-DD hoặc YYYY-MM.", parse_with = rest_of_line)]
    Xoa(String),
    #[command(description = "Tổng toàn bộ hoặc theo khoảng ngày.", parse_with = rest_of_line)]
    Tong(String),
    #[command(description = "Tổng hôm nay.")]
    TongHomnay,
    #[command(description = "Tổng tuần này.")]
    TongTuan,
    #[command(description = "Tổng tháng này.")]
    TongThang,
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOT: &str = "thuchi_bot";

    #[test]
    fn entry_commands_split_amount_and_note() {
        assert_eq!(
            LedgerCommands::parse("/thu 200k ăn sáng", BOT).unwrap(),
            LedgerCommands::Thu {
                amount: "200k".to_string(),
                note: "ăn sáng".to_string()
            }
        );
        assert_eq!(
            LedgerCommands::parse("/chi 1tr500", BOT).unwrap(),
            LedgerCommands::Chi {
                amount: "1tr500".to_string(),
                note: String::new()
            }
        );
    }

    #[test]
    fn missing_amount_still_parses() {
        assert_eq!(
            LedgerCommands::parse("/thu", BOT).unwrap(),
            LedgerCommands::Thu {
                amount: String::new(),
                note: String::new()
            }
        );
    }

    #[test]
    fn summary_commands_use_snake_case() {
        assert_eq!(
            LedgerCommands::parse("/tong_homnay", BOT).unwrap(),
            LedgerCommands::TongHomnay
        );
        assert_eq!(
            LedgerCommands::parse("/tong_tuan", BOT).unwrap(),
            LedgerCommands::TongTuan
        );
        assert_eq!(
            LedgerCommands::parse("/tong 2024-05-01 2024-05-31", BOT).unwrap(),
            LedgerCommands::Tong("2024-05-01 2024-05-31".to_string())
        );
    }

    #[test]
    fn argument_commands_keep_the_rest() {
        assert_eq!(
            LedgerCommands::parse("/tukhoa cà phê sữa", BOT).unwrap(),
            LedgerCommands::Tukhoa("cà phê sữa".to_string())
        );
        assert_eq!(
            LedgerCommands::parse("/xoa", BOT).unwrap(),
            LedgerCommands::Xoa(String::new())
        );
    }
}
