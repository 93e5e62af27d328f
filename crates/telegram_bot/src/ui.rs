//! Reply texts. Amounts in totals are thousand-VND units shown with a `k`.

use engine::{DateRange, DeleteScope, EngineError, Entry, Totals, format_amount};

pub(crate) const USAGE_THU: &str = "/thu 200k ăn sáng";
pub(crate) const USAGE_CHI: &str = "/chi 50k cà phê";
pub(crate) const USAGE_XOA: &str = "/xoa YYYY-MM-DD hoặc YYYY-MM hoặc all";
pub(crate) const USAGE_TONG: &str = "/tong hoặc /tong YYYY-MM-DD YYYY-MM-DD";

/// Telegram's cap on a single message, in UTF-16 code units.
pub(crate) const MESSAGE_LIMIT: usize = 4096;

fn message_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Encouragement shown under the daily report, picked by today's balance.
pub(crate) fn tier_message(balance: i64) -> Option<&'static str> {
    if balance > 2000 {
        Some("🚀 Mua nhà mua xe, cố lên cố lên!")
    } else if balance > 1000 {
        Some("👍 1 tháng 30 củ, cố lên!")
    } else if balance > 500 {
        Some("💪 Cố hơn nữa.. Tiếp tục phát huy nhé!")
    } else if balance < 0 {
        Some("⚠️ Ăn chơi ít thôi nhé!")
    } else {
        None
    }
}

pub(crate) fn totals_text(title: &str, totals: &Totals) -> String {
    format!(
        "📅 {title}:\n+ Thu: {}k\n- Chi: {}k\n= Số dư: {}k",
        totals.income,
        totals.expense,
        totals.balance()
    )
}

pub(crate) fn today_text(totals: &Totals) -> String {
    let mut text = totals_text("Hôm nay", totals);
    if let Some(tier) = tier_message(totals.balance()) {
        text.push('\n');
        text.push_str(tier);
    }
    text
}

pub(crate) fn week_text(totals: &Totals) -> String {
    totals_text("Tuần này", totals)
}

pub(crate) fn month_text(totals: &Totals) -> String {
    totals_text("Tháng này", totals)
}

pub(crate) fn range_text(range: Option<DateRange>, totals: &Totals) -> String {
    match range {
        Some(range) => totals_text(&range.to_string(), totals),
        None => totals_text("Toàn bộ", totals),
    }
}

pub(crate) fn recorded_text(entry: &Entry) -> String {
    format!(
        "✅ Đã ghi {}: {} ({})",
        entry.kind.label(),
        format_amount(entry.amount),
        entry.note
    )
}

pub(crate) fn undone_text(entry: &Entry) -> String {
    format!("↩️ Đã hoàn tác: {entry}")
}

pub(crate) fn deleted_text(scope: DeleteScope, removed: u64) -> String {
    match scope {
        DeleteScope::All => format!("🗑️ Đã xoá toàn bộ dữ liệu thu chi ({removed} giao dịch)."),
        DeleteScope::Date(date) => format!("🗑️ Đã xoá dữ liệu ngày {date} ({removed} giao dịch)."),
        DeleteScope::Month(month) => {
            format!("🗑️ Đã xoá dữ liệu tháng {month} ({removed} giao dịch).")
        }
    }
}

/// One line per match followed by the totals of the matched set. Lines that
/// would push the reply past [`MESSAGE_LIMIT`] are counted, not shown.
pub(crate) fn search_text(entries: &[Entry], totals: &Totals) -> String {
    if entries.is_empty() {
        return "❌ Không tìm thấy.".to_string();
    }

    let footer = format!(
        "\nTổng thu: {}k\nTổng chi: {}k\nSố dư: {}k",
        totals.income,
        totals.expense,
        totals.balance()
    );
    let more = |hidden: usize| format!("…(còn {hidden} giao dịch)\n");
    let budget = MESSAGE_LIMIT
        .saturating_sub(message_len(&footer))
        .saturating_sub(message_len(&more(entries.len())));

    let mut text = String::new();
    let mut used = 0;
    let mut shown = 0;
    for entry in entries {
        let line = format!(
            "{} {}{}k ({})\n",
            entry.date,
            entry.kind.sign(),
            entry.amount,
            entry.note
        );
        let len = message_len(&line);
        if used + len > budget {
            break;
        }
        used += len;
        shown += 1;
        text.push_str(&line);
    }

    if shown < entries.len() {
        text.push_str(&more(entries.len() - shown));
    }
    text.push_str(&footer);
    text
}

pub(crate) fn help_text() -> String {
    [
        "📌 Ghi thu chi nhanh:",
        "/thu 200k lương: ghi khoản thu",
        "/chi 50k cà phê: ghi khoản chi",
        "Số tiền: 200k, 1tr, 1tr500, 2.5tr (đơn vị nghìn VND)",
        "/hoantac: hoàn tác giao dịch vừa ghi",
        "/tukhoa cà phê: tìm theo ghi chú",
        "/xoa all | YYYY-MM-DD | YYYY-MM: xoá dữ liệu",
        "/tong_homnay, /tong_tuan, /tong_thang: xem tổng",
        "/tong [YYYY-MM-DD YYYY-MM-DD]: tổng theo khoảng ngày",
    ]
    .join("\n")
}

/// Fixed user-facing message for each error kind.
pub(crate) fn error_text(err: &EngineError, usage: &str) -> String {
    match err {
        EngineError::Parse(_) | EngineError::InvalidAmount(_) | EngineError::InvalidScope(_) => {
            format!("❌ Sai cú pháp. Dùng: {usage}")
        }
        EngineError::NotFound(_) => "❌ Không có giao dịch nào để hoàn tác.".to_string(),
        EngineError::Corrupted(_) | EngineError::Database(_) => {
            "❌ Lỗi lưu trữ dữ liệu. Thử lại sau nhé!".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use engine::EntryKind;

    use super::*;

    fn entry(kind: EntryKind, amount: i64, note: &str) -> Entry {
        Entry {
            id: 1,
            kind,
            amount,
            note: note.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        }
    }

    #[test]
    fn tier_thresholds() {
        assert!(tier_message(2001).unwrap().starts_with("🚀"));
        assert!(tier_message(2000).unwrap().starts_with("👍"));
        assert!(tier_message(1001).unwrap().starts_with("👍"));
        assert!(tier_message(1000).unwrap().starts_with("💪"));
        assert!(tier_message(501).unwrap().starts_with("💪"));
        assert_eq!(tier_message(500), None);
        assert_eq!(tier_message(0), None);
        assert!(tier_message(-1).unwrap().starts_with("⚠️"));
    }

    #[test]
    fn today_report_appends_tier() {
        let quiet = today_text(&Totals {
            income: 200,
            expense: 50,
        });
        assert_eq!(quiet, "📅 Hôm nay:\n+ Thu: 200k\n- Chi: 50k\n= Số dư: 150k");

        let overspent = today_text(&Totals {
            income: 0,
            expense: 30,
        });
        assert!(overspent.ends_with("\n⚠️ Ăn chơi ít thôi nhé!"));
        assert!(overspent.contains("= Số dư: -30k"));
    }

    #[test]
    fn confirmations_use_formatted_amounts() {
        assert_eq!(
            recorded_text(&entry(EntryKind::Income, 1000, "lương")),
            "✅ Đã ghi thu: 1 triệu VND (lương)"
        );
        assert_eq!(
            undone_text(&entry(EntryKind::Expense, 1500, "xăng")),
            "↩️ Đã hoàn tác: chi 1500 nghìn VND (xăng)"
        );
    }

    #[test]
    fn search_lists_matches_and_totals() {
        let entries = [
            entry(EntryKind::Income, 200, "ăn sáng"),
            entry(EntryKind::Expense, 50, "ăn sáng"),
        ];
        let totals = Totals::from_entries(&entries).unwrap();
        assert_eq!(
            search_text(&entries, &totals),
            "2024-05-01 +200k (ăn sáng)\n2024-05-01 -50k (ăn sáng)\n\nTổng thu: 200k\nTổng chi: 50k\nSố dư: 150k"
        );
        assert_eq!(search_text(&[], &Totals::ZERO), "❌ Không tìm thấy.");
    }

    #[test]
    fn long_search_fits_one_message() {
        let entries: Vec<Entry> = (0..500)
            .map(|_| entry(EntryKind::Expense, 30, "cà phê sáng với đồng nghiệp 🙂"))
            .collect();
        let totals = Totals::from_entries(&entries).unwrap();

        let text = search_text(&entries, &totals);
        assert!(message_len(&text) <= MESSAGE_LIMIT);

        let shown = text.lines().filter(|line| line.starts_with("2024-05-01")).count();
        assert!(shown > 0);
        assert!(text.contains(&format!("…(còn {} giao dịch)", 500 - shown)));
        assert!(text.ends_with("\nTổng thu: 0k\nTổng chi: 15000k\nSố dư: -15000k"));
    }

    #[test]
    fn errors_map_to_fixed_messages() {
        let parse = EngineError::Parse("x".to_string());
        assert_eq!(error_text(&parse, USAGE_THU), "❌ Sai cú pháp. Dùng: /thu 200k ăn sáng");
        let missing = EngineError::NotFound("x".to_string());
        assert_eq!(
            error_text(&missing, USAGE_THU),
            "❌ Không có giao dịch nào để hoàn tác."
        );
    }
}
