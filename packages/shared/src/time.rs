use chrono::{DateTime, FixedOffset, TimeZone, Utc};

/// Get current Unix timestamp in JST (milliseconds)
pub fn get_jst_timestamp() -> i64 {
    let jst_offset = FixedOffset::east_opt(9 * 3600).unwrap(); // JST is UTC+9
    let now_utc = Utc::now();
    let now_jst: DateTime<FixedOffset> = now_utc.with_timezone(&jst_offset);
    now_jst.timestamp_millis()
}

/// Render a JST millisecond timestamp as an RFC 3339 string
pub fn timestamp_to_jst_rfc3339(timestamp_millis: i64) -> String {
    let jst_offset = FixedOffset::east_opt(9 * 3600).unwrap();
    match jst_offset.timestamp_millis_opt(timestamp_millis) {
        chrono::LocalResult::Single(dt) => dt.to_rfc3339(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_jst_timestamp_is_positive() {
        // テスト項目: 現在時刻のタイムスタンプが正の値で取得できる
        // when (操作):
        let ts = get_jst_timestamp();

        // then (期待する結果):
        assert!(ts > 0);
    }

    #[test]
    fn test_timestamp_to_jst_rfc3339_format() {
        // テスト項目: ミリ秒タイムスタンプが RFC 3339 形式に変換される
        // given (前提条件): 2023-01-01T00:00:00+09:00 (JST)
        let ts = 1672498800000i64;

        // when (操作):
        let rendered = timestamp_to_jst_rfc3339(ts);

        // then (期待する結果):
        assert!(rendered.starts_with("2023-01-01T"));
        assert!(rendered.ends_with("+09:00"));
    }
}
