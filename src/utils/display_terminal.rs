//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 배너와 모의 메일(비밀번호 재설정 링크) 박스를 만듭니다.
//! 문자열을 반환하므로 호출 측에서 `log` 매크로로 남기거나 그대로 출력할 수 있습니다.

/// 박스 내부 너비
const CONTENT_WIDTH: usize = 50;

/// 가운데 정렬된 제목 박스
pub fn boxed_title(title: &str) -> String {
    let border = "═".repeat(CONTENT_WIDTH);
    format!("╔{}╗\n║{:^50}║\n╚{}╝", border, title, border)
}

/// 제목 박스 아래에 `이름: 값` 줄을 붙인 블록
pub fn boxed_section(title: &str, rows: &[(&str, &str)]) -> String {
    let mut out = boxed_title(title);
    for (name, value) in rows {
        out.push_str(&format!("\n   ├─ {}: {}", name, value));
    }
    out
}

/// 서버 시작 요약을 출력합니다.
pub fn print_startup_summary(bind_address: &str, data_dir: &str) {
    println!();
    println!(
        "{}",
        boxed_section(
            "📚 COLLECTOR PROFILE BACKEND",
            &[("Listening", bind_address), ("Data dir", data_dir)],
        )
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_title_has_three_lines() {
        let out = boxed_title("RESET");
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with('╔'));
        assert!(lines[1].contains("RESET"));
    }

    #[test]
    fn test_boxed_section_lists_rows() {
        let out = boxed_section("MAIL", &[("Email", "ana@example.com"), ("Link", "http://x")]);

        assert!(out.contains("├─ Email: ana@example.com"));
        assert!(out.ends_with("├─ Link: http://x"));
    }
}
