//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 기동 과정에서 사용되는 터미널 출력 함수들을 제공합니다.

/// 박스 형태의 제목 문자열을 만듭니다.
pub fn boxed_title(title: &str) -> String {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    format!("╔{}╗\n║{:^50}║\n╚{}╝", border, title, border)
}

pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

/// 기동 완료 요약을 출력합니다.
pub fn print_startup_summary(bind_address: &str, storage: &str, workers: usize) {
    println!();
    print_boxed_title("EMPLOYEE SERVICE READY");
    println!("   🌐 Listening: http://{}", bind_address);
    println!("   📦 Storage: {}", storage);
    println!("   🔧 Workers: {}", workers);
    println!("   📍 API: http://{}/api/v1/employees", bind_address);
    println!();
}
