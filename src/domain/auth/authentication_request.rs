/// 인증 모드를 정의하는 열거형
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AuthMode {
    /// 인증이 반드시 필요함
    Required,
    /// 인증이 선택사항임 (있으면 검증, 없어도 허용)
    ///
    /// 공개 조회와 관리자 쓰기가 같은 경로에 섞여 있는 스코프에서 사용합니다.
    /// 토큰이 있으면 신원을 첨부하고, 역할 판정은 핸들러의 추출자가 담당합니다.
    Optional,
}
