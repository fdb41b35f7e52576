//! 플레인핏 쇼핑몰 백엔드
//!
//! Rust 기반의 소규모 이커머스 백엔드 서비스입니다.
//! 상품 카탈로그 조회, 주문 생성, 역할 기반 관리자 기능을
//! JWT 베어러 토큰 인증과 함께 REST API로 제공합니다.
//!
//! # Features
//!
//! - **상품 카탈로그**: 카테고리/추천 필터 조회, 관리자 전용 등록·수정·삭제
//! - **주문 관리**: 본인 주문 생성·조회, 관리자 전용 전체 조회 및 상태 변경
//! - **접근 제어**: user/admin 역할 기반 인가 (401/403 구분)
//! - **입력 검증**: 요청 DTO 단위의 선언적 검증, 위반 항목 전체 보고
//! - **MongoDB**: 상품/주문 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 인증·검증·요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! 모든 구성 요소는 생성 시점에 의존성을 명시적으로 주입받습니다.
//! 전역 싱글톤이나 레지스트리는 사용하지 않으며, 핸들러에는
//! `actix_web::web::Data`를 통해 서비스가 전달됩니다.

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
