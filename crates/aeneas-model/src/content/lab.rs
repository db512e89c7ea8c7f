use crate::lab::{LabItem, LabItemKind};

pub(crate) static LAB_ITEMS: &[LabItem] = &[
    LabItem {
        id: "global-vcc",
        kind: LabItemKind::Freelance,
        badge: "FREELANCE · WEB",
        title: "Global VCC · 화상 영어 플랫폼 리뉴얼",
        period: Some("2024 (약 3개월)"),
        role: "IA 설계 · UX/UI 디자인 · HTML/CSS 퍼블리싱",
        summary: "복잡한 학원식 페이지를 ‘선별된 강사/커리큘럼/수강 신청 흐름’ 중심으로 재정리해, \
                  과정·횟수·시간 선택과 견적 박스를 한 화면에서 이해할 수 있는 구조로 리빌딩했습니다.",
        href: Some("https://tiffanyblue-iam.github.io/Project-VCC-website/"),
        cta: Some("사이트 보기"),
    },
    LabItem {
        id: "lawdidim",
        kind: LabItemKind::Freelance,
        badge: "FREELANCE · WEB",
        title: "LawDidim · 회생·파산 법무사 랜딩",
        period: Some("2024 (약 2개월)"),
        role: "UX 구조 설계 · 웹디자인 · 카피라이팅",
        summary: "회생·파산을 고민할 정도로 여유가 없는 사용자의 심리를 전제로, 최소한의 정보와 명확한 안내에 \
                  집중한 랜딩 페이지 흐름을 설계했습니다. 성공사례·후기·FAQ를 한 흐름으로 배치해 안심·신뢰를 우선했습니다.",
        href: Some("https://www.lawdidim.com/"),
        cta: Some("사이트 보기"),
    },
    LabItem {
        id: "josun-routeworld",
        kind: LabItemKind::Proposal,
        badge: "PROPOSAL · DECK",
        title: "Josun Palace × Routeworld · 인플루언서 공동구매 제안서",
        period: Some("2023 (약 3주)"),
        role: "제안 구조 설계 · 슬라이드 디자인",
        summary: "조선팰리스 비수기 객실을 메가급 인플루언서 공동구매로 판매하는 구조로, \
                  ADR 유지·폐쇄형 랜딩·혜택 중심 패키지 흐름으로 설계한 제안서입니다.",
        href: Some("/lab/routeworld_josun-palace.pdf"),
        cta: Some("PDF 제안서 열기"),
    },
];
