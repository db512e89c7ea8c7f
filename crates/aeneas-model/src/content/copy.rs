use crate::catalog::StudioCopy;
use crate::project::ExternalLink;
use crate::text::TextSpan;

pub(crate) static STUDIO: StudioCopy = StudioCopy {
    brand_name: "AENEAS Studio",
    brand_tag: "Studio",
    hero_headline: "Brands that walk through the desert into their next green place.",
    hero_body: &[
        TextSpan::plain("AENEAS Studio는 "),
        TextSpan::emphasised("명확한 이야기, 선명한 UX,"),
        TextSpan::plain(" 그리고 "),
        TextSpan::emphasised("현실적인 런칭 플랜"),
        TextSpan::plain(
            "이 필요한 브랜드를 위한 작은 스튜디오.\n첫 번째 데크부터 라이브 사이트까지, \
             사막을 건너 다음 그린 플레이스에 도착할 때까지 함께 걷습니다.",
        ),
    ],
    hero_chips: &[
        "Brand & Web Direction",
        "UX Writing & Deck Systems",
        "Framer / Webflow / Next.js",
    ],
    constellation_title: "AENEAS CONSTELLATION",
    constellation_subtitle: "사막에서 그린 플레이스로 향하는 세 가지 별자리 모드입니다.",
    constellation_badge: "MODES · 03",
    panel_title: "CONSTELLATION PANEL",
    work_kicker: "Selected Work",
    work_heading: &[
        TextSpan::plain("디자인이 아니라, "),
        TextSpan::emphasised("(결과로 설명하는)"),
        TextSpan::plain(" 프로젝트들"),
    ],
    work_intro: &[
        "각 보드는 한 프로젝트를 위한 작은 시스템 맵입니다.",
        "포인트 흑돌에는 프로젝트명을, 카드에는 타이틀만 남겼습니다.",
    ],
    lab_label: "STUDIO LAB",
    lab_title: &["WE LAYER", "EXPERIENCE LAB"],
    lab_body: "프리랜서 웹·브랜딩 작업과 제안서를 모아,\n\
               AENEAS가 문제를 정의하고 경험을 설계하는 방식을 실험하는 구역입니다.",
    lab_keywords: "FREELANCE · PROPOSAL · SYSTEM THINKING",
    status_label: "Studio Status",
    status_body: &[
        TextSpan::plain("1:1 파트너십 위주의 소규모 스튜디오입니다. 2025 상반기에는 "),
        TextSpan::emphasised("브랜드·웹 리빌딩 / 포트폴리오 정비"),
        TextSpan::plain("에 집중합니다."),
    ],
    contact_links: &[
        ExternalLink {
            label: "프로젝트 상의하기",
            href: "mailto:aeneas.studio@example.com",
        },
        ExternalLink {
            label: "작업 노트 보기",
            href: "#",
        },
    ],
    footer_note: "Based in Seoul · Working remotely.",
};
