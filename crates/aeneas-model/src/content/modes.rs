use crate::ids::ModeId;
use crate::mode::{ColorTokens, ConstellationCard, ModeConfig};

pub(crate) static BRAND: ModeConfig = ModeConfig {
    id: ModeId::Brand,
    tab_label: "BRAND CORE",
    chip_label: "Brand Core – Naming & Storyframe",
    section_label: "01 · BRAND CORE",
    heading: "Naming & Storyframe Lab",
    body: "브랜드의 첫 문장, 첫 슬로건, 첫 데크를 설계하는 모드입니다. \
           이름·톤·구조를 정리한 뒤 나머지 디자인을 쌓아 올립니다.",
    bullets: &[
        "네이밍·슬로건·톤앤매너를 한 세트로 정리합니다.",
        "대표 슬라이드 · 소개 페이지에 들어갈 첫 문장을 설계합니다.",
        "디자인 이전에 ‘왜 이 브랜드인가’를 먼저 합의합니다.",
    ],
    focus: "Story / Naming",
    status_label: "ACTIVE",
    route_label: "Desert → Name & Storyframe",
    title_in_target: "BRAND CORE",
    card: ConstellationCard {
        kicker: "01 · BRAND CORE",
        title: "Naming & Storyframe",
        tagline: "브랜드의 첫 문장과 구조를 잡는 모드입니다.",
    },
    colors: ColorTokens {
        core: "rgba(22,140,126,0.9)",
        tab_background: "#4C9990",
        accent: "#7FEAD4",
    },
};

pub(crate) static WEB: ModeConfig = ModeConfig {
    id: ModeId::Web,
    tab_label: "WEB EXPERIENCE",
    chip_label: "Web Experience – Site & Funnel Design",
    section_label: "02 · WEB EXPERIENCE",
    heading: "Site & Funnel Design",
    body: "Figma에서 설계한 여정을 Framer·Webflow·Next.js로 옮기고, \
           작은 팀이 운영하기 쉬운 구조와 퍼널을 설계하는 모드입니다.",
    bullets: &[
        "와이어프레임 → UX 카피 → UI 컴포넌트 순서로 정리합니다.",
        "Framer · Webflow · Next.js 등 실제 구현까지를 고려합니다.",
        "운영 팀이 업데이트하기 쉬운 구조와 퍼널을 함께 설계합니다.",
    ],
    focus: "UX / Flows",
    status_label: "READY",
    route_label: "Desert → Web Experience",
    title_in_target: "WEB EXPERIENCE",
    card: ConstellationCard {
        kicker: "02 · WEB EXPERIENCE",
        title: "Site & Funnel Design",
        tagline: "Figma에서 설계한 여정을 라이브 사이트까지 이어붙입니다.",
    },
    colors: ColorTokens {
        core: "rgba(56,189,248,0.6)",
        tab_background: "#3B82C2",
        accent: "#7EC8FF",
    },
};

pub(crate) static VISUAL: ModeConfig = ModeConfig {
    id: ModeId::Visual,
    tab_label: "VISUAL SYSTEMS",
    chip_label: "Visual Systems – Decks & Visual Stories",
    section_label: "03 · VISUAL SYSTEMS",
    heading: "Decks & Visual Systems",
    body: "리포트, 피치덱, 인스타 시리즈까지 반복해서 쓸 수 있는 시각 언어를 세팅합니다. \
           카드·슬라이드·피드 단위로 디자인 시스템을 구성합니다.",
    bullets: &[
        "리포트·피치덱·인스타 피드에 반복 노출될 레이아웃을 만듭니다.",
        "타이포·컬러·컴포넌트 사용 규칙을 가이드로 정리합니다.",
        "디자이너가 없을 때도 팀이 자체 제작할 수 있는 수준을 목표로 합니다.",
    ],
    focus: "Deck / Feed",
    status_label: "QUEUED",
    route_label: "Desert → Visual Systems",
    title_in_target: "VISUAL SYSTEMS",
    card: ConstellationCard {
        kicker: "03 · VISUAL SYSTEMS",
        title: "Decks & Visual Systems",
        tagline: "슬라이드·피드·카드까지 반복해서 쓰는 시각 언어를 설계합니다.",
    },
    colors: ColorTokens {
        core: "rgba(252,211,77,0.7)",
        tab_background: "#D0B15A",
        accent: "#F9E08A",
    },
};
