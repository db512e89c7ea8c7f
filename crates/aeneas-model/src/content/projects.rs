use crate::ids::ProjectId;
use crate::project::{ProcessStep, ProjectContext, ProjectDetail};
use crate::text::TextSpan;

pub(crate) static ZIGZAG: ProjectDetail = ProjectDetail {
    id: ProjectId::Zigzag,
    kicker: "FASHION COMMERCE · UX / BRANDING",
    title: "지그재그 패션 쇼핑몰 런칭",
    period: Some("2023.03 – 2023.11 (약 10개월)"),
    client_type: Some("Z세대 타깃 패션 쇼핑몰"),
    tools: Some("Photoshop, Illustrator, Figma, HTML/CSS"),
    role: "시장 조사 · 스튜디오/모델 섭외 · 촬영 콘셉트 기획 · 상세페이지 구조 설계 및 퍼블리싱",
    context: ProjectContext::Highlighted {
        text: "클라이언트는 10대 후반~20대 초반 여성 타깃을 노리고 있었지만,\n\
               기존 상세페이지는 20대 중후반 기준으로 구성되어 있어 톤과 구조 모두 타깃과 어긋나 있었습니다.\n\
               내부에 브랜딩·기획 리소스가 없어, 시장 조사부터 촬영 시스템·상세 구조까지 처음부터 판을 만들어야 하는 상황이었습니다.",
        keys: &[
            "톤과 구조 모두 타깃과 어긋나 있었습니다.",
            "시장 조사부터 촬영 시스템·상세 구조까지 처음부터 판을 만들어야 하는 상황이었습니다.",
        ],
    },
    goals: &[
        "10대 후반~20대 초반 Z세대에 맞는 브랜드 톤과 촬영 콘셉트를 새로 정의할 것",
        "지그재그 환경에 맞는 상세페이지 구조를 템플릿화해, 촬영·디자인을 반복 제작 가능하게 할 것",
        "상품별 상세 템플릿을 구조화해 전환율과 재구매를 끌어올리고, 동일 인력으로 시즌 제작 물량을 커버할 것",
        "지그재그 랭킹·경쟁사 리서치 기반으로 ‘어디서 차별화할지’ 포지션을 명확히 할 것",
    ],
    process: &[
        ProcessStep {
            label: "01 · MARKET SCAN & POSITIONING",
            body: "지그재그 상위 랭킹·리뷰·10대 커뮤니티를 분석해 타깃 인사이트를 정리하고, \
                   ‘10대 후반 전용 포지션’ 영역을 정의했습니다.",
        },
        ProcessStep {
            label: "02 · SHOOTING SYSTEM",
            body: "스튜디오와 모델을 직접 섭외하고, 룩 구성·포즈/구도·컷 수를 표준화한 \
                   촬영 가이드·체크리스트 패키지를 제작했습니다.",
        },
        ProcessStep {
            label: "03 · TEMPLATE & ROLL-OUT",
            body: "‘핵심 정보 카드 → 전체 실루엣 → 디테일’ 순의 모듈형 상세 템플릿을 HTML/CSS로 구현하고, \
                   운영팀이 복제해 쓸 수 있도록 인수인계했습니다.",
        },
    ],
    outcome: "런칭 후 3개월 동안 매출이 약 900% 상승했고,\n\
              지그재그 앱 내 쇼핑 카테고리 상위 TOP3까지 도달했습니다.\n\
              별도 광고 증액 없이도 상세 템플릿과 촬영 시스템만으로 전환율을 끌어올렸고,\n\
              이후 시즌 상품들은 같은 구조를 사용해 제작 리소스를 크게 줄였습니다.",
    links: &[],
};

pub(crate) static GMARKET: ProjectDetail = ProjectDetail {
    id: ProjectId::Gmarket,
    kicker: "GLOBAL MARKETPLACE · UX / SEO",
    title: "지마켓 글로벌(일본) · 라쿠텐 환경 대응 운영",
    period: Some("약 1년 이상 운영"),
    client_type: Some("글로벌 오픈마켓"),
    tools: Some("Photoshop, HTML/CSS, Rakuten 관리툴"),
    role: "사이트 UI 디자인 · 프로모션 배너 · 퍼블리싱 · SEO 구조 설계 및 운영",
    context: ProjectContext::Segments(&[
        TextSpan::plain(
            "일본 고객을 대상으로 하는 지마켓 글로벌/라쿠텐 스토어는 한국에서 쓰던 상세 구조를 \
             거의 그대로 가져온 상태라, 일본 사용자 입장에서는 정보 순서와 표현 방식이 낯설었습니다. \
             게다가 라쿠텐 입점·운영은 ",
        ),
        TextSpan::emphasised("기존에 다른 사업체가 진행하다가 중간에 포기된 상태"),
        TextSpan::plain(
            "였고, 저는 그 이후에 합류해 구조를 처음부터 다시 잡는 리빌드 역할을 맡았습니다. \
             상품 구조·노출 전략도 카테고리마다 제각각이라 브랜드 인지와 구매 흐름이 끊기는 상황이었습니다. ",
        ),
        TextSpan::emphasised(
            "국내와는 다른 일본 시장 특성과 라쿠텐 주 고객층의 UX 습관, 라쿠텐 검색/SEO 룰",
        ),
        TextSpan::plain("을 먼저 이해한 뒤, "),
        TextSpan::emphasised(
            "일본 사용자가 편하게 느끼는 정보 구조와 내부 운영 여건이 동시에 맞는 레이아웃",
        ),
        TextSpan::plain("을 설계해야 했습니다."),
    ]),
    goals: &[
        "라쿠텐 상위 스토어를 분석해 일본 고객이 익숙한 정보 구조와 노출 룰을 파악할 것",
        "리스트·상세·기획전 페이지를 일관된 UX로 재정리해 구매 흐름을 매끄럽게 만들 것",
        "카테고리별 키워드·SEO 룰을 정리해 운영하면서도 유지할 수 있는 체계를 만들 것",
    ],
    process: &[
        ProcessStep {
            label: "01 · ENVIRONMENT STUDY",
            body: "라쿠텐 상위 스토어의 카테고리 구조·키워드·쿠폰/혜택 노출 방식을 분석해, \
                   우리 상품군과 매칭한 레퍼런스 맵을 만들었습니다.",
        },
        ProcessStep {
            label: "02 · UX & LAYOUT",
            body: "리스트·상세·기획전을 일본 사용자가 익숙한 순서(가격·쿠폰·리뷰·혜택) 기준으로 재배치하고, \
                   공통 레이아웃 가이드를 정의했습니다.",
        },
        ProcessStep {
            label: "03 · SEO & OPERATION",
            body: "카테고리별 필수 키워드 세트를 만들고 타이틀·설명·배너 카피에 반영했습니다. \
                   운영 중에도 검색 리포트를 보며 노출/클릭을 주기적으로 튜닝했습니다.",
        },
    ],
    outcome: "라쿠텐 환경에 맞는 레이아웃과 카테고리별 키워드 세트를 정리한 뒤,\n\
              검색 노출과 기획전 유입이 점차 안정되었습니다.\n\
              운영팀은 제가 만든 공통 템플릿(리스트·상세·기획전)에 맞춰 배너와 페이지를 반복 제작할 수 있게 되었고,\n\
              내부에서는 ‘일본/라쿠텐 UX와 SEO 구조까지 설계할 수 있는 디자이너’로 포지셔닝되었습니다.",
    links: &[],
};

pub(crate) static TRAVEL: ProjectDetail = ProjectDetail {
    id: ProjectId::Travel,
    kicker: "TRAVEL / LIFESTYLE · BRAND & WEB",
    title: "여행·라이프스타일 브랜드 리빌딩",
    period: Some("약 6개월, ongoing"),
    client_type: Some("여행/숙박 커머스"),
    tools: Some("Cafe24, Figma, Notion, Photoshop, Toss"),
    role: "브랜드 코어 정의 · 웹 IA/와이어 설계 · 인스타/피드 시각 언어 설계 · 제휴 제안서/리포트 템플릿 제작",
    context: ProjectContext::Segments(&[
        TextSpan::plain("프로젝트는 "),
        TextSpan::emphasised("라우트웨이컨설팅 주식회사"),
        TextSpan::plain("가 운영하던 사이드 프로젝트 "),
        TextSpan::emphasised("RouteWorld"),
        TextSpan::plain(
            "에서 시작되었습니다. 초기에는 뷰티 커머스로 출발했지만, 이후 호텔·여행 상품, 다시 ",
        ),
        TextSpan::emphasised("여행+라이프스타일 커머스"),
        TextSpan::plain(
            "로 사업 축이 크게 바뀌어 왔습니다. 캠페인마다 타깃과 상품이 달라지면서 톤과 페이지 구조도 \
             함께 흔들렸고, 프리미엄 호텔·리조트 브랜드를 지향하다가 IPSC 체험, 국내 숙소 등으로 \
             피봇이 잦았습니다. 이런 환경에서 저는 ",
        ),
        TextSpan::emphasised("계속 바뀌는 상품·사업자 구조 위에도 유지되는 브랜드 코어와 운영 시스템"),
        TextSpan::plain(
            "을 설계하고, 어떤 캠페인이 와도 팀과 외부 파트너가 따라갈 수 있는 기준선을 만드는 역할을 \
             맡았습니다. 이후 회사 사정으로 RouteWorld 사업은 정리되었지만, ",
        ),
        TextSpan::emphasised("방향 전환과 종료 과정까지 포함해 브랜드를 어떻게 핸들링했는지"),
        TextSpan::plain("가 이 프로젝트의 중요한 경험으로 남았습니다."),
    ]),
    goals: &[
        "인플루언서 중심의 산발적인 운영에서, 브랜드·상품·숫자를 기준으로 한 운영 프레임으로 전환할 것",
        "팀원들이 따라올 수 있는 브리프 → 제작 → 리뷰 워크플로우를 만들고 역할과 책임을 명확히 할 것",
        "호텔·체험 제휴사와 에이전시에게도 일관된 언어와 포맷으로 브랜드를 설명할 수 있게 할 것",
        "사업자 형태 조정이 잦은 환경에서도 유지되는 브랜드 코어와 포지셔닝을 정리할 것",
    ],
    process: &[
        ProcessStep {
            label: "01 · BRAND CORE & ROUTE",
            body: "대표·리더 인터뷰와 기존 캠페인/피드를 정리해 ‘무엇을 팔고 싶은지 vs 실제로 팔리고 있는 것’을 \
                   분리했습니다. 그 위에 ‘도시에 닿는 가장 빠른 여행’이라는 코어 문장과 호텔·체험·콘텐츠를 잇는 \
                   여정 맵을 만들었습니다.",
        },
        ProcessStep {
            label: "02 · SYSTEM & TEAM WORKFLOW",
            body: "캠페인 흐름을 브리핑 → 제작 → 리뷰 3단계로 단순화하고, Notion 태스크보드와 Figma 템플릿으로 \
                   역할·산출물을 규격화했습니다. 팀원들이 같은 포맷으로 카드·배너·피드를 만들 수 있는 \
                   기준선을 세웠습니다.",
        },
        ProcessStep {
            label: "03 · EXTERNAL COLLAB & POSITIONING",
            body: "호텔/체험 제휴사용 소개 데크와 제안서 템플릿을 제작해, 쇼핑몰 명의나 조건이 바뀌어도 \
                   브랜드 설명 구조는 유지되도록 설계했습니다. 외부 파트너와의 커뮤니케이션에서 브랜드 코어·타깃·딜 \
                   구조를 한 장표로 설명할 수 있게 정리했습니다.",
        },
    ],
    outcome: "뷰티 → 여행 → 여행+라이프스타일로 사업 축이 여러 번 바뀌는 동안에도,\n\
              브랜드 코어 문장과 여정 맵, 제안서·피드 템플릿을 기준으로 캠페인과 제휴사가 바뀌어도 설명 구조를 유지할 수 있었습니다.\n\
              리더·사업자 구성이 바뀌고 결국 RouteWorld 사업이 정리되는 과정까지,\n\
              브랜드 기준선과 산출물 시스템을 문서와 템플릿으로 남겨 이후 AENEAS Studio 포트폴리오 설계의 기반이 되었습니다.",
    links: &[],
};
